//! Typed volatile access to a fixed address.

use core::marker::PhantomData;
use core::ptr::NonNull;

use volatile_register::RW;

/// A memory-mapped word at a fixed address.
///
/// Every `get` and `set` is a single volatile access, never merged, reordered with
/// other volatile accesses or cached. No aliasing assumptions are made: two `Reg`s may name
/// the same address.
pub struct Reg<T: Copy> {
    ptr: NonNull<RW<T>>,
    _marker: PhantomData<T>,
}

impl<T: Copy> Reg<T> {
    /// # Safety
    /// `addr` must be non-null, aligned for `T`, and valid for reads and writes of `T`
    /// for as long as the `Reg` is used.
    pub const unsafe fn at(addr: usize) -> Self {
        Self {
            ptr: unsafe { NonNull::new_unchecked(addr as *mut RW<T>) },
            _marker: PhantomData,
        }
    }

    pub fn get(&self) -> T {
        unsafe { self.ptr.as_ref().read() }
    }

    pub fn set(&self, value: T) {
        unsafe { self.ptr.as_ref().write(value) }
    }
}
