//! `malloc`/`free`-shaped access to the global allocator, for code that hands out raw blocks
//! without keeping track of their size.

extern crate alloc;

use alloc::alloc::{Layout, alloc, dealloc};
use core::ptr;

/// Alignment of every block, as the AAPCS expects from `malloc`.
pub const ALIGN: usize = 8;

/// Bytes in front of each block recording its full layout size.
const HEADER: usize = ALIGN;

/// Allocate `size` bytes. Returns null when `size` is zero or the allocator is exhausted.
pub fn allocate(size: usize) -> *mut u8 {
    if size == 0 {
        return ptr::null_mut();
    }
    let Some(total) = size.checked_add(HEADER) else {
        return ptr::null_mut();
    };
    let Ok(layout) = Layout::from_size_align(total, ALIGN) else {
        return ptr::null_mut();
    };

    let base = unsafe { alloc(layout) };
    if base.is_null() {
        debug!("allocation of {=usize} bytes failed", size);
        return base;
    }

    unsafe {
        base.cast::<usize>().write(total);
        base.add(HEADER)
    }
}

/// Return a block to the allocator. Null is ignored.
///
/// # Safety
/// `block` must be null or come from [`allocate`] and not have been freed before.
pub unsafe fn free(block: *mut u8) {
    if block.is_null() {
        return;
    }

    unsafe {
        let base = block.sub(HEADER);
        let total = base.cast::<usize>().read();
        dealloc(base, Layout::from_size_align_unchecked(total, ALIGN));
    }
}
