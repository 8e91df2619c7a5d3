//! Heap-growth hook: a break pointer that only ever moves up.
//!
//! The break starts at a boundary known only at link time (the end of `.bss` on target) and is
//! therefore initialized lazily, on the first request. It is not checked against the stack, so
//! growing far enough silently runs into it.

use core::cell::Cell;

use critical_section::Mutex;

use crate::Address;

pub struct BumpHeap {
    origin: fn() -> Address,
    end: Mutex<Cell<Option<Address>>>,
}

impl BumpHeap {
    /// Heap whose first byte will be at `origin()`.
    pub const fn new(origin: fn() -> Address) -> Self {
        Self {
            origin,
            end: Mutex::new(Cell::new(None)),
        }
    }

    /// Move the break up by `increment` bytes and return where it was.
    pub fn grow(&self, increment: u32) -> Address {
        critical_section::with(|cs| {
            let end = self.end.borrow(cs);
            let previous = end.get().unwrap_or_else(self.origin);
            end.set(Some(Address(previous.0.wrapping_add(increment))));
            trace!("heap break {=u32:#x} -> {=u32:#x}", previous.0, previous.0.wrapping_add(increment));
            previous
        })
    }

    /// Current break, or `None` if the heap has not been touched yet.
    pub fn end(&self) -> Option<Address> {
        critical_section::with(|cs| self.end.borrow(cs).get())
    }
}
