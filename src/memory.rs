//! Raw word access to the physical address space.

use crate::{Address, cell::Reg};

/// Read the word at `addr`.
///
/// # Safety
/// `addr` must be mapped and word-aligned. Reading device registers may have side effects.
pub unsafe fn read_word(addr: Address) -> u32 {
    unsafe { Reg::<u32>::at(addr.0 as usize) }.get()
}

/// Write `word` to `addr`.
///
/// # Safety
/// `addr` must be mapped, writable and word-aligned, and nothing else may rely on its old value.
pub unsafe fn write_word(addr: Address, word: u32) {
    unsafe { Reg::<u32>::at(addr.0 as usize) }.set(word)
}
