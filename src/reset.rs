//! Runtime initialization after reset, the `crt0` of this loader.
//!
//! Runs exactly once, before any static is assumed to hold its initial value.

use crate::{Boot, Memory, MemoryLayout, Region};

/// Copy `.data` from its load address in flash into RAM, ascending, one word at a time.
///
/// # Safety
/// `layout.data` must be writable RAM and its source range in flash readable.
pub unsafe fn copy_data(memory: &mut impl Memory, layout: &MemoryLayout) {
    let source = layout.data_source();
    for (from, to) in source.words().zip(layout.data.words()) {
        unsafe {
            let word = memory.read_word(from);
            memory.write_word(to, word);
        }
    }
}

/// Zero every word of `bss`.
///
/// # Safety
/// `bss` must be writable RAM that nothing is relying on yet.
pub unsafe fn zero_bss(memory: &mut impl Memory, bss: &Region) {
    for addr in bss.words() {
        unsafe { memory.write_word(addr, 0) };
    }
}

/// Bring RAM into the state the program image expects: `.data` loaded, `.bss` cleared.
///
/// # Safety
/// See [`copy_data`] and [`zero_bss`]. Must run before any static is touched.
pub unsafe fn init_ram(memory: &mut impl Memory, layout: &MemoryLayout) {
    unsafe {
        copy_data(memory, layout);
        zero_bss(memory, &layout.bss);
    }
}

/// Full reset sequence: initialize RAM, run `entry`, and idle forever should it come back.
///
/// # Safety
/// Only a single core may run this, once per reset, with `layout` describing the linked image.
pub unsafe fn reset<B: Boot>(mut core: B, layout: &MemoryLayout, entry: impl FnOnce(&mut B)) -> ! {
    unsafe { init_ram(&mut core, layout) };

    entry(&mut core);

    // Nothing is left to restart us.
    core.idle()
}
