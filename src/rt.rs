//! Startup runtime for the loader binary: the vector table, the reset handler and the heap break.
//!
//! Link with `link.x` (published by this crate's build script) and provide a `memory.x` defining
//! the `FLASH` and `RAM` regions. The binary supplies the entry function:
//!
//! ```ignore
//! #[unsafe(no_mangle)]
//! fn chainboot_main() {
//!     // ...
//! }
//! ```

use crate::{
    Address, MemoryLayout, Region, VectorTable, boot::cortex_m::CortexM, heap::BumpHeap, reset,
};

unsafe extern "C" {
    static _stack_top: u32;
    static _sdata: u32;
    static _edata: u32;
    static _sidata: u32;
    static _sbss: u32;
    static _ebss: u32;
}

unsafe extern "Rust" {
    /// Entry function of the binary. Expected to never return.
    fn chainboot_main();
}

#[unsafe(link_section = ".vector_table")]
#[unsafe(no_mangle)]
#[used]
pub static __VECTOR_TABLE: VectorTable = VectorTable {
    initial_stack_pointer: &raw const _stack_top,
    reset: Reset,
};

static HEAP: BumpHeap = BumpHeap::new(heap_origin);

/// Grow the heap by `increment` bytes, returning the previous break.
///
/// The heap starts right after `.bss` and is not checked against the stack.
pub fn grow_heap(increment: u32) -> Address {
    HEAP.grow(increment)
}

fn heap_origin() -> Address {
    symbol(&raw const _ebss)
}

fn symbol(ptr: *const u32) -> Address {
    Address(ptr as usize as u32)
}

/// Layout of the linked image, straight from the linker script.
pub fn linked_layout() -> MemoryLayout {
    // `link.x` asserts alignment and ordering of these symbols.
    unsafe {
        MemoryLayout {
            stack_top: symbol(&raw const _stack_top),
            data: Region::new_unchecked(symbol(&raw const _sdata), symbol(&raw const _edata)),
            data_load: symbol(&raw const _sidata),
            bss: Region::new_unchecked(symbol(&raw const _sbss), symbol(&raw const _ebss)),
        }
    }
}

#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Reset() -> ! {
    let layout = linked_layout();
    debug_assert!(layout.validate().is_ok());

    unsafe { reset::reset(CortexM::steal(), &layout, |_| chainboot_main()) }
}
