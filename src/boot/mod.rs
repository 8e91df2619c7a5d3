#[cfg(feature = "cortex_m")]
pub mod cortex_m;

use crate::{Address, Memory};

/// Execution context of the core: the primitives the reset sequence and the jump are built from.
///
/// The implementor owns the live stack pointer and the vector-table-base register.
/// Both diverging operations consume it; there is no way back into the loader.
pub trait Boot: Memory + Sized {
    /// Mask all maskable interrupts.
    fn disable_interrupts(&mut self);

    /// Point the vector-table-base register at `table`, and make the write take effect
    /// before any following instruction.
    ///
    /// # Safety
    /// From here on exceptions are dispatched through `table`.
    unsafe fn relocate_vector_table(&mut self, table: Address);

    /// Load `stack_pointer` into the active stack pointer and branch to `entry` without
    /// recording a return address.
    ///
    /// Leaves the interrupt mask as it is; the image unmasks interrupts itself.
    ///
    /// # Safety
    /// `entry` must be code that never expects to return, running on `stack_pointer`.
    unsafe fn start(self, stack_pointer: u32, entry: u32) -> !;

    /// Park the core forever.
    fn idle(self) -> !;
}
