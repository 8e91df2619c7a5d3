//! Chain-loading: permanent handover from the loader to an application image.
//!
//! There are two states, the loader running and the application running, and one way to get
//! from the first to the second. The [`Boot`] implementor stands for the loader's hold on the
//! core and is consumed by the jump.

use crate::{Address, Boot, VectorHeader};

/// Hand the core over to the image whose vector table starts at `table`.
///
/// With interrupts masked throughout: read the image's initial stack pointer and reset handler,
/// relocate the vector table to `table`, switch to the new stack and branch to the reset
/// handler as if the core had just come out of reset.
///
/// # Safety
/// `table` must point at a vector table whose first word is a valid initial stack pointer and
/// whose second word is the Thumb address of a reset handler. A bad image faults into its own
/// handlers.
pub unsafe fn jump_to_application<B: Boot>(mut core: B, table: Address) -> ! {
    info!("Chain-loading image at {=u32:#x}", table.0);

    core.disable_interrupts();

    let header = unsafe { VectorHeader::read(&core, table) };
    debug!(
        "Image stack {=u32:#x}, reset handler {=u32:#x} (thumb: {=bool})",
        header.stack_pointer,
        header.code_address().0,
        header.is_thumb(),
    );

    unsafe {
        core.relocate_vector_table(table);
        core.start(header.stack_pointer, header.reset_handler)
    }
}
