use cortex_m::peripheral::SCB;

use crate::{Address, Memory, boot::Boot, memory};

/// Boot mechanism for ARMv7-M and ARMv8-M mainline cores, without TrustZone support.
///
/// Requires a vector-table-base register, which rules out Cortex-M0.
pub struct CortexM {
    _private: (),
}

impl CortexM {
    /// # Safety
    /// Only for the single thread of execution started by reset. Instances share the one core,
    /// so whichever jumps first wins.
    pub unsafe fn steal() -> Self {
        Self { _private: () }
    }
}

impl Memory for CortexM {
    unsafe fn read_word(&self, addr: Address) -> u32 {
        unsafe { memory::read_word(addr) }
    }

    unsafe fn write_word(&mut self, addr: Address, word: u32) {
        unsafe { memory::write_word(addr, word) }
    }
}

impl Boot for CortexM {
    fn disable_interrupts(&mut self) {
        cortex_m::interrupt::disable();
    }

    unsafe fn relocate_vector_table(&mut self, table: Address) {
        unsafe { (*SCB::PTR).vtor.write(table.0) };

        cortex_m::asm::dsb();
        cortex_m::asm::isb();
    }

    unsafe fn start(self, stack_pointer: u32, entry: u32) -> ! {
        // PRIMASK stays set; the image enables interrupts once its runtime is up.
        unsafe {
            cortex_m::asm::bootstrap(stack_pointer as *const u32, entry as *const u32)
        }
    }

    fn idle(self) -> ! {
        loop {
            cortex_m::asm::wfi();
        }
    }
}
