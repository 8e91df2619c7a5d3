//! Vector tables: the loader's own, and the header of the image it hands over to.

use crate::{Address, Memory};

/// The two leading entries of an ARMv7-M/ARMv8-M vector table.
///
/// This is the minimal form the core needs to come out of reset: the initial main stack
/// pointer followed by the reset handler. It lives in ROM and is never written.
#[repr(C)]
pub struct VectorTable {
    pub initial_stack_pointer: *const u32,
    pub reset: unsafe extern "C" fn() -> !,
}

// Only ever read, by the core at reset.
unsafe impl Sync for VectorTable {}

/// Header of an application image, read from the start of its vector table.
///
/// Mirrors [`VectorTable`]: word 0 is the initial stack pointer and word 1 the reset handler.
/// The reset handler keeps the Thumb bit exactly as the image was linked.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VectorHeader {
    pub stack_pointer: u32,
    pub reset_handler: u32,
}

impl VectorHeader {
    /// Read the header at `table`, stack pointer first.
    ///
    /// # Safety
    /// `table` must be readable for two words.
    pub unsafe fn read(memory: &impl Memory, table: Address) -> Self {
        let stack_pointer = unsafe { memory.read_word(table) };
        let reset_handler = unsafe { memory.read_word(table.add_words(1)) };
        Self {
            stack_pointer,
            reset_handler,
        }
    }

    /// Whether the reset handler requests Thumb state, as M-profile cores require.
    pub const fn is_thumb(&self) -> bool {
        self.reset_handler & 1 == 1
    }

    /// First instruction of the reset handler, with the Thumb bit cleared.
    pub const fn code_address(&self) -> Address {
        Address(self.reset_handler & !1)
    }
}

#[cfg(test)]
mod tests {
    use core::mem::{offset_of, size_of};

    use super::*;
    use crate::mock::MockCore;

    #[test]
    fn table_is_two_words_stack_first() {
        assert_eq!(size_of::<VectorTable>(), 2 * size_of::<usize>());
        assert_eq!(offset_of!(VectorTable, initial_stack_pointer), 0);
        assert_eq!(offset_of!(VectorTable, reset), size_of::<usize>());
    }

    #[test]
    fn header_reads_both_words_in_order() {
        let core = MockCore::new()
            .with_words(Address(0x0800_8000), &[0x2001_0000, 0x0800_8101]);

        let header = unsafe { VectorHeader::read(&core, Address(0x0800_8000)) };

        assert_eq!(header.stack_pointer, 0x2001_0000);
        assert_eq!(header.reset_handler, 0x0800_8101);
        assert!(header.is_thumb());
        assert_eq!(header.code_address(), Address(0x0800_8100));
    }

    #[test]
    fn header_without_thumb_bit() {
        let header = VectorHeader {
            stack_pointer: 0x2000_4000,
            reset_handler: 0x0800_4200,
        };

        assert!(!header.is_thumb());
        assert_eq!(header.code_address(), Address(0x0800_4200));
    }
}
