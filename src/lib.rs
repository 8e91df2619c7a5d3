//! Stage-0 loader for Cortex-M: bring up RAM after reset, then chain-load a second image.
#![no_std]

#[macro_use]
mod fmt;

pub mod boot;
pub mod cell;
pub mod config;
pub mod delay;
pub mod heap;
pub mod jump;
pub mod layout;
pub mod memory;
pub mod reset;
pub mod vector;

#[cfg(any(test, feature = "alloc"))]
pub mod allocator;

#[cfg(feature = "rt")]
pub mod rt;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod mock;

pub use boot::Boot;
pub use jump::jump_to_application;
pub use layout::{MemoryLayout, Region};
pub use vector::{VectorHeader, VectorTable};

/// Size of a machine word in bytes.
pub const WORD: u32 = 4;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Address is not a multiple of [`WORD`].
    Misaligned,
    /// Region ends before it starts.
    Inverted,
    /// Address text could not be parsed or does not fit in 32 bits.
    InvalidAddress,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Misaligned => f.write_str("address is not word-aligned"),
            Error::Inverted => f.write_str("region end lies before its start"),
            Error::InvalidAddress => f.write_str("invalid address"),
        }
    }
}

/// Physical address in the 32-bit address space of the core.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Address(pub u32);

impl Address {
    pub const fn is_word_aligned(self) -> bool {
        self.0 % WORD == 0
    }

    /// Address `words` machine words further along.
    pub const fn add_words(self, words: u32) -> Address {
        Address(self.0.wrapping_add(words.wrapping_mul(WORD)))
    }
}

/// Word-granular view of the address space.
///
/// Accesses are raw and unchecked. Callers guarantee that an address is mapped, aligned
/// and that touching it has no effect beyond the word itself.
pub trait Memory {
    unsafe fn read_word(&self, addr: Address) -> u32;

    unsafe fn write_word(&mut self, addr: Address, word: u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_arithmetic() {
        let addr = Address(0x0800_8000);

        assert!(addr.is_word_aligned());
        assert!(!Address(0x0800_8002).is_word_aligned());
        assert_eq!(addr.add_words(1), Address(0x0800_8004));
        assert_eq!(addr.add_words(0), addr);
    }

    #[test]
    fn error_display() {
        use std::string::ToString;

        assert_eq!(Error::Misaligned.to_string(), "address is not word-aligned");
        assert_eq!(Error::Inverted.to_string(), "region end lies before its start");
    }
}
