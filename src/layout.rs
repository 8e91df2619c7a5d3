//! Memory layout as handed over by the linker script.

use crate::{Address, Error, WORD};

/// Half-open, word-aligned range of addresses `[start, end)`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Region {
    start: Address,
    end: Address,
}

impl Region {
    pub const fn new(start: Address, end: Address) -> Result<Self, Error> {
        if !start.is_word_aligned() || !end.is_word_aligned() {
            return Err(Error::Misaligned);
        }
        if end.0 < start.0 {
            return Err(Error::Inverted);
        }
        Ok(Self { start, end })
    }

    /// Region from linker symbols, trusted to be aligned and ordered.
    ///
    /// # Safety
    /// `start` and `end` must satisfy the invariants checked by [`Region::new`].
    pub const unsafe fn new_unchecked(start: Address, end: Address) -> Self {
        Self { start, end }
    }

    pub const fn start(&self) -> Address {
        self.start
    }

    pub const fn end(&self) -> Address {
        self.end
    }

    pub const fn len_words(&self) -> u32 {
        (self.end.0 - self.start.0) / WORD
    }

    pub const fn is_empty(&self) -> bool {
        self.start.0 == self.end.0
    }

    /// Addresses of every word in the region, in ascending order.
    pub fn words(&self) -> impl Iterator<Item = Address> + use<> {
        let start = self.start;
        (0..self.len_words()).map(move |i| start.add_words(i))
    }
}

/// Addresses the reset sequence works from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MemoryLayout {
    /// Initial stack pointer, one past the highest stack word.
    pub stack_top: Address,
    /// Initialized data in RAM.
    pub data: Region,
    /// Where the initial contents of `data` are kept in flash.
    pub data_load: Address,
    /// Zero-initialized data in RAM.
    pub bss: Region,
}

impl MemoryLayout {
    /// Flash range holding the initial contents of `data`.
    pub const fn data_source(&self) -> Region {
        Region {
            start: self.data_load,
            end: self.data_load.add_words(self.data.len_words()),
        }
    }

    /// Check the invariants the linker script is expected to uphold.
    pub fn validate(&self) -> Result<(), Error> {
        Region::new(self.data.start, self.data.end)?;
        Region::new(self.bss.start, self.bss.end)?;
        if !self.data_load.is_word_aligned() || !self.stack_top.is_word_aligned() {
            return Err(Error::Misaligned);
        }
        Ok(())
    }
}
