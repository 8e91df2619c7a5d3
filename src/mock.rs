use core::cell::RefCell;
use std::{
    boxed::Box,
    collections::BTreeMap,
    panic::{self, AssertUnwindSafe},
    vec::Vec,
};

use crate::{Address, Boot, Memory};

/// Everything the loader asked of the core, in order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Event {
    Read(Address),
    Write(Address, u32),
    DisableInterrupts,
    RelocateVectorTable(Address),
    Start {
        stack_pointer: u32,
        entry: u32,
        interrupts_masked: bool,
    },
    Idle,
}

/// Core with a sparse word-addressed memory, recording what happens to it.
///
/// Reading a word that was never written panics, so tests notice stray accesses.
#[derive(Clone, Debug, Default)]
pub struct MockCore {
    pub memory: BTreeMap<Address, u32>,
    pub writes: Vec<(Address, u32)>,
    pub events: RefCell<Vec<Event>>,
    /// Free-form markers pushed by test code running "on" the core.
    pub marks: Vec<&'static str>,
    pub interrupts_masked: bool,
    /// Vector-table-base register; resets to zero.
    pub vtor: Address,
    pub stack_pointer: Option<u32>,
    pub entry: Option<u32>,
}

/// How a diverging operation left the core.
#[derive(Debug)]
pub enum Diverged {
    Started(MockCore),
    Idle(MockCore),
}

impl MockCore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_words(mut self, addr: Address, words: &[u32]) -> Self {
        for (i, word) in words.iter().enumerate() {
            self.memory.insert(addr.add_words(i as u32), *word);
        }
        self
    }

    pub fn words(&self, addr: Address, count: u32) -> Vec<u32> {
        (0..count)
            .map(|i| {
                let addr = addr.add_words(i);
                *self
                    .memory
                    .get(&addr)
                    .unwrap_or_else(|| panic!("no word at {addr:x?}"))
            })
            .collect()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    fn record(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

impl Memory for MockCore {
    unsafe fn read_word(&self, addr: Address) -> u32 {
        self.record(Event::Read(addr));
        *self
            .memory
            .get(&addr)
            .unwrap_or_else(|| panic!("read from unmapped {addr:x?}"))
    }

    unsafe fn write_word(&mut self, addr: Address, word: u32) {
        self.record(Event::Write(addr, word));
        self.writes.push((addr, word));
        self.memory.insert(addr, word);
    }
}

impl Boot for MockCore {
    fn disable_interrupts(&mut self) {
        self.record(Event::DisableInterrupts);
        self.interrupts_masked = true;
    }

    unsafe fn relocate_vector_table(&mut self, table: Address) {
        self.record(Event::RelocateVectorTable(table));
        self.vtor = table;
    }

    unsafe fn start(mut self, stack_pointer: u32, entry: u32) -> ! {
        self.record(Event::Start {
            stack_pointer,
            entry,
            interrupts_masked: self.interrupts_masked,
        });
        self.stack_pointer = Some(stack_pointer);
        self.entry = Some(entry);
        panic::resume_unwind(Box::new(Diverged::Started(self)))
    }

    fn idle(self) -> ! {
        self.record(Event::Idle);
        panic::resume_unwind(Box::new(Diverged::Idle(self)))
    }
}

/// Run `f` until the core it drives diverges, and hand back the core.
///
/// Ordinary panics (failed assertions) pass through untouched.
pub fn run_until_diverged(f: impl FnOnce()) -> Diverged {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(()) => panic!("returned instead of diverging"),
        Err(payload) => match payload.downcast::<Diverged>() {
            Ok(diverged) => *diverged,
            Err(other) => panic::resume_unwind(other),
        },
    }
}
