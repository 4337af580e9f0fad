//! Sparse two-level address table
//!
//! The table maps a 36-bit slot index to a (state, tag) pair without
//! pre-allocating the full space. The top 18 bits select an optional owned
//! [`StateBlock`]; the bottom 18 bits select a slot inside it. Blocks are
//! allocated on first write and never freed, so memory use grows with the
//! number of distinct top-level regions ever touched, not with trace length.
//!
//! Reads never allocate: a missing block reads as `(0, 0)` for every slot
//! under it, which is exactly the "never touched" encoding.

use super::{bottom_index, top_index, State, BOTTOM_SIZE, TOP_SIZE};

/// One dense block of 2^18 slots: parallel state and tag arrays,
/// zero-initialized at allocation
pub struct StateBlock {
    states: Vec<State>,
    tags: Vec<u8>,
}

impl StateBlock {
    fn new() -> Self {
        StateBlock {
            states: vec![0; BOTTOM_SIZE],
            tags: vec![0; BOTTOM_SIZE],
        }
    }

    pub fn state_at(&self, idx: usize) -> State {
        self.states[idx]
    }

    pub fn tag_at(&self, idx: usize) -> u8 {
        self.tags[idx]
    }

    fn set(&mut self, idx: usize, state: State, tag: u8) {
        self.states[idx] = state;
        self.tags[idx] = tag;
    }

    pub(crate) fn set_state(&mut self, idx: usize, state: State) {
        self.states[idx] = state;
    }
}

/// The sparse address table: 2^18 ownership slots, each either empty or
/// holding one block
pub struct SparseTable {
    blocks: Vec<Option<Box<StateBlock>>>,
}

impl SparseTable {
    pub fn new() -> Self {
        SparseTable {
            blocks: (0..TOP_SIZE).map(|_| None).collect(),
        }
    }

    /// Read the (state, tag) pair for a slot. Returns `(0, 0)` for slots that
    /// were never written. Never allocates.
    pub fn read(&self, slot: u64) -> (State, u8) {
        match &self.blocks[top_index(slot)] {
            Some(block) => {
                let idx = bottom_index(slot);
                (block.state_at(idx), block.tag_at(idx))
            }
            None => (0, 0),
        }
    }

    /// Write the (state, tag) pair for a slot, allocating the owning block if
    /// this is the first write under its top index.
    pub fn write(&mut self, slot: u64, state: State, tag: u8) {
        let block = self.blocks[top_index(slot)].get_or_insert_with(|| Box::new(StateBlock::new()));
        block.set(bottom_index(slot), state, tag);
    }

    /// Number of blocks currently allocated
    pub fn block_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_some()).count()
    }

    pub(crate) fn block(&self, top: usize) -> Option<&StateBlock> {
        self.blocks[top].as_deref()
    }

    pub(crate) fn block_mut(&mut self, top: usize) -> Option<&mut StateBlock> {
        self.blocks[top].as_deref_mut()
    }
}

impl Default for SparseTable {
    fn default() -> Self {
        Self::new()
    }
}
