//! Empty-skipping walk over the sparse table
//!
//! [`Cursor`] visits every touched slot exactly once in increasing
//! (top, bottom) order. A top-level region with no block is skipped in one
//! step; zero slots inside a block are skipped without any per-slot work
//! beyond the state check. [`Cursor::empty_count`] reports how many slots
//! were skipped since the previous stop, so a renderer can advance that many
//! positions without computing colors for them.
//!
//! [`CursorMut`] is the same walk over a mutable table, adding an in-place
//! state rewrite for aging passes. Slot values change but table layout never
//! does (no block is ever removed), so the walk stays valid across writes.
//!
//! Calling `state`, `tag`, or `set_state` once `at_end` is true is a caller
//! bug and panics; check `at_end` first.

use super::table::StateBlock;
use super::{SparseTable, State, BOTTOM_BITS, BOTTOM_SIZE, TOP_SIZE};

/// First touched slot at or after (top, bottom), plus how many empty slots
/// lie in between. Returns `top == TOP_SIZE` when the table is exhausted.
fn next_touched(table: &SparseTable, mut top: usize, mut bottom: usize) -> (usize, usize, u64) {
    let mut skipped = 0;
    while top < TOP_SIZE {
        if let Some(block) = table.block(top) {
            while bottom < BOTTOM_SIZE {
                if block.state_at(bottom) != 0 {
                    return (top, bottom, skipped);
                }
                bottom += 1;
                skipped += 1;
            }
        } else {
            skipped += BOTTOM_SIZE as u64;
        }
        bottom = 0;
        top += 1;
    }
    (top, bottom, skipped)
}

pub struct Cursor<'a> {
    table: &'a SparseTable,
    top: usize,
    bottom: usize,
    skipped: u64,
}

impl<'a> Cursor<'a> {
    pub fn new(table: &'a SparseTable) -> Self {
        Cursor {
            table,
            top: 0,
            bottom: 0,
            skipped: 0,
        }
    }

    /// Reset to the first touched slot
    pub fn rewind(&mut self) {
        self.top = 0;
        self.bottom = 0;
        self.skip_empty();
    }

    pub fn at_end(&self) -> bool {
        self.top >= TOP_SIZE
    }

    /// Move to the next touched slot
    pub fn advance(&mut self) {
        self.bottom += 1;
        self.skip_empty();
    }

    pub fn state(&self) -> State {
        self.current_block().state_at(self.bottom)
    }

    pub fn tag(&self) -> u8 {
        self.current_block().tag_at(self.bottom)
    }

    /// Slots skipped since the previous stop (or since rewind). Still valid
    /// at the end of the walk, where it counts the trailing empty run.
    pub fn empty_count(&self) -> u64 {
        self.skipped
    }

    /// Absolute slot index of the current position
    pub fn position(&self) -> u64 {
        ((self.top as u64) << BOTTOM_BITS) | self.bottom as u64
    }

    fn current_block(&self) -> &StateBlock {
        self.table
            .block(self.top)
            .expect("cursor is stopped on a touched slot")
    }

    fn skip_empty(&mut self) {
        let (top, bottom, skipped) = next_touched(self.table, self.top, self.bottom);
        self.top = top;
        self.bottom = bottom;
        self.skipped = skipped;
    }
}

/// Mutable walk: [`Cursor`] plus in-place state rewrite of the current slot
pub struct CursorMut<'a> {
    table: &'a mut SparseTable,
    top: usize,
    bottom: usize,
    skipped: u64,
}

impl<'a> CursorMut<'a> {
    pub fn new(table: &'a mut SparseTable) -> Self {
        CursorMut {
            table,
            top: 0,
            bottom: 0,
            skipped: 0,
        }
    }

    pub fn rewind(&mut self) {
        self.top = 0;
        self.bottom = 0;
        self.skip_empty();
    }

    pub fn at_end(&self) -> bool {
        self.top >= TOP_SIZE
    }

    pub fn advance(&mut self) {
        self.bottom += 1;
        self.skip_empty();
    }

    pub fn state(&self) -> State {
        self.current_block().state_at(self.bottom)
    }

    pub fn tag(&self) -> u8 {
        self.current_block().tag_at(self.bottom)
    }

    pub fn empty_count(&self) -> u64 {
        self.skipped
    }

    pub fn position(&self) -> u64 {
        ((self.top as u64) << BOTTOM_BITS) | self.bottom as u64
    }

    /// Overwrite the current slot's state, keeping its tag. Writing zero
    /// would turn the slot invisible to the walk; aging passes write real
    /// timestamps or the stale sentinel, never zero.
    pub fn set_state(&mut self, state: State) {
        let bottom = self.bottom;
        self.table
            .block_mut(self.top)
            .expect("cursor is stopped on a touched slot")
            .set_state(bottom, state);
    }

    fn current_block(&self) -> &StateBlock {
        self.table
            .block(self.top)
            .expect("cursor is stopped on a touched slot")
    }

    fn skip_empty(&mut self) {
        let (top, bottom, skipped) = next_touched(self.table, self.top, self.bottom);
        self.top = top;
        self.bottom = bottom;
        self.skipped = skipped;
    }
}
