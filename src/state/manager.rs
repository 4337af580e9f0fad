//! Tracking facade
//!
//! [`MemoryState`] ties the pieces together: it owns the sparse table, the
//! rolling time counter, the color tables, and the selected visualization,
//! and exposes the two entry points the outside world uses, the write path
//! [`MemoryState::update_address`] and the render path
//! [`MemoryState::fill_image`].
//!
//! Single-threaded by design: the write path and the render path are never
//! run concurrently on one instance, so there is no locking anywhere below.

use crate::render::block::fill_block;
use crate::render::linear::fill_linear;
use crate::render::{ColorMap, ImageBuffer};

use super::{CursorMut, SparseTable, State, ALL_BITS, ALL_MASK, FULL_LIFE, STALE};

/// How the render path lays slots out in the image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visualization {
    /// Scan order: one slot per pixel from the pan window
    Linear,
    /// Recursive bisection over the whole slot space
    Block,
}

pub struct MemoryState {
    table: SparseTable,
    colors: ColorMap,

    /// Rolling counter, advanced once per recorded access. Wraps from
    /// `FULL_LIFE` back to 1 so it never takes 0 (never-touched) or the
    /// stale sentinel.
    time: State,

    /// Monotonic access count for external reporting; not consumed by
    /// rendering
    hr_time: u64,

    /// Low-order address bits collapsed away: one slot covers
    /// `2^ignore_bits` raw bytes. Fixed for the lifetime of the instance.
    ignore_bits: u32,

    visualization: Visualization,

    /// First slot shown by the linear view
    window_start: u64,
}

impl MemoryState {
    pub fn new(ignore_bits: u32) -> Self {
        MemoryState {
            table: SparseTable::new(),
            colors: ColorMap::new(),
            time: 0,
            hr_time: 0,
            ignore_bits: ignore_bits.min(ALL_BITS - 1),
            visualization: Visualization::Block,
            window_start: 0,
        }
    }

    /// Record one access covering `[addr, addr + size)`. Every slot the range
    /// overlaps is stamped with the new time and the access tag; the rolling
    /// counter advances exactly once regardless of size. A zero size still
    /// marks the one slot at `addr`.
    pub fn update_address(&mut self, addr: u64, size: u64, tag: u8) {
        self.time = if self.time >= FULL_LIFE { 1 } else { self.time + 1 };
        self.hr_time += 1;

        let size = size.max(1);
        let first = addr >> self.ignore_bits;
        let last = addr.saturating_add(size - 1) >> self.ignore_bits;
        // a range longer than the table would just wrap onto itself
        let count = (last - first).min(ALL_MASK) + 1;
        for i in 0..count {
            self.table
                .write(first.wrapping_add(i) & ALL_MASK, self.time, tag);
        }
    }

    /// Fill the caller's buffer using the selected visualization. Read-only
    /// with respect to tracking state.
    pub fn fill_image(&self, image: &mut ImageBuffer) {
        match self.visualization {
            Visualization::Linear => fill_linear(
                &self.table,
                &self.colors,
                self.time,
                self.window_start,
                image,
            ),
            Visualization::Block => fill_block(&self.table, &self.colors, self.time, image),
        }
    }

    /// Takes effect on the next render call
    pub fn set_visualization(&mut self, vis: Visualization) {
        self.visualization = vis;
    }

    pub fn visualization(&self) -> Visualization {
        self.visualization
    }

    /// Mark every touched slot as stale; they render at the fixed half-life
    /// shade until re-touched. Tags are kept and no blocks are allocated or
    /// freed.
    pub fn mark_all_stale(&mut self) {
        let mut cursor = CursorMut::new(&mut self.table);
        cursor.rewind();
        while !cursor.at_end() {
            cursor.set_state(STALE);
            cursor.advance();
        }
    }

    /// Move the linear pan window by a signed slot delta, clamped to the
    /// tracked space.
    pub fn pan_window(&mut self, delta: i64) {
        self.window_start = self.window_start.saturating_add_signed(delta) & ALL_MASK;
    }

    pub fn window_start(&self) -> u64 {
        self.window_start
    }

    /// (state, tag) for a raw byte address, at the current granularity
    pub fn read_address(&self, addr: u64) -> (State, u8) {
        self.table.read((addr >> self.ignore_bits) & ALL_MASK)
    }

    pub fn time(&self) -> State {
        self.time
    }

    pub fn hr_time(&self) -> u64 {
        self.hr_time
    }

    pub fn ignore_bits(&self) -> u32 {
        self.ignore_bits
    }

    pub fn block_count(&self) -> usize {
        self.table.block_count()
    }

    pub fn table(&self) -> &SparseTable {
        &self.table
    }

    pub fn colors(&self) -> &ColorMap {
        &self.colors
    }
}
