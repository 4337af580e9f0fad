//! Access tracking core
//!
//! This module provides the data structures that record memory accesses:
//! - [`table`]: the sparse two-level address table holding one rolling
//!   timestamp + access tag per tracked slot
//! - [`cursor`]: an empty-skipping walk over the table
//! - [`manager`]: the [`MemoryState`] facade that owns the table, the rolling
//!   time counter, and the render dispatch
//!
//! # Address space
//!
//! The tracked space is 2^36 slots, split 18/18 into a top index (which block)
//! and a bottom index (which slot within the block). A slot represents
//! `2^ignore_bits` raw bytes; the ignore-bits shift happens in
//! [`manager::MemoryState`] before addresses reach the table, so everything
//! below works in slot space.
//!
//! # Slot states
//!
//! A slot state is a rolling 32-bit counter value with three regions:
//! - `0`: never touched (blocks are only allocated on first write, so absence
//!   and the zero default coincide)
//! - `1..=FULL_LIFE`: the rolling time at which the slot was last touched
//! - [`STALE`]: deliberately aged out, rendered at a fixed half-life shade
//!
//! [`MemoryState`]: manager::MemoryState

pub mod cursor;
pub mod manager;
pub mod table;

pub use cursor::{Cursor, CursorMut};
pub use manager::{MemoryState, Visualization};
pub use table::SparseTable;

/// Rolling timestamp stored per slot
pub type State = u32;

/// Sentinel for slots deliberately marked as old
pub const STALE: State = State::MAX;

/// Fixed age distance used for stale slots
pub const HALF_LIFE: State = STALE >> 1;

/// Largest value the rolling counter takes before wrapping back to 1
pub const FULL_LIFE: State = STALE - 1;

/// Total tracked address bits (slot space)
pub const ALL_BITS: u32 = 36;
/// Number of slots in the tracked space
pub const ALL_SIZE: u64 = 1 << ALL_BITS;
pub const ALL_MASK: u64 = ALL_SIZE - 1;

/// High-order bits selecting a block
pub const TOP_BITS: u32 = 18;
pub const TOP_SIZE: usize = 1 << TOP_BITS;
pub const TOP_MASK: u64 = (TOP_SIZE as u64) - 1;

/// Low-order bits selecting a slot within a block
pub const BOTTOM_BITS: u32 = ALL_BITS - TOP_BITS;
pub const BOTTOM_SIZE: usize = 1 << BOTTOM_BITS;
pub const BOTTOM_MASK: u64 = (BOTTOM_SIZE as u64) - 1;

/// Block index for a slot
pub fn top_index(slot: u64) -> usize {
    ((slot >> BOTTOM_BITS) & TOP_MASK) as usize
}

/// Index within a block for a slot
pub fn bottom_index(slot: u64) -> usize {
    (slot & BOTTOM_MASK) as usize
}
