//! Trace input
//!
//! This module turns trace text into table updates:
//! - [`record`]: one parsed access event and its kind
//! - [`errors`]: loader-boundary error type
//! - [`loader`]: line-by-line feed from any [`BufRead`] into a
//!   [`MemoryState`]
//!
//! The accepted format is the Valgrind lackey line shape, one access per
//! line: a kind symbol (`I` instruction fetch, `L` load, `S` store, `M`
//! modify), a hex address, a comma, a decimal size:
//!
//! ```text
//! I  0x0023c790,2
//!  L 1000,4
//!  S 2000,8
//!  M 3000,4
//! ```
//!
//! Blank lines, `#` comments, and `==`-prefixed tool chatter are skipped.
//!
//! [`BufRead`]: std::io::BufRead
//! [`MemoryState`]: crate::state::MemoryState

pub mod errors;
pub mod loader;
pub mod record;

pub use errors::TraceError;
pub use loader::TraceLoader;
pub use record::{AccessKind, AccessRecord};
