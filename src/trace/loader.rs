//! Trace feed
//!
//! [`TraceLoader`] pulls lines from a reader, parses them into
//! [`AccessRecord`]s, and drives [`MemoryState::update_address`]. It keeps
//! per-kind tallies for the status display.
//!
//! [`MemoryState::update_address`]: crate::state::MemoryState::update_address

use std::io::BufRead;

use rustc_hash::FxHashMap;

use crate::state::MemoryState;

use super::errors::TraceError;
use super::record::{AccessKind, AccessRecord};

pub struct TraceLoader {
    records: u64,
    skipped: u64,
    counts: FxHashMap<AccessKind, u64>,
}

impl TraceLoader {
    pub fn new() -> Self {
        TraceLoader {
            records: 0,
            skipped: 0,
            counts: FxHashMap::default(),
        }
    }

    /// Feed every record in `reader` into `state`. Stops at the first
    /// malformed line; blank lines, `#` comments, and `==`-prefixed tool
    /// chatter are skipped. Returns the number of records fed so far.
    pub fn feed<R: BufRead>(
        &mut self,
        reader: R,
        state: &mut MemoryState,
    ) -> Result<u64, TraceError> {
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let text = line.trim();
            if text.is_empty() || text.starts_with('#') || text.starts_with("==") {
                self.skipped += 1;
                continue;
            }

            let record = AccessRecord::parse(text, idx + 1)?;
            state.update_address(record.addr, record.size, record.kind.tag());
            *self.counts.entry(record.kind).or_insert(0) += 1;
            self.records += 1;
        }
        Ok(self.records)
    }

    /// Records fed across all `feed` calls
    pub fn records(&self) -> u64 {
        self.records
    }

    /// Non-record lines skipped
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    pub fn count(&self, kind: AccessKind) -> u64 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }
}

impl Default for TraceLoader {
    fn default() -> Self {
        Self::new()
    }
}
