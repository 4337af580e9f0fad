//! Recency encoder
//!
//! Maps a stored slot state to a display color given the current rolling
//! time. Age is a circular distance (the counter wraps), binned
//! logarithmically so that recently-touched slots spread across many fine
//! buckets while old slots collapse into a few; contrast concentrates on hot
//! memory. Very old, unrefreshed entries eventually alias back to small
//! distances. That approximation is accepted, the stale sentinel exists for
//! entries that should read as old forever.
//!
//! The bucket computation is part of the visible behavior: tests pin its
//! boundary values, so any change here is a behavior change.

use crate::state::{State, HALF_LIFE, STALE};

use super::image::Pixel;

/// Circular age distance between a stored state and the current time.
/// Never zero: a slot touched this instant is at distance 1.
pub fn age_distance(state: State, now: State) -> u32 {
    if state == STALE {
        HALF_LIFE
    } else if now >= state {
        now - state + 1
    } else {
        state - now + 1
    }
}

/// Logarithmic age bucket in `0..=255`, brighter (higher) = more recent.
///
/// The state already occupies the full 32-bit working width, so the distance
/// needs no left-alignment before the leading-zero count. The count gives the
/// coarse bucket (`bits * 8`); the three bits just below the leading one,
/// inverted, refine within it.
pub fn bucket(distance: u32) -> usize {
    // distance >= 1, so bits <= 31 and the shifts below stay in range
    let bits = distance.leading_zeros();
    let fine = if bits > 28 {
        !(distance << (bits - 28)) & 7
    } else {
        !(distance >> (28 - bits)) & 7
    };
    (bits * 8 + fine) as usize
}

// Full-brightness hue per access kind; each table ramps up to these.
const INSTRUCTION_HUE: (u8, u8, u8) = (137, 180, 250);
const LOAD_HUE: (u8, u8, u8) = (166, 227, 161);
const WRITE_HUE: (u8, u8, u8) = (243, 139, 168);

// Intensity floor so old-but-touched slots stay visible against absent black
const RAMP_FLOOR: u32 = 48;

/// The three 256-entry color tables, built once and immutable after
pub struct ColorMap {
    instruction: [Pixel; 256],
    load: [Pixel; 256],
    write: [Pixel; 256],
}

impl ColorMap {
    /// Color for never-touched slots
    pub const ABSENT: Pixel = 0x000000;

    pub fn new() -> Self {
        ColorMap {
            instruction: build_ramp(INSTRUCTION_HUE),
            load: build_ramp(LOAD_HUE),
            write: build_ramp(WRITE_HUE),
        }
    }

    /// Color for a slot. Zero state is the absent color; a stale state reads
    /// as a fixed half-life age; any tag outside `I`/`L` selects the write
    /// table (trace data may be imperfect, this is not an error).
    pub fn color_of(&self, state: State, tag: u8, now: State) -> Pixel {
        if state == 0 {
            return Self::ABSENT;
        }
        let idx = bucket(age_distance(state, now));
        let table = match tag {
            b'I' => &self.instruction,
            b'L' => &self.load,
            _ => &self.write,
        };
        table[idx]
    }
}

impl Default for ColorMap {
    fn default() -> Self {
        Self::new()
    }
}

fn build_ramp((r, g, b): (u8, u8, u8)) -> [Pixel; 256] {
    let mut table = [0; 256];
    for (idx, px) in table.iter_mut().enumerate() {
        let level = RAMP_FLOOR + ((255 - RAMP_FLOOR) * idx as u32) / 255;
        let scale = |c: u8| c as u32 * level / 255;
        *px = (scale(r) << 16) | (scale(g) << 8) | scale(b);
    }
    table
}
