//! Recursive block renderer
//!
//! Keeps nearby slots nearby in the image: the (slot range, pixel rect) pair
//! is bisected recursively, the slot range always in half and the rect along
//! its wider axis, until a sub-range is known to be untouched (filled with
//! the absent color in one step) or the rect is down to one pixel (colored
//! from the touched slots it covers).
//!
//! The walk visits slot ranges in increasing order, so a single shared
//! [`Cursor`] tells us in O(1) whether the current range holds any touched
//! slot: the cursor always points at the first touched slot not yet rendered,
//! and if that position lies past the range end, the range is empty. Total
//! cost is proportional to touched slots plus output pixels, never to the
//! 2^36 slot space.
//!
//! When one pixel covers several touched slots, the most recently touched one
//! (smallest circular age distance) wins.

use crate::state::{Cursor, SparseTable, State, ALL_SIZE};

use super::image::ImageBuffer;
use super::recency::{age_distance, ColorMap};

pub fn fill_block(table: &SparseTable, colors: &ColorMap, now: State, image: &mut ImageBuffer) {
    if image.width() == 0 || image.height() == 0 {
        return;
    }
    let mut cursor = Cursor::new(table);
    cursor.rewind();
    let (w, h) = (image.width(), image.height());
    fill_rect(colors, now, &mut cursor, image, 0, ALL_SIZE, 0, 0, w, h);
}

#[allow(clippy::too_many_arguments)]
fn fill_rect(
    colors: &ColorMap,
    now: State,
    cursor: &mut Cursor<'_>,
    image: &mut ImageBuffer,
    slot_start: u64,
    slot_count: u64,
    x: u32,
    y: u32,
    w: u32,
    h: u32,
) {
    let slot_end = slot_start + slot_count;

    // Whole range untouched: one fill, no descent
    if cursor.at_end() || cursor.position() >= slot_end {
        image.fill_rect(x, y, w, h, ColorMap::ABSENT);
        return;
    }

    if (w == 1 && h == 1) || slot_count == 1 {
        let (state, tag) = representative(cursor, now, slot_end);
        image.fill_rect(x, y, w, h, colors.color_of(state, tag, now));
        return;
    }

    let half = slot_count / 2;
    let rest = slot_count - half;
    if w >= h {
        let wl = w / 2;
        fill_rect(colors, now, cursor, image, slot_start, half, x, y, wl, h);
        fill_rect(
            colors,
            now,
            cursor,
            image,
            slot_start + half,
            rest,
            x + wl,
            y,
            w - wl,
            h,
        );
    } else {
        let hl = h / 2;
        fill_rect(colors, now, cursor, image, slot_start, half, x, y, w, hl);
        fill_rect(
            colors,
            now,
            cursor,
            image,
            slot_start + half,
            rest,
            x,
            y + hl,
            w,
            h - hl,
        );
    }
}

/// Consume every touched slot below `slot_end` and return the most recently
/// touched one. The caller has checked that at least one exists.
fn representative(cursor: &mut Cursor<'_>, now: State, slot_end: u64) -> (State, u8) {
    let mut best = (cursor.state(), cursor.tag());
    let mut best_age = age_distance(best.0, now);
    cursor.advance();
    while !cursor.at_end() && cursor.position() < slot_end {
        let age = age_distance(cursor.state(), now);
        if age < best_age {
            best = (cursor.state(), cursor.tag());
            best_age = age;
        }
        cursor.advance();
    }
    best
}
