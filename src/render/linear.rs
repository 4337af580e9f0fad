//! Scan-order renderer
//!
//! Maps slots straight onto image rows: pixel (x, y) shows slot
//! `window_start + y*width + x`. No locality transformation, so a small hot
//! region shows up as a thin horizontal streak, but every pixel corresponds
//! to exactly one slot, which makes the view easy to read against raw
//! addresses. The window start is the pan offset the UI arrow keys drive.

use crate::state::{SparseTable, State, ALL_MASK};

use super::image::ImageBuffer;
use super::recency::ColorMap;

pub fn fill_linear(
    table: &SparseTable,
    colors: &ColorMap,
    now: State,
    window_start: u64,
    image: &mut ImageBuffer,
) {
    let width = image.width() as u64;
    for y in 0..image.height() {
        for x in 0..image.width() {
            let slot = (window_start + y as u64 * width + x as u64) & ALL_MASK;
            let (state, tag) = table.read(slot);
            image.set(x, y, colors.color_of(state, tag, now));
        }
    }
}
