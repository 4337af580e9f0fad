//! Heatmap rendering
//!
//! This module turns table state into pixels:
//! - [`image`]: the caller-owned 2-D pixel buffer renderers fill
//! - [`recency`]: the recency encoder — circular age distance, logarithmic
//!   bucketing, and the per-kind 256-entry color tables
//! - [`linear`]: scan-order renderer, one slot per pixel from a pan window
//! - [`block`]: recursive bisection renderer that keeps nearby addresses
//!   nearby in the image and fills untouched regions in bulk
//!
//! Renderers are stateless functions over borrowed state, in the same shape
//! as the UI pane renderers; the [`MemoryState`] facade picks which one runs.
//!
//! [`MemoryState`]: crate::state::MemoryState

pub mod block;
pub mod image;
pub mod linear;
pub mod recency;

pub use image::{ImageBuffer, Pixel};
pub use recency::ColorMap;
