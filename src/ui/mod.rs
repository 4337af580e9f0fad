//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state, keyboard event loop, mode switching,
//!   pan handling
//! - **[`heatmap`]** — half-block rendering of the engine's pixel buffer
//! - **[`status`]** — status bar with mode, counters, and messages
//! - **[`theme`]** — centralized chrome palette (heatmap pixel colors come
//!   from the engine's lookup tables, not from here)
//!
//! The entry point for consumers is [`App`]: construct it with a fed
//! [`MemoryState`] and call [`App::run`] to start the event loop.
//!
//! [`MemoryState`]: crate::state::MemoryState
//! [`App::run`]: app::App::run

pub mod app;
pub mod heatmap;
pub mod status;
pub mod theme;

pub use app::App;
