//! Main TUI application state and logic

use crate::render::ImageBuffer;
use crate::state::{MemoryState, Visualization};
use crate::trace::TraceLoader;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// The main application state
pub struct App {
    /// The tracked memory state being displayed
    pub state: MemoryState,

    /// Loader statistics shown in the status bar
    pub loader: TraceLoader,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Slots per image row as of the last render, used by vertical panning
    last_row_slots: u64,
}

impl App {
    /// Create a new app over an already-fed memory state
    pub fn new(state: MemoryState, loader: TraceLoader) -> Self {
        App {
            state,
            loader,
            should_quit: false,
            status_message: String::from("Ready! q quit, l/b mode, s stale sweep, arrows pan"),
            last_row_slots: 1,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Heatmap pane on top, one-line status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // One image pixel per half-block cell: two image rows per terminal row
        let width = pane_area.width.saturating_sub(2) as u32;
        let height = pane_area.height.saturating_sub(2) as u32 * 2;
        self.last_row_slots = width.max(1) as u64;

        let mut image = ImageBuffer::new(width, height);
        self.state.fill_image(&mut image);

        super::heatmap::render_heatmap_pane(frame, pane_area, &image, self.state.visualization());

        super::status::render_status_bar(
            frame,
            status_area,
            super::status::StatusRenderData {
                state: &self.state,
                loader: &self.loader,
                message: &self.status_message,
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('l') => {
                self.state.set_visualization(Visualization::Linear);
                self.status_message = String::from("Linear visualization");
            }
            KeyCode::Char('b') => {
                self.state.set_visualization(Visualization::Block);
                self.status_message = String::from("Block visualization");
            }
            KeyCode::Char('s') => {
                self.state.mark_all_stale();
                self.status_message = String::from("Marked all tracked memory stale");
            }
            KeyCode::Left => self.pan(-1),
            KeyCode::Right => self.pan(1),
            KeyCode::Up => self.pan(-(self.last_row_slots as i64)),
            KeyCode::Down => self.pan(self.last_row_slots as i64),
            _ => {}
        }
    }

    fn pan(&mut self, delta: i64) {
        if self.state.visualization() != Visualization::Linear {
            self.status_message = String::from("Panning applies to the linear view (press l)");
            return;
        }
        self.state.pan_window(delta);
        self.status_message = format!("Window start: slot {:#x}", self.state.window_start());
    }
}
