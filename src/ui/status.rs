//! Status bar rendering with keybindings and trace counters

use crate::state::{MemoryState, Visualization};
use crate::trace::{AccessKind, TraceLoader};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub state: &'a MemoryState,
    pub loader: &'a TraceLoader,
    pub message: &'a str,
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData<'_>) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let (mode_text, mode_bg) = match data.state.visualization() {
        Visualization::Linear => (" LINEAR ", DEFAULT_THEME.primary),
        Visualization::Block => (" BLOCK ", DEFAULT_THEME.accent),
    };

    let left_spans = vec![
        Span::styled(
            mode_text,
            Style::default()
                .bg(mode_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(data.message, Style::default().fg(DEFAULT_THEME.fg)),
    ];

    let counts = [
        AccessKind::Instruction,
        AccessKind::Load,
        AccessKind::Store,
        AccessKind::Modify,
    ]
    .iter()
    .map(|&kind| format!("{} {}", kind.label(), data.loader.count(kind)))
    .collect::<Vec<_>>()
    .join("  ");

    let right_text = format!(
        "t={}  accesses={}  slot=2^{}B  blocks={}  {} ",
        data.state.time(),
        data.state.hr_time(),
        data.state.ignore_bits(),
        data.state.block_count(),
        counts,
    );
    let right_spans = vec![Span::styled(
        right_text,
        Style::default().fg(DEFAULT_THEME.comment),
    )];

    frame.render_widget(Paragraph::new(Line::from(left_spans)), layout[0]);
    frame.render_widget(
        Paragraph::new(Line::from(right_spans)).alignment(Alignment::Right),
        layout[1],
    );
}
