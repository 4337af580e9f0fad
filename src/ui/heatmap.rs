//! Heatmap pane rendering
//!
//! Draws an [`ImageBuffer`] into the terminal using the half-block technique:
//! each terminal cell is a `▀` whose foreground carries the upper image row's
//! pixel and whose background carries the lower row's, so one terminal row
//! shows two image rows at full color. Runs of identical pixel pairs collapse
//! into one styled span to keep the widget cheap on mostly-empty images.

use crate::render::{ImageBuffer, Pixel};
use crate::state::Visualization;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const HALF_BLOCK: char = '\u{2580}'; // ▀

/// Convert a packed 0xRRGGBB pixel to a terminal color
pub fn pixel_color(px: Pixel) -> Color {
    Color::Rgb((px >> 16) as u8, (px >> 8) as u8, px as u8)
}

/// Render the heatmap pane. The image is expected to be sized to the pane's
/// inner area: `inner.width` pixels wide, `inner.height * 2` tall.
pub fn render_heatmap_pane(
    frame: &mut Frame,
    area: Rect,
    image: &ImageBuffer,
    visualization: Visualization,
) {
    let title = match visualization {
        Visualization::Linear => " Memory (Linear) ",
        Visualization::Block => " Memory (Block) ",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = (inner.height as u32).min(image.height().div_ceil(2));
    let cols = (inner.width as u32).min(image.width());

    let mut lines = Vec::with_capacity(rows as usize);
    for row in 0..rows {
        let upper_y = row * 2;
        let lower_y = row * 2 + 1;

        let mut spans: Vec<Span> = Vec::new();
        let mut run = String::new();
        let mut run_pair: Option<(Pixel, Pixel)> = None;
        for x in 0..cols {
            let upper = image.get(x, upper_y);
            let lower = if lower_y < image.height() {
                image.get(x, lower_y)
            } else {
                0
            };
            if run_pair != Some((upper, lower)) {
                if let Some((fg, bg)) = run_pair.take() {
                    spans.push(styled_run(std::mem::take(&mut run), fg, bg));
                }
                run_pair = Some((upper, lower));
            }
            run.push(HALF_BLOCK);
        }
        if let Some((fg, bg)) = run_pair {
            spans.push(styled_run(run, fg, bg));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn styled_run(text: String, upper: Pixel, lower: Pixel) -> Span<'static> {
    Span::styled(
        text,
        Style::default().fg(pixel_color(upper)).bg(pixel_color(lower)),
    )
}
