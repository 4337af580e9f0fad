use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub comment: Color, // Grey
    pub primary: Color, // Blue, linear mode badge
    pub accent: Color,  // Yellow, block mode badge
    pub border_normal: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    comment: Color::Rgb(108, 112, 134),
    primary: Color::Rgb(137, 180, 250),
    accent: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
};
