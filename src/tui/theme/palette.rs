use ratatui::prelude::*;

/// Dark palette tuned for the phone-keypad editor
pub struct Palette {
    pub text: Color,
    pub subtext: Color,
    pub dim: Color,

    pub accent: Color,
    pub custom: Color,
    pub notice: Color,
    pub danger: Color,

    pub border: Color,
    pub border_active: Color,
    pub chip_bg: Color,
    pub chip_selected_bg: Color,
    pub chip_selected_fg: Color,
    pub row_selected_bg: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text: Color::Rgb(205, 214, 244),
            subtext: Color::Rgb(166, 173, 200),
            dim: Color::Rgb(108, 112, 134),

            accent: Color::Rgb(137, 180, 250),
            custom: Color::Rgb(148, 226, 213),
            notice: Color::Rgb(249, 226, 175),
            danger: Color::Rgb(243, 139, 168),

            border: Color::Rgb(69, 71, 90),
            border_active: Color::Rgb(137, 180, 250),
            chip_bg: Color::Rgb(49, 50, 68),
            chip_selected_bg: Color::Rgb(137, 180, 250),
            chip_selected_fg: Color::Rgb(17, 17, 27),
            row_selected_bg: Color::Rgb(36, 39, 58),
        }
    }
}
