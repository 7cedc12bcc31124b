use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::theme::theme;

const MAX_PATH_WIDTH: usize = 48;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();

    let location = &app.storage_location;
    let char_count = location.chars().count();
    let location = if char_count > MAX_PATH_WIDTH {
        let tail: String = location.chars().skip(char_count - (MAX_PATH_WIDTH - 3)).collect();
        format!("...{}", tail)
    } else {
        location.clone()
    };

    let customized = app
        .actions
        .iter()
        .filter(|info| app.is_customized(info.action))
        .count();

    let line = Line::from(vec![
        Span::styled("j2me-keymap ", t.text().add_modifier(Modifier::BOLD)),
        Span::styled(format!("[{} customized] ", customized), t.custom_marker()),
        Span::styled(location, t.dim()),
        Span::raw(" "),
        Span::styled("q:quit", t.hint()),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
