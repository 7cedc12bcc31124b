mod bindings_panel;
mod footer;
mod header;
mod output_panel;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::app::{App, Mode};
use crate::tui::theme::theme;

pub fn draw_ui(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Header
            Constraint::Min(8),     // Action list
            Constraint::Length(8),  // Activity log
            Constraint::Length(2),  // Footer
        ])
        .split(frame.area());

    header::render(frame, app, root[0]);
    bindings_panel::render(frame, app, root[1]);
    output_panel::render(frame, app, root[2]);
    footer::render(frame, app, root[3]);

    if let Mode::Capture(action) = app.mode {
        render_capture_popup(frame, app, action.label());
    }
}

fn render_capture_popup(frame: &mut Frame, app: &App, label: &str) {
    let t = theme();
    let area = centered(frame.area(), 46, 7);

    let block = Block::default()
        .title(t.title("PRESS A KEY", true))
        .borders(Borders::ALL)
        .border_style(t.border(true))
        .border_type(t.border_type(true));

    let lines = vec![
        Line::from(vec![
            Span::styled("Binding for ", t.subtext()),
            Span::styled(label.to_string(), t.text().add_modifier(Modifier::BOLD)),
        ]),
        Line::raw(""),
        Line::styled(app.status.clone(), t.status()),
        Line::from(vec![
            Span::styled("Esc", t.hint()),
            Span::styled(" cancels", t.dim()),
        ]),
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
