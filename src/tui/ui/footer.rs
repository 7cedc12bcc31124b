use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, Pane};
use crate::tui::theme::{theme, Theme};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();

    let lines = if let Some(prompt) = &app.confirm_prompt {
        confirm_lines(prompt, t)
    } else {
        vec![
            Line::styled(format!("Status: {}", app.status), t.status()),
            hint_line(app, t),
        ]
    };

    frame.render_widget(Paragraph::new(lines), area);
}

fn confirm_lines(prompt: &str, t: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::styled(prompt.to_string(), t.confirm()),
        Line::from(vec![
            Span::styled("y", t.hint()),
            Span::styled("/", t.dim()),
            Span::styled("Enter", t.hint()),
            Span::styled(":yes  ", t.dim()),
            Span::styled("n", t.hint()),
            Span::styled("/", t.dim()),
            Span::styled("Esc", t.hint()),
            Span::styled(":no", t.dim()),
        ]),
    ]
}

fn hint_line(app: &App, t: &Theme) -> Line<'static> {
    if let Mode::Capture(_) = app.mode {
        return Line::from(vec![
            Span::styled("any key", t.hint()),
            Span::styled(":bind  ", t.dim()),
            Span::styled("Esc", t.hint()),
            Span::styled(":cancel", t.dim()),
        ]);
    }

    let mut spans = vec![
        Span::styled("Tab", t.hint()),
        Span::styled(":pane  ", t.dim()),
    ];
    match app.focused_pane {
        Pane::Bindings => spans.extend([
            Span::styled("arrows", t.hint()),
            Span::styled(":select  ", t.dim()),
            Span::styled("a", t.hint()),
            Span::styled(":add key  ", t.dim()),
            Span::styled("d", t.hint()),
            Span::styled(":remove key  ", t.dim()),
            Span::styled("r", t.hint()),
            Span::styled(":reset all  ", t.dim()),
        ]),
        Pane::Output => spans.extend([
            Span::styled("up/down", t.hint()),
            Span::styled(":scroll  ", t.dim()),
        ]),
    }
    spans.extend([Span::styled("q", t.hint()), Span::styled(":quit", t.dim())]);
    Line::from(spans)
}
