use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::tui::app::{App, Pane};
use crate::tui::theme::theme;

const LABEL_WIDTH: usize = 16;
const ID_WIDTH: usize = 11;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let focused = app.focused_pane == Pane::Bindings;

    let block = Block::default()
        .title(t.title("KEY BINDINGS", focused))
        .borders(Borders::ALL)
        .border_style(t.border(focused))
        .border_type(t.border_type(focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = (inner.height as usize).max(1);
    let offset = scroll_offset(app.action_index, visible);

    let lines: Vec<Line> = app
        .actions
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(index, info)| {
            let selected = index == app.action_index;
            let mut spans = vec![
                Span::styled(
                    if selected { "> " } else { "  " },
                    if selected && focused { t.hint() } else { t.dim() },
                ),
                Span::styled(format!("{:<width$}", info.label, width = LABEL_WIDTH), t.text()),
                Span::styled(format!("{:<width$}", info.action.id(), width = ID_WIDTH), t.dim()),
            ];

            for (key_index, key) in app.store.keys(info.action).iter().enumerate() {
                let chip_selected = selected && focused && key_index == app.key_index;
                spans.push(Span::styled(
                    format!(" {} ", key.friendly_name()),
                    t.chip(chip_selected),
                ));
                spans.push(Span::raw(" "));
            }

            if app.is_customized(info.action) {
                spans.push(Span::styled("*", t.custom_marker()));
            }

            Line::from(spans).style(t.row(selected))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

/// First visible row so that the selected row stays on screen
fn scroll_offset(selected: usize, visible: usize) -> usize {
    (selected + 1).saturating_sub(visible)
}
