use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::tui::app::{App, Pane};
use crate::tui::theme::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let focused = app.focused_pane == Pane::Output;

    let block = Block::default()
        .title(t.title("ACTIVITY LOG", focused))
        .borders(Borders::ALL)
        .border_style(t.border(focused))
        .border_type(t.border_type(focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.output.is_empty() {
        let empty = Paragraph::new(Line::styled(
            "No changes yet. Edit a binding to see it logged here.",
            t.dim(),
        ));
        frame.render_widget(empty, inner);
        return;
    }

    let visible = inner.height as usize;
    let total = app.output.len();

    // output_scroll tracks the last visible line
    let end = (app.output_scroll + 1).clamp(visible.min(total), total);
    let start = end.saturating_sub(visible);

    let lines: Vec<Line> = app.output[start..end]
        .iter()
        .map(|l| Line::styled(l.clone(), t.log_line(l)))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
