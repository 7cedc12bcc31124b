use std::io;

use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode, Pane};
use crate::tui::keycodes::key_id_from_event;

/// Handle input and return true if the app should quit
pub fn handle_input(app: &mut App, key: KeyEvent) -> io::Result<bool> {
    if app.confirm_prompt.is_some() {
        return handle_confirmation(app, key.code);
    }

    // While capturing, every key (including q and Tab) is a candidate binding
    if let Mode::Capture(_) = app.mode {
        app.handle_captured(key_id_from_event(&key));
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Tab | KeyCode::BackTab => {
            app.cycle_pane();
            return Ok(false);
        }
        KeyCode::Char('1') => {
            app.focused_pane = Pane::Bindings;
            return Ok(false);
        }
        KeyCode::Char('2') => {
            app.focused_pane = Pane::Output;
            return Ok(false);
        }
        _ => {}
    }

    match app.focused_pane {
        Pane::Bindings => handle_bindings_input(app, key.code),
        Pane::Output => handle_output_input(app, key.code),
    }

    Ok(false)
}

fn handle_confirmation(app: &mut App, key: KeyCode) -> io::Result<bool> {
    match key {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            if let Some(action) = app.pending_action.take() {
                app.clear_confirm();
                app.run_pending(action);
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.set_status("Cancelled");
            app.clear_confirm();
        }
        _ => {}
    }
    Ok(false)
}

fn handle_bindings_input(app: &mut App, key: KeyCode) {
    // Actions are a vertical list, their keys a horizontal row of chips
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_action(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_action(),
        KeyCode::Left | KeyCode::Char('h') => app.select_previous_key(),
        KeyCode::Right | KeyCode::Char('l') => app.select_next_key(),
        KeyCode::Enter | KeyCode::Char('a') | KeyCode::Char('+') => app.start_capture(),
        KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('d') | KeyCode::Char('x') => {
            app.remove_selected_key()
        }
        KeyCode::Char('r') | KeyCode::Char('R') => app.request_reset(),
        _ => {}
    }
}

fn handle_output_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.output_scroll = app.output_scroll.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let last = app.output.len().saturating_sub(1);
            app.output_scroll = (app.output_scroll + 1).min(last);
        }
        _ => {}
    }
}
