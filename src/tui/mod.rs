pub mod app;
mod handlers;
mod keycodes;
mod theme;
mod ui;

use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;

use app::App;
use handlers::handle_input;
use ui::draw_ui;

pub fn run(mut app: App) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop(
        &mut app,
        |app| terminal.draw(|f| draw_ui(f, app)).map(|_| ()),
        event::read,
    );

    // Restore the terminal even when the loop failed
    let restore_result = restore_terminal(&mut terminal);
    run_result.and(restore_result)
}

/// Draw, read, dispatch until the user quits or an I/O call fails
fn event_loop<D, R>(app: &mut App, mut draw: D, mut read: R) -> io::Result<()>
where
    D: FnMut(&App) -> io::Result<()>,
    R: FnMut() -> io::Result<Event>,
{
    loop {
        draw(app)?;

        let key = match read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue,
        };

        if handle_input(app, key)? {
            return Ok(());
        }
    }
}

fn restore_terminal<B: Backend + io::Write>(terminal: &mut Terminal<B>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
