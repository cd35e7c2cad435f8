use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::ui::app::{App, InputMode};

pub(crate) fn as_tui() -> Result<()> {
    let mut app = App::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    // The last report stays on disk for the user; tell them where.
    if let Some(path) = &app.report_path {
        println!("Budget report: {}", path.display());
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app)?,
                InputMode::Editing => handle_editing_input(key, app),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => app.focus_prev(),
        KeyCode::Left if key.modifiers.contains(KeyModifiers::SHIFT) => {
            app.adjust_focused(-1, true);
        }
        KeyCode::Right if key.modifiers.contains(KeyModifiers::SHIFT) => {
            app.adjust_focused(1, true);
        }
        KeyCode::Left | KeyCode::Char('h') => app.adjust_focused(-1, false),
        KeyCode::Right | KeyCode::Char('l') => app.adjust_focused(1, false),
        KeyCode::Char('H') => app.adjust_focused(-1, true),
        KeyCode::Char('L') => app.adjust_focused(1, true),
        KeyCode::Char('e') | KeyCode::Enter => app.begin_edit(),
        KeyCode::Char('g') => {
            if let Err(e) = app.generate_report() {
                app.set_status(format!("Report failed: {e}"));
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_editing_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Backspace => {
            app.edit_input.pop();
        }
        KeyCode::Char(c) if c.is_ascii_digit() || ".,$-".contains(c) => {
            app.edit_input.push(c);
        }
        _ => {}
    }
}
