use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::actions::Command;
use crate::app::state::{App, Focus};

pub fn handle_company_input(app: &mut App, key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form.insert_char(ch).map(Command::Search)
        }
        KeyCode::Backspace => app.form.backspace().map(Command::Search),
        KeyCode::Down if app.form.suggestions_visible() => {
            app.form.next_suggestion();
            None
        }
        KeyCode::Up if app.form.suggestions_visible() => {
            app.form.prev_suggestion();
            None
        }
        KeyCode::Down => {
            app.focus = Focus::Year;
            None
        }
        KeyCode::Enter => {
            if app.form.suggestions_visible() {
                if let Some(index) = app.form.suggestion_index {
                    app.form.select_suggestion(index);
                    return None;
                }
            }
            submit(app)
        }
        _ => None,
    }
}

pub fn handle_selector_input(app: &mut App, key: KeyCode) -> Option<Command> {
    let is_year = app.focus == Focus::Year;

    match key {
        KeyCode::Up | KeyCode::Left => {
            if is_year {
                app.form.prev_year();
            } else {
                app.form.prev_report();
            }
            None
        }
        KeyCode::Down | KeyCode::Right => {
            if is_year {
                app.form.next_year();
            } else {
                app.form.next_report();
            }
            None
        }
        KeyCode::Enter => submit(app),
        _ => None,
    }
}

fn submit(app: &mut App) -> Option<Command> {
    let command = app.begin_analysis()?;
    app.focus = Focus::Results;
    Some(command)
}
