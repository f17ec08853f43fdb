pub(crate) mod helpers;
mod form;
mod results;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::actions::Command;
use crate::app::state::{App, Focus};

/// Applies a key press to the app and returns any backend work it implies.
pub fn handle_input(app: &mut App, key: KeyEvent) -> Option<Command> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.running = false;
        return None;
    }

    if handle_help_toggle(app, key.code) {
        return None;
    }

    match key.code {
        KeyCode::Tab => {
            move_focus(app, app.focus.next());
            return None;
        }
        KeyCode::BackTab => {
            move_focus(app, app.focus.prev());
            return None;
        }
        KeyCode::F(5) => return Some(Command::CheckHealth),
        KeyCode::Esc => {
            handle_escape(app);
            return None;
        }
        _ => {}
    }

    match app.focus {
        Focus::Company => form::handle_company_input(app, key),
        Focus::Year | Focus::Report => form::handle_selector_input(app, key.code),
        Focus::Results => {
            results::handle_results_input(app, key.code);
            None
        }
    }
}

fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    if key == KeyCode::F(1) {
        app.show_help = !app.show_help;
        return true;
    }

    if app.show_help {
        if key == KeyCode::Esc {
            app.show_help = false;
        }
        return true;
    }

    false
}

fn move_focus(app: &mut App, focus: Focus) {
    if focus != Focus::Company {
        app.form.hide_suggestions();
    }
    app.focus = focus;
}

fn handle_escape(app: &mut App) {
    if app.form.suggestions_visible() {
        app.form.hide_suggestions();
    } else if app.focus != Focus::Company {
        app.focus = Focus::Company;
    } else if app.response().is_some() || app.error().is_some() {
        app.clear_results();
    } else {
        app.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Company;

    fn press(app: &mut App, code: KeyCode) -> Option<Command> {
        handle_input(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) -> Vec<Command> {
        text.chars()
            .filter_map(|ch| press(app, KeyCode::Char(ch)))
            .collect()
    }

    #[test]
    fn typing_searches_from_the_second_character() {
        let mut app = App::new(2023);
        let commands = type_text(&mut app, "삼성전");
        assert_eq!(commands.len(), 2);
        assert!(matches!(&commands[0], Command::Search(q) if q.query == "삼성"));
        assert!(matches!(&commands[1], Command::Search(q) if q.query == "삼성전"));
    }

    #[test]
    fn enter_submits_the_form() {
        let mut app = App::new(2023);
        type_text(&mut app, "네이버");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Down);

        let command = press(&mut app, KeyCode::Enter);
        let Some(Command::Analyze { generation, request }) = command else {
            panic!("expected an analyze command, got {command:?}");
        };
        assert_eq!(generation, 1);
        assert_eq!(request.company_name, "네이버");
        assert_eq!(request.year, "2022");
        assert!(app.is_loading());
    }

    #[test]
    fn enter_on_highlighted_suggestion_selects_instead_of_submitting() {
        let mut app = App::new(2023);
        type_text(&mut app, "카카");
        let generation = app.form.search_generation();
        app.form.apply_search_results(
            generation,
            vec![Company {
                name: "카카오뱅크".into(),
                code: "01133217".into(),
            }],
        );

        press(&mut app, KeyCode::Down);
        assert!(press(&mut app, KeyCode::Enter).is_none());
        assert_eq!(app.form.company_name, "카카오뱅크");
        assert!(!app.form.suggestions_visible());
        assert!(!app.is_loading());
    }

    #[test]
    fn help_swallows_keys_until_closed() {
        let mut app = App::new(2023);
        press(&mut app, KeyCode::F(1));
        assert!(press(&mut app, KeyCode::Char('x')).is_none());
        assert!(app.form.company_name.is_empty());

        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(app.running);
    }

    #[test]
    fn escape_unwinds_before_quitting() {
        let mut app = App::new(2023);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, Focus::Company);
        assert!(app.running);

        press(&mut app, KeyCode::Esc);
        assert!(!app.running);
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut app = App::new(2023);
        type_text(&mut app, "ab");
        handle_input(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(!app.running);
        assert_eq!(app.form.company_name, "ab");
    }

    #[test]
    fn f5_requests_a_health_check() {
        let mut app = App::new(2023);
        assert_eq!(press(&mut app, KeyCode::F(5)), Some(Command::CheckHealth));
    }
}
