use crossterm::event::KeyCode;

use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::App;

const PAGE_SIZE: usize = 5;

pub fn handle_results_input(app: &mut App, key: KeyCode) {
    let tabs = app.result_categories().len();

    match key {
        KeyCode::Left => {
            app.category_tab_index = wrap_decrement(app.category_tab_index, tabs);
            app.card_scroll = 0;
        }
        KeyCode::Right => {
            app.category_tab_index = wrap_increment(app.category_tab_index, tabs);
            app.card_scroll = 0;
        }
        KeyCode::Char(digit @ '1'..='4') => {
            let index = digit as usize - '1' as usize;
            if index < tabs {
                app.category_tab_index = index;
                app.card_scroll = 0;
            }
        }
        KeyCode::Up => {
            app.card_scroll = app.card_scroll.saturating_sub(1);
        }
        KeyCode::Down => {
            app.card_scroll = (app.card_scroll + 1).min(max_scroll(app));
        }
        KeyCode::PageUp => {
            app.card_scroll = app.card_scroll.saturating_sub(PAGE_SIZE);
        }
        KeyCode::PageDown => {
            app.card_scroll = (app.card_scroll + PAGE_SIZE).min(max_scroll(app));
        }
        _ => {}
    }
}

fn max_scroll(app: &App) -> usize {
    let Some(category) = app.selected_category() else {
        return 0;
    };

    app.response()
        .and_then(|response| response.report())
        .map_or(0, |data| data.indices_for(category).len().saturating_sub(1))
}
