use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::app::{handle_input, App, AppActions, AppEvent, Command};
use crate::ui;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Applies every backend completion that has arrived since the last frame.
pub fn drain_events(app: &mut App, events: &mut UnboundedReceiver<AppEvent>) -> usize {
    let mut applied = 0;
    while let Ok(event) = events.try_recv() {
        app.handle_event(event);
        applied += 1;
    }
    applied
}

/// Run the dashboard until the user quits.
pub async fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    actions: &AppActions,
    events: &mut UnboundedReceiver<AppEvent>,
) -> Result<()> {
    actions.dispatch(Command::CheckHealth);

    while app.running {
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(event::poll(EVENT_POLL_TIMEOUT), Ok(true)) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(command) = handle_input(app, key) {
                        actions.dispatch(command);
                    }
                }
                // The next draw picks up the new size.
                Ok(Event::Resize(width, height)) => {
                    tracing::debug!(width, height, "terminal resized");
                }
                Ok(_) => {}
                Err(e) => tracing::warn!(error = %e, "failed to read terminal event"),
            }
        }

        drain_events(app, events);

        // Let spawned backend calls make progress between frames.
        tokio::task::yield_now().await;
    }

    tracing::info!("dashboard closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::unreachable_base_url;
    use crate::api::ApiClient;

    #[tokio::test]
    async fn drained_health_result_reaches_the_app() {
        let client = ApiClient::new(unreachable_base_url(), Duration::from_secs(1));
        let (actions, mut events) = AppActions::new(client);
        let mut app = App::new(2023);

        actions.dispatch(Command::CheckHealth);
        let event = tokio::time::timeout(Duration::from_secs(5), events.recv())
            .await
            .expect("timely event")
            .expect("event");
        app.handle_event(event);

        assert_eq!(app.backend_healthy, Some(false));
        assert_eq!(drain_events(&mut app, &mut events), 0);
    }
}
