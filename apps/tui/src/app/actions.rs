use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::api::{AnalysisRequest, AnalysisResponse, ApiClient, ApiError, Company, DEFAULT_SEARCH_LIMIT};
use crate::app::form::SearchQuery;

/// Backend work requested by input handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Analyze {
        generation: u64,
        request: AnalysisRequest,
    },
    Search(SearchQuery),
    CheckHealth,
}

/// Completed backend work, delivered back to the event loop.
#[derive(Debug)]
pub enum AppEvent {
    AnalysisFinished {
        generation: u64,
        result: Result<AnalysisResponse, ApiError>,
    },
    SearchFinished {
        generation: u64,
        result: Result<Vec<Company>, ApiError>,
    },
    HealthChecked(bool),
}

/// Runs commands as background tasks so the UI keeps drawing.
#[derive(Debug, Clone)]
pub struct AppActions {
    client: ApiClient,
    events: UnboundedSender<AppEvent>,
}

impl AppActions {
    pub fn new(client: ApiClient) -> (Self, UnboundedReceiver<AppEvent>) {
        let (events, receiver) = unbounded_channel();
        (Self { client, events }, receiver)
    }

    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn dispatch(&self, command: Command) {
        let client = self.client.clone();
        let events = self.events.clone();

        tokio::spawn(async move {
            let event = match command {
                Command::Analyze {
                    generation,
                    request,
                } => AppEvent::AnalysisFinished {
                    generation,
                    result: client.analyze(&request).await,
                },
                Command::Search(SearchQuery { generation, query }) => AppEvent::SearchFinished {
                    generation,
                    result: client.search(&query, DEFAULT_SEARCH_LIMIT).await,
                },
                Command::CheckHealth => AppEvent::HealthChecked(client.health_check().await),
            };

            // The receiver is gone only once the UI has shut down
            if events.send(event).is_err() {
                tracing::debug!("event loop closed before backend call finished");
            }
        });
    }
}
