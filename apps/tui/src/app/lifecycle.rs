use std::convert::TryFrom;
use std::fmt;

use crate::api::AnalysisResponse;

/// Where the current analysis attempt stands.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisState {
    Idle,
    Loading,
    Success(Box<AnalysisResponse>),
    Error(String),
}

impl AnalysisState {
    const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Loading => "Loading",
            Self::Success(_) => "Success",
            Self::Error(_) => "Error",
        }
    }
}

impl fmt::Display for AnalysisState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone)]
pub enum AnalysisEvent {
    Submit,
    Completed(AnalysisResponse),
    Failed(String),
    Clear,
}

impl fmt::Display for AnalysisEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Submit => write!(f, "Submit"),
            Self::Completed(response) => write!(f, "Completed(success={})", response.success),
            Self::Failed(msg) => write!(f, "Failed({msg})"),
            Self::Clear => write!(f, "Clear"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid transition from {from} with event {event}")]
pub struct TransitionError {
    pub from: String,
    pub event: String,
}

struct NextState(AnalysisState);

impl TryFrom<(&AnalysisState, AnalysisEvent)> for NextState {
    type Error = TransitionError;

    fn try_from(value: (&AnalysisState, AnalysisEvent)) -> Result<Self, Self::Error> {
        let (current, event) = value;

        match (current, event) {
            (AnalysisState::Loading, AnalysisEvent::Completed(response)) => {
                Ok(Self(AnalysisState::Success(Box::new(response))))
            }
            (AnalysisState::Loading, AnalysisEvent::Failed(message)) => {
                Ok(Self(AnalysisState::Error(message)))
            }
            // Submitting replaces any previous result or error
            (
                AnalysisState::Idle | AnalysisState::Success(_) | AnalysisState::Error(_),
                AnalysisEvent::Submit,
            ) => Ok(Self(AnalysisState::Loading)),
            (
                AnalysisState::Idle | AnalysisState::Success(_) | AnalysisState::Error(_),
                AnalysisEvent::Clear,
            ) => Ok(Self(AnalysisState::Idle)),
            (current, event) => Err(TransitionError {
                from: current.to_string(),
                event: event.to_string(),
            }),
        }
    }
}

/// Lifecycle of analysis attempts.
///
/// Each submission gets a new generation; completions carrying an older
/// generation are ignored by the caller.
#[derive(Debug)]
pub struct AnalysisMachine {
    state: AnalysisState,
    generation: u64,
}

impl AnalysisMachine {
    pub const fn new() -> Self {
        Self {
            state: AnalysisState::Idle,
            generation: 0,
        }
    }

    pub const fn state(&self) -> &AnalysisState {
        &self.state
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self.state, AnalysisState::Loading)
    }

    pub fn process_event(&mut self, event: AnalysisEvent) -> Result<(), TransitionError> {
        let is_submit = matches!(event, AnalysisEvent::Submit);
        let next = NextState::try_from((&self.state, event))?;

        if is_submit {
            self.generation += 1;
        }
        self.state = next.0;
        Ok(())
    }

    /// Starts a new attempt and returns its generation.
    pub fn submit(&mut self) -> Result<u64, TransitionError> {
        self.process_event(AnalysisEvent::Submit)?;
        Ok(self.generation)
    }

    pub fn response(&self) -> Option<&AnalysisResponse> {
        match &self.state {
            AnalysisState::Success(response) => Some(response.as_ref()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            AnalysisState::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl Default for AnalysisMachine {
    fn default() -> Self {
        Self::new()
    }
}
