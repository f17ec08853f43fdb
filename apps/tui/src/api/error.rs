use thiserror::Error;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error: the analysis service could not be reached.";

/// Backend call being made, used to pick a fallback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Analyze,
    Search,
    Health,
}

impl Operation {
    pub const fn fallback_message(self) -> &'static str {
        match self {
            Self::Analyze => "An error occurred during the analysis.",
            Self::Search => "An error occurred while searching companies.",
            Self::Health => "The health check failed.",
        }
    }
}

/// Every failure of a backend call. `Display` is the message shown to the user.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response reached us.
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Transport(#[source] reqwest::Error),

    /// Non-2xx response; `message` is the server detail when one was sent.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// 2xx response whose body did not match the expected shape.
    #[error("{}", operation.fallback_message())]
    Decode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Builds a server error from a non-2xx body, preferring its `detail`.
    pub fn from_error_body(operation: Operation, status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("detail")
                    .and_then(serde_json::Value::as_str)
                    .map(str::trim)
                    .filter(|detail| !detail.is_empty())
                    .map(ToString::to_string)
            })
            .unwrap_or_else(|| operation.fallback_message().to_string());

        Self::Server { status, message }
    }
}
