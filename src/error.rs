//! Error taxonomy for routing requests.

use thiserror::Error;

/// Failure to complete a request at all.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("routing service unavailable: {0}")]
    Unavailable(String),
}

/// Outcome of a matrix or trip request that did not produce a result.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("at least {required} stops are needed, {actual} placed")]
    InsufficientPoints { required: usize, actual: usize },

    #[error("{count} stops exceed the limit of {max} per request")]
    TooManyPoints { count: usize, max: usize },

    #[error("error from routing service: {0}")]
    ServiceRejected(String),

    #[error("no trip found")]
    NoTripFound,

    #[error("routing service response is missing {0}")]
    IncompleteResponse(&'static str),

    #[error("failed to reach routing service: {0}")]
    Transport(#[from] TransportError),
}

impl RoutingError {
    /// True when the error was raised before any request left the client.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            RoutingError::InsufficientPoints { .. } | RoutingError::TooManyPoints { .. }
        )
    }
}
