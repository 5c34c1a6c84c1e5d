use shared::{domain::Flow, error::RemoteError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid api base url `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("service reported an error: {0}")]
    Remote(#[from] RemoteError),
}

impl ClientError {
    /// Text to show in the flow's section. Server-reported errors are shown
    /// verbatim; everything else collapses to the flow's fixed message.
    pub fn user_message(&self, flow: Flow) -> String {
        match self {
            ClientError::Remote(err) => err.message.clone(),
            _ => flow.transport_failure_message().to_string(),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, ClientError::Remote(_))
    }
}
