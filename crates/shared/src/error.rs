use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Body shape the travel service uses to report an application-level failure,
/// regardless of HTTP status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl ApiErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: Some(Value::String(message.into())),
        }
    }

    /// Returns the user-facing message when the `error` field is set to a
    /// truthy value. Falsy values (`null`, `false`, `0`, `""`) do not count.
    pub fn message(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Some(other.to_string()),
        }
    }
}

/// Extracts an application error from an already parsed response body.
pub fn application_error(body: &Value) -> Option<String> {
    let error = body.as_object()?.get("error")?.clone();
    ApiErrorBody { error: Some(error) }.message()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RemoteError {
    pub message: String,
}

impl RemoteError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
