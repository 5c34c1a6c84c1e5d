//! UI/backend events and error modeling for desktop GUI controller.

use client_core::ClientError;
use shared::{
    domain::{Flow, RequestId},
    protocol::FlowResponse,
};

pub enum UiEvent {
    Info(String),
    Error(UiError),
    FlowCompleted {
        flow: Flow,
        request_id: RequestId,
        outcome: Result<FlowResponse, UiError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    Transport,
    Remote,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Dispatch,
    Flow(Flow),
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("invalid") || message_lower.contains("missing") {
            UiErrorCategory::Validation
        } else if message_lower.contains("timeout")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("transport")
            || message_lower.contains("disconnect")
            || message_lower.contains("queue")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    /// Maps a client failure to what the flow's section displays.
    pub fn from_client_error(flow: Flow, err: &ClientError) -> Self {
        let category = if err.is_remote() {
            UiErrorCategory::Remote
        } else {
            UiErrorCategory::Transport
        };
        Self {
            category,
            context: UiErrorContext::Flow(flow),
            message: err.user_message(flow),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}
