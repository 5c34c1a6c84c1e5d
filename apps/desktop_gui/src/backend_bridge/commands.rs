//! Backend commands queued from UI to backend worker.

use shared::domain::{Flow, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    ExtractLocationDate {
        request_id: RequestId,
        message: String,
    },
    FetchAccommodation {
        request_id: RequestId,
        message: String,
    },
    FetchFullGuide {
        request_id: RequestId,
        message: String,
    },
}

impl BackendCommand {
    pub fn for_flow(flow: Flow, request_id: RequestId, message: String) -> Self {
        match flow {
            Flow::Extraction => BackendCommand::ExtractLocationDate {
                request_id,
                message,
            },
            Flow::Accommodation => BackendCommand::FetchAccommodation {
                request_id,
                message,
            },
            Flow::FullGuide => BackendCommand::FetchFullGuide {
                request_id,
                message,
            },
        }
    }

    pub fn flow(&self) -> Flow {
        match self {
            BackendCommand::ExtractLocationDate { .. } => Flow::Extraction,
            BackendCommand::FetchAccommodation { .. } => Flow::Accommodation,
            BackendCommand::FetchFullGuide { .. } => Flow::FullGuide,
        }
    }

    pub fn request_id(&self) -> RequestId {
        match self {
            BackendCommand::ExtractLocationDate { request_id, .. }
            | BackendCommand::FetchAccommodation { request_id, .. }
            | BackendCommand::FetchFullGuide { request_id, .. } => *request_id,
        }
    }

    pub fn into_message(self) -> String {
        match self {
            BackendCommand::ExtractLocationDate { message, .. }
            | BackendCommand::FetchAccommodation { message, .. }
            | BackendCommand::FetchFullGuide { message, .. } => message,
        }
    }
}
