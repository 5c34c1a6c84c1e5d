//! Per-flow state slices and the view controller that owns them.

use crossbeam_channel::Sender;
use shared::{
    domain::{Flow, RequestId},
    protocol::{AccommodationResult, ExtractionResult, FlowResponse, FullGuideResult},
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a message";

/// idle -> loading -> success | error, once per request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlowState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> FlowState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FlowState::Loading)
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            FlowState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FlowState::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct IssuedRequests {
    extraction: RequestId,
    accommodation: RequestId,
    full_guide: RequestId,
}

impl IssuedRequests {
    fn slot(&mut self, flow: Flow) -> &mut RequestId {
        match flow {
            Flow::Extraction => &mut self.extraction,
            Flow::Accommodation => &mut self.accommodation,
            Flow::FullGuide => &mut self.full_guide,
        }
    }

    fn issue(&mut self, flow: Flow) -> RequestId {
        let slot = self.slot(flow);
        *slot = slot.next();
        *slot
    }

    fn latest(&mut self, flow: Flow) -> RequestId {
        *self.slot(flow)
    }
}

pub struct ViewController {
    cmd_tx: Sender<BackendCommand>,

    pub extract_query: String,
    pub travel_query: String,

    extraction: FlowState<ExtractionResult>,
    accommodation: FlowState<AccommodationResult>,
    full_guide: FlowState<FullGuideResult>,

    issued: IssuedRequests,
    ignore_stale_responses: bool,

    status: String,
    banner: Option<UiError>,
}

impl ViewController {
    pub fn new(cmd_tx: Sender<BackendCommand>, ignore_stale_responses: bool) -> Self {
        Self {
            cmd_tx,
            extract_query: String::new(),
            travel_query: String::new(),
            extraction: FlowState::Idle,
            accommodation: FlowState::Idle,
            full_guide: FlowState::Idle,
            issued: IssuedRequests::default(),
            ignore_stale_responses,
            status: String::new(),
            banner: None,
        }
    }

    pub fn extraction(&self) -> &FlowState<ExtractionResult> {
        &self.extraction
    }

    pub fn accommodation(&self) -> &FlowState<AccommodationResult> {
        &self.accommodation
    }

    pub fn full_guide(&self) -> &FlowState<FullGuideResult> {
        &self.full_guide
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn banner(&self) -> Option<&UiError> {
        self.banner.as_ref()
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    pub fn is_loading(&self, flow: Flow) -> bool {
        match flow {
            Flow::Extraction => self.extraction.is_loading(),
            Flow::Accommodation => self.accommodation.is_loading(),
            Flow::FullGuide => self.full_guide.is_loading(),
        }
    }

    pub fn any_in_flight(&self) -> bool {
        Flow::ALL.into_iter().any(|flow| self.is_loading(flow))
    }

    pub fn can_extract(&self) -> bool {
        !self.extraction.is_loading()
    }

    pub fn can_fetch_accommodation(&self) -> bool {
        !self.travel_query.is_empty() && !self.accommodation.is_loading()
    }

    pub fn can_fetch_full_guide(&self) -> bool {
        !self.travel_query.is_empty() && !self.full_guide.is_loading()
    }

    /// An empty query fails locally without contacting the service.
    pub fn extract(&mut self) {
        if self.extract_query.is_empty() {
            self.set_error(Flow::Extraction, EMPTY_QUERY_MESSAGE.to_string());
            return;
        }
        let message = self.extract_query.clone();
        self.begin(Flow::Extraction, message);
    }

    /// No-op on an empty query; the trigger is disabled in that case.
    pub fn fetch_accommodation(&mut self) {
        if self.travel_query.is_empty() {
            return;
        }
        let message = self.travel_query.clone();
        self.begin(Flow::Accommodation, message);
    }

    /// No-op on an empty query; the trigger is disabled in that case.
    pub fn fetch_full_guide(&mut self) {
        if self.travel_query.is_empty() {
            return;
        }
        let message = self.travel_query.clone();
        self.begin(Flow::FullGuide, message);
    }

    fn begin(&mut self, flow: Flow, message: String) {
        let request_id = self.issued.issue(flow);
        self.set_loading(flow);
        tracing::info!(
            flow = flow.as_str(),
            request_id = request_id.0,
            "submitting travel query"
        );

        let cmd = BackendCommand::for_flow(flow, request_id, message);
        if !dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status) {
            self.banner = Some(UiError::from_message(
                UiErrorContext::Dispatch,
                self.status.clone(),
            ));
            self.set_error(flow, flow.transport_failure_message().to_string());
        }
    }

    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => {
                self.status = message;
            }
            UiEvent::Error(err) => {
                tracing::warn!(context = ?err.context(), "{}", err.message());
                self.status = err.message().to_string();
                self.banner = Some(err);
            }
            UiEvent::FlowCompleted {
                flow,
                request_id,
                outcome,
            } => {
                if self.ignore_stale_responses && request_id < self.issued.latest(flow) {
                    tracing::debug!(
                        flow = flow.as_str(),
                        request_id = request_id.0,
                        "dropping stale response"
                    );
                    return;
                }
                match outcome {
                    Ok(response) if response.flow() == flow => self.store_result(response),
                    Ok(response) => {
                        tracing::warn!(
                            flow = flow.as_str(),
                            response_flow = response.flow().as_str(),
                            "response does not match flow; ignoring"
                        );
                    }
                    Err(err) => self.set_error(flow, err.into_message()),
                }
            }
        }
    }

    fn store_result(&mut self, response: FlowResponse) {
        match response {
            FlowResponse::Extraction(result) => self.extraction = FlowState::Success(result),
            FlowResponse::Accommodation(result) => {
                self.accommodation = FlowState::Success(result)
            }
            FlowResponse::FullGuide(result) => self.full_guide = FlowState::Success(result),
        }
    }

    fn set_loading(&mut self, flow: Flow) {
        match flow {
            Flow::Extraction => self.extraction = FlowState::Loading,
            Flow::Accommodation => self.accommodation = FlowState::Loading,
            Flow::FullGuide => self.full_guide = FlowState::Loading,
        }
    }

    fn set_error(&mut self, flow: Flow, message: String) {
        match flow {
            Flow::Extraction => self.extraction = FlowState::Error(message),
            Flow::Accommodation => self.accommodation = FlowState::Error(message),
            Flow::FullGuide => self.full_guide = FlowState::Error(message),
        }
    }
}

#[cfg(test)]
#[path = "../tests/reducer_tests.rs"]
mod tests;
