//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::TravelGuideApi;
use crossbeam_channel::{Receiver, Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Starts the backend worker thread. Each command runs as its own task, so
/// the three flows never wait on one another.
pub fn launch(
    api: Arc<dyn TravelGuideApi>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> std::io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("travel-backend".to_string())
        .spawn(move || run_backend_worker(api, cmd_rx, ui_tx))
}

fn run_backend_worker(
    api: Arc<dyn TravelGuideApi>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                UiErrorContext::BackendStartup,
                format!("backend worker startup failure: failed to build runtime: {err}"),
            )));
            tracing::error!("failed to build backend runtime: {err}");
            return;
        }
    };

    runtime.block_on(async move {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

        while let Ok(cmd) = cmd_rx.recv() {
            let api = Arc::clone(&api);
            let ui_tx = ui_tx.clone();
            tokio::spawn(async move {
                let event = execute_command(api.as_ref(), cmd).await;
                forward_event(&ui_tx, event);
            });
        }
        tracing::info!("backend command channel closed; worker exiting");
    });
}

/// Hands an event to the UI without blocking a runtime worker. Returns
/// `false` when the event was dropped.
pub fn forward_event(ui_tx: &Sender<UiEvent>, event: UiEvent) -> bool {
    match ui_tx.try_send(event) {
        Ok(()) => true,
        Err(TrySendError::Full(_)) => {
            tracing::warn!("ui event queue full; dropping flow completion");
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::debug!("ui event channel closed; dropping flow completion");
            false
        }
    }
}

pub async fn execute_command(api: &dyn TravelGuideApi, cmd: BackendCommand) -> UiEvent {
    let flow = cmd.flow();
    let request_id = cmd.request_id();
    let message = cmd.into_message();
    tracing::info!(
        flow = flow.as_str(),
        request_id = request_id.0,
        text_len = message.len(),
        "backend: submit"
    );

    let outcome = match api.submit(flow, &message).await {
        Ok(response) => Ok(response),
        Err(err) => {
            if err.is_remote() {
                tracing::warn!(
                    flow = flow.as_str(),
                    request_id = request_id.0,
                    "backend: service reported error: {err}"
                );
            } else {
                tracing::error!(
                    flow = flow.as_str(),
                    request_id = request_id.0,
                    "backend: request failed: {err}"
                );
            }
            Err(UiError::from_client_error(flow, &err))
        }
    };

    UiEvent::FlowCompleted {
        flow,
        request_id,
        outcome,
    }
}

#[cfg(test)]
#[path = "../tests/runtime_tests.rs"]
mod tests;
