//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues `cmd` for the backend worker. On failure `status` is set to a
/// description of why and `false` is returned.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let flow = cmd.flow();
    let request_id = cmd.request_id();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(
                flow = flow.as_str(),
                request_id = request_id.0,
                "queued ui->backend command"
            );
            true
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(flow = flow.as_str(), "ui command queue is full");
            *status = "UI command queue is full; please retry".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(flow = flow.as_str(), "backend command processor disconnected");
            *status =
                "Backend command processor disconnected (possible startup/runtime failure); restart the app"
                    .to_string();
            false
        }
    }
}
