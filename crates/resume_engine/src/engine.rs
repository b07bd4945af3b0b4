use std::cell::Cell;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use analyzer_logging::{analyzer_error, analyzer_warn};
use resume_core::{SubmissionError, SubmissionId, SubmissionRequest};

use crate::submit::{ReqwestSubmitter, SubmitSettings, Submitter};
use crate::EngineEvent;

enum EngineCommand {
    Submit {
        submission_id: SubmissionId,
        request: SubmissionRequest,
    },
    Stop,
}

/// Background worker that runs submissions on its own tokio runtime.
///
/// Every call to [`EngineHandle::submit`] produces exactly one
/// `SubmissionCompleted` event, even when the worker is gone or the
/// submission task dies.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
    event_rx: mpsc::Receiver<EngineEvent>,
    stopped: Cell<bool>,
}

impl EngineHandle {
    pub fn new(settings: SubmitSettings) -> Self {
        Self::with_submitter(Arc::new(ReqwestSubmitter::new(settings)))
    }

    pub fn with_submitter(submitter: Arc<dyn Submitter>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let worker_tx = event_tx.clone();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Submit {
                        submission_id,
                        request,
                    } => {
                        let submitter = submitter.clone();
                        let event_tx = worker_tx.clone();
                        runtime.spawn(run_submission(submitter, submission_id, request, event_tx));
                    }
                    EngineCommand::Stop => break,
                }
            }
            // Let in-flight submissions finish before the runtime drops.
            runtime.shutdown_timeout(Duration::from_secs(5));
        });

        Self {
            cmd_tx,
            event_tx,
            event_rx,
            stopped: Cell::new(false),
        }
    }

    pub fn submit(&self, submission_id: SubmissionId, request: SubmissionRequest) {
        let command = EngineCommand::Submit {
            submission_id,
            request,
        };
        if self.stopped.get() || self.cmd_tx.send(command).is_err() {
            analyzer_warn!("Engine stopped; failing submission {}", submission_id);
            let _ = self.event_tx.send(EngineEvent::SubmissionCompleted {
                submission_id,
                result: Err(SubmissionError::transport(
                    "Analysis engine is not running.",
                )),
            });
        }
    }

    /// Asks the worker to exit once queued commands are handled. Later
    /// submissions fail immediately.
    pub fn stop(&self) {
        self.stopped.set(true);
        let _ = self.cmd_tx.send(EngineCommand::Stop);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// The handle keeps its own sender, so the channel never disconnects
    /// while the handle is alive; `None` always means the timeout elapsed.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn run_submission(
    submitter: Arc<dyn Submitter>,
    submission_id: SubmissionId,
    request: SubmissionRequest,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let task = tokio::spawn(async move { submitter.submit(submission_id, &request).await });
    let result = match task.await {
        Ok(result) => result,
        Err(err) => {
            analyzer_error!("Submission {} task failed: {}", submission_id, err);
            Err(SubmissionError::transport(format!(
                "Submission failed unexpectedly: {err}"
            )))
        }
    };
    let _ = event_tx.send(EngineEvent::SubmissionCompleted {
        submission_id,
        result,
    });
}
