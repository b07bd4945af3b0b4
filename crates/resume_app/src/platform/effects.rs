use std::time::Duration;

use analyzer_logging::analyzer_info;
use chrono::Utc;
use resume_core::{Effect, Msg};
use resume_engine::{EngineEvent, EngineHandle, SubmitSettings};

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: SubmitSettings) -> Self {
        Self {
            engine: EngineHandle::new(settings),
        }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitAnalysis {
                    submission_id,
                    request,
                } => {
                    analyzer_info!(
                        "SubmitAnalysis submission_id={} file={} email={} at={}",
                        submission_id,
                        request.file.name,
                        request.email.is_some(),
                        Utc::now().to_rfc3339()
                    );
                    self.engine.submit(submission_id, request);
                }
            }
        }
    }

    /// Shuts the engine down after the run; nothing is submitted afterwards.
    pub fn stop(&self) {
        self.engine.stop();
    }

    /// Waits up to `timeout` for the next engine completion.
    pub fn next_msg(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SubmissionCompleted {
            submission_id,
            result,
        } => Msg::AnalysisCompleted {
            submission_id,
            result,
        },
    }
}
