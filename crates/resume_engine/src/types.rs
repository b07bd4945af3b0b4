use resume_core::{AnalysisResult, SubmissionError, SubmissionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SubmissionCompleted {
        submission_id: SubmissionId,
        result: Result<AnalysisResult, SubmissionError>,
    },
}
