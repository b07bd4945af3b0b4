#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue exactly one analysis request.
    SubmitAnalysis {
        submission_id: crate::SubmissionId,
        request: crate::SubmissionRequest,
    },
}
