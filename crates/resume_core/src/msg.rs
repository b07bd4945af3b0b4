#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a file, or cleared the picker.
    FileChosen(Option<crate::SelectedFile>),
    /// User edited the email input.
    EmailChanged(String),
    /// User confirmed the form.
    SubmitClicked,
    /// Engine finished a submission.
    AnalysisCompleted {
        submission_id: crate::SubmissionId,
        result: Result<crate::AnalysisResult, crate::SubmissionError>,
    },
}
