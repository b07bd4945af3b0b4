/// Shown when the service rejects a request without saying why.
pub const SERVER_FALLBACK_MESSAGE: &str = "Something went wrong while analyzing the resume.";
/// Shown when a transport or parse failure carries no description.
pub const TRANSPORT_FALLBACK_MESSAGE: &str = "Unexpected error occurred.";

/// Every way a submission can end without results.
///
/// The `Display` text is exactly what the error region shows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Please select a PDF resume to upload.")]
    NoFileSelected,
    #[error("Only PDF files are supported.")]
    UnsupportedFileType,
    #[error("{0}")]
    ServerRejected(String),
    #[error("{0}")]
    TransportOrParseFailure(String),
}

impl SubmissionError {
    /// Builds a `ServerRejected`, falling back to a generic message when the
    /// server gave no usable reason.
    pub fn server_rejected(reason: Option<String>) -> Self {
        Self::ServerRejected(non_blank(reason).unwrap_or_else(|| SERVER_FALLBACK_MESSAGE.into()))
    }

    pub fn transport(description: impl Into<String>) -> Self {
        Self::TransportOrParseFailure(
            non_blank(Some(description.into()))
                .unwrap_or_else(|| TRANSPORT_FALLBACK_MESSAGE.into()),
        )
    }

    /// True for failures caught before any request was issued.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::NoFileSelected | Self::UnsupportedFileType)
    }
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_rejection_uses_reason_or_fallback() {
        assert_eq!(
            SubmissionError::server_rejected(Some("parse failed".into())).to_string(),
            "parse failed"
        );
        assert_eq!(
            SubmissionError::server_rejected(None).to_string(),
            SERVER_FALLBACK_MESSAGE
        );
        assert_eq!(
            SubmissionError::server_rejected(Some("  ".into())).to_string(),
            SERVER_FALLBACK_MESSAGE
        );
    }

    #[test]
    fn only_local_checks_count_as_validation() {
        assert!(SubmissionError::NoFileSelected.is_validation());
        assert!(SubmissionError::UnsupportedFileType.is_validation());
        assert!(!SubmissionError::server_rejected(None).is_validation());
        assert!(!SubmissionError::transport("reset").is_validation());
    }

    #[test]
    fn transport_failure_falls_back_on_empty_description() {
        assert_eq!(
            SubmissionError::transport("").to_string(),
            TRANSPORT_FALLBACK_MESSAGE
        );
        assert_eq!(
            SubmissionError::transport("connection refused").to_string(),
            "connection refused"
        );
    }
}
