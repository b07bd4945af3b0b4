use crate::SelectedFile;

/// Multipart field carrying the PDF.
pub const RESUME_FIELD: &str = "resume";
/// Multipart field carrying the optional email.
pub const EMAIL_FIELD: &str = "email";

/// Payload of one submission, built fresh each time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub file: SelectedFile,
    pub email: Option<String>,
}

impl SubmissionRequest {
    /// An empty email input means "no email": the field is left out entirely.
    pub fn new(file: SelectedFile, email_input: &str) -> Self {
        let email = Some(email_input)
            .filter(|text| !text.is_empty())
            .map(ToOwned::to_owned);
        Self { file, email }
    }

    /// Names of the multipart fields this request will carry, in order.
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut fields = vec![RESUME_FIELD];
        if self.email.is_some() {
            fields.push(EMAIL_FIELD);
        }
        fields
    }
}
