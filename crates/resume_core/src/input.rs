use crate::SubmissionError;

pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Label text shown when no file is chosen.
pub const NO_FILE_LABEL: &str = "No file selected";

/// A file picked by the user, with the MIME type its source declared.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub content: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            content,
        }
    }

    pub fn byte_len(&self) -> u64 {
        self.content.len() as u64
    }

    fn has_pdf_extension(&self) -> bool {
        self.name.to_lowercase().ends_with(".pdf")
    }
}

// Content is left out so logs and assertion failures stay readable.
impl std::fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.content.len())
            .finish()
    }
}

/// Checks that a file was chosen and that it looks like a PDF.
///
/// Either the declared MIME type or the `.pdf` extension (any case) is
/// enough: some platforms report PDFs with a generic MIME type.
pub fn validate(file: Option<&SelectedFile>) -> Result<&SelectedFile, SubmissionError> {
    let file = file.ok_or(SubmissionError::NoFileSelected)?;
    if file.mime_type != PDF_MIME_TYPE && !file.has_pdf_extension() {
        return Err(SubmissionError::UnsupportedFileType);
    }
    Ok(file)
}
