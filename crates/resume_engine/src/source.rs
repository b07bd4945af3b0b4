use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use resume_core::{SelectedFile, PDF_MIME_TYPE};
use thiserror::Error;

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("path has no usable file name: {0}")]
    InvalidName(PathBuf),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// MIME type declared for a file name, the way a file picker would report it.
pub fn mime_type_for(name: &str) -> &'static str {
    let is_pdf = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if is_pdf {
        PDF_MIME_TYPE
    } else {
        FALLBACK_MIME_TYPE
    }
}

/// Reads a file from disk into a [`SelectedFile`]. No PDF check happens here;
/// that is the controller's job on submit.
pub fn load_selected_file(path: &Path) -> Result<SelectedFile, SourceError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| SourceError::InvalidName(path.to_path_buf()))?
        .to_string();
    let content = fs::read(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mime_type = mime_type_for(&name);
    Ok(SelectedFile::new(name, mime_type, content))
}
