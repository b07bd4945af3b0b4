//! Resume analyzer engine: file loading, request submission and effect execution.
mod engine;
mod response;
mod source;
mod submit;
mod types;

pub use engine::EngineHandle;
pub use response::{interpret_response, UPLOAD_TOO_LARGE_MESSAGE};
pub use source::{load_selected_file, mime_type_for, SourceError};
pub use submit::{ReqwestSubmitter, SubmitSettings, Submitter, ANALYZE_PATH, DEFAULT_BASE_URL};
pub use types::EngineEvent;
