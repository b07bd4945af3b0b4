//! Resume analyzer core: pure submission state machine and result rendering.
mod analysis;
mod controls;
mod effect;
mod error;
mod input;
mod msg;
mod render;
mod request;
mod state;
mod update;
mod view_model;

pub use analysis::AnalysisResult;
pub use controls::*;
pub use effect::Effect;
pub use error::{SubmissionError, SERVER_FALLBACK_MESSAGE, TRANSPORT_FALLBACK_MESSAGE};
pub use input::{validate, SelectedFile, NO_FILE_LABEL, PDF_MIME_TYPE};
pub use msg::Msg;
pub use render::{
    render, DisplayCommand, ResultsView, NO_DOMAIN_PLACEHOLDER, NO_ITEMS_PLACEHOLDER,
    NO_SKILLS_PLACEHOLDER,
};
pub use request::{SubmissionRequest, EMAIL_FIELD, RESUME_FIELD};
pub use state::{AppState, SubmissionId, UiState};
pub use update::update;
pub use view_model::AppViewModel;
