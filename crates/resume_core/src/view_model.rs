use crate::{ResultsView, UiState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub ui_state: UiState,
    pub file_label: String,
    pub error_text: String,
    pub loading_visible: bool,
    pub results_visible: bool,
    pub submit_enabled: bool,
    pub results: Option<ResultsView>,
    pub dirty: bool,
}
