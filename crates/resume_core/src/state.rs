use crate::view_model::AppViewModel;
use crate::{AnalysisResult, ResultsView, SelectedFile, NO_FILE_LABEL};

pub type SubmissionId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    ResultsShown,
    ErrorShown,
}

/// Everything the form controller knows between events.
///
/// Only the form inputs (file and email) survive from one submission to the
/// next; the display fields are rebuilt on every submit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    ui_state: UiState,
    selected_file: Option<SelectedFile>,
    email_input: String,
    error_text: String,
    results: Option<ResultsView>,
    next_submission_id: SubmissionId,
    in_flight: Option<SubmissionId>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ui_state(&self) -> UiState {
        self.ui_state
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn email_input(&self) -> &str {
        &self.email_input
    }

    pub fn in_flight(&self) -> Option<SubmissionId> {
        self.in_flight
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            ui_state: self.ui_state,
            file_label: self
                .selected_file
                .as_ref()
                .map(|file| file.name.clone())
                .unwrap_or_else(|| NO_FILE_LABEL.to_string()),
            error_text: self.error_text.clone(),
            loading_visible: self.ui_state == UiState::Loading,
            results_visible: self.ui_state == UiState::ResultsShown,
            submit_enabled: self.ui_state != UiState::Loading,
            results: self.results.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_selected_file(&mut self, file: Option<SelectedFile>) {
        self.selected_file = file;
        self.dirty = true;
    }

    pub(crate) fn set_email_input(&mut self, email: String) {
        if self.email_input != email {
            self.email_input = email;
            self.dirty = true;
        }
    }

    /// Clears the error region and hides prior results ahead of a new submit.
    pub(crate) fn reset_display(&mut self) {
        self.error_text.clear();
        self.results = None;
        self.dirty = true;
    }

    pub(crate) fn begin_submission(&mut self) -> SubmissionId {
        self.next_submission_id += 1;
        let id = self.next_submission_id;
        self.in_flight = Some(id);
        self.ui_state = UiState::Loading;
        self.dirty = true;
        id
    }

    /// Ends the in-flight request; the loading indicator goes away with it.
    pub(crate) fn finish_submission(&mut self) {
        self.in_flight = None;
        if self.ui_state == UiState::Loading {
            self.ui_state = UiState::Idle;
        }
        self.dirty = true;
    }

    pub(crate) fn show_results(&mut self, result: &AnalysisResult) {
        self.results = Some(ResultsView::from_result(result));
        self.error_text.clear();
        self.ui_state = UiState::ResultsShown;
        self.dirty = true;
    }

    pub(crate) fn show_error(&mut self, message: String) {
        self.results = None;
        self.error_text = message;
        self.ui_state = UiState::ErrorShown;
        self.dirty = true;
    }
}
