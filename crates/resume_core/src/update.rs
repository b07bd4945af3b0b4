use analyzer_logging::{analyzer_debug, analyzer_info, analyzer_warn};

use crate::{validate, AppState, Effect, Msg, SubmissionRequest, UiState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FileChosen(file) => {
            state.set_selected_file(file);
            Vec::new()
        }
        Msg::EmailChanged(email) => {
            state.set_email_input(email);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // The submit control is disabled while a request is in flight.
            if state.ui_state() == UiState::Loading {
                analyzer_debug!("Submit ignored: request {:?} in flight", state.in_flight());
                return (state, Vec::new());
            }

            state.reset_display();
            let request = match validate(state.selected_file()) {
                Ok(file) => SubmissionRequest::new(file.clone(), state.email_input()),
                Err(err) => {
                    analyzer_info!("Submit rejected locally: {}", err);
                    state.show_error(err.to_string());
                    return (state, Vec::new());
                }
            };

            let submission_id = state.begin_submission();
            analyzer_debug!(
                "Submission {} started: file={:?} email={}",
                submission_id,
                request.file,
                request.email.is_some()
            );
            vec![Effect::SubmitAnalysis {
                submission_id,
                request,
            }]
        }
        Msg::AnalysisCompleted {
            submission_id,
            result,
        } => {
            if state.in_flight() != Some(submission_id) {
                analyzer_debug!("Dropping stale completion for submission {}", submission_id);
                return (state, Vec::new());
            }

            state.finish_submission();
            match result {
                Ok(analysis) => {
                    analyzer_debug!("Submission {} succeeded", submission_id);
                    state.show_results(&analysis);
                }
                Err(err) if err.is_validation() => {
                    // Validation happens before any request; reaching here is a wiring bug.
                    analyzer_warn!("Submission {} failed validation late: {}", submission_id, err);
                    state.show_error(err.to_string());
                }
                Err(err) => {
                    analyzer_info!("Submission {} failed: {}", submission_id, err);
                    state.show_error(err.to_string());
                }
            }
            Vec::new()
        }
    };

    (state, effects)
}
