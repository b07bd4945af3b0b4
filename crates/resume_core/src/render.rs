use crate::controls::*;
use crate::{AnalysisResult, AppViewModel};

pub const NO_DOMAIN_PLACEHOLDER: &str = "-";
pub const NO_SKILLS_PLACEHOLDER: &str = "No skills detected.";
pub const NO_ITEMS_PLACEHOLDER: &str = "No items detected.";

/// Display-ready form of an [`AnalysisResult`]: placeholders already applied,
/// so every list holds at least one entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultsView {
    pub domain: String,
    pub skills: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
}

impl ResultsView {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let domain = result
            .domain
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(NO_DOMAIN_PLACEHOLDER)
            .to_string();

        Self {
            domain,
            skills: list_or_placeholder(result.skills.as_deref(), NO_SKILLS_PLACEHOLDER),
            strengths: list_or_placeholder(result.strengths.as_deref(), NO_ITEMS_PLACEHOLDER),
            weaknesses: list_or_placeholder(result.weaknesses.as_deref(), NO_ITEMS_PLACEHOLDER),
            suggestions: list_or_placeholder(result.suggestions.as_deref(), NO_ITEMS_PLACEHOLDER),
        }
    }
}

fn list_or_placeholder(items: Option<&[String]>, placeholder: &str) -> Vec<String> {
    match items {
        Some(items) if !items.is_empty() => items.to_vec(),
        _ => vec![placeholder.to_string()],
    }
}

/// One mutation of a display element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCommand {
    SetText { control_id: ControlId, text: String },
    SetVisible { control_id: ControlId, visible: bool },
    SetEnabled { control_id: ControlId, enabled: bool },
    /// Replaces every item of a list element.
    ReplaceList { control_id: ControlId, items: Vec<String> },
}

/// Translates the view model into the commands that bring every display
/// element in line with it.
///
/// Result lists are only touched when a result is present; a hidden panel
/// keeps whatever it last showed until the next result replaces it.
#[allow(clippy::vec_init_then_push)]
pub fn render(view: &AppViewModel) -> Vec<DisplayCommand> {
    let mut cmds = Vec::new();

    cmds.push(DisplayCommand::SetText {
        control_id: LABEL_FILE_NAME,
        text: view.file_label.clone(),
    });
    cmds.push(DisplayCommand::SetText {
        control_id: LABEL_ERROR,
        text: view.error_text.clone(),
    });
    cmds.push(DisplayCommand::SetVisible {
        control_id: INDICATOR_LOADING,
        visible: view.loading_visible,
    });
    cmds.push(DisplayCommand::SetEnabled {
        control_id: BUTTON_SUBMIT,
        enabled: view.submit_enabled,
    });

    if let Some(results) = &view.results {
        cmds.push(DisplayCommand::SetText {
            control_id: LABEL_DOMAIN,
            text: results.domain.clone(),
        });
        for (control_id, items) in [
            (LIST_SKILLS, &results.skills),
            (LIST_STRENGTHS, &results.strengths),
            (LIST_WEAKNESSES, &results.weaknesses),
            (LIST_SUGGESTIONS, &results.suggestions),
        ] {
            cmds.push(DisplayCommand::ReplaceList {
                control_id,
                items: items.clone(),
            });
        }
    }

    // Reveal the panel only after its contents are in place.
    cmds.push(DisplayCommand::SetVisible {
        control_id: PANEL_RESULTS,
        visible: view.results_visible,
    });

    cmds
}
