use resume_core::*;

/// Heading printed for each result element.
pub fn heading(control_id: ControlId) -> &'static str {
    match control_id {
        LABEL_DOMAIN => "Domain",
        LIST_SKILLS => "Skills",
        LIST_STRENGTHS => "Strengths",
        LIST_WEAKNESSES => "Weaknesses",
        LIST_SUGGESTIONS => "Suggestions",
        LABEL_FILE_NAME => "File",
        LABEL_ERROR => "Error",
        _ => "",
    }
}

pub const RESULT_LISTS: [ControlId; 4] =
    [LIST_SKILLS, LIST_STRENGTHS, LIST_WEAKNESSES, LIST_SUGGESTIONS];

pub const LOADING_TEXT: &str = "Analyzing resume...";
