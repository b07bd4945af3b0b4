//! Headless display surface: keeps the state of every control and prints it.

use std::collections::HashMap;
use std::fmt::Write as _;

use resume_core::{
    ControlId, DisplayCommand, INDICATOR_LOADING, LABEL_DOMAIN, LABEL_ERROR, LABEL_FILE_NAME,
    PANEL_RESULTS,
};

use super::constants::{heading, LOADING_TEXT, RESULT_LISTS};

#[derive(Debug, Default)]
pub struct TerminalDisplay {
    texts: HashMap<ControlId, String>,
    visible: HashMap<ControlId, bool>,
    lists: HashMap<ControlId, Vec<String>>,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies commands and returns lines worth echoing right away.
    pub fn apply(&mut self, commands: Vec<DisplayCommand>) -> Vec<String> {
        let mut echoed = Vec::new();
        for command in commands {
            match command {
                DisplayCommand::SetText { control_id, text } => {
                    self.texts.insert(control_id, text);
                }
                DisplayCommand::SetVisible {
                    control_id,
                    visible,
                } => {
                    let was_visible = self.is_visible(control_id);
                    self.visible.insert(control_id, visible);
                    if control_id == INDICATOR_LOADING && visible && !was_visible {
                        echoed.push(LOADING_TEXT.to_string());
                    }
                }
                // The terminal submits once per run; there is no button to grey out.
                DisplayCommand::SetEnabled { .. } => {}
                DisplayCommand::ReplaceList { control_id, items } => {
                    self.lists.insert(control_id, items);
                }
            }
        }
        echoed
    }

    pub fn is_visible(&self, control_id: ControlId) -> bool {
        self.visible.get(&control_id).copied().unwrap_or(false)
    }

    pub fn text(&self, control_id: ControlId) -> &str {
        self.texts.get(&control_id).map(String::as_str).unwrap_or("")
    }

    pub fn list(&self, control_id: ControlId) -> &[String] {
        self.lists.get(&control_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Everything currently visible, as the page would show it.
    pub fn snapshot(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}: {}", heading(LABEL_FILE_NAME), self.text(LABEL_FILE_NAME));

        let error = self.text(LABEL_ERROR);
        if !error.is_empty() {
            let _ = writeln!(out, "{}: {}", heading(LABEL_ERROR), error);
        }
        if self.is_visible(INDICATOR_LOADING) {
            let _ = writeln!(out, "{LOADING_TEXT}");
        }
        if self.is_visible(PANEL_RESULTS) {
            let _ = writeln!(out, "{}: {}", heading(LABEL_DOMAIN), self.text(LABEL_DOMAIN));
            for control_id in RESULT_LISTS {
                let _ = writeln!(out, "{}:", heading(control_id));
                for item in self.list(control_id) {
                    let _ = writeln!(out, "  - {item}");
                }
            }
        }
        out
    }
}
