//! Identifiers of the display elements the controller drives.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(u32);

impl ControlId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

pub const LABEL_FILE_NAME: ControlId = ControlId::new(1001);
pub const BUTTON_SUBMIT: ControlId = ControlId::new(1002);
pub const INDICATOR_LOADING: ControlId = ControlId::new(1501);
pub const LABEL_ERROR: ControlId = ControlId::new(2001);
pub const PANEL_RESULTS: ControlId = ControlId::new(3001);
pub const LABEL_DOMAIN: ControlId = ControlId::new(3002);
pub const LIST_SKILLS: ControlId = ControlId::new(3101);
pub const LIST_STRENGTHS: ControlId = ControlId::new(3102);
pub const LIST_WEAKNESSES: ControlId = ControlId::new(3103);
pub const LIST_SUGGESTIONS: ControlId = ControlId::new(3104);
