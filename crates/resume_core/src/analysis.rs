use serde::{Deserialize, Serialize};

/// Structured response of the analysis service.
///
/// Every field is optional on the wire; a missing or empty list is a normal
/// outcome and renders as a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    pub domain: Option<String>,
    pub skills: Option<Vec<String>>,
    pub strengths: Option<Vec<String>>,
    pub weaknesses: Option<Vec<String>>,
    pub suggestions: Option<Vec<String>>,
}
