use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RawConcern {
    pub category: String,
    pub severity: String,
    pub description: String,
    pub evidence: String,
    #[serde(default)]
    pub relevant_card_field: Option<String>,
    #[serde(default)]
    pub relevant_conscience_value: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawConscienceContext {
    #[serde(default)]
    pub values_checked: Vec<String>,
    #[serde(default)]
    pub conflicts: Vec<String>,
    #[serde(default)]
    pub supports: Vec<String>,
    #[serde(default)]
    pub considerations: Vec<String>,
    pub consultation_depth: String,
}

#[derive(Debug, Deserialize)]
pub struct RawAnalysisResponse {
    pub verdict: String,
    #[serde(default)]
    pub concerns: Vec<RawConcern>,
    pub reasoning_summary: String,
    pub conscience_context: RawConscienceContext,
}
