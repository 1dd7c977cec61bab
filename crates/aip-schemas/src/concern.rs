use serde::{Deserialize, Serialize};

/// Upper bound on the length, in characters, of any concern's `evidence`
/// field. Evidence longer than this is truncated at ingestion, never rejected.
pub const MAX_EVIDENCE_LENGTH: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcernCategory {
    PromptInjection,
    ValueMisalignment,
    AutonomyViolation,
    ReasoningCorruption,
    DeceptiveReasoning,
    UndeclaredIntent,
}

impl std::fmt::Display for ConcernCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ConcernCategory::PromptInjection => "prompt_injection",
            ConcernCategory::ValueMisalignment => "value_misalignment",
            ConcernCategory::AutonomyViolation => "autonomy_violation",
            ConcernCategory::ReasoningCorruption => "reasoning_corruption",
            ConcernCategory::DeceptiveReasoning => "deceptive_reasoning",
            ConcernCategory::UndeclaredIntent => "undeclared_intent",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrityConcern {
    pub category: ConcernCategory,
    pub severity: Severity,
    pub description: String,
    pub evidence: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub relevant_card_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub relevant_conscience_value: Option<String>,
}

impl IntegrityConcern {
    /// Truncates `evidence` to [`MAX_EVIDENCE_LENGTH`] characters, leaving
    /// shorter evidence untouched.
    pub fn truncate_evidence(&mut self) {
        if self.evidence.chars().count() > MAX_EVIDENCE_LENGTH {
            self.evidence = self.evidence.chars().take(MAX_EVIDENCE_LENGTH).collect();
        }
    }
}
