use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::concern::IntegrityConcern;
use crate::conscience_context::ConscienceContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Clear,
    ReviewNeeded,
    BoundaryViolation,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Verdict::Clear => "clear",
            Verdict::ReviewNeeded => "review_needed",
            Verdict::BoundaryViolation => "boundary_violation",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WindowPosition {
    pub index: usize,
    pub window_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub analysis_model: String,
    pub analysis_duration_ms: u64,
    pub thinking_tokens_original: u64,
    pub thinking_tokens_analyzed: u64,
    pub truncated: bool,
    pub extraction_confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrityCheckpoint {
    pub checkpoint_id: String,
    pub agent_id: String,
    pub card_id: String,
    pub session_id: String,
    pub timestamp: DateTime<Utc>,
    pub thinking_block_hash: String,
    pub provider: String,
    pub model: String,
    pub verdict: Verdict,
    pub concerns: Vec<IntegrityConcern>,
    pub reasoning_summary: String,
    pub conscience_context: ConscienceContext,
    pub window_position: WindowPosition,
    pub analysis_metadata: AnalysisMetadata,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub linked_trace_id: Option<String>,
}

impl IntegrityCheckpoint {
    /// A `clear` verdict must never carry concerns.
    pub fn is_internally_consistent(&self) -> bool {
        !(self.verdict == Verdict::Clear && !self.concerns.is_empty())
    }
}
