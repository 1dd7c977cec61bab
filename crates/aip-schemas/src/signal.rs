use serde::{Deserialize, Serialize};

use crate::checkpoint::IntegrityCheckpoint;
use crate::window::WindowSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    Continue,
    LogAndContinue,
    DenyAndEscalate,
    PauseForReview,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegritySignal {
    pub checkpoint: IntegrityCheckpoint,
    pub proceed: bool,
    pub recommended_action: RecommendedAction,
    pub window_summary: WindowSummary,
}
