use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default streak length, in consecutive non-clear checkpoints, at which a
/// drift alert fires. Cannot be configured below this floor.
pub const MIN_DRIFT_THRESHOLD: u32 = 3;

#[derive(Debug, Clone, Default)]
pub struct DriftState {
    pub sustained_nonclear: u32,
    pub alert_fired: bool,
    pub streak_checkpoint_ids: Vec<String>,
    pub streak_categories: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftDirection {
    InjectionPattern,
    ValueErosion,
    AutonomyCreep,
    DeceptionPattern,
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrityDriftAlert {
    pub alert_id: String,
    pub agent_id: String,
    pub session_id: String,
    pub checkpoint_ids: Vec<String>,
    pub integrity_similarity: f64,
    pub sustained_checks: u32,
    pub alert_type: String,
    pub severity: AlertSeverity,
    pub drift_direction: DriftDirection,
    pub message: String,
    pub detection_timestamp: DateTime<Utc>,
}
