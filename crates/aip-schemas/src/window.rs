use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowMode {
    Sliding,
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionBoundaryPolicy {
    Reset,
    Carry,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WindowConfig {
    pub max_size: usize,
    pub mode: WindowMode,
    pub session_boundary: SessionBoundaryPolicy,
    pub max_age_seconds: u64,
}

/// The smallest window size a monitor is allowed to run with.
pub const MIN_WINDOW_SIZE: usize = 3;

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            max_size: 20,
            mode: WindowMode::Sliding,
            session_boundary: SessionBoundaryPolicy::Reset,
            max_age_seconds: 3600,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct VerdictCounts {
    pub clear: usize,
    pub review_needed: usize,
    pub boundary_violation: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WindowSummary {
    pub size: usize,
    pub max_size: usize,
    pub verdicts: VerdictCounts,
    pub integrity_ratio: f64,
    pub drift_alert_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_config_matches_documented_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.max_size, 20);
        assert_eq!(config.mode, WindowMode::Sliding);
        assert_eq!(config.session_boundary, SessionBoundaryPolicy::Reset);
    }

    #[test]
    fn min_window_size_is_three() {
        assert_eq!(MIN_WINDOW_SIZE, 3);
    }
}
