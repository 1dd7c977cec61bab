use std::collections::VecDeque;

use aip_schemas::{
    IntegrityCheckpoint, SessionBoundaryPolicy, VerdictCounts, Verdict, WindowConfig, WindowMode,
    WindowSummary, MIN_WINDOW_SIZE,
};
use chrono::Utc;

use crate::error::WindowError;

/// A bounded, session-aware sequence of recent integrity checkpoints.
pub struct WindowManager {
    config: WindowConfig,
    checkpoints: VecDeque<IntegrityCheckpoint>,
    session_id: String,
    total_checks: u64,
}

impl WindowManager {
    pub fn new(config: WindowConfig) -> Result<Self, WindowError> {
        if config.max_size < MIN_WINDOW_SIZE {
            return Err(WindowError::ConfigInvalid { min: MIN_WINDOW_SIZE, actual: config.max_size });
        }

        Ok(WindowManager {
            config,
            checkpoints: VecDeque::new(),
            session_id: String::new(),
            total_checks: 0,
        })
    }

    /// Pushes a checkpoint onto the window, applying session-boundary
    /// reset, staleness eviction, and capacity eviction in that order.
    pub fn push(&mut self, checkpoint: IntegrityCheckpoint) {
        if checkpoint.session_id != self.session_id {
            if self.config.session_boundary == SessionBoundaryPolicy::Reset {
                self.reset();
            }
            self.session_id = checkpoint.session_id.clone();
        }

        self.evict_stale();

        if self.checkpoints.len() >= self.config.max_size {
            match self.config.mode {
                WindowMode::Sliding => {
                    self.checkpoints.pop_front();
                }
                WindowMode::Fixed => {
                    self.checkpoints.clear();
                }
            }
        }

        self.checkpoints.push_back(checkpoint);
        self.total_checks += 1;

        tracing::debug!(
            session_id = %self.session_id,
            window_size = self.checkpoints.len(),
            total_checks = self.total_checks,
            "pushed checkpoint onto window"
        );
    }

    fn evict_stale(&mut self) {
        if self.config.max_age_seconds == 0 {
            return;
        }
        let now = Utc::now();
        let max_age = chrono::Duration::seconds(self.config.max_age_seconds as i64);
        self.checkpoints.retain(|cp| now.signed_duration_since(cp.timestamp) <= max_age);
    }

    /// Clears the window and zeroes every counter, including the cumulative
    /// `total_checks` — a session boundary is a break in the whole count,
    /// not just the visible window.
    pub fn reset(&mut self) {
        self.checkpoints.clear();
        self.total_checks = 0;
    }

    pub fn get_summary(&self) -> WindowSummary {
        let size = self.checkpoints.len();
        let mut verdicts = VerdictCounts::default();
        for cp in &self.checkpoints {
            match cp.verdict {
                Verdict::Clear => verdicts.clear += 1,
                Verdict::ReviewNeeded => verdicts.review_needed += 1,
                Verdict::BoundaryViolation => verdicts.boundary_violation += 1,
            }
        }

        let integrity_ratio = if size == 0 { 1.0 } else { verdicts.clear as f64 / size as f64 };

        WindowSummary {
            size,
            max_size: self.config.max_size,
            verdicts,
            integrity_ratio,
            drift_alert_active: false,
        }
    }

    /// Average analysis duration across the checkpoints currently in the window.
    pub fn avg_analysis_ms(&self) -> f64 {
        if self.checkpoints.is_empty() {
            return 0.0;
        }
        let total: u64 = self.checkpoints.iter().map(|cp| cp.analysis_metadata.analysis_duration_ms).sum();
        total as f64 / self.checkpoints.len() as f64
    }

    /// Cumulative checks ever pushed, zeroed only by [`Self::reset`].
    pub fn total_checks(&self) -> u64 {
        self.total_checks
    }

    /// A human-readable session-context block suitable for prompt inclusion.
    pub fn get_context(&self) -> Vec<&IntegrityCheckpoint> {
        self.checkpoints.iter().collect()
    }
}
