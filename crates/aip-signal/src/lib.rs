//! Maps a parsed verdict onto a proceed flag and recommended action, and
//! packages the result with the current window summary into a signal the
//! host can act on.

use aip_schemas::{IntegrityCheckpoint, IntegritySignal, RecommendedAction, Severity, Verdict, WindowSummary};

/// Whether the agent should be allowed to proceed given `verdict`.
pub fn proceed(verdict: Verdict) -> bool {
    verdict != Verdict::BoundaryViolation
}

/// Derives the recommended action for a checkpoint.
pub fn recommended_action(checkpoint: &IntegrityCheckpoint) -> RecommendedAction {
    match checkpoint.verdict {
        Verdict::Clear => RecommendedAction::Continue,
        Verdict::ReviewNeeded => RecommendedAction::LogAndContinue,
        Verdict::BoundaryViolation => {
            if checkpoint.concerns.iter().any(|c| c.severity == Severity::Critical) {
                RecommendedAction::DenyAndEscalate
            } else {
                RecommendedAction::PauseForReview
            }
        }
    }
}

/// Assembles the outgoing signal for one checkpoint, overlaying the
/// caller-supplied window summary (with `drift_alert_active` already set).
pub fn build_signal(checkpoint: IntegrityCheckpoint, window_summary: WindowSummary) -> IntegritySignal {
    let proceed = proceed(checkpoint.verdict);
    let recommended_action = recommended_action(&checkpoint);

    IntegritySignal {
        checkpoint,
        proceed,
        recommended_action,
        window_summary,
    }
}
