//! Streak-based state machine that watches for sustained non-clear
//! verdicts within a session and emits at most one drift alert per streak.

mod detector;

pub use detector::{step, DEFAULT_DRIFT_THRESHOLD};
