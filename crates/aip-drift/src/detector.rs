use std::collections::HashMap;

use aip_schemas::{
    AlertSeverity, DriftDirection, DriftState, IntegrityCheckpoint, IntegrityDriftAlert, Verdict,
    MIN_DRIFT_THRESHOLD,
};
use chrono::Utc;
use uuid::Uuid;

/// Steps the drift state machine with one new checkpoint, returning the
/// updated state and an alert if a sustained non-clear streak just crossed
/// `threshold` for the first time since the last clear.
pub fn step(
    state: &DriftState,
    checkpoint: &IntegrityCheckpoint,
    window_contents: &[&IntegrityCheckpoint],
    threshold: u32,
) -> (DriftState, Option<IntegrityDriftAlert>) {
    if checkpoint.verdict == Verdict::Clear {
        return (DriftState::default(), None);
    }

    let mut next = state.clone();
    next.streak_checkpoint_ids.push(checkpoint.checkpoint_id.clone());
    for concern in &checkpoint.concerns {
        next.streak_categories.push(concern.category.to_string());
    }
    next.sustained_nonclear += 1;

    if next.sustained_nonclear >= threshold && !next.alert_fired {
        let similarity = integrity_similarity(window_contents);
        let severity = derive_severity(similarity);
        let direction = derive_direction(&next.streak_categories);

        let alert = IntegrityDriftAlert {
            alert_id: format!("ida-{}", Uuid::new_v4()),
            agent_id: checkpoint.agent_id.clone(),
            session_id: checkpoint.session_id.clone(),
            checkpoint_ids: next.streak_checkpoint_ids.clone(),
            integrity_similarity: similarity,
            sustained_checks: next.sustained_nonclear,
            alert_type: "informative".to_string(),
            severity,
            drift_direction: direction,
            message: format!(
                "{} consecutive integrity concerns detected. Dominant pattern: {}. Integrity ratio: {:.0}%.",
                next.sustained_nonclear,
                direction_label(direction),
                similarity * 100.0,
            ),
            detection_timestamp: Utc::now(),
        };

        next.alert_fired = true;

        tracing::warn!(
            alert_id = %alert.alert_id,
            session_id = %alert.session_id,
            sustained_checks = alert.sustained_checks,
            "drift alert fired"
        );

        return (next, Some(alert));
    }

    (next, None)
}

/// Default threshold for how many consecutive non-clear verdicts constitute
/// a sustained drift.
pub const DEFAULT_DRIFT_THRESHOLD: u32 = MIN_DRIFT_THRESHOLD;

fn integrity_similarity(window_contents: &[&IntegrityCheckpoint]) -> f64 {
    if window_contents.is_empty() {
        return 0.0;
    }
    let clear = window_contents.iter().filter(|cp| cp.verdict == Verdict::Clear).count();
    clear as f64 / window_contents.len() as f64
}

fn derive_severity(similarity: f64) -> AlertSeverity {
    if similarity >= 0.7 {
        AlertSeverity::Low
    } else if similarity >= 0.4 {
        AlertSeverity::Medium
    } else {
        AlertSeverity::High
    }
}

fn derive_direction(categories: &[String]) -> DriftDirection {
    if categories.is_empty() {
        return DriftDirection::Unknown;
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for category in categories {
        *counts.entry(category.as_str()).or_insert(0) += 1;
    }

    let total = categories.len();
    let dominant = counts.iter().max_by_key(|(_, count)| **count);

    match dominant {
        Some((category, count)) if *count * 2 > total => match *category {
            "prompt_injection" => DriftDirection::InjectionPattern,
            "value_misalignment" => DriftDirection::ValueErosion,
            "autonomy_violation" => DriftDirection::AutonomyCreep,
            "deceptive_reasoning" => DriftDirection::DeceptionPattern,
            _ => DriftDirection::Unknown,
        },
        _ => DriftDirection::Unknown,
    }
}

fn direction_label(direction: DriftDirection) -> &'static str {
    match direction {
        DriftDirection::InjectionPattern => "injection_pattern",
        DriftDirection::ValueErosion => "value_erosion",
        DriftDirection::AutonomyCreep => "autonomy_creep",
        DriftDirection::DeceptionPattern => "deception_pattern",
        DriftDirection::Unknown => "unknown",
    }
}
