//! Compresses an [`AlignmentCard`] into a bounded plaintext summary suitable
//! for inclusion in an analysis prompt. Principal identity, audit
//! commitments, and extension fields are deliberately excluded — only the
//! fields the analysis model needs to judge alignment are surfaced.

use aip_schemas::AlignmentCard;

/// Builds the fixed-section-order plaintext summary of a card.
pub fn summarize_card(card: &AlignmentCard) -> String {
    let mut sections = Vec::new();

    sections.push(format!("ALIGNMENT CARD SUMMARY (card_id: {})", card.card_id));

    if let Some(description) = &card.agent_description {
        sections.push(format!("Agent: {description}"));
    }

    sections.push(values_section(card));
    sections.push(bounded_actions_section(card));
    sections.push(forbidden_actions_section(card));
    sections.push(escalation_triggers_section(card));

    sections.join("\n")
}

fn values_section(card: &AlignmentCard) -> String {
    let values = card.values_in_priority_order();
    if values.iter().any(|v| v.description.is_some()) {
        let lines: Vec<String> = values
            .iter()
            .map(|v| match &v.description {
                Some(description) => format!("  - {}: {}", v.name, description),
                None => format!("  - {}", v.name),
            })
            .collect();
        format!("Values (priority order):\n{}", lines.join("\n"))
    } else {
        let names: Vec<&str> = values.iter().map(|v| v.name.as_str()).collect();
        format!("Values (priority order): {}", names.join(", "))
    }
}

fn bounded_actions_section(card: &AlignmentCard) -> String {
    if card.autonomy_envelope.bounded_actions.is_empty() {
        "Bounded actions: none declared".to_string()
    } else {
        format!("Bounded actions: {}", card.autonomy_envelope.bounded_actions.join(", "))
    }
}

fn forbidden_actions_section(card: &AlignmentCard) -> String {
    if card.autonomy_envelope.forbidden_actions.is_empty() {
        "Forbidden actions: none declared".to_string()
    } else {
        format!("Forbidden actions: {}", card.autonomy_envelope.forbidden_actions.join(", "))
    }
}

fn escalation_triggers_section(card: &AlignmentCard) -> String {
    let triggers = &card.autonomy_envelope.escalation_triggers;
    if triggers.is_empty() {
        return "Escalation triggers: none declared".to_string();
    }

    let lines: Vec<String> = triggers
        .iter()
        .map(|trigger| match &trigger.reason {
            Some(reason) => format!("  - {} → {}: {}", trigger.condition, trigger.action, reason),
            None => format!("  - {} → {}", trigger.condition, trigger.action),
        })
        .collect();

    format!("Escalation triggers:\n{}", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aip_schemas::{AutonomyEnvelope, EscalationTrigger, Value};

    fn minimal_card() -> AlignmentCard {
        AlignmentCard {
            card_id: "card-1".into(),
            values: vec![Value { name: "honesty".into(), priority: 0, description: None }],
            autonomy_envelope: AutonomyEnvelope::default(),
            agent_description: None,
        }
    }

    #[test]
    fn summary_starts_with_card_id_header() {
        let summary = summarize_card(&minimal_card());
        assert!(summary.starts_with("ALIGNMENT CARD SUMMARY (card_id: card-1)"));
    }

    #[test]
    fn omits_agent_line_when_description_absent() {
        let summary = summarize_card(&minimal_card());
        assert!(!summary.contains("Agent:"));
    }

    #[test]
    fn includes_agent_line_when_description_present() {
        let mut card = minimal_card();
        card.agent_description = Some("a support triage agent".into());
        let summary = summarize_card(&card);
        assert!(summary.contains("Agent: a support triage agent"));
    }

    #[test]
    fn compact_values_list_when_no_descriptions() {
        let summary = summarize_card(&minimal_card());
        assert!(summary.contains("Values (priority order): honesty"));
    }

    #[test]
    fn expanded_values_list_when_any_description_present() {
        let mut card = minimal_card();
        card.values.push(Value { name: "caution".into(), priority: 1, description: Some("avoid irreversible actions".into()) });
        let summary = summarize_card(&card);
        assert!(summary.contains("  - caution: avoid irreversible actions"));
        assert!(summary.contains("  - honesty"));
    }

    #[test]
    fn bounded_and_forbidden_default_to_none_declared() {
        let summary = summarize_card(&minimal_card());
        assert!(summary.contains("Bounded actions: none declared"));
        assert!(summary.contains("Forbidden actions: none declared"));
        assert!(summary.contains("Escalation triggers: none declared"));
    }

    #[test]
    fn escalation_trigger_without_reason_omits_colon_suffix() {
        let mut card = minimal_card();
        card.autonomy_envelope.escalation_triggers.push(EscalationTrigger {
            condition: "large_transfer".into(),
            action: "require_approval".into(),
            reason: None,
        });
        let summary = summarize_card(&card);
        assert!(summary.contains("  - large_transfer → require_approval"));
        assert!(!summary.contains("require_approval:"));
    }

    #[test]
    fn excludes_principal_identity_fields() {
        // The summary never carries a principal/session identifier, only card_id.
        let summary = summarize_card(&minimal_card());
        assert!(!summary.to_lowercase().contains("session_id"));
        assert!(!summary.to_lowercase().contains("principal"));
    }
}
