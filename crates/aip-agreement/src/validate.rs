use aip_schemas::{AlignmentCard, ConscienceValue};
use chrono::Utc;

use crate::matching::{contains_negation, contains_whole_word, normalize_name};
use crate::report::{AgreementAugmentation, AgreementConflict, AgreementReport};

/// Checks every BOUNDARY/FEAR conscience value against the card's autonomy
/// envelope for contradictions (conflicts) and reinforcements (augmentations).
pub fn validate(card: &AlignmentCard, conscience_values: &[ConscienceValue]) -> AgreementReport {
    let considered: Vec<&ConscienceValue> = conscience_values.iter().filter(|v| v.tag.is_consulted()).collect();

    let mut conflicts = Vec::new();
    let mut augmentations = Vec::new();

    for value in &considered {
        let lowered = value.content.to_lowercase();
        let negated = contains_negation(&lowered);

        for action in &card.autonomy_envelope.bounded_actions {
            let phrase = normalize_name(action);
            if contains_whole_word(&lowered, &phrase) && negated {
                conflicts.push(AgreementConflict {
                    conscience_value: value.content.clone(),
                    card_field: "autonomy_envelope.bounded_actions",
                    action_name: action.clone(),
                });
            }
        }

        for action in &card.autonomy_envelope.forbidden_actions {
            let phrase = normalize_name(action);
            if contains_whole_word(&lowered, &phrase) {
                augmentations.push(AgreementAugmentation {
                    conscience_value: value.content.clone(),
                    augments: "autonomy_envelope.forbidden_actions",
                    name: action.clone(),
                });
            }
        }

        for trigger in &card.autonomy_envelope.escalation_triggers {
            let phrase = normalize_name(&trigger.condition);
            if contains_whole_word(&lowered, &phrase) {
                augmentations.push(AgreementAugmentation {
                    conscience_value: value.content.clone(),
                    augments: "autonomy_envelope.escalation_triggers",
                    name: trigger.condition.clone(),
                });
            }
        }
    }

    AgreementReport {
        valid: conflicts.is_empty(),
        conflicts,
        augmentations,
        card_id: card.card_id.clone(),
        conscience_value_count: considered.len(),
        validated_at: Utc::now(),
    }
}
