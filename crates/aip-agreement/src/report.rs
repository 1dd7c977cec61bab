use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct AgreementConflict {
    pub conscience_value: String,
    pub card_field: &'static str,
    pub action_name: String,
}

#[derive(Debug, Clone)]
pub struct AgreementAugmentation {
    pub conscience_value: String,
    pub augments: &'static str,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct AgreementReport {
    pub valid: bool,
    pub conflicts: Vec<AgreementConflict>,
    pub augmentations: Vec<AgreementAugmentation>,
    pub card_id: String,
    pub conscience_value_count: usize,
    pub validated_at: DateTime<Utc>,
}
