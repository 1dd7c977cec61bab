use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Value {
    pub name: String,
    /// Lower ranks first.
    pub priority: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscalationTrigger {
    pub condition: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutonomyEnvelope {
    #[serde(default)]
    pub bounded_actions: Vec<String>,
    #[serde(default)]
    pub forbidden_actions: Vec<String>,
    #[serde(default)]
    pub escalation_triggers: Vec<EscalationTrigger>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignmentCard {
    pub card_id: String,
    pub values: Vec<Value>,
    pub autonomy_envelope: AutonomyEnvelope,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub agent_description: Option<String>,
}

impl AlignmentCard {
    /// Returns `values` sorted by ascending priority.
    pub fn values_in_priority_order(&self) -> Vec<&Value> {
        let mut values: Vec<&Value> = self.values.iter().collect();
        values.sort_by_key(|v| v.priority);
        values
    }
}
