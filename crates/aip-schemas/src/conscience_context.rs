use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationDepth {
    Surface,
    Standard,
    Deep,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConscienceContext {
    #[serde(default)]
    pub values_checked: Vec<String>,
    #[serde(default)]
    pub conflicts: Vec<String>,
    #[serde(default)]
    pub supports: Vec<String>,
    #[serde(default)]
    pub considerations: Vec<String>,
    pub consultation_depth: ConsultationDepth,
}

impl Default for ConsultationDepth {
    fn default() -> Self {
        ConsultationDepth::Standard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_consultation_depth_is_standard() {
        assert_eq!(ConsultationDepth::default(), ConsultationDepth::Standard);
    }

    #[test]
    fn serde_round_trip() {
        let ctx = ConscienceContext {
            values_checked: vec!["no_deception".into()],
            conflicts: vec![],
            supports: vec!["no_forbidden_actions".into()],
            considerations: vec!["scope of requested action".into()],
            consultation_depth: ConsultationDepth::Deep,
        };
        let json = serde_json::to_string(&ctx).unwrap();
        let back: ConscienceContext = serde_json::from_str(&json).unwrap();
        assert_eq!(back.consultation_depth, ConsultationDepth::Deep);
        assert_eq!(back.values_checked, vec!["no_deception"]);
    }
}
