use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    NativeThinking,
    ReasoningContent,
    ResponseAnalysis,
}

impl ExtractionMethod {
    /// The confidence fixed per extraction path.
    pub fn confidence(&self) -> f64 {
        match self {
            ExtractionMethod::NativeThinking => 1.0,
            ExtractionMethod::ReasoningContent => 0.9,
            ExtractionMethod::ResponseAnalysis => 0.3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedThinking {
    pub content: String,
    pub provider: String,
    pub model: String,
    pub extraction_method: ExtractionMethod,
    pub confidence: f64,
    pub truncated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_matches_extraction_path() {
        assert_eq!(ExtractionMethod::NativeThinking.confidence(), 1.0);
        assert_eq!(ExtractionMethod::ReasoningContent.confidence(), 0.9);
        assert_eq!(ExtractionMethod::ResponseAnalysis.confidence(), 0.3);
    }

    #[test]
    fn serde_round_trip() {
        let thinking = ExtractedThinking {
            content: "reasoning text".into(),
            provider: "anthropic".into(),
            model: "claude".into(),
            extraction_method: ExtractionMethod::NativeThinking,
            confidence: 1.0,
            truncated: false,
        };
        let json = serde_json::to_string(&thinking).unwrap();
        let back: ExtractedThinking = serde_json::from_str(&json).unwrap();
        assert_eq!(back.provider, "anthropic");
        assert_eq!(back.extraction_method, ExtractionMethod::NativeThinking);
    }
}
