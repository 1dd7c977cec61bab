use aip_schemas::{ExtractedThinking, ExtractionMethod};
use serde_json::Value;

use crate::adapter::ProviderAdapter;
use crate::stream::parse_events;

const BLOCK_SEPARATOR: &str = "\n\n---\n\n";

/// Providers that emit a list of content parts, each carrying a boolean
/// flag marking it as internal reasoning (Gemini's `thought: true` parts).
pub struct PartsWithFlagAdapter {
    provider: &'static str,
}

impl PartsWithFlagAdapter {
    pub fn new(provider: &'static str) -> Self {
        PartsWithFlagAdapter { provider }
    }

    fn reasoning_parts(parts: &[Value]) -> Vec<&str> {
        parts
            .iter()
            .filter(|part| part.get("thought").and_then(Value::as_bool).unwrap_or(false))
            .filter_map(|part| part.get("text").and_then(Value::as_str))
            .collect()
    }

    fn candidate_parts(value: &Value) -> Option<&Vec<Value>> {
        value
            .get("candidates")?
            .as_array()?
            .first()?
            .get("content")?
            .get("parts")?
            .as_array()
    }
}

impl ProviderAdapter for PartsWithFlagAdapter {
    fn provider(&self) -> &'static str {
        self.provider
    }

    fn extract_from_body(&self, body: &str, model: &str) -> Option<ExtractedThinking> {
        let parsed: Value = serde_json::from_str(body).ok()?;
        let parts = Self::candidate_parts(&parsed)?;
        let reasoning = Self::reasoning_parts(parts);

        if reasoning.is_empty() {
            return None;
        }

        Some(ExtractedThinking {
            content: reasoning.join(BLOCK_SEPARATOR),
            provider: self.provider.to_string(),
            model: model.to_string(),
            extraction_method: ExtractionMethod::ReasoningContent,
            confidence: ExtractionMethod::ReasoningContent.confidence(),
            truncated: false,
        })
    }

    fn extract_from_stream(&self, body: &str, model: &str) -> Option<ExtractedThinking> {
        let events = parse_events(body);
        let mut reasoning = Vec::new();
        for event in &events {
            if let Some(parts) = Self::candidate_parts(event) {
                reasoning.extend(Self::reasoning_parts(parts).into_iter().map(str::to_string));
            }
        }

        if reasoning.is_empty() {
            return None;
        }

        Some(ExtractedThinking {
            content: reasoning.join(BLOCK_SEPARATOR),
            provider: self.provider.to_string(),
            model: model.to_string(),
            extraction_method: ExtractionMethod::ReasoningContent,
            confidence: ExtractionMethod::ReasoningContent.confidence(),
            truncated: false,
        })
    }
}
