use aip_schemas::{ExtractedThinking, ExtractionMethod};
use serde_json::Value;

use crate::adapter::ProviderAdapter;
use crate::stream::parse_events;

/// Providers that emit a dedicated `reasoning_content` string parallel to
/// the visible completion text (DeepSeek-style reasoner responses).
pub struct ExplicitReasoningAdapter {
    provider: &'static str,
}

impl ExplicitReasoningAdapter {
    pub fn new(provider: &'static str) -> Self {
        ExplicitReasoningAdapter { provider }
    }

    fn message_reasoning(value: &Value) -> Option<&str> {
        value
            .get("choices")?
            .as_array()?
            .first()?
            .get("message")?
            .get("reasoning_content")?
            .as_str()
    }

    fn delta_reasoning(value: &Value) -> Option<&str> {
        value
            .get("choices")?
            .as_array()?
            .first()?
            .get("delta")?
            .get("reasoning_content")?
            .as_str()
    }
}

impl ProviderAdapter for ExplicitReasoningAdapter {
    fn provider(&self) -> &'static str {
        self.provider
    }

    fn extract_from_body(&self, body: &str, model: &str) -> Option<ExtractedThinking> {
        let parsed: Value = serde_json::from_str(body).ok()?;
        let reasoning = Self::message_reasoning(&parsed)?;
        if reasoning.is_empty() {
            return None;
        }

        Some(ExtractedThinking {
            content: reasoning.to_string(),
            provider: self.provider.to_string(),
            model: model.to_string(),
            extraction_method: ExtractionMethod::ReasoningContent,
            confidence: ExtractionMethod::ReasoningContent.confidence(),
            truncated: false,
        })
    }

    fn extract_from_stream(&self, body: &str, model: &str) -> Option<ExtractedThinking> {
        let events = parse_events(body);
        let mut reasoning = String::new();
        for event in &events {
            if let Some(chunk) = Self::delta_reasoning(event) {
                reasoning.push_str(chunk);
            }
        }

        if reasoning.is_empty() {
            return None;
        }

        Some(ExtractedThinking {
            content: reasoning,
            provider: self.provider.to_string(),
            model: model.to_string(),
            extraction_method: ExtractionMethod::ReasoningContent,
            confidence: ExtractionMethod::ReasoningContent.confidence(),
            truncated: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_reasoning_content_from_message() {
        let adapter = ExplicitReasoningAdapter::new("deepseek");
        let body = r#"{"choices":[{"message":{"reasoning_content":"weighing both options","content":"answer"}}]}"#;
        let extracted = adapter.extract_from_body(body, "deepseek-reasoner").unwrap();
        assert_eq!(extracted.content, "weighing both options");
        assert_eq!(extracted.confidence, 0.9);
    }

    #[test]
    fn returns_none_when_reasoning_content_absent() {
        let adapter = ExplicitReasoningAdapter::new("deepseek");
        let body = r#"{"choices":[{"message":{"content":"answer only"}}]}"#;
        assert!(adapter.extract_from_body(body, "deepseek-reasoner").is_none());
    }

    #[test]
    fn stream_accumulates_reasoning_deltas() {
        let adapter = ExplicitReasoningAdapter::new("deepseek");
        let body = concat!(
            "data: {\"choices\":[{\"delta\":{\"reasoning_content\":\"step one \"}}]}\n",
            "data: {\"choices\":[{\"delta\":{\"reasoning_content\":\"step two\"}}]}\n",
        );
        let extracted = adapter.extract_from_stream(body, "deepseek-reasoner").unwrap();
        assert_eq!(extracted.content, "step one step two");
    }
}
