use aip_schemas::{ExtractedThinking, ExtractionMethod};
use serde_json::Value;

use crate::adapter::ProviderAdapter;
use crate::stream::{parse_events, reconstruct_blocks_by_index};

const BLOCK_SEPARATOR: &str = "\n\n---\n\n";

/// Providers that emit a typed content array where reasoning entries carry
/// `type: "thinking"` alongside a `thinking` text field (Anthropic's shape).
pub struct NativeThinkingAdapter {
    provider: &'static str,
}

impl NativeThinkingAdapter {
    pub fn new(provider: &'static str) -> Self {
        NativeThinkingAdapter { provider }
    }
}

impl ProviderAdapter for NativeThinkingAdapter {
    fn provider(&self) -> &'static str {
        self.provider
    }

    fn extract_from_body(&self, body: &str, model: &str) -> Option<ExtractedThinking> {
        let parsed: Value = serde_json::from_str(body).ok()?;
        let content = parsed.get("content")?.as_array()?;

        let blocks: Vec<&str> = content
            .iter()
            .filter(|block| block.get("type").and_then(Value::as_str) == Some("thinking"))
            .filter_map(|block| block.get("thinking").and_then(Value::as_str))
            .collect();

        if blocks.is_empty() {
            return None;
        }

        Some(ExtractedThinking {
            content: blocks.join(BLOCK_SEPARATOR),
            provider: self.provider.to_string(),
            model: model.to_string(),
            extraction_method: ExtractionMethod::NativeThinking,
            confidence: ExtractionMethod::NativeThinking.confidence(),
            truncated: false,
        })
    }

    fn extract_from_stream(&self, body: &str, model: &str) -> Option<ExtractedThinking> {
        let events = parse_events(body);
        let blocks = reconstruct_blocks_by_index(&events, "type", "thinking");

        let texts: Vec<String> = blocks
            .into_values()
            .filter(|(kind, _)| kind == "thinking")
            .map(|(_, text)| text)
            .filter(|text| !text.is_empty())
            .collect();

        if texts.is_empty() {
            return None;
        }

        Some(ExtractedThinking {
            content: texts.join(BLOCK_SEPARATOR),
            provider: self.provider.to_string(),
            model: model.to_string(),
            extraction_method: ExtractionMethod::NativeThinking,
            confidence: ExtractionMethod::NativeThinking.confidence(),
            truncated: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_single_thinking_block() {
        let adapter = NativeThinkingAdapter::new("anthropic");
        let body = r#"{"content":[{"type":"thinking","thinking":"first I should check the scope"},{"type":"text","text":"done"}]}"#;
        let extracted = adapter.extract_from_body(body, "claude-3").unwrap();
        assert_eq!(extracted.content, "first I should check the scope");
        assert_eq!(extracted.confidence, 1.0);
    }

    #[test]
    fn joins_multiple_thinking_blocks() {
        let adapter = NativeThinkingAdapter::new("anthropic");
        let body = r#"{"content":[{"type":"thinking","thinking":"a"},{"type":"thinking","thinking":"b"}]}"#;
        let extracted = adapter.extract_from_body(body, "claude-3").unwrap();
        assert_eq!(extracted.content, "a\n\n---\n\nb");
    }

    #[test]
    fn returns_none_when_no_thinking_blocks() {
        let adapter = NativeThinkingAdapter::new("anthropic");
        let body = r#"{"content":[{"type":"text","text":"just an answer"}]}"#;
        assert!(adapter.extract_from_body(body, "claude-3").is_none());
    }

    #[test]
    fn returns_none_on_malformed_json() {
        let adapter = NativeThinkingAdapter::new("anthropic");
        assert!(adapter.extract_from_body("not json", "claude-3").is_none());
    }

    #[test]
    fn stream_reconstructs_thinking_block() {
        let adapter = NativeThinkingAdapter::new("anthropic");
        let body = concat!(
            "data: {\"type\":\"content_block_start\",\"index\":0,\"content_block\":{\"type\":\"thinking\"}}\n",
            "data: {\"type\":\"content_block_delta\",\"index\":0,\"delta\":{\"thinking\":\"reasoning\"}}\n",
        );
        let extracted = adapter.extract_from_stream(body, "claude-3").unwrap();
        assert_eq!(extracted.content, "reasoning");
    }
}
