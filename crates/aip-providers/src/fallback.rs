use aip_schemas::{ExtractedThinking, ExtractionMethod};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

use crate::adapter::ProviderAdapter;

/// English-only sentence-initial phrases that mark a sentence as reasoning
/// when no structured extraction path succeeded. Non-English traces will
/// silently fail to match and the fallback returns `None`.
const REASONING_INDICATORS: &[&str] = &[
    "let me think",
    "i should",
    "i need to",
    "first,? i",
    "considering",
    "to decide this",
    "weighing",
    "on reflection",
    "before i",
];

fn indicator_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let alternation = REASONING_INDICATORS.join("|");
        Regex::new(&format!(r"(?i)(^|[.!?]\s+)({alternation})[^.!?]*[.!?]")).expect("valid regex")
    })
}

/// Applied only when no structured extraction succeeded. Scans the model's
/// visible output text for sentences beginning with a reasoning indicator.
pub struct HeuristicFallbackAdapter;

impl HeuristicFallbackAdapter {
    fn visible_text(body: &str) -> Option<String> {
        let parsed: Value = serde_json::from_str(body).ok()?;

        if let Some(content) = parsed.get("content").and_then(Value::as_array) {
            let text: String = content
                .iter()
                .filter_map(|b| b.get("text").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join(" ");
            if !text.is_empty() {
                return Some(text);
            }
        }

        if let Some(text) = parsed
            .get("choices")
            .and_then(Value::as_array)
            .and_then(|c| c.first())
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(Value::as_str)
        {
            return Some(text.to_string());
        }

        if let Some(text) = parsed
            .get("candidates")
            .and_then(Value::as_array)
            .and_then(|c| c.first())
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(Value::as_array)
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|p| p.get("text").and_then(Value::as_str))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
        {
            if !text.is_empty() {
                return Some(text);
            }
        }

        None
    }

    fn extract_from_text(&self, text: &str) -> Option<String> {
        let matches: Vec<&str> = indicator_pattern()
            .find_iter(text)
            .map(|m| m.as_str().trim_start_matches(|c: char| ".!? ".contains(c)))
            .collect();

        if matches.is_empty() {
            return None;
        }

        Some(matches.join(" "))
    }
}

impl ProviderAdapter for HeuristicFallbackAdapter {
    fn provider(&self) -> &'static str {
        "fallback"
    }

    fn extract_from_body(&self, body: &str, model: &str) -> Option<ExtractedThinking> {
        let text = Self::visible_text(body)?;
        let reasoning = self.extract_from_text(&text)?;

        Some(ExtractedThinking {
            content: reasoning,
            provider: "fallback".to_string(),
            model: model.to_string(),
            extraction_method: ExtractionMethod::ResponseAnalysis,
            confidence: ExtractionMethod::ResponseAnalysis.confidence(),
            truncated: false,
        })
    }

    fn extract_from_stream(&self, body: &str, model: &str) -> Option<ExtractedThinking> {
        // Heuristic matching needs the assembled text; reuse the non-streaming
        // path's document shapes against whatever JSON events are present.
        let assembled: String = crate::stream::parse_events(body)
            .iter()
            .filter_map(|event| serde_json::to_string(event).ok())
            .collect::<Vec<_>>()
            .join("\n");
        self.extract_from_body(&assembled, model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_sentence_initial_indicator() {
        let adapter = HeuristicFallbackAdapter;
        let body = r#"{"content":[{"type":"text","text":"I should check the constraints first. Here is the answer."}]}"#;
        let extracted = adapter.extract_from_body(body, "some-model").unwrap();
        assert!(extracted.content.to_lowercase().contains("i should"));
        assert_eq!(extracted.confidence, 0.3);
    }

    #[test]
    fn returns_none_without_any_indicator() {
        let adapter = HeuristicFallbackAdapter;
        let body = r#"{"content":[{"type":"text","text":"The answer is forty-two."}]}"#;
        assert!(adapter.extract_from_body(body, "some-model").is_none());
    }

    #[test]
    fn returns_none_on_malformed_json() {
        let adapter = HeuristicFallbackAdapter;
        assert!(adapter.extract_from_body("not json", "some-model").is_none());
    }
}
