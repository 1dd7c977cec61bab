use std::collections::HashMap;

use aip_schemas::ExtractedThinking;

use crate::adapter::ProviderAdapter;
use crate::explicit_reasoning::ExplicitReasoningAdapter;
use crate::fallback::HeuristicFallbackAdapter;
use crate::native_thinking::NativeThinkingAdapter;
use crate::parts_with_flag::PartsWithFlagAdapter;

/// Holds every registered provider adapter, keyed by provider name, with a
/// heuristic fallback always available as the universal default.
pub struct ProviderRegistry {
    adapters: HashMap<&'static str, Box<dyn ProviderAdapter + Send + Sync>>,
    fallback: HeuristicFallbackAdapter,
}

impl ProviderRegistry {
    /// Builds a registry pre-populated with the three known provider families.
    pub fn with_defaults() -> Self {
        let mut registry = ProviderRegistry {
            adapters: HashMap::new(),
            fallback: HeuristicFallbackAdapter,
        };
        registry.register(Box::new(NativeThinkingAdapter::new("anthropic")));
        registry.register(Box::new(ExplicitReasoningAdapter::new("deepseek")));
        registry.register(Box::new(PartsWithFlagAdapter::new("google")));
        registry
    }

    /// Registers or replaces the adapter for its own provider name.
    pub fn register(&mut self, adapter: Box<dyn ProviderAdapter + Send + Sync>) {
        self.adapters.insert(adapter.provider(), adapter);
    }

    /// Returns the adapter registered for `name`, or the fallback if unknown.
    pub fn get(&self, name: &str) -> &(dyn ProviderAdapter + Send + Sync) {
        match self.adapters.get(name) {
            Some(adapter) => adapter.as_ref(),
            None => &self.fallback,
        }
    }

    pub fn providers(&self) -> Vec<&'static str> {
        self.adapters.keys().copied().collect()
    }

    /// Matches substrings of a lowercased endpoint URL to a known provider.
    pub fn detect_from_url(url: &str) -> Option<&'static str> {
        let lowered = url.to_lowercase();
        if lowered.contains("anthropic") {
            Some("anthropic")
        } else if lowered.contains("openai") {
            Some("openai")
        } else if lowered.contains("deepseek") {
            Some("deepseek")
        } else if lowered.contains("generativelanguage") || lowered.contains("google") {
            Some("google")
        } else {
            None
        }
    }

    /// Extracts thinking from a complete body, trying the named provider
    /// first and falling back to the heuristic adapter on a miss.
    pub fn extract_from_body(&self, provider: &str, body: &str, model: &str) -> Option<ExtractedThinking> {
        self.get(provider)
            .extract_from_body(body, model)
            .or_else(|| self.fallback.extract_from_body(body, model))
    }

    /// Extracts thinking from an event-stream body, with the same fallback.
    pub fn extract_from_stream(&self, provider: &str, body: &str, model: &str) -> Option<ExtractedThinking> {
        self.get(provider)
            .extract_from_stream(body, model)
            .or_else(|| self.fallback.extract_from_stream(body, model))
    }
}
