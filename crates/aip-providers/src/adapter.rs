use aip_schemas::ExtractedThinking;

/// A single provider's strategy for recovering a thinking block from a
/// complete response body or from an event-stream body.
pub trait ProviderAdapter {
    /// The provider name this adapter is registered under, e.g. `"anthropic"`.
    fn provider(&self) -> &'static str;

    /// Extracts a thinking block from a complete, non-streaming JSON body.
    fn extract_from_body(&self, body: &str, model: &str) -> Option<ExtractedThinking>;

    /// Extracts a thinking block from an SSE-style event-stream body.
    fn extract_from_stream(&self, body: &str, model: &str) -> Option<ExtractedThinking>;
}
