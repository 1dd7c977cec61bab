//! Recovers an agent's thinking block from heterogeneous provider payloads.
//!
//! Three structured shapes are supported natively — a typed content array
//! with reasoning entries, a dedicated `reasoning_content` field, and a
//! parts list with a boolean reasoning flag — plus a heuristic fallback for
//! anything else. Adapters never log extracted content, only which shape
//! matched and at what confidence.

mod adapter;
mod explicit_reasoning;
mod fallback;
mod native_thinking;
mod parts_with_flag;
mod registry;
mod stream;

pub use adapter::ProviderAdapter;
pub use explicit_reasoning::ExplicitReasoningAdapter;
pub use fallback::HeuristicFallbackAdapter;
pub use native_thinking::NativeThinkingAdapter;
pub use parts_with_flag::PartsWithFlagAdapter;
pub use registry::ProviderRegistry;
pub use stream::{parse_events, reconstruct_blocks_by_index};
