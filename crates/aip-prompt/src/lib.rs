//! Builds the system and user prompt sent to the analysis model: card
//! summary, consulted conscience values, session window context, and the
//! truncated thinking block, all assembled in a fixed section order.

mod builder;
mod estimate;
mod system_prompt;
mod truncate;

pub use builder::{build_prompt, has_consulted_values, session_context_section, BuiltPrompt};
pub use estimate::estimate_tokens;
pub use system_prompt::system_prompt;
pub use truncate::{truncate_head_and_tail, Truncated};
