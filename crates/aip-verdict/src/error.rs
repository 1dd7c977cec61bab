use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerdictError {
    #[error("analysis response was not valid JSON: {0}")]
    InvalidAnalysisResponse(String),

    #[error("invalid verdict value: {0}")]
    InvalidVerdict(String),

    #[error("invalid concern at index {index}: {reason}")]
    InvalidConcern { index: usize, reason: String },

    #[error("invalid conscience context: {0}")]
    InvalidConscienceContext(String),

    #[error("missing required field: {0}")]
    MissingField(String),
}
