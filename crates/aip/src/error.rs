use aip_agreement::AgreementReport;
use aip_verdict::VerdictError;
use aip_window::WindowError;

/// Errors surfaced by the end-to-end monitor, beyond the per-crate errors
/// it wraps from parsing and window management.
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error("conscience values conflict with the alignment card's autonomy envelope: {0:?}")]
    AgreementConflict(AgreementReport),

    #[error("no thinking block could be extracted from the provider response")]
    ExtractionFailed,

    #[error(transparent)]
    Verdict(#[from] VerdictError),

    #[error(transparent)]
    Window(#[from] WindowError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_failed_has_a_stable_message() {
        assert_eq!(
            MonitorError::ExtractionFailed.to_string(),
            "no thinking block could be extracted from the provider response"
        );
    }
}
