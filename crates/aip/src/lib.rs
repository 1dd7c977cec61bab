//! Alignment Integrity Protocol: wires extraction, prompt assembly, verdict
//! parsing, windowing, drift detection, and attestation into a single
//! per-agent [`Monitor`].
//!
//! This crate performs no network or file I/O. The caller is responsible
//! for fetching the provider response body and for sending the prompt
//! [`Monitor::prepare_check`] returns to an analysis model; everything
//! else — extraction, parsing, bookkeeping, signing — happens here as pure
//! data transformations.
//!
//! ```ignore
//! let mut monitor = Monitor::new(agent_id, card, conscience_values, "claude-3-opus", window_config)?;
//! let prepared = monitor.prepare_check(&session_id, "anthropic", &provider_body, "claude-3-sonnet", None)?;
//! // send prepared.system_prompt / prepared.user_prompt to the analysis model
//! let (signal, alert) = monitor.record(&session_id, &raw_analysis_response, &prepared)?;
//! if !signal.proceed {
//!     // deny or escalate per signal.recommended_action
//! }
//! ```

mod error;
mod monitor;

pub use error::MonitorError;
pub use monitor::{CheckOutcome, Monitor, PreparedCheck, NO_THINKING_HASH};

pub use aip_agreement::{validate as validate_agreement, AgreementAugmentation, AgreementConflict, AgreementReport};
pub use aip_attestation::{
    issue_certificate, verify_certificate, CertificateInputs, IntegrityChain, VerificationChecks,
};
pub use aip_card::summarize_card;
pub use aip_crypto::{sha256_hex, SigningKey};
pub use aip_drift::DEFAULT_DRIFT_THRESHOLD;
pub use aip_prompt::{build_prompt, BuiltPrompt};
pub use aip_providers::ProviderRegistry;
pub use aip_schemas::*;
pub use aip_signal::{build_signal, proceed, recommended_action};
pub use aip_verdict::{check_integrity, CheckpointContext, ExtractionInfo, VerdictError};
pub use aip_window::{WindowError, WindowManager};

/// Initializes a `tracing` subscriber for this crate's own tests.
/// Library consumers are expected to install their own subscriber.
#[cfg(test)]
pub fn init_test_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
