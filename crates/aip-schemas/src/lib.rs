//! Value types shared across the Alignment Integrity Protocol crates:
//! alignment cards, conscience values, extracted thinking, concerns,
//! checkpoints, window and drift state, certificates, and signals.
//!
//! These are plain data types — no parsing, hashing, or decision logic
//! lives here. That belongs to the crate that owns the corresponding
//! operation (`aip-verdict`, `aip-window`, `aip-drift`, `aip-attestation`,
//! `aip-signal`).

mod card;
mod certificate;
mod checkpoint;
mod concern;
mod conscience;
mod conscience_context;
mod drift;
mod signal;
mod thinking;
mod window;

pub use card::{AlignmentCard, AutonomyEnvelope, EscalationTrigger, Value};
pub use certificate::{
    CertificateClaims, CertificateProofs, CertificateSubject, ChainProof, IntegrityCertificate,
    InputCommitments, MerklePosition, MerkleProof, MerkleProofNode, SignatureProof,
    VerdictDerivationProof, CERTIFICATE_CONTEXT, CERTIFICATE_MEDIA_TYPE, CERTIFICATE_TYPE,
    CERTIFICATE_VERSION,
};
pub use checkpoint::{AnalysisMetadata, IntegrityCheckpoint, Verdict, WindowPosition};
pub use concern::{ConcernCategory, IntegrityConcern, Severity, MAX_EVIDENCE_LENGTH};
pub use conscience::{default_conscience_values, ConscienceTag, ConscienceValue};
pub use conscience_context::{ConscienceContext, ConsultationDepth};
pub use drift::{
    AlertSeverity, DriftDirection, DriftState, IntegrityDriftAlert, MIN_DRIFT_THRESHOLD,
};
pub use signal::{IntegritySignal, RecommendedAction};
pub use thinking::{ExtractedThinking, ExtractionMethod};
pub use window::{
    SessionBoundaryPolicy, VerdictCounts, WindowConfig, WindowMode, WindowSummary,
    MIN_WINDOW_SIZE,
};
