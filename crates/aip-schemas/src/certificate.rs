use serde::{Deserialize, Serialize};

use crate::concern::IntegrityConcern;
use crate::checkpoint::Verdict;

pub const CERTIFICATE_CONTEXT: &str = "https://mnemom.ai/aip/v1";
pub const CERTIFICATE_TYPE: &str = "IntegrityCertificate";
pub const CERTIFICATE_VERSION: &str = "1.0.0";
pub const CERTIFICATE_MEDIA_TYPE: &str = "application/aip+json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateSubject {
    pub checkpoint_id: String,
    pub agent_id: String,
    pub session_id: String,
    pub card_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateClaims {
    pub verdict: Verdict,
    pub concerns: Vec<IntegrityConcern>,
    pub confidence: f64,
    pub reasoning_summary: String,
    pub analysis_model: String,
    pub analysis_duration_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputCommitments {
    pub thinking_block_hash: String,
    pub card_hash: String,
    pub values_hash: String,
    pub context_hash: String,
    pub model_version: String,
    pub combined_commitment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureProof {
    pub signed_payload: String,
    pub signature: String,
    pub public_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainProof {
    pub previous_hash: Option<String>,
    pub chain_hash: String,
    pub issued_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MerklePosition {
    Left,
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerkleProofNode {
    pub hash: String,
    pub position: MerklePosition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerkleProof {
    pub leaf_hash: String,
    pub root_hash: String,
    pub siblings: Vec<MerkleProofNode>,
}

/// The externally-produced zkVM journal committed alongside a checkpoint,
/// carried structurally but never re-verified cryptographically by this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictDerivationProof {
    pub image_id: Option<String>,
    pub journal_verdict: Verdict,
    pub journal_thinking_hash: String,
    pub journal_card_hash: String,
    pub journal_values_hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateProofs {
    pub signature: SignatureProof,
    pub chain: ChainProof,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub merkle: Option<MerkleProof>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub verdict_derivation: Option<VerdictDerivationProof>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrityCertificate {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub certificate_type: String,
    pub certificate_id: String,
    pub version: String,
    pub subject: CertificateSubject,
    pub claims: CertificateClaims,
    pub input_commitments: InputCommitments,
    pub proofs: CertificateProofs,
}
