//! Tamper-evident attestation for integrity checkpoints: deterministic
//! chain hashing, Merkle inclusion proofs, and Ed25519-signed certificates
//! with an offline verifier.

mod certificate;
mod chain;
mod commitments;
mod error;
mod merkle;

pub use certificate::{
    issue_certificate, verify_certificate, CertificateInputs, VerificationChecks,
};
pub use chain::{compute_chain_hash, IntegrityChain};
pub use commitments::{card_hash, combined_commitment, context_hash, values_hash};
pub use error::AttestationError;
pub use merkle::{verify_proof, MerkleTree};
