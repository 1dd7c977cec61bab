use aip_crypto::{sign_hex, verify_hex, SigningKey};
use aip_schemas::{
    CertificateClaims, CertificateProofs, CertificateSubject, ChainProof, IntegrityCertificate,
    IntegrityCheckpoint, InputCommitments, MerkleProof, SignatureProof, Verdict,
    VerdictDerivationProof, CERTIFICATE_CONTEXT, CERTIFICATE_TYPE, CERTIFICATE_VERSION,
};
use uuid::Uuid;

use crate::chain::IntegrityChain;
use crate::commitments::combined_commitment;

pub struct CertificateInputs<'a> {
    pub checkpoint: &'a IntegrityCheckpoint,
    pub card_hash: &'a str,
    pub values_hash: &'a str,
    pub context_hash: &'a str,
    pub model_version: &'a str,
    pub merkle: Option<MerkleProof>,
    pub verdict_derivation: Option<VerdictDerivationProof>,
}

/// Assembles and signs an [`IntegrityCertificate`] for one checkpoint,
/// advancing `chain` to include it.
pub fn issue_certificate(
    inputs: CertificateInputs<'_>,
    chain: &mut IntegrityChain,
    signing_key: &SigningKey,
) -> IntegrityCertificate {
    let checkpoint = inputs.checkpoint;
    let commitment = combined_commitment(
        &checkpoint.thinking_block_hash,
        inputs.card_hash,
        inputs.values_hash,
        inputs.context_hash,
    );

    let previous_hash = chain.previous_hash().map(str::to_string);
    let chain_hash = chain.update(
        &checkpoint.checkpoint_id,
        checkpoint.verdict,
        &checkpoint.thinking_block_hash,
        &commitment,
        checkpoint.timestamp,
    );

    let subject = CertificateSubject {
        checkpoint_id: checkpoint.checkpoint_id.clone(),
        agent_id: checkpoint.agent_id.clone(),
        session_id: checkpoint.session_id.clone(),
        card_id: checkpoint.card_id.clone(),
    };

    let claims = CertificateClaims {
        verdict: checkpoint.verdict,
        concerns: checkpoint.concerns.clone(),
        confidence: checkpoint.analysis_metadata.extraction_confidence,
        reasoning_summary: checkpoint.reasoning_summary.clone(),
        analysis_model: checkpoint.analysis_metadata.analysis_model.clone(),
        analysis_duration_ms: checkpoint.analysis_metadata.analysis_duration_ms,
    };

    let input_commitments = InputCommitments {
        thinking_block_hash: checkpoint.thinking_block_hash.clone(),
        card_hash: inputs.card_hash.to_string(),
        values_hash: inputs.values_hash.to_string(),
        context_hash: inputs.context_hash.to_string(),
        model_version: inputs.model_version.to_string(),
        combined_commitment: commitment,
    };

    let signed_payload = format!(
        "{}|{}|{}|{}",
        subject.checkpoint_id, claims.verdict, input_commitments.combined_commitment, chain_hash
    );
    let signature = sign_hex(signing_key, signed_payload.as_bytes());
    let public_key = hex::encode(signing_key.verifying_key().as_bytes());

    let proofs = CertificateProofs {
        signature: SignatureProof { signed_payload, signature, public_key },
        chain: ChainProof { previous_hash, chain_hash, issued_at: checkpoint.timestamp },
        merkle: inputs.merkle,
        verdict_derivation: inputs.verdict_derivation,
    };

    tracing::debug!(
        checkpoint_id = %checkpoint.checkpoint_id,
        certificate_id = %format!("cert-{}", Uuid::new_v4()),
        "issued integrity certificate"
    );

    IntegrityCertificate {
        context: CERTIFICATE_CONTEXT.to_string(),
        certificate_type: CERTIFICATE_TYPE.to_string(),
        certificate_id: format!("cert-{}", Uuid::new_v4()),
        version: CERTIFICATE_VERSION.to_string(),
        subject,
        claims,
        input_commitments,
        proofs,
    }
}

#[derive(Debug, Clone)]
pub struct VerificationChecks {
    pub signature: bool,
    pub chain: bool,
    pub merkle: Option<bool>,
    pub verdict_derivation: Option<bool>,
}

impl VerificationChecks {
    pub fn all_passed(&self) -> bool {
        self.signature
            && self.chain
            && self.merkle.unwrap_or(true)
            && self.verdict_derivation.unwrap_or(true)
    }
}

/// Verifies a certificate offline: signature, chain-hash recomputation,
/// and (when supplied) Merkle inclusion against an expected root and a
/// structural check of any verdict-derivation proof.
pub fn verify_certificate(
    certificate: &IntegrityCertificate,
    public_key: &[u8],
    expected_merkle_root: Option<&str>,
    expected_image_id: Option<&str>,
) -> VerificationChecks {
    let signature_ok = verify_hex(
        public_key,
        certificate.proofs.signature.signed_payload.as_bytes(),
        &certificate.proofs.signature.signature,
    )
    .is_ok();

    let recomputed_chain = crate::chain::compute_chain_hash(
        certificate.proofs.chain.previous_hash.as_deref(),
        &certificate.subject.checkpoint_id,
        certificate.claims.verdict,
        &certificate.input_commitments.thinking_block_hash,
        &certificate.input_commitments.combined_commitment,
        certificate.proofs.chain.issued_at,
    );
    let chain_ok = recomputed_chain == certificate.proofs.chain.chain_hash;

    let merkle_ok = match (&certificate.proofs.merkle, expected_merkle_root) {
        (Some(proof), Some(expected_root)) => {
            Some(crate::merkle::verify_proof(proof) && proof.root_hash == expected_root)
        }
        _ => None,
    };

    let verdict_derivation_ok = certificate.proofs.verdict_derivation.as_ref().map(|proof| {
        let verdict_matches = proof.journal_verdict == certificate.claims.verdict;
        let thinking_matches = proof.journal_thinking_hash == certificate.input_commitments.thinking_block_hash;
        let card_matches = proof.journal_card_hash == certificate.input_commitments.card_hash;
        let values_match = proof.journal_values_hash == certificate.input_commitments.values_hash;
        let image_matches = match (&proof.image_id, expected_image_id) {
            (Some(actual), Some(expected)) => actual == expected,
            _ => true,
        };
        verdict_matches && thinking_matches && card_matches && values_match && image_matches
    });

    VerificationChecks {
        signature: signature_ok,
        chain: chain_ok,
        merkle: merkle_ok,
        verdict_derivation: verdict_derivation_ok,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aip_schemas::{AnalysisMetadata, ConscienceContext, WindowPosition};
    use rand::rngs::OsRng;

    fn checkpoint() -> IntegrityCheckpoint {
        IntegrityCheckpoint {
            checkpoint_id: "ic-1".into(),
            agent_id: "agent-1".into(),
            card_id: "card-1".into(),
            session_id: "session-1".into(),
            timestamp: chrono::Utc::now(),
            thinking_block_hash: "a".repeat(64),
            provider: "anthropic".into(),
            model: "claude".into(),
            verdict: Verdict::Clear,
            concerns: vec![],
            reasoning_summary: "all clear".into(),
            conscience_context: ConscienceContext::default(),
            window_position: WindowPosition { index: 0, window_size: 1 },
            analysis_metadata: AnalysisMetadata {
                analysis_model: "analysis-model".into(),
                analysis_duration_ms: 12,
                thinking_tokens_original: 20,
                thinking_tokens_analyzed: 20,
                truncated: false,
                extraction_confidence: 1.0,
            },
            linked_trace_id: None,
        }
    }

    #[test]
    fn issued_certificate_has_required_namespace_fields() {
        let signing_key = SigningKey::generate(&mut OsRng);
        let cp = checkpoint();
        let mut chain = IntegrityChain::new();
        let cert = issue_certificate(
            CertificateInputs {
                checkpoint: &cp,
                card_hash: "card-hash",
                values_hash: "values-hash",
                context_hash: "context-hash",
                model_version: "v1",
                merkle: None,
                verdict_derivation: None,
            },
            &mut chain,
            &signing_key,
        );
        assert_eq!(cert.context, CERTIFICATE_CONTEXT);
        assert_eq!(cert.certificate_type, CERTIFICATE_TYPE);
        assert_eq!(cert.version, CERTIFICATE_VERSION);
        assert!(cert.certificate_id.starts_with("cert-"));
    }

    #[test]
    fn valid_certificate_signature_verifies() {
        let signing_key = SigningKey::generate(&mut OsRng);
        let cp = checkpoint();
        let mut chain = IntegrityChain::new();
        let cert = issue_certificate(
            CertificateInputs {
                checkpoint: &cp,
                card_hash: "card-hash",
                values_hash: "values-hash",
                context_hash: "context-hash",
                model_version: "v1",
                merkle: None,
                verdict_derivation: None,
            },
            &mut chain,
            &signing_key,
        );

        let public_key = signing_key.verifying_key().as_bytes().to_vec();
        let checks = verify_certificate(&cert, &public_key, None, None);
        assert!(checks.signature);
        assert!(checks.chain);
        assert!(checks.merkle.is_none());
        assert!(checks.verdict_derivation.is_none());
        assert!(checks.all_passed());
    }

    #[test]
    fn tampered_chain_hash_fails_verification() {
        let signing_key = SigningKey::generate(&mut OsRng);
        let cp = checkpoint();
        let mut chain = IntegrityChain::new();
        let mut cert = issue_certificate(
            CertificateInputs {
                checkpoint: &cp,
                card_hash: "card-hash",
                values_hash: "values-hash",
                context_hash: "context-hash",
                model_version: "v1",
                merkle: None,
                verdict_derivation: None,
            },
            &mut chain,
            &signing_key,
        );
        cert.proofs.chain.chain_hash = "0".repeat(64);

        let public_key = signing_key.verifying_key().as_bytes().to_vec();
        let checks = verify_certificate(&cert, &public_key, None, None);
        assert!(!checks.chain);
        assert!(!checks.all_passed());
    }

    #[test]
    fn tampered_signed_payload_fails_verification() {
        let signing_key = SigningKey::generate(&mut OsRng);
        let cp = checkpoint();
        let mut chain = IntegrityChain::new();
        let mut cert = issue_certificate(
            CertificateInputs {
                checkpoint: &cp,
                card_hash: "card-hash",
                values_hash: "values-hash",
                context_hash: "context-hash",
                model_version: "v1",
                merkle: None,
                verdict_derivation: None,
            },
            &mut chain,
            &signing_key,
        );
        cert.proofs.signature.signed_payload.push_str("-tampered");

        let public_key = signing_key.verifying_key().as_bytes().to_vec();
        let checks = verify_certificate(&cert, &public_key, None, None);
        assert!(!checks.signature);
    }

    #[test]
    fn verdict_derivation_mismatch_fails_structural_check() {
        let signing_key = SigningKey::generate(&mut OsRng);
        let cp = checkpoint();
        let mut chain = IntegrityChain::new();
        let proof = VerdictDerivationProof {
            image_id: None,
            journal_verdict: Verdict::BoundaryViolation,
            journal_thinking_hash: cp.thinking_block_hash.clone(),
            journal_card_hash: "card-hash".into(),
            journal_values_hash: "values-hash".into(),
        };
        let cert = issue_certificate(
            CertificateInputs {
                checkpoint: &cp,
                card_hash: "card-hash",
                values_hash: "values-hash",
                context_hash: "context-hash",
                model_version: "v1",
                merkle: None,
                verdict_derivation: Some(proof),
            },
            &mut chain,
            &signing_key,
        );

        let public_key = signing_key.verifying_key().as_bytes().to_vec();
        let checks = verify_certificate(&cert, &public_key, None, None);
        assert_eq!(checks.verdict_derivation, Some(false));
    }
}
