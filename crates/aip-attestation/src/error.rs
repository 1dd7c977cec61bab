use thiserror::Error;

#[derive(Debug, Error)]
pub enum AttestationError {
    #[error("signature malformed: {0}")]
    SignatureMalformed(String),

    #[error("chain hash mismatch: computed {computed}, expected {expected}")]
    ChainMismatch { computed: String, expected: String },

    #[error("merkle proof malformed: {0}")]
    MerkleMalformed(String),

    #[error("verdict derivation proof is structurally inconsistent: {0}")]
    VerdictDerivationMismatch(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_chain_mismatch() {
        let err = AttestationError::ChainMismatch { computed: "aa".into(), expected: "bb".into() };
        assert_eq!(err.to_string(), "chain hash mismatch: computed aa, expected bb");
    }

    #[test]
    fn display_signature_malformed() {
        let err = AttestationError::SignatureMalformed("wrong length".into());
        assert_eq!(err.to_string(), "signature malformed: wrong length");
    }
}
