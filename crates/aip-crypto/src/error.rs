use thiserror::Error;

/// Errors raised by the hashing, signing and comparison primitives.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("invalid public key bytes: {0}")]
    InvalidPublicKey(String),

    #[error("invalid signature bytes: {0}")]
    InvalidSignature(String),

    #[error("signature verification failed")]
    VerificationFailed,

    #[error("invalid hex encoding: {0}")]
    InvalidHex(String),

    #[error("invalid base64 encoding: {0}")]
    InvalidBase64(String),
}
