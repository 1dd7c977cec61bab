use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};

use crate::error::CryptoError;

/// Signs `message` with an Ed25519 signing key, returning the lowercase hex signature.
pub fn sign_hex(signing_key: &SigningKey, message: &[u8]) -> String {
    let signature: Signature = signing_key.sign(message);
    hex::encode(signature.to_bytes())
}

/// Verifies a hex-encoded Ed25519 signature over `message` against a raw public key.
pub fn verify_hex(public_key: &[u8], message: &[u8], signature_hex: &str) -> Result<(), CryptoError> {
    let verifying_key = VerifyingKey::try_from(public_key)
        .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))?;

    let signature_bytes =
        hex::decode(signature_hex).map_err(|e| CryptoError::InvalidHex(e.to_string()))?;
    let signature_bytes: [u8; 64] = signature_bytes
        .try_into()
        .map_err(|_| CryptoError::InvalidSignature("expected 64 bytes".into()))?;
    let signature = Signature::from_bytes(&signature_bytes);

    verifying_key
        .verify(message, &signature)
        .map_err(|_| CryptoError::VerificationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    #[test]
    fn sign_then_verify_succeeds() {
        let signing_key = SigningKey::generate(&mut OsRng);
        let message = b"certificate payload";
        let signature_hex = sign_hex(&signing_key, message);

        let verifying_key = signing_key.verifying_key();
        let result = verify_hex(verifying_key.as_bytes(), message, &signature_hex);
        assert!(result.is_ok());
    }

    #[test]
    fn tampered_message_fails_verification() {
        let signing_key = SigningKey::generate(&mut OsRng);
        let signature_hex = sign_hex(&signing_key, b"original payload");

        let verifying_key = signing_key.verifying_key();
        let result = verify_hex(verifying_key.as_bytes(), b"tampered payload", &signature_hex);
        assert!(result.is_err());
    }

    #[test]
    fn tampered_signature_byte_fails_verification() {
        let signing_key = SigningKey::generate(&mut OsRng);
        let message = b"certificate payload";
        let mut signature_hex = sign_hex(&signing_key, message);
        // Flip one hex character.
        let flipped = if signature_hex.starts_with('0') { '1' } else { '0' };
        signature_hex.replace_range(0..1, &flipped.to_string());

        let verifying_key = signing_key.verifying_key();
        let result = verify_hex(verifying_key.as_bytes(), message, &signature_hex);
        assert!(result.is_err());
    }

    #[test]
    fn malformed_public_key_is_reported() {
        let result = verify_hex(&[0u8; 4], b"message", "00");
        assert!(matches!(result, Err(CryptoError::InvalidPublicKey(_))));
    }
}
