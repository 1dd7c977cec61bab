use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::CryptoError;

/// Decodes a lowercase hex string into raw bytes.
pub fn decode_hex(value: &str) -> Result<Vec<u8>, CryptoError> {
    hex::decode(value).map_err(|e| CryptoError::InvalidHex(e.to_string()))
}

/// Encodes raw bytes as standard base64.
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes a standard base64 string into raw bytes.
pub fn decode_base64(value: &str) -> Result<Vec<u8>, CryptoError> {
    STANDARD
        .decode(value)
        .map_err(|e| CryptoError::InvalidBase64(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let bytes = b"round trip me";
        let encoded = hex::encode(bytes);
        assert_eq!(decode_hex(&encoded).unwrap(), bytes);
    }

    #[test]
    fn base64_round_trip() {
        let bytes = b"round trip me too";
        let encoded = encode_base64(bytes);
        assert_eq!(decode_base64(&encoded).unwrap(), bytes);
    }

    #[test]
    fn invalid_hex_is_an_error() {
        assert!(decode_hex("not-hex").is_err());
    }

    #[test]
    fn invalid_base64_is_an_error() {
        assert!(decode_base64("not base64!!").is_err());
    }
}
