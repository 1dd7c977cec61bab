use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::CryptoError;

type HmacSha256 = Hmac<Sha256>;

/// Signs `body` with HMAC-SHA-256, returning the `sha256=<hex>` header value
/// used to frame webhook deliveries.
pub fn hmac_sign(secret: &[u8], body: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC accepts any key length");
    mac.update(body);
    format!("sha256={}", hex::encode(mac.finalize().into_bytes()))
}

/// Verifies a `sha256=<hex>` header value against `body` in constant time.
pub fn hmac_verify(secret: &[u8], body: &[u8], header_value: &str) -> Result<(), CryptoError> {
    let expected = hmac_sign(secret, body);
    if expected.as_bytes().ct_eq(header_value.as_bytes()).into() {
        Ok(())
    } else {
        Err(CryptoError::VerificationFailed)
    }
}

/// Constant-time equality for arbitrary byte slices.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && bool::from(a.ct_eq(b))
}

/// Delivery retry backoff schedule in seconds, shared with any external
/// webhook delivery path so it does not need to re-derive the curve.
pub const RETRY_DELAYS_SECONDS: [u64; 3] = [1, 4, 16];
