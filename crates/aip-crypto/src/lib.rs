//! Hashing, signing, and constant-time comparison primitives shared by every
//! other crate in the protocol. No component above this one reaches for a
//! crypto crate directly.

mod encoding;
mod error;
mod hash;
mod mac;
mod sign;

pub use encoding::{decode_base64, decode_hex, encode_base64};
pub use error::CryptoError;
pub use hash::{hash_hex_pair, sha256_hex};
pub use mac::{constant_time_eq, hmac_sign, hmac_verify, RETRY_DELAYS_SECONDS};
pub use sign::{sign_hex, verify_hex};

pub use ed25519_dalek::SigningKey;
