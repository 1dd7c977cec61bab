use aip_crypto::sha256_hex;
use aip_schemas::{AlignmentCard, ConscienceContext, ConscienceValue};

/// Hashes a canonical JSON serialization of `card`, excluding nothing
/// beyond what serde already emits — the card is already free of
/// principal identity or audit fields.
pub fn card_hash(card: &AlignmentCard) -> String {
    let json = serde_json::to_string(card).expect("AlignmentCard always serializes");
    sha256_hex(json.as_bytes())
}

/// Hashes a canonical JSON serialization of the conscience values consulted
/// for a check.
pub fn values_hash(values: &[ConscienceValue]) -> String {
    let json = serde_json::to_string(values).expect("ConscienceValue always serializes");
    sha256_hex(json.as_bytes())
}

/// Hashes a canonical JSON serialization of the conscience context the
/// analysis model reported.
pub fn context_hash(context: &ConscienceContext) -> String {
    let json = serde_json::to_string(context).expect("ConscienceContext always serializes");
    sha256_hex(json.as_bytes())
}

/// Combines the thinking, card, values, and context commitments into one
/// digest that the chain hash and certificate both reference.
pub fn combined_commitment(thinking_hash: &str, card_hash: &str, values_hash: &str, context_hash: &str) -> String {
    let joined = format!("{thinking_hash}|{card_hash}|{values_hash}|{context_hash}");
    sha256_hex(joined.as_bytes())
}
