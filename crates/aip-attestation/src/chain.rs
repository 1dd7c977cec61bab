use aip_crypto::sha256_hex;
use aip_schemas::Verdict;
use chrono::{DateTime, Utc};

const GENESIS: &str = "genesis";

/// Computes the deterministic chain-hash preimage for one checkpoint link.
/// The first link in a chain uses `previous_hash = None`, rendered as the
/// literal sentinel `"genesis"`.
pub fn compute_chain_hash(
    previous_hash: Option<&str>,
    checkpoint_id: &str,
    verdict: Verdict,
    thinking_block_hash: &str,
    combined_commitment: &str,
    issued_at: DateTime<Utc>,
) -> String {
    let prev = previous_hash.unwrap_or(GENESIS);
    let preimage = format!(
        "{prev}|{checkpoint_id}|{verdict}|{thinking_block_hash}|{combined_commitment}|{}",
        issued_at.to_rfc3339()
    );
    sha256_hex(preimage.as_bytes())
}

/// Tracks the running head of a per-agent (or per-session) hash chain.
#[derive(Debug, Clone, Default)]
pub struct IntegrityChain {
    last_hash: Option<String>,
    entry_count: u64,
}

impl IntegrityChain {
    pub fn new() -> Self {
        IntegrityChain::default()
    }

    /// Resumes a chain whose head hash is already known, e.g. loaded from storage.
    pub fn from_state(last_hash: Option<String>, entry_count: u64) -> Self {
        IntegrityChain { last_hash, entry_count }
    }

    pub fn previous_hash(&self) -> Option<&str> {
        self.last_hash.as_deref()
    }

    pub fn entry_count(&self) -> u64 {
        self.entry_count
    }

    /// Links the next checkpoint onto the chain, returning its chain hash
    /// and advancing the head.
    pub fn update(
        &mut self,
        checkpoint_id: &str,
        verdict: Verdict,
        thinking_block_hash: &str,
        combined_commitment: &str,
        issued_at: DateTime<Utc>,
    ) -> String {
        let hash = compute_chain_hash(
            self.last_hash.as_deref(),
            checkpoint_id,
            verdict,
            thinking_block_hash,
            combined_commitment,
            issued_at,
        );
        self.last_hash = Some(hash.clone());
        self.entry_count += 1;
        hash
    }

    pub fn head_hash(&self) -> Option<&str> {
        self.last_hash.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_link_uses_genesis_sentinel() {
        let explicit_none = compute_chain_hash(None, "ic-1", Verdict::Clear, "hash", "commit", Utc::now());
        let now = Utc::now();
        let via_genesis = compute_chain_hash(Some(GENESIS), "ic-1", Verdict::Clear, "hash", "commit", now);
        let explicit_none_same_ts = compute_chain_hash(None, "ic-1", Verdict::Clear, "hash", "commit", now);
        assert_eq!(via_genesis, explicit_none_same_ts);
        assert_ne!(explicit_none, ""); // sanity: never empty
    }

    #[test]
    fn chain_update_advances_head_and_count() {
        let mut chain = IntegrityChain::new();
        assert_eq!(chain.entry_count(), 0);
        assert!(chain.previous_hash().is_none());

        let first = chain.update("ic-1", Verdict::Clear, "hash1", "commit1", Utc::now());
        assert_eq!(chain.entry_count(), 1);
        assert_eq!(chain.previous_hash(), Some(first.as_str()));

        let second = chain.update("ic-2", Verdict::ReviewNeeded, "hash2", "commit2", Utc::now());
        assert_ne!(first, second);
        assert_eq!(chain.entry_count(), 2);
    }

    #[test]
    fn resumed_chain_continues_from_supplied_head() {
        let mut chain = IntegrityChain::from_state(Some("previous-head".to_string()), 5);
        let hash = chain.update("ic-6", Verdict::Clear, "hash6", "commit6", Utc::now());
        assert_eq!(chain.entry_count(), 6);
        assert_ne!(hash, "previous-head");
    }
}
