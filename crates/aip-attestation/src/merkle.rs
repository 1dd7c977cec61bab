use aip_crypto::hash_hex_pair;
use aip_schemas::{MerklePosition, MerkleProof, MerkleProofNode};

/// A Merkle tree over hex-encoded leaf digests. Internal nodes hash the
/// concatenation of their children's hex strings, not the decoded bytes.
pub struct MerkleTree {
    levels: Vec<Vec<String>>,
}

impl MerkleTree {
    /// Builds a tree from leaf hex digests. An odd level promotes its last
    /// node unchanged to the next level up.
    pub fn build(leaves: Vec<String>) -> Option<Self> {
        if leaves.is_empty() {
            return None;
        }

        let mut levels = vec![leaves];
        while levels.last().unwrap().len() > 1 {
            let current = levels.last().unwrap();
            let mut next = Vec::with_capacity(current.len().div_ceil(2));
            let mut i = 0;
            while i < current.len() {
                if i + 1 < current.len() {
                    next.push(hash_hex_pair(&current[i], &current[i + 1]));
                } else {
                    next.push(current[i].clone());
                }
                i += 2;
            }
            levels.push(next);
        }

        Some(MerkleTree { levels })
    }

    pub fn root(&self) -> &str {
        &self.levels.last().unwrap()[0]
    }

    /// Builds an inclusion proof for the leaf at `index`.
    pub fn prove(&self, index: usize) -> Option<MerkleProof> {
        let leaves = self.levels.first()?;
        if index >= leaves.len() {
            return None;
        }

        let mut siblings = Vec::new();
        let mut position = index;

        for level in &self.levels[..self.levels.len() - 1] {
            let is_right = position % 2 == 1;
            let sibling_index = if is_right { position - 1 } else { position + 1 };

            if let Some(sibling_hash) = level.get(sibling_index) {
                siblings.push(MerkleProofNode {
                    hash: sibling_hash.clone(),
                    position: if is_right { MerklePosition::Left } else { MerklePosition::Right },
                });
            }

            position /= 2;
        }

        Some(MerkleProof {
            leaf_hash: leaves[index].clone(),
            root_hash: self.root().to_string(),
            siblings,
        })
    }
}

/// Recomputes a root from a leaf and its inclusion proof, without needing
/// the rest of the tree.
pub fn verify_proof(proof: &MerkleProof) -> bool {
    let mut current = proof.leaf_hash.clone();

    for sibling in &proof.siblings {
        current = match sibling.position {
            MerklePosition::Left => hash_hex_pair(&sibling.hash, &current),
            MerklePosition::Right => hash_hex_pair(&current, &sibling.hash),
        };
    }

    current == proof.root_hash
}
