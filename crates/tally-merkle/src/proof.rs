//! Merkle inclusion proof verification
//!
//! Interior nodes hash their two children with the byte-wise smaller side
//! first, so a proof carries only sibling hashes and no position bits:
//! the ordering at each step is decided by comparing the running node
//! against the sibling, not by the leaf's index in the tree.

use crate::hash::hash_concat;
use serde::{Deserialize, Serialize};
use tally_core::Root;

/// Ordered sibling hashes from the leaf up to the root
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof(pub Vec<[u8; 32]>);

impl MerkleProof {
    /// Number of sibling hashes (tree depth above the leaf)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// An empty proof authenticates only a single-leaf tree
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Hash a pair of sibling nodes, smaller side first
pub(crate) fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hash_concat(&[a, b])
    } else {
        hash_concat(&[b, a])
    }
}

/// Verify that `proof` authenticates `leaf` under `root`
pub fn verify(leaf: [u8; 32], proof: &MerkleProof, root: &Root) -> bool {
    let mut node = leaf;
    for sibling in &proof.0 {
        node = hash_pair(&node, sibling);
    }
    node == *root.as_bytes()
}
