//! Operator-side entitlement tree
//!
//! Builds the Merkle tree over a complete (recipient, total entitlement)
//! table and generates proofs compatible with [`crate::verify`]. The
//! ledger core only ever verifies; this builder exists for distribution
//! operators preparing a rotation and for the test suites.
//!
//! Levels with an odd node count duplicate their last node, matching the
//! verifier's sibling-ordered pair hashing.

use crate::leaf::leaf_hash;
use crate::proof::{hash_pair, MerkleProof};
use tally_core::{AccountId, Root};

/// Merkle tree over one token's complete entitlement table
pub struct EntitlementTree {
    /// All node levels, leaves first, root level last
    levels: Vec<Vec<[u8; 32]>>,
    entries: Vec<(AccountId, u64)>,
}

impl EntitlementTree {
    /// Build the tree for a table of (recipient, total entitlement) pairs
    pub fn new(entries: Vec<(AccountId, u64)>) -> Self {
        let leaves: Vec<[u8; 32]> = entries
            .iter()
            .map(|(recipient, amount)| leaf_hash(recipient, *amount))
            .collect();

        let mut levels = vec![leaves];
        while levels
            .last()
            .map(|level| level.len() > 1)
            .unwrap_or(false)
        {
            let prev = &levels[levels.len() - 1];
            let mut next = Vec::with_capacity(prev.len().div_ceil(2));
            for chunk in prev.chunks(2) {
                // Duplicate the last node when the level is odd
                let right = if chunk.len() == 2 { &chunk[1] } else { &chunk[0] };
                next.push(hash_pair(&chunk[0], right));
            }
            levels.push(next);
        }

        Self { levels, entries }
    }

    /// Root commitment; `Root::ZERO` for an empty table
    pub fn root(&self) -> Root {
        self.levels
            .last()
            .and_then(|level| level.first())
            .map(|hash| Root::new(*hash))
            .unwrap_or(Root::ZERO)
    }

    /// Generate the inclusion proof for `recipient`, if present
    pub fn proof_for(&self, recipient: &AccountId) -> Option<MerkleProof> {
        let mut index = self
            .entries
            .iter()
            .position(|(entry, _)| entry == recipient)?;

        let mut siblings = Vec::new();
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = if index % 2 == 0 {
                // Last node of an odd level pairs with itself
                if index + 1 < level.len() {
                    level[index + 1]
                } else {
                    level[index]
                }
            } else {
                level[index - 1]
            };
            siblings.push(sibling);
            index /= 2;
        }
        Some(MerkleProof(siblings))
    }

    /// Sum of all entitlements - the funding a fresh distribution needs
    pub fn total_entitlement(&self) -> u64 {
        self.entries.iter().map(|(_, amount)| *amount).sum()
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proof::verify;

    fn table(pairs: &[(&str, u64)]) -> Vec<(AccountId, u64)> {
        pairs
            .iter()
            .map(|(name, amount)| (AccountId::from_label(name), *amount))
            .collect()
    }

    #[test]
    fn test_empty_table_has_zero_root() {
        let tree = EntitlementTree::new(Vec::new());
        assert_eq!(tree.root(), Root::ZERO);
        assert!(tree.is_empty());
        assert!(tree.proof_for(&AccountId::from_label("alice")).is_none());
    }

    #[test]
    fn test_single_entry_root_is_leaf() {
        let alice = AccountId::from_label("alice");
        let tree = EntitlementTree::new(vec![(alice, 100)]);
        assert_eq!(tree.root(), Root::new(leaf_hash(&alice, 100)));

        let proof = tree.proof_for(&alice).unwrap();
        assert!(proof.is_empty());
        assert!(verify(leaf_hash(&alice, 100), &proof, &tree.root()));
    }

    #[test]
    fn test_every_entry_verifies_even_count() {
        let entries = table(&[("a", 100), ("b", 200), ("c", 300), ("d", 400)]);
        let tree = EntitlementTree::new(entries.clone());
        for (recipient, amount) in &entries {
            let proof = tree.proof_for(recipient).unwrap();
            assert_eq!(proof.len(), 2);
            assert!(verify(leaf_hash(recipient, *amount), &proof, &tree.root()));
        }
    }

    #[test]
    fn test_every_entry_verifies_odd_count() {
        let entries = table(&[("a", 1), ("b", 2), ("c", 3), ("d", 4), ("e", 5)]);
        let tree = EntitlementTree::new(entries.clone());
        for (recipient, amount) in &entries {
            let proof = tree.proof_for(recipient).unwrap();
            assert!(verify(leaf_hash(recipient, *amount), &proof, &tree.root()));
        }
    }

    #[test]
    fn test_proof_does_not_transfer_between_recipients() {
        let entries = table(&[("a", 100), ("b", 200)]);
        let tree = EntitlementTree::new(entries);
        let proof = tree.proof_for(&AccountId::from_label("a")).unwrap();
        // b's leaf under a's proof must not verify
        assert!(!verify(
            leaf_hash(&AccountId::from_label("b"), 200),
            &proof,
            &tree.root()
        ));
    }

    #[test]
    fn test_total_entitlement() {
        let tree = EntitlementTree::new(table(&[("a", 100), ("b", 200)]));
        assert_eq!(tree.total_entitlement(), 300);
        assert_eq!(tree.len(), 2);
    }
}
