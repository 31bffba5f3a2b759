//! # Tally Merkle
//!
//! The Merkle layer of the Tally claims ledger:
//!
//! - `leaf` - the pinned double-hash commitment for one
//!   (recipient, total entitlement) pair
//! - `proof` - sibling-ordered inclusion proof verification
//! - `tree` - operator-side tree construction and proof generation
//! - `hash` - the BLAKE3 primitives both sides share
//!
//! Verification is the normative surface: the ledger core calls
//! [`verify`] and nothing else. The tree builder exists so operators and
//! tests can produce proofs that are compatible with it; any external
//! tooling must pin the exact same encoding and hashing or its proofs
//! will not verify.

pub mod hash;
pub mod leaf;
pub mod proof;
pub mod tree;

pub use hash::{hash_blake3, hash_concat};
pub use leaf::{encode_entry, leaf_hash, LEAF_ENCODING_LEN};
pub use proof::{verify, MerkleProof};
pub use tree::EntitlementTree;

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use tally_core::AccountId;

    fn entries(amounts: &[u64]) -> Vec<(AccountId, u64)> {
        amounts
            .iter()
            .enumerate()
            .map(|(i, amount)| (AccountId::from_label(&format!("recipient-{i}")), *amount))
            .collect()
    }

    proptest! {
        #[test]
        fn every_leaf_verifies_under_its_proof(
            amounts in prop::collection::vec(1u64..1_000_000, 1..48)
        ) {
            let entries = entries(&amounts);
            let tree = EntitlementTree::new(entries.clone());
            let root = tree.root();
            for (recipient, amount) in &entries {
                let proof = tree.proof_for(recipient).unwrap();
                prop_assert!(verify(leaf_hash(recipient, *amount), &proof, &root));
            }
        }

        #[test]
        fn tampered_amount_does_not_verify(
            amounts in prop::collection::vec(1u64..1_000_000, 1..32),
            index in 0usize..32,
            delta in 1u64..1_000,
        ) {
            let entries = entries(&amounts);
            let index = index % entries.len();
            let tree = EntitlementTree::new(entries.clone());
            let (recipient, amount) = entries[index];
            let proof = tree.proof_for(&recipient).unwrap();
            prop_assert!(!verify(
                leaf_hash(&recipient, amount + delta),
                &proof,
                &tree.root()
            ));
        }

        #[test]
        fn truncated_proof_does_not_verify(
            amounts in prop::collection::vec(1u64..1_000_000, 4..32)
        ) {
            let entries = entries(&amounts);
            let tree = EntitlementTree::new(entries.clone());
            let (recipient, amount) = entries[0];
            let mut proof = tree.proof_for(&recipient).unwrap();
            proof.0.pop();
            prop_assert!(!verify(leaf_hash(&recipient, amount), &proof, &tree.root()));
        }
    }
}
