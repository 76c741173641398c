//! The level table: flat, coordinate-addressed view of a built tree.
//!
//! Level 0 holds leaf digests in leaf order; every level above holds one
//! digest per internal node, left to right, up to the single root entry:
//!
//! ```text
//!      level
//!      ^
//!      +------------
//!  2   | 0 |   |   |
//!      +------------
//!  1   | 0 | 1 |   |
//!      +------------
//!  0   | 0 | 1 | 2 |
//!    --+---------------> offset
//!        0   1   2
//! ```
//!
//! The table is the authoritative addressable representation; the
//! [`Node`](crate::node::Node) graph produced by the same build is the
//! richer pointer-based view of the identical computation.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{MerkleTreeError, Result};
use crate::hasher::Hasher;
use crate::node::Digest;
use crate::path::{MerklePath, Position};
use crate::utils::concat;

/// Per-level digest table of a built tree.
///
/// Invariant: each level is `ceil(previous / 2)` wide and the top level
/// holds exactly one entry, the root digest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tree(Vec<Vec<Digest>>);

impl Tree {
    pub(crate) fn from_levels(levels: Vec<Vec<Digest>>) -> Self {
        Self(levels)
    }

    /// Number of levels, 0 for an unbuilt table.
    pub fn height(&self) -> u64 {
        self.0.len() as u64
    }

    /// Entries at `level`, 0 when the level is out of range.
    pub fn width(&self, level: u64) -> u64 {
        usize::try_from(level)
            .ok()
            .and_then(|level| self.0.get(level))
            .map_or(0, |entries| entries.len() as u64)
    }

    /// Index of the topmost level, 0 for an empty table.
    pub fn top_level(&self) -> u64 {
        self.height().saturating_sub(1)
    }

    /// Largest valid offset at `level`, 0 for an empty table.
    pub fn max_offset(&self, level: u64) -> u64 {
        self.width(level).saturating_sub(1)
    }

    /// The single digest at the top level.
    pub fn root_digest(&self) -> Result<&Digest> {
        if self.height() == 0 {
            return Err(MerkleTreeError::EmptyTree);
        }
        self.0[self.top_level() as usize]
            .first()
            .ok_or(MerkleTreeError::EmptyTree)
    }

    /// Digest at `(level, offset)`.
    pub fn digest_at(&self, level: u64, offset: u64) -> Result<&Digest> {
        if self.height() == 0 {
            return Err(MerkleTreeError::EmptyTree);
        }
        if level > self.top_level() || offset >= self.width(level) {
            return Err(MerkleTreeError::InvalidCoordinate { level, offset });
        }
        Ok(&self.0[level as usize][offset as usize])
    }

    /// Sibling path for the entry at `(level, offset)`, ordered
    /// leaf-to-root and excluding the root.
    ///
    /// A self-paired trailing node has no stored sibling; its own
    /// coordinate is emitted for that step. The offset of a lone trailing
    /// node is always even, so [`Tree::verify_proof`] folds the step as
    /// `hash(entry || digest)`, the same combination the builder used.
    pub fn merkle_path(&self, level: u64, offset: u64) -> Result<MerklePath> {
        if self.height() == 0 {
            return Err(MerkleTreeError::EmptyTree);
        }
        if level > self.top_level() || offset >= self.width(level) {
            return Err(MerkleTreeError::InvalidCoordinate { level, offset });
        }

        let mut path = MerklePath::new();
        let mut position = Position { level, offset };

        while position.level < self.top_level() {
            let sibling = position.sibling();
            if sibling.offset < self.width(sibling.level) {
                path.push(sibling);
            } else {
                path.push(position);
            }
            position = position.parent();
        }

        Ok(path)
    }

    /// Re-derive a root digest from `unverified` along `path` and compare
    /// it with the stored root.
    ///
    /// An even step offset means the stored entry was the left child, an
    /// odd offset the right. A digest mismatch is `Ok(false)`; a step that
    /// addresses no table entry is an error.
    pub fn verify_proof(
        &self,
        path: &MerklePath,
        unverified: &[u8],
        hasher: &dyn Hasher,
    ) -> Result<bool> {
        let mut digest: Digest = unverified.to_vec();

        for step in path {
            let entry = self.digest_at(step.level, step.offset)?;
            let message = if step.offset % 2 == 0 {
                concat(entry, &digest)
            } else {
                concat(&digest, entry)
            };
            digest = hasher.hash(&message)?;
        }

        Ok(self.root_digest()? == &digest)
    }

    /// Serialize the table to JSON bytes: an array of levels, level 0
    /// first, each an array of hex digest strings.
    pub fn marshal(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| MerkleTreeError::Serialization {
            reason: e.to_string(),
        })
    }

    /// Decode a table from the output of [`Tree::marshal`].
    pub fn unmarshal(bytes: &[u8]) -> Result<Tree> {
        serde_json::from_slice(bytes).map_err(|e| MerkleTreeError::Serialization {
            reason: e.to_string(),
        })
    }
}

impl Serialize for Tree {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let encoded: Vec<Vec<String>> = self
            .0
            .iter()
            .map(|level| level.iter().map(hex::encode).collect())
            .collect();
        encoded.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Tree {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = Vec::<Vec<String>>::deserialize(deserializer)?;
        let mut levels = Vec::with_capacity(encoded.len());
        for level in encoded {
            let mut entries = Vec::with_capacity(level.len());
            for entry in level {
                entries.push(hex::decode(&entry).map_err(serde::de::Error::custom)?);
            }
            levels.push(entries);
        }
        Ok(Self(levels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaves::Leaves;
    use crate::node::Leaf;
    use crate::options::BuildOptions;

    fn build(payloads: &[&str]) -> Tree {
        let mut leaves = Leaves::new();
        for payload in payloads {
            leaves.add(Leaf::from_payload(payload.as_bytes().to_vec()));
        }
        let (tree, _) = leaves.build_tree(&BuildOptions::default()).unwrap();
        tree
    }

    #[test]
    fn test_addressing() {
        let tree = build(&["Hello", "Hi", "Hey", "Hola"]);

        assert_eq!(tree.height(), 3);
        assert_eq!(tree.top_level(), 2);
        assert_eq!(tree.width(0), 4);
        assert_eq!(tree.width(1), 2);
        assert_eq!(tree.width(2), 1);
        assert_eq!(tree.width(3), 0);
        assert_eq!(tree.max_offset(0), 3);

        assert!(tree.digest_at(0, 3).is_ok());
        assert!(tree.digest_at(2, 0).is_ok());
    }

    #[test]
    fn test_digest_at_out_of_range() {
        let tree = build(&["Hello", "Hi", "Hey", "Hola"]);

        assert!(matches!(
            tree.digest_at(3, 0),
            Err(MerkleTreeError::InvalidCoordinate { level: 3, offset: 0 })
        ));
        assert!(matches!(
            tree.digest_at(1, 2),
            Err(MerkleTreeError::InvalidCoordinate { level: 1, offset: 2 })
        ));
    }

    #[test]
    fn test_empty_tree_queries() {
        let tree = Tree::default();

        assert_eq!(tree.height(), 0);
        assert_eq!(tree.width(0), 0);
        assert_eq!(tree.top_level(), 0);
        assert!(matches!(tree.root_digest(), Err(MerkleTreeError::EmptyTree)));
        assert!(matches!(
            tree.digest_at(0, 0),
            Err(MerkleTreeError::EmptyTree)
        ));
        assert!(matches!(
            tree.merkle_path(0, 0),
            Err(MerkleTreeError::EmptyTree)
        ));
    }

    #[test]
    fn test_root_digest_is_top_entry() {
        let tree = build(&["Hello", "Hi", "Hey", "Hola"]);
        assert_eq!(tree.root_digest().unwrap(), tree.digest_at(2, 0).unwrap());
    }

    #[test]
    fn test_merkle_path_balanced() {
        let tree = build(&["Hello", "Hi", "Hey", "Hola"]);
        let path = tree.merkle_path(0, 2).unwrap();

        let steps: Vec<Position> = path.iter().copied().collect();
        assert_eq!(steps, [
            Position { level: 0, offset: 3 },
            Position { level: 1, offset: 0 },
        ]);
    }

    #[test]
    fn test_merkle_path_self_paired_steps() {
        // Ten leaves: widths 10, 5, 3, 2, 1. The walk from leaf 8 crosses
        // the trailing nodes of levels 1 and 2.
        let payloads: Vec<String> = (0..10).map(|i| alloc::format!("leaf-{}", i)).collect();
        let refs: Vec<&str> = payloads.iter().map(String::as_str).collect();
        let tree = build(&refs);

        let path = tree.merkle_path(0, 8).unwrap();
        let steps: Vec<Position> = path.iter().copied().collect();
        assert_eq!(steps, [
            Position { level: 0, offset: 9 },
            Position { level: 1, offset: 4 },
            Position { level: 2, offset: 2 },
            Position { level: 3, offset: 0 },
        ]);
    }

    #[test]
    fn test_merkle_path_rejects_bad_start() {
        let tree = build(&["Hello", "Hi", "Hey", "Hola"]);
        assert!(matches!(
            tree.merkle_path(0, 4),
            Err(MerkleTreeError::InvalidCoordinate { level: 0, offset: 4 })
        ));
    }
}
