//! Tree node types and their JSON encoding.
//!
//! A [`Node`] is one vertex of the pointer-linked view of a built tree.
//! Leaves sit at level 0 and carry the original payload; internal nodes own
//! the two child subtrees they were hashed from. [`Leaf`] and [`Root`] are
//! aliases of [`Node`]: a leaf is a node without children, the root is the
//! node whose digest commits to the whole leaf sequence.

use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::error::{MerkleTreeError, Result};

/// Opaque fixed-length digest. The length depends on the configured
/// algorithm and is constant within one build; equality is byte-wise.
pub type Digest = Vec<u8>;

/// One vertex of the built tree.
///
/// A self-paired trailing node owns two structurally equal copies of the
/// same child subtree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Height above the leaf level; children are always exactly one below
    pub level: u64,
    /// Digest committing to this subtree, hex-encoded when serialized
    #[serde(with = "hex::serde")]
    pub digest: Digest,
    /// Left child, absent on leaves
    pub left: Option<Box<Node>>,
    /// Right child, absent on leaves
    pub right: Option<Box<Node>>,
    /// Raw input payload, leaves only, hex-encoded when serialized
    #[serde(with = "hex_option")]
    pub payload: Option<Vec<u8>>,
}

/// A level-0 node holding one input item.
pub type Leaf = Node;

/// The topmost node of a built tree.
pub type Root = Node;

impl Node {
    /// An empty leaf at level 0.
    pub fn new() -> Leaf {
        Leaf {
            level: 0,
            digest: Digest::new(),
            left: None,
            right: None,
            payload: None,
        }
    }

    /// A leaf carrying a raw payload; its digest is computed at build time
    /// unless the build skips hashing.
    pub fn from_payload(payload: Vec<u8>) -> Leaf {
        Leaf {
            payload: Some(payload),
            ..Self::new()
        }
    }

    /// A leaf carrying a precomputed digest, for skip-hash builds.
    pub fn from_digest(digest: Digest) -> Leaf {
        Leaf {
            digest,
            ..Self::new()
        }
    }

    /// Serialize the subtree rooted at this node to JSON bytes.
    pub fn marshal(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| MerkleTreeError::Serialization {
            reason: e.to_string(),
        })
    }

    /// Decode a subtree from the output of [`Node::marshal`].
    pub fn unmarshal(bytes: &[u8]) -> Result<Node> {
        serde_json::from_slice(bytes).map_err(|e| MerkleTreeError::Serialization {
            reason: e.to_string(),
        })
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

/// Hex-string serde for optional byte fields; `None` stays `null`.
mod hex_option {
    use alloc::string::String;
    use alloc::vec::Vec;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match bytes {
            Some(bytes) => serializer.serialize_some(&hex::encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(encoded) => hex::decode(&encoded)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
