//! # merkletree
//!
//! Array-addressed Merkle tree with compact inclusion proofs.
//!
//! Builds a binary hash tree over an ordered sequence of leaves, producing
//! a flat per-level digest table together with a pointer-linked root node.
//! Any leaf can then be proven to belong to the tree with a sibling path
//! whose length is logarithmic in the leaf count, without revealing the
//! rest of the dataset.
//!
//! ## Features
//!
//! - **Pluggable hashing**: Keccak-256 by default, SHA-256 or any other
//!   fixed-length digest via the [`Hasher`] trait
//! - **Dual representation**: flat level table for O(1) coordinate lookups,
//!   owned node graph for structural serialization
//! - **Compact proofs**: sibling-coordinate paths re-derive the root from a
//!   single leaf digest
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! ## Quick Start
//!
//! ```rust
//! use merkletree::{BuildOptions, Leaf, Leaves};
//!
//! let mut leaves = Leaves::new();
//! for payload in ["Hello", "Hi", "Hey", "Hola"] {
//!     leaves.add(Leaf::from_payload(payload.as_bytes().to_vec()));
//! }
//!
//! let options = BuildOptions::default();
//! let (tree, root) = leaves.build_tree(&options).unwrap();
//! assert_eq!(tree.root_digest().unwrap(), &root.digest);
//!
//! // Inclusion proof for the leaf at offset 2 ("Hey").
//! let path = tree.merkle_path(0, 2).unwrap();
//! let leaf_digest = tree.digest_at(0, 2).unwrap().clone();
//! assert!(tree.verify_proof(&path, &leaf_digest, options.hasher()).unwrap());
//! ```
//!
//! ## Unbalanced trees
//!
//! An odd number of entries at any level is handled by pairing the trailing
//! entry with itself; an odd leaf count additionally appends a clone of the
//! last leaf to the input collection before the build.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

// Module declarations
pub mod error;
pub mod hasher;
pub mod leaves;
pub mod node;
pub mod options;
pub mod path;
pub mod tree;
pub mod utils;

// Re-export core functionality
pub use error::{MerkleTreeError, Result};
pub use hasher::{Hasher, Keccak256Hasher, Sha256Hasher};
pub use leaves::Leaves;
pub use node::{Digest, Leaf, Node, Root};
pub use options::BuildOptions;
pub use path::{MerklePath, Position};
pub use tree::Tree;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
