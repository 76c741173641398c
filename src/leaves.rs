//! Leaf collection and tree construction.
//!
//! [`Leaves`] is the caller-owned input sequence. It can be grown, hashed,
//! and sorted freely before a build; [`Leaves::build_tree`] then produces
//! the flat level table and the pointer-linked root in one pass.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::error::{MerkleTreeError, Result};
use crate::hasher::Hasher;
use crate::node::{Digest, Leaf, Node, Root};
use crate::options::BuildOptions;
use crate::tree::Tree;

/// Ordered collection of input leaves.
///
/// A build with an odd leaf count appends a clone of the last leaf, and the
/// duplicate stays visible here afterwards. Callers that rebuild from one
/// logical dataset concurrently must give every build its own clone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Leaves(Vec<Leaf>);

impl Leaves {
    /// An empty collection.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of leaves.
    pub fn length(&self) -> usize {
        self.0.len()
    }

    /// `true` when the collection holds no leaves.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The most recently appended leaf.
    pub fn last_leaf(&self) -> Option<&Leaf> {
        self.0.last()
    }

    /// Leaf at `index`.
    pub fn get(&self, index: usize) -> Option<&Leaf> {
        self.0.get(index)
    }

    /// Append a leaf.
    pub fn add(&mut self, leaf: Leaf) {
        self.0.push(leaf);
    }

    /// Deep copy with independent storage.
    pub fn clone_leaves(&self) -> Leaves {
        self.clone()
    }

    /// Compute every leaf digest as `hash(payload)`, overwriting digests
    /// already present. A leaf without a payload hashes the empty byte
    /// sequence.
    pub fn hash(&mut self, hasher: &dyn Hasher) -> Result<()> {
        for leaf in &mut self.0 {
            leaf.digest = hasher.hash(leaf.payload.as_deref().unwrap_or_default())?;
        }
        Ok(())
    }

    /// Sort leaves by digest, ascending byte-wise.
    pub fn sort_by_digest(&mut self) {
        self.0.sort_by(|a, b| a.digest.cmp(&b.digest));
    }

    /// Build the level table and node graph over the current leaves.
    ///
    /// Unless `options` skips hashing, every leaf digest is recomputed from
    /// its payload first. An odd leaf count is padded by appending a clone
    /// of the last leaf before construction. Digest provider errors abort
    /// the build; no partial table is returned.
    pub fn build_tree(&mut self, options: &BuildOptions) -> Result<(Tree, Root)> {
        if self.is_empty() {
            return Err(MerkleTreeError::EmptyLeaves);
        }

        let hasher = options.hasher();

        if !options.skip_hash() {
            self.hash(hasher)?;
        }

        if self.length() % 2 == 1 {
            let clone = self.0[self.length() - 1].clone();
            self.0.push(clone);
        }

        let mut levels: Vec<Vec<Digest>> = Vec::with_capacity(1);
        levels.push(self.0.iter().map(|leaf| leaf.digest.clone()).collect());

        let mut nodes: Vec<Node> = self.0.clone();
        while nodes.len() > 1 {
            let (branches, digests) = build_level(nodes, hasher)?;
            levels.push(digests);
            nodes = branches;
        }

        match nodes.pop() {
            Some(root) => Ok((Tree::from_levels(levels), root)),
            None => Err(MerkleTreeError::EmptyLeaves),
        }
    }
}

/// Hash one level into the next: scan left to right in steps of two,
/// pairing a trailing unpaired node with itself. Returns the next level's
/// nodes along with their digests in the same order.
fn build_level(nodes: Vec<Node>, hasher: &dyn Hasher) -> Result<(Vec<Node>, Vec<Digest>)> {
    let capacity = nodes.len().div_ceil(2);
    let mut branches = Vec::with_capacity(capacity);
    let mut digests = Vec::with_capacity(capacity);

    let mut nodes = nodes.into_iter();
    while let Some(left) = nodes.next() {
        let right = match nodes.next() {
            Some(node) => node,
            None => left.clone(),
        };

        let digest = hasher.hash(&crate::utils::concat(&left.digest, &right.digest))?;
        let level = core::cmp::max(left.level, right.level) + 1;

        digests.push(digest.clone());
        branches.push(Node {
            level,
            digest,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
            payload: None,
        });
    }

    Ok((branches, digests))
}
