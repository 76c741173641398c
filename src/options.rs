//! Build configuration.

use alloc::boxed::Box;

use crate::hasher::{Hasher, Keccak256Hasher};

/// Options consumed by [`Leaves::build_tree`](crate::leaves::Leaves::build_tree).
///
/// Defaults to Keccak-256 with leaf hashing enabled. There is no hidden
/// process-wide default; every build receives its configuration explicitly,
/// so results are reproducible independent of call order.
pub struct BuildOptions {
    hash_func: Box<dyn Hasher>,
    skip_hash: bool,
}

impl BuildOptions {
    /// Options with the default digest algorithm and leaf hashing enabled.
    pub fn new() -> Self {
        Self {
            hash_func: Box::new(Keccak256Hasher),
            skip_hash: false,
        }
    }

    /// Replace the digest algorithm.
    pub fn with_hash_func(mut self, hash_func: impl Hasher + 'static) -> Self {
        self.hash_func = Box::new(hash_func);
        self
    }

    /// When `true`, the builder trusts the digests already present on the
    /// leaves instead of hashing their payloads.
    pub fn with_skip_hash(mut self, skip_hash: bool) -> Self {
        self.skip_hash = skip_hash;
        self
    }

    /// The configured digest provider.
    pub fn hasher(&self) -> &dyn Hasher {
        self.hash_func.as_ref()
    }

    /// Whether leaf hashing is skipped.
    pub fn skip_hash(&self) -> bool {
        self.skip_hash
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for BuildOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BuildOptions")
            .field("skip_hash", &self.skip_hash)
            .finish_non_exhaustive()
    }
}
