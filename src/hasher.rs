//! Digest providers.
//!
//! The tree never hashes anything itself; it invokes a [`Hasher`] supplied
//! through [`BuildOptions`](crate::options::BuildOptions). Keccak-256 is the
//! default, SHA-256 ships as an alternative, and any other fixed-length
//! digest can be plugged in by implementing the trait.

use sha2::Sha256;
use sha3::{Digest as _, Keccak256};

use crate::error::Result;
use crate::node::Digest;

/// A deterministic digest capability: byte sequence in, fixed-length
/// digest out. The output length must not vary within one build.
///
/// Implementations fail only on unrecoverable errors in the underlying
/// primitive; such errors abort the operation that invoked them.
pub trait Hasher {
    /// Compute the digest of `msg`.
    fn hash(&self, msg: &[u8]) -> Result<Digest>;
}

/// Keccak-256, the default digest algorithm.
///
/// This is the pre-standardization Keccak used by Ethereum, not the NIST
/// SHA3-256 variant.
#[derive(Clone, Copy, Debug, Default)]
pub struct Keccak256Hasher;

impl Hasher for Keccak256Hasher {
    fn hash(&self, msg: &[u8]) -> Result<Digest> {
        let mut hasher = Keccak256::new();
        hasher.update(msg);
        Ok(hasher.finalize().to_vec())
    }
}

/// SHA-256 digest provider.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Hasher;

impl Hasher for Sha256Hasher {
    fn hash(&self, msg: &[u8]) -> Result<Digest> {
        let mut hasher = Sha256::new();
        hasher.update(msg);
        Ok(hasher.finalize().to_vec())
    }
}
