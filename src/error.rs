//! Error types for Merkle tree operations.

use alloc::string::String;

/// Errors that can occur while building, addressing, proving, or
/// serializing a Merkle tree.
///
/// Verification mismatches are not errors: a proof that recomputes the
/// wrong root yields `Ok(false)`. Only structural problems surface here.
#[derive(Debug)]
pub enum MerkleTreeError {
    /// No leaves were supplied to the builder
    EmptyLeaves,
    /// Query against an absent or unbuilt level table
    EmptyTree,
    /// Level or offset outside the bounds of the level table
    InvalidCoordinate {
        level: u64,
        offset: u64,
    },
    /// The underlying digest primitive reported an error
    DigestFailure {
        reason: String,
    },
    /// Malformed bytes handed to an unmarshal operation
    Serialization {
        reason: String,
    },
}

impl core::fmt::Display for MerkleTreeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyLeaves => {
                write!(f, "not found leaf")
            }
            Self::EmptyTree => {
                write!(f, "tree is empty")
            }
            Self::InvalidCoordinate { level, offset } => {
                write!(f, "invalid coordinate ({}, {})", level, offset)
            }
            Self::DigestFailure { reason } => {
                write!(f, "digest failure: {}", reason)
            }
            Self::Serialization { reason } => {
                write!(f, "serialization failed: {}", reason)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MerkleTreeError {}

/// Result type alias for Merkle tree operations.
pub type Result<T> = core::result::Result<T, MerkleTreeError>;
