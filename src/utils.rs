//! Small shared helpers.

use alloc::string::String;
use alloc::vec::Vec;

/// Concatenate two digests into one hash input, left then right. This is
/// the exact byte layout the builder commits to; the verifier must use the
/// same ordering or every proof fails.
pub(crate) fn concat(left: &[u8], right: &[u8]) -> Vec<u8> {
    let mut message = Vec::with_capacity(left.len() + right.len());
    message.extend_from_slice(left);
    message.extend_from_slice(right);
    message
}

/// Render a digest as a lowercase hex string.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_order() {
        assert_eq!(concat(b"\x01", b"\x02\x03"), b"\x01\x02\x03");
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
    }
}
