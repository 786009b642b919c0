//! URL-safe base64 encoding functions.

use crate::length::encoded_length;
use crate::to_base64_url_bin::encode_exact;
use crate::PaddingPolicy;

/// Encodes a byte slice to a URL-safe base64 string.
///
/// This uses the URL-safe alphabet (`-` and `_` instead of `+` and `/`).
/// Trailing `=` padding is only emitted with [`PaddingPolicy::Preserve`].
///
/// # Example
///
/// ```
/// use url_base64::{encode, PaddingPolicy};
///
/// assert_eq!(encode(b"hello world", PaddingPolicy::Discard), "aGVsbG8gd29ybGQ");
/// assert_eq!(encode(b"hello world", PaddingPolicy::Preserve), "aGVsbG8gd29ybGQ=");
/// ```
pub fn encode(uint8: &[u8], padding: PaddingPolicy) -> String {
    String::from_utf8(encode_to_vec(uint8, padding)).expect("base64 alphabet is ASCII")
}

/// Encodes a byte slice to URL-safe base64, returning the ASCII bytes.
///
/// Same output as [`encode`] without going through a [`String`].
pub fn encode_to_vec(uint8: &[u8], padding: PaddingPolicy) -> Vec<u8> {
    let mut out = vec![0u8; encoded_length(uint8.len(), padding)];
    encode_exact(uint8, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(encode(b"", PaddingPolicy::Discard), "");
        assert_eq!(encode(b"", PaddingPolicy::Preserve), "");
    }

    #[test]
    fn test_foo() {
        assert_eq!(encode(b"foo", PaddingPolicy::default()), "Zm9v");
    }

    #[test]
    fn test_padding_policies() {
        assert_eq!(encode(b"1", PaddingPolicy::Preserve), "MQ==");
        assert_eq!(encode(b"1", PaddingPolicy::Discard), "MQ");
        assert_eq!(encode(b"11", PaddingPolicy::Preserve), "MTE=");
        assert_eq!(encode(b"11", PaddingPolicy::Discard), "MTE");
        assert_eq!(encode(b"111", PaddingPolicy::Preserve), "MTEx");
        assert_eq!(encode(b"111", PaddingPolicy::Discard), "MTEx");
    }

    #[test]
    fn test_various_lengths() {
        // RFC 4648 test vectors
        assert_eq!(encode(b"f", PaddingPolicy::Preserve), "Zg==");
        assert_eq!(encode(b"fo", PaddingPolicy::Preserve), "Zm8=");
        assert_eq!(encode(b"foob", PaddingPolicy::Preserve), "Zm9vYg==");
        assert_eq!(encode(b"fooba", PaddingPolicy::Preserve), "Zm9vYmE=");
        assert_eq!(encode(b"foobar", PaddingPolicy::Preserve), "Zm9vYmFy");
    }

    #[test]
    fn test_url_safe_symbols() {
        // 0xfb 0xff encodes to "+/8=" in standard base64
        assert_eq!(encode(&[0xfb, 0xff], PaddingPolicy::Preserve), "-_8=");
        assert_eq!(encode(&[0xff; 3], PaddingPolicy::Discard), "____");
        assert_eq!(encode(&[0xf8], PaddingPolicy::Discard), "-A");
    }

    #[test]
    fn test_binary_data() {
        let data: Vec<u8> = (0..=255).collect();
        let encoded = encode(&data, PaddingPolicy::Preserve);
        for c in encoded.chars() {
            assert!(
                c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '=',
                "Invalid base64url character: {}",
                c
            );
        }
        assert_eq!(encode_to_vec(&data, PaddingPolicy::Preserve), encoded.as_bytes());
    }
}
