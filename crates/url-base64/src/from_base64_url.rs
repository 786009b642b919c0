//! URL-safe base64 decoding functions.

use crate::from_base64_url_bin::{decode_exact, strip_padding};
use crate::length::decoded_length;
use crate::Base64Error;

/// Decodes a URL-safe base64 string.
///
/// Padding is optional: `"Zg"` and `"Zg=="` both decode to `b"f"`. Standard
/// base64 symbols (`+` and `/`) are accepted in place of `-` and `_`.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidEncoding`] if the string contains a
/// character outside the alphabet or has an impossible length.
///
/// # Example
///
/// ```
/// use url_base64::decode;
///
/// assert_eq!(decode("aGVsbG8gd29ybGQ").unwrap(), b"hello world");
/// assert_eq!(decode("aGVsbG8gd29ybGQ=").unwrap(), b"hello world");
/// assert!(decode("invalid!").is_err());
/// ```
pub fn decode(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    decode_bytes(encoded.as_bytes())
}

/// Decodes URL-safe base64 from ASCII bytes.
///
/// Same as [`decode`] for input that is not held in a [`str`].
pub fn decode_bytes(encoded: &[u8]) -> Result<Vec<u8>, Base64Error> {
    let encoded = strip_padding(encoded);
    let mut buf = vec![0u8; decoded_length(encoded.len())?];
    decode_exact(encoded, &mut buf)?;
    Ok(buf)
}
