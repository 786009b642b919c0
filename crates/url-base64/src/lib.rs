//! URL-safe base64 encoding and decoding.
//!
//! This crate implements the URL- and filename-safe base64 variant from
//! RFC 4648 §5, where `-` and `_` take the place of `+` and `/`:
//! - Encoding with or without trailing `=` padding ([`PaddingPolicy`])
//! - Decoding of padded and unpadded input alike
//! - Allocating variants and variants writing into caller-supplied buffers
//!
//! All functions are pure; the lookup tables are compile-time constants.
//!
//! # Example
//!
//! ```
//! use url_base64::{decode, encode, PaddingPolicy};
//!
//! let data = b"hello world";
//! let encoded = encode(data, PaddingPolicy::Discard);
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ");
//! let decoded = decode(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

use thiserror::Error;

mod constants;
mod from_base64_url;
mod from_base64_url_bin;
mod length;
mod padding;
mod to_base64_url;
mod to_base64_url_bin;

pub use constants::{ALPHABET_URL, ALPHABET_URL_BYTES, FORWARD, INVALID, PAD, REVERSE};
pub use from_base64_url::{decode, decode_bytes};
pub use from_base64_url_bin::decode_into;
pub use length::{
    checked_encoded_length, checked_max_encoded_length, decoded_length, encoded_length,
    max_decoded_length, max_encoded_length,
};
pub use padding::PaddingPolicy;
pub use to_base64_url::{encode, encode_to_vec};
pub use to_base64_url_bin::encode_into;

/// Error type for base64 operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// The input contains a character outside the alphabet, or its length
    /// (without padding) is `1 mod 4`.
    #[error("INVALID_ENCODING")]
    InvalidEncoding,
    /// A caller-supplied output buffer cannot hold the result.
    #[error("BUFFER_TOO_SMALL: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },
}
