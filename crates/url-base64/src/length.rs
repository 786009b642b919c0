//! Output length calculations, used to size buffers for the `_into` variants.

use crate::{Base64Error, PaddingPolicy};

/// Returns the length of the padded encoding of `input_length` bytes.
///
/// This is an upper bound for either padding policy.
///
/// # Panics
///
/// Panics if the result does not fit in a `usize`. This cannot happen for the
/// length of an actual slice; see [`checked_max_encoded_length`].
///
/// # Example
///
/// ```
/// use url_base64::max_encoded_length;
///
/// assert_eq!(max_encoded_length(0), 0);
/// assert_eq!(max_encoded_length(1), 4);
/// assert_eq!(max_encoded_length(3), 4);
/// assert_eq!(max_encoded_length(4), 8);
/// ```
#[inline]
pub const fn max_encoded_length(input_length: usize) -> usize {
    match checked_max_encoded_length(input_length) {
        Some(length) => length,
        None => panic!("encoded length exceeds usize::MAX"),
    }
}

/// Same as [`max_encoded_length`], returning `None` on overflow.
#[inline]
pub const fn checked_max_encoded_length(input_length: usize) -> Option<usize> {
    input_length.div_ceil(3).checked_mul(4)
}

/// Returns the exact encoded length of `input_length` bytes under `padding`.
///
/// # Panics
///
/// Panics if the result does not fit in a `usize`; see
/// [`checked_encoded_length`].
#[inline]
pub const fn encoded_length(input_length: usize, padding: PaddingPolicy) -> usize {
    match checked_encoded_length(input_length, padding) {
        Some(length) => length,
        None => panic!("encoded length exceeds usize::MAX"),
    }
}

/// Same as [`encoded_length`], returning `None` on overflow.
pub const fn checked_encoded_length(
    input_length: usize,
    padding: PaddingPolicy,
) -> Option<usize> {
    match padding {
        PaddingPolicy::Preserve => checked_max_encoded_length(input_length),
        PaddingPolicy::Discard => {
            let base = match (input_length / 3).checked_mul(4) {
                Some(base) => base,
                None => return None,
            };
            match input_length % 3 {
                0 => Some(base),
                1 => base.checked_add(2),
                _ => base.checked_add(3),
            }
        }
    }
}

/// Returns an upper bound for the decoded length of an encoded input of
/// `encoded_length` bytes, padded or not.
///
/// The bound is `floor(n / 4) * 3 + max(n % 4 - 1, 0)`. For padded input
/// (`n % 4 == 0`) that is the usual `floor(n / 4) * 3`; the extra term covers
/// unpadded input, for which `floor(n / 4) * 3` alone is too small.
///
/// # Example
///
/// ```
/// use url_base64::max_decoded_length;
///
/// assert_eq!(max_decoded_length(4), 3);
/// assert_eq!(max_decoded_length(8), 6);
/// // unpadded "Zm8" decodes to two bytes
/// assert_eq!(max_decoded_length(3), 2);
/// ```
#[inline]
pub const fn max_decoded_length(encoded_length: usize) -> usize {
    (encoded_length >> 2) * 3 + (encoded_length & 0b11).saturating_sub(1)
}

/// Returns the exact decoded length of an input of `unpadded_length`
/// characters, with trailing padding already removed.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidEncoding`] when `unpadded_length % 4 == 1`,
/// a length no byte sequence encodes to.
pub const fn decoded_length(unpadded_length: usize) -> Result<usize, Base64Error> {
    let base = (unpadded_length >> 2) * 3;
    match unpadded_length & 0b11 {
        0 => Ok(base),
        1 => Err(Base64Error::InvalidEncoding),
        2 => Ok(base + 1),
        _ => Ok(base + 2),
    }
}
