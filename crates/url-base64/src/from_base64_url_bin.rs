//! Buffer-supplied URL-safe base64 decoding.

use crate::constants::{INVALID, PAD, REVERSE};
use crate::length::decoded_length;
use crate::Base64Error;

/// Decodes `view` into the front of `dest`, returning the number of bytes written.
///
/// Up to two trailing `=` are accepted and ignored. `dest` must hold the exact
/// decoded length; [`max_decoded_length`](crate::max_decoded_length) of
/// `view.len()` is always enough.
///
/// # Errors
///
/// - [`Base64Error::InvalidEncoding`] if `view` has a length no encoding can
///   produce or contains a byte outside the alphabet.
/// - [`Base64Error::BufferTooSmall`] if the input is well-formed in length but
///   `dest` cannot hold the result.
///
/// # Example
///
/// ```
/// use url_base64::decode_into;
///
/// let mut dest = [0u8; 8];
/// let len = decode_into(b"aGVsbG8", &mut dest).unwrap();
/// assert_eq!(&dest[..len], b"hello");
/// ```
pub fn decode_into(view: &[u8], dest: &mut [u8]) -> Result<usize, Base64Error> {
    let view = strip_padding(view);
    let length = decoded_length(view.len())?;
    if dest.len() < length {
        return Err(Base64Error::BufferTooSmall {
            needed: length,
            available: dest.len(),
        });
    }
    decode_exact(view, &mut dest[..length])?;
    Ok(length)
}

/// Removes at most two trailing padding characters.
pub(crate) fn strip_padding(view: &[u8]) -> &[u8] {
    let mut end = view.len();
    while end > 0 && view.len() - end < 2 && view[end - 1] == PAD {
        end -= 1;
    }
    &view[..end]
}

/// The core decode loop.
///
/// `view` has its padding stripped and a length that is not `1 mod 4`; `dest`
/// is sized to exactly [`decoded_length`] of it.
pub(crate) fn decode_exact(view: &[u8], dest: &mut [u8]) -> Result<(), Base64Error> {
    let quartets = view.chunks_exact(4);
    let rest = quartets.remainder();
    let (body, tail) = dest.split_at_mut(view.len() / 4 * 3);

    for (src, out) in quartets.zip(body.chunks_exact_mut(3)) {
        let sextet0 = sextet(src[0])?;
        let sextet1 = sextet(src[1])?;
        let sextet2 = sextet(src[2])?;
        let sextet3 = sextet(src[3])?;

        out[0] = (sextet0 << 2) | (sextet1 >> 4);
        out[1] = (sextet1 << 4) | (sextet2 >> 2);
        out[2] = (sextet2 << 6) | sextet3;
    }

    match rest.len() {
        0 => {}
        2 => {
            let sextet0 = sextet(rest[0])?;
            let sextet1 = sextet(rest[1])?;
            tail[0] = (sextet0 << 2) | (sextet1 >> 4);
        }
        3 => {
            let sextet0 = sextet(rest[0])?;
            let sextet1 = sextet(rest[1])?;
            let sextet2 = sextet(rest[2])?;
            tail[0] = (sextet0 << 2) | (sextet1 >> 4);
            tail[1] = (sextet1 << 4) | (sextet2 >> 2);
        }
        _ => return Err(Base64Error::InvalidEncoding),
    }

    Ok(())
}

#[inline]
fn sextet(octet: u8) -> Result<u8, Base64Error> {
    match REVERSE[octet as usize] {
        INVALID => Err(Base64Error::InvalidEncoding),
        value => Ok(value),
    }
}
