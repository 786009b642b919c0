//! Buffer-supplied URL-safe base64 encoding.

use crate::constants::{FORWARD, PAD, TABLE2};
use crate::length::encoded_length;
use crate::{Base64Error, PaddingPolicy};

/// Encodes `uint8` into the front of `dest`, returning the number of bytes written.
///
/// `dest` must hold at least [`encoded_length`]`(uint8.len(), padding)` bytes;
/// [`max_encoded_length`](crate::max_encoded_length) is always enough.
///
/// # Errors
///
/// Returns [`Base64Error::BufferTooSmall`] if `dest` is too short. Nothing is
/// written in that case.
///
/// # Example
///
/// ```
/// use url_base64::{encode_into, PaddingPolicy};
///
/// let mut dest = [0u8; 16];
/// let len = encode_into(b"hello", &mut dest, PaddingPolicy::Discard).unwrap();
/// assert_eq!(&dest[..len], b"aGVsbG8");
/// ```
pub fn encode_into(
    uint8: &[u8],
    dest: &mut [u8],
    padding: PaddingPolicy,
) -> Result<usize, Base64Error> {
    let length = encoded_length(uint8.len(), padding);
    if dest.len() < length {
        return Err(Base64Error::BufferTooSmall {
            needed: length,
            available: dest.len(),
        });
    }
    encode_exact(uint8, &mut dest[..length]);
    Ok(length)
}

/// The core encode loop. `dest` must be sized exactly for the chosen padding.
pub(crate) fn encode_exact(uint8: &[u8], dest: &mut [u8]) {
    let extra_length = uint8.len() % 3;
    let base_length = uint8.len() - extra_length;

    let (body, tail) = dest.split_at_mut(base_length / 3 * 4);
    for (src, out) in uint8[..base_length]
        .chunks_exact(3)
        .zip(body.chunks_exact_mut(4))
    {
        let v1 = ((src[0] as usize) << 4) | ((src[1] as usize) >> 4);
        let v2 = (((src[1] & 0b1111) as usize) << 8) | (src[2] as usize);
        out[..2].copy_from_slice(&TABLE2[v1]);
        out[2..].copy_from_slice(&TABLE2[v2]);
    }

    match extra_length {
        1 => {
            let v1 = (uint8[base_length] as usize) << 4;
            tail[..2].copy_from_slice(&TABLE2[v1]);
        }
        2 => {
            let o1 = uint8[base_length];
            let o2 = uint8[base_length + 1];
            let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
            let v2 = ((o2 & 0b1111) as usize) << 2;
            tail[..2].copy_from_slice(&TABLE2[v1]);
            tail[2] = FORWARD[v2];
        }
        _ => {}
    }

    let written = extra_length + usize::from(extra_length > 0);
    tail[written..].fill(PAD);
}
