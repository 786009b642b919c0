/// URL-safe base64 alphabet (uses - and _ instead of + and /).
pub const ALPHABET_URL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// URL-safe base64 alphabet as a byte array (used for byte-level operations and const evaluation).
pub const ALPHABET_URL_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Padding character.
pub const PAD: u8 = b'=';

/// Reverse table entry for bytes outside the alphabet.
pub const INVALID: u8 = 0xFF;

/// Forward table: 6-bit value to its alphabet symbol.
pub static FORWARD: [u8; 64] = *ALPHABET_URL_BYTES;

/// Reverse table: byte to 6-bit value, or [`INVALID`].
///
/// The standard alphabet's `+` and `/` map to the same values as `-` and `_`,
/// so text produced by a regular base64 encoder decodes as well.
pub static REVERSE: [u8; 256] = build_reverse(ALPHABET_URL_BYTES);

const fn build_reverse(alphabet: &[u8; 64]) -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[alphabet[i] as usize] = i as u8;
        i += 1;
    }
    table[b'+' as usize] = 62;
    table[b'/' as usize] = 63;
    table
}

/// Pre-computed two-character lookup table for encoding.
/// Entry `i` holds the symbols for the upper and lower 6 bits of the 12-bit value `i`.
pub(crate) static TABLE2: [[u8; 2]; 4096] = {
    let mut table = [[0u8; 2]; 4096];
    let mut i = 0;
    while i < 64 {
        let mut j = 0;
        while j < 64 {
            let idx = i * 64 + j;
            table[idx][0] = ALPHABET_URL_BYTES[i];
            table[idx][1] = ALPHABET_URL_BYTES[j];
            j += 1;
        }
        i += 1;
    }
    table
};
