//! Tests for buffer-supplied URL-safe base64 decoding (decode_into).

use rand::Rng;
use url_base64::{
    decode, decode_into, decoded_length, encode, max_decoded_length, Base64Error, PaddingPolicy,
};

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        for padding in [PaddingPolicy::Discard, PaddingPolicy::Preserve] {
            let encoded = encode(&blob, padding);

            let mut dest = vec![0u8; max_decoded_length(encoded.len())];
            let len = decode_into(encoded.as_bytes(), &mut dest).unwrap();
            assert_eq!(&dest[..len], blob.as_slice());
            assert_eq!(&dest[..len], decode(&encoded).unwrap().as_slice());
        }
    }
}

#[test]
fn exact_size_is_enough() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = encode(&blob, PaddingPolicy::Discard);
        let mut dest = vec![0u8; decoded_length(encoded.len()).unwrap()];
        assert_eq!(decode_into(encoded.as_bytes(), &mut dest), Ok(blob.len()));
        assert_eq!(dest, blob);
    }
}

#[test]
fn one_short_is_too_small() {
    for len in 1..20 {
        let blob = vec![7u8; len];
        let encoded = encode(&blob, PaddingPolicy::Preserve);
        let mut dest = vec![0u8; len - 1];
        assert_eq!(
            decode_into(encoded.as_bytes(), &mut dest),
            Err(Base64Error::BufferTooSmall {
                needed: len,
                available: len - 1
            })
        );
    }
}

#[test]
fn invalid_input() {
    let mut dest = vec![0u8; 16];
    assert_eq!(
        decode_into(b"invalid!", &mut dest),
        Err(Base64Error::InvalidEncoding)
    );
    assert_eq!(decode_into(b"!!", &mut dest), Err(Base64Error::InvalidEncoding));
    assert_eq!(decode_into(b"Zm9vY", &mut dest), Err(Base64Error::InvalidEncoding));
}

#[test]
fn empty_input() {
    let mut dest: Vec<u8> = Vec::new();
    assert_eq!(decode_into(b"", &mut dest), Ok(0));
}

#[test]
fn from_subslice() {
    let encoded = b"xxxxaGVsbG8="; // "xxxx" prefix, then "hello" encoded
    let mut dest = vec![0u8; 8];
    let len = decode_into(&encoded[4..], &mut dest).unwrap();
    assert_eq!(&dest[..len], b"hello");
}
