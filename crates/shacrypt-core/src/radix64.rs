//! # Crypt Radix-64 Encoding
//!
//! The crypt family of hashes encodes binary data with its own base-64
//! variant. It differs from RFC 4648 base64 in two ways:
//!
//! - The alphabet is `./0-9A-Za-z`.
//! - Each group of up to three bytes is packed little-endian
//!   (`w = b0 | b1 << 8 | b2 << 16`) and emitted six bits at a time from
//!   the least significant end.
//!
//! A group of `n` bytes produces `n + 1` characters; there is no padding.

/// The crypt radix-64 alphabet.
pub const CRYPT_ALPHABET: &[u8; 64] =
    b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Number of characters produced for `len` input bytes.
pub fn encoded_len(len: usize) -> usize {
    (len / 3) * 4 + match len % 3 {
        0 => 0,
        rem => rem + 1,
    }
}

/// Encode `src` with the crypt radix-64 alphabet.
pub fn encode(src: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(src.len()));
    for group in src.chunks(3) {
        let mut w = 0u32;
        for (i, b) in group.iter().enumerate() {
            w |= u32::from(*b) << (8 * i);
        }
        for _ in 0..=group.len() {
            out.push(char::from(CRYPT_ALPHABET[(w & 0x3f) as usize]));
            w >>= 6;
        }
    }
    out
}

/// Whether `c` belongs to the crypt alphabet.
pub fn is_crypt_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'.' || c == b'/'
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every output character comes from the crypt alphabet.
        #[test]
        fn output_stays_in_alphabet(data in prop::collection::vec(any::<u8>(), 0..200)) {
            let encoded = encode(&data);
            prop_assert_eq!(encoded.len(), encoded_len(data.len()));
            prop_assert!(encoded.bytes().all(is_crypt_char));
        }
    }
}
