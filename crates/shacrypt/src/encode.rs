//! # Output Encoder
//!
//! The final digest is reordered by a fixed permutation before radix-64
//! encoding. Read in groups of three, the table interleaves bytes `i`,
//! `i + 21`, and `i + 42`, rotating which one leads; byte 63 is encoded on
//! its own. The 64 permuted bytes yield 21 four-character groups plus one
//! two-character tail: 86 characters.

use shacrypt_core::radix64;
use zeroize::Zeroizing;

use crate::rounds::RoundState;
use crate::sequences::DIGEST_LEN;

/// Length of the encoded digest field of a `$6$` hash.
pub const ENCODED_DIGEST_LEN: usize = 86;

/// Source index in the final digest for each output byte position.
#[rustfmt::skip]
pub const PERMUTATION: [usize; DIGEST_LEN] = [
    42, 21,  0,
     1, 43, 22,
    23,  2, 44,
    45, 24,  3,
     4, 46, 25,
    26,  5, 47,
    48, 27,  6,
     7, 49, 28,
    29,  8, 50,
    51, 30,  9,
    10, 52, 31,
    32, 11, 53,
    54, 33, 12,
    13, 55, 34,
    35, 14, 56,
    57, 36, 15,
    16, 58, 37,
    38, 17, 59,
    60, 39, 18,
    19, 61, 40,
    41, 20, 62,
    63,
];

/// Permute and encode the final round digest.
pub fn encode_digest(state: &RoundState) -> String {
    let digest = state.digest();
    let mut permuted = Zeroizing::new([0u8; DIGEST_LEN]);
    for (dst, &src) in permuted.iter_mut().zip(PERMUTATION.iter()) {
        *dst = digest[src];
    }
    radix64::encode(&*permuted)
}
