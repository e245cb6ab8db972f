//! # Mixing Sequences
//!
//! Builds the three byte sequences that the round mixer draws from:
//!
//! 1. `AltSum = SHA512(key ‖ salt ‖ key)`.
//! 2. `Asum` — digest of `key ‖ salt`, followed by `len(key)` bytes of
//!    cyclic `AltSum`, followed by one `AltSum` or `key` per bit of
//!    `len(key)` (LSB first; 1 selects `AltSum`). `Asum` seeds the rounds.
//! 3. `p_seq` — `len(key)` bytes of cyclic `SHA512(key × len(key))`.
//! 4. `s_seq` — `len(salt)` bytes of cyclic
//!    `SHA512(salt × (16 + Asum[0]))`.
//!
//! ## Erasure
//!
//! Every value here is correlated with the key. `MixSequences` wipes itself
//! on drop, intermediate sums live in `Zeroizing` buffers, and each digest
//! output is wiped after it is copied out.
//!
//! The hasher's own block buffer is not covered. `finalize_reset` rewinds
//! the buffer position but `sha2` leaves up to 128 bytes of the last input
//! block (key, `AltSum` or `p_seq` material) in the hasher until it is
//! dropped, and nothing here overwrites that memory.

use sha2::{Digest, Sha512};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Length of a SHA-512 digest in bytes.
pub const DIGEST_LEN: usize = 64;

/// Finalize `hasher` into `out`, leaving the hasher reset and the
/// intermediate output wiped. The hasher's block buffer keeps its bytes.
pub(crate) fn finalize_into(hasher: &mut Sha512, out: &mut [u8; DIGEST_LEN]) {
    let mut sum = hasher.finalize_reset();
    out.copy_from_slice(&sum);
    sum.as_mut_slice().zeroize();
}

/// Feed `len` bytes of `sum` repeated end to end.
fn update_cyclic(hasher: &mut Sha512, sum: &[u8; DIGEST_LEN], len: usize) {
    let mut remaining = len;
    while remaining > DIGEST_LEN {
        hasher.update(sum);
        remaining -= DIGEST_LEN;
    }
    hasher.update(&sum[..remaining]);
}

/// `len` bytes of `sum` repeated end to end, allocated once at full size.
fn cyclic_sequence(sum: &[u8; DIGEST_LEN], len: usize) -> Vec<u8> {
    let mut seq = Vec::with_capacity(len);
    let mut remaining = len;
    while remaining > DIGEST_LEN {
        seq.extend_from_slice(sum);
        remaining -= DIGEST_LEN;
    }
    seq.extend_from_slice(&sum[..remaining]);
    seq
}

/// The derived mixing material for one hash computation.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct MixSequences {
    alt_digest: [u8; DIGEST_LEN],
    p_seq: Vec<u8>,
    s_seq: Vec<u8>,
}

impl MixSequences {
    /// Derive `Asum`, `p_seq`, and `s_seq` from `key` and `salt`.
    pub fn build(key: &[u8], salt: &[u8]) -> Self {
        let mut seqs = Self {
            alt_digest: [0u8; DIGEST_LEN],
            p_seq: Vec::new(),
            s_seq: Vec::new(),
        };
        let mut hasher = Sha512::new();

        hasher.update(key);
        hasher.update(salt);
        hasher.update(key);
        let mut alt_sum = Zeroizing::new([0u8; DIGEST_LEN]);
        finalize_into(&mut hasher, &mut alt_sum);

        hasher.update(key);
        hasher.update(salt);
        update_cyclic(&mut hasher, &alt_sum, key.len());
        let mut bits = key.len();
        while bits > 0 {
            if bits & 1 != 0 {
                hasher.update(&*alt_sum);
            } else {
                hasher.update(key);
            }
            bits >>= 1;
        }
        finalize_into(&mut hasher, &mut seqs.alt_digest);
        drop(alt_sum);

        for _ in 0..key.len() {
            hasher.update(key);
        }
        let mut p_sum = Zeroizing::new([0u8; DIGEST_LEN]);
        finalize_into(&mut hasher, &mut p_sum);
        seqs.p_seq = cyclic_sequence(&p_sum, key.len());
        drop(p_sum);

        for _ in 0..16 + usize::from(seqs.alt_digest[0]) {
            hasher.update(salt);
        }
        let mut s_sum = Zeroizing::new([0u8; DIGEST_LEN]);
        finalize_into(&mut hasher, &mut s_sum);
        seqs.s_seq = cyclic_sequence(&s_sum, salt.len());

        seqs
    }

    /// `Asum`, the initial round state.
    pub fn alt_digest(&self) -> &[u8; DIGEST_LEN] {
        &self.alt_digest
    }

    /// The P-sequence; same length as the key.
    pub fn p_seq(&self) -> &[u8] {
        &self.p_seq
    }

    /// The S-sequence; same length as the salt.
    pub fn s_seq(&self) -> &[u8] {
        &self.s_seq
    }
}

impl std::fmt::Debug for MixSequences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MixSequences")
            .field("p_seq_len", &self.p_seq.len())
            .field("s_seq_len", &self.s_seq.len())
            .finish_non_exhaustive()
    }
}
