//! # Round Mixer
//!
//! Starting from `C = Asum`, each round `i` digests:
//!
//! | step | condition      | input              |
//! |------|----------------|--------------------|
//! | 1    | `i` odd / even | `p_seq` / `C`      |
//! | 2    | `i % 3 != 0`   | `s_seq`            |
//! | 3    | `i % 7 != 0`   | `p_seq`            |
//! | 4    | `i` odd / even | `C` / `p_seq`      |
//!
//! and the result becomes the next `C`. The rounds count is executed
//! exactly; cost is linear in it.
//!
//! `RoundState` is wiped on drop. The loop's hasher is not: its block
//! buffer still holds tail bytes of the last round's input when it goes
//! out of scope (see the erasure notes in [`crate::sequences`]).

use sha2::{Digest, Sha512};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::sequences::{finalize_into, MixSequences, DIGEST_LEN};

/// The digest `C` carried between rounds. Wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct RoundState {
    digest: [u8; DIGEST_LEN],
}

impl RoundState {
    /// Run `rounds` iterations over `seqs`, seeded with its `Asum`.
    pub fn mix(seqs: &MixSequences, rounds: u32) -> Self {
        let mut state = Self {
            digest: [0u8; DIGEST_LEN],
        };
        state.digest.copy_from_slice(seqs.alt_digest());

        let mut hasher = Sha512::new();
        for i in 0..rounds {
            let odd = i & 1 != 0;
            if odd {
                hasher.update(seqs.p_seq());
            } else {
                hasher.update(&state.digest);
            }
            if i % 3 != 0 {
                hasher.update(seqs.s_seq());
            }
            if i % 7 != 0 {
                hasher.update(seqs.p_seq());
            }
            if odd {
                hasher.update(&state.digest);
            } else {
                hasher.update(seqs.p_seq());
            }
            finalize_into(&mut hasher, &mut state.digest);
        }
        state
    }

    /// The current digest.
    pub fn digest(&self) -> &[u8; DIGEST_LEN] {
        &self.digest
    }
}

impl std::fmt::Debug for RoundState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundState").finish_non_exhaustive()
    }
}
