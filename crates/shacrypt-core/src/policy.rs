//! # Salt Policy
//!
//! Bounds and defaults that govern a crypt variant: the magic prefix, the
//! permitted salt length, and the permitted rounds range. The policy is
//! read-only configuration, safe to share across threads.
//!
//! `SaltPolicy::SHA512` is the `$6$` policy from Drepper's SHA-crypt
//! document. A policy loaded from configuration is checked with
//! [`SaltPolicy::validate`]; salt generation and parsing run that check
//! themselves and report [`CryptError::InvalidPolicy`] rather than act on
//! inverted bounds.
//!
//! ## Salt Generation
//!
//! Random salts are drawn from a caller-supplied `CryptoRng`, encoded with
//! the crypt radix-64 alphabet, and returned as a salt specification
//! (`$6$salt` or `$6$rounds=N$salt`) ready to be passed to the parser.

use std::borrow::Cow;

use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::error::CryptError;
use crate::radix64;

/// Literal that introduces an explicit rounds field.
pub const ROUNDS_PREFIX: &str = "rounds=";

/// Upper bound on stored salt length imposed by the SHA-crypt algorithm.
pub const MAX_SALT_LEN: usize = 16;

/// Policy constants for a crypt variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaltPolicy {
    /// Marker identifying the variant, e.g. `$6$`.
    pub magic_prefix: Cow<'static, str>,
    /// Shortest accepted salt, in bytes.
    pub salt_len_min: usize,
    /// Longest stored salt, in bytes. Longer salts are truncated.
    pub salt_len_max: usize,
    /// Lower clamp for explicit rounds.
    pub rounds_min: u32,
    /// Upper clamp for explicit rounds.
    pub rounds_max: u32,
    /// Rounds used when the salt specification does not name any.
    pub rounds_default: u32,
}

impl SaltPolicy {
    /// The SHA-512 crypt (`$6$`) policy.
    pub const SHA512: SaltPolicy = SaltPolicy {
        magic_prefix: Cow::Borrowed("$6$"),
        salt_len_min: 1,
        salt_len_max: MAX_SALT_LEN,
        rounds_min: 1000,
        rounds_max: 999_999_999,
        rounds_default: 5000,
    };

    /// Check that the policy is internally consistent.
    pub fn validate(&self) -> Result<(), CryptError> {
        let prefix = self.magic_prefix.as_ref();
        if prefix.len() < 3 || !prefix.starts_with('$') || !prefix.ends_with('$') {
            return Err(CryptError::InvalidPolicy(format!(
                "magic prefix must be delimited by '$', got {prefix:?}"
            )));
        }
        if prefix[1..prefix.len() - 1].contains('$') {
            return Err(CryptError::InvalidPolicy(format!(
                "magic prefix must contain exactly one identifier field, got {prefix:?}"
            )));
        }
        if self.salt_len_min == 0 {
            return Err(CryptError::InvalidPolicy(
                "salt_len_min must be at least 1".into(),
            ));
        }
        if self.salt_len_min > self.salt_len_max {
            return Err(CryptError::InvalidPolicy(format!(
                "salt_len_min ({}) exceeds salt_len_max ({})",
                self.salt_len_min, self.salt_len_max
            )));
        }
        if self.salt_len_max > MAX_SALT_LEN {
            return Err(CryptError::InvalidPolicy(format!(
                "salt_len_max ({}) exceeds the algorithm limit of {MAX_SALT_LEN}",
                self.salt_len_max
            )));
        }
        if self.rounds_min == 0 {
            return Err(CryptError::InvalidPolicy(
                "rounds_min must be at least 1".into(),
            ));
        }
        if self.rounds_min > self.rounds_max {
            return Err(CryptError::InvalidPolicy(format!(
                "rounds_min ({}) exceeds rounds_max ({})",
                self.rounds_min, self.rounds_max
            )));
        }
        if !(self.rounds_min..=self.rounds_max).contains(&self.rounds_default) {
            return Err(CryptError::InvalidPolicy(format!(
                "rounds_default ({}) outside [{}, {}]",
                self.rounds_default, self.rounds_min, self.rounds_max
            )));
        }
        Ok(())
    }

    /// Clamp a rounds value into `[rounds_min, rounds_max]`.
    ///
    /// On a policy with `rounds_min > rounds_max` the result is `rounds_max`.
    pub fn clamp_rounds(&self, rounds: i64) -> u32 {
        let clamped = rounds
            .max(i64::from(self.rounds_min))
            .min(i64::from(self.rounds_max));
        u32::try_from(clamped).unwrap_or(self.rounds_max)
    }

    /// Generate a salt specification `prefix ‖ salt` with a random salt of
    /// `len` characters (clamped into the policy's salt length bounds).
    pub fn generate_salt<R>(&self, rng: &mut R, len: usize) -> Result<String, CryptError>
    where
        R: RngCore + CryptoRng,
    {
        self.validate()?;
        let salt = self.random_salt(rng, len)?;
        Ok(format!("{}{salt}", self.magic_prefix))
    }

    /// Generate a salt specification carrying an explicit rounds field:
    /// `prefix ‖ "rounds=N$" ‖ salt`. `rounds` is clamped to the policy.
    pub fn generate_salt_with_rounds<R>(
        &self,
        rng: &mut R,
        len: usize,
        rounds: u32,
    ) -> Result<String, CryptError>
    where
        R: RngCore + CryptoRng,
    {
        self.validate()?;
        let salt = self.random_salt(rng, len)?;
        let rounds = self.clamp_rounds(i64::from(rounds));
        Ok(format!(
            "{}{ROUNDS_PREFIX}{rounds}${salt}",
            self.magic_prefix
        ))
    }

    /// Callers validate the policy first, so the length bounds are ordered.
    fn random_salt<R>(&self, rng: &mut R, len: usize) -> Result<String, CryptError>
    where
        R: RngCore + CryptoRng,
    {
        let len = len.clamp(self.salt_len_min, self.salt_len_max);
        let mut raw = vec![0u8; (len * 6).div_ceil(8)];
        rng.try_fill_bytes(&mut raw)
            .map_err(|e| CryptError::Rng(e.to_string()))?;
        let mut salt = radix64::encode(&raw);
        salt.truncate(len);
        Ok(salt)
    }
}

impl Default for SaltPolicy {
    fn default() -> Self {
        Self::SHA512
    }
}
