//! # Error Types
//!
//! Structured errors for salt parsing, policy validation, and salt
//! generation. Uses `thiserror` for derive-based `Display` and `Error`.
//!
//! ## Design
//!
//! - Every variant is a deterministic input error; none are retryable.
//! - Out-of-range rounds values are clamped by the parser and never
//!   surface here.
//! - Messages never carry key material.

use thiserror::Error;

/// Errors from SHA-crypt salt handling and hash derivation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptError {
    /// The salt specification does not start with the policy's magic prefix.
    #[error("invalid salt prefix: expected {expected:?}")]
    InvalidPrefix {
        /// The magic prefix the policy requires.
        expected: String,
    },

    /// The salt specification has too few `$`-delimited fields, or an
    /// empty salt.
    #[error("invalid salt format: {0}")]
    InvalidFormat(String),

    /// The `rounds=` field is not a decimal integer.
    #[error("invalid rounds value: {0}")]
    InvalidRounds(String),

    /// The salt policy is internally inconsistent.
    #[error("invalid salt policy: {0}")]
    InvalidPolicy(String),

    /// The random source failed while generating a salt.
    #[error("random source failure: {0}")]
    Rng(String),
}
