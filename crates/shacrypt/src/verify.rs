//! # Verification
//!
//! A candidate key is verified by re-deriving a hash with the stored hash
//! string as the salt specification and comparing the two strings in
//! constant time.
//!
//! Verification never fails with an error: a malformed stored hash and a
//! wrong key both yield `false`, so callers cannot use the result as a
//! format oracle.

use shacrypt_core::SaltPolicy;
use subtle::ConstantTimeEq;

use crate::hash::generate_with_policy;

/// Verify `key` against a `$6$` hash string.
pub fn verify(key: &[u8], hash: &str) -> bool {
    verify_with_policy(&SaltPolicy::SHA512, key, hash)
}

/// Verify `key` against a hash string produced under `policy`.
pub fn verify_with_policy(policy: &SaltPolicy, key: &[u8], hash: &str) -> bool {
    // An empty spec would request a fresh random salt.
    if hash.is_empty() {
        return false;
    }
    match generate_with_policy(policy, key, hash.as_bytes()) {
        Ok(candidate) => candidate.as_bytes().ct_eq(hash.as_bytes()).into(),
        Err(e) => {
            tracing::debug!(error = %e, "stored hash could not be re-derived; verification fails");
            false
        }
    }
}
