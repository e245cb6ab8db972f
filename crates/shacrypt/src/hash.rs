//! # Hash Generation
//!
//! Drives the pipeline: parse the salt specification, build the mixing
//! sequences, run the rounds, encode the result, and assemble
//! `prefix ‖ ["rounds=N$"] ‖ salt ‖ "$" ‖ digest`.
//!
//! An empty salt specification requests a fresh random salt of maximal
//! length with an explicit default rounds field.

use rand_core::{CryptoRng, OsRng, RngCore};
use shacrypt_core::{CryptError, ParsedSalt, SaltPolicy};

use crate::encode::{encode_digest, ENCODED_DIGEST_LEN};
use crate::rounds::RoundState;
use crate::sequences::MixSequences;

/// Hash `key` under the `$6$` policy.
///
/// `salt_spec` is a setting (`$6$salt`, `$6$rounds=N$salt`) or a complete
/// hash string. If it is empty a random salt is generated from the OS RNG.
pub fn generate(key: &[u8], salt_spec: &[u8]) -> Result<String, CryptError> {
    generate_with_policy(&SaltPolicy::SHA512, key, salt_spec)
}

/// Hash `key` with a random salt and the default rounds count.
pub fn hash_password(key: &[u8]) -> Result<String, CryptError> {
    generate(key, b"")
}

/// Hash `key` under a caller-supplied policy.
pub fn generate_with_policy(
    policy: &SaltPolicy,
    key: &[u8],
    salt_spec: &[u8],
) -> Result<String, CryptError> {
    generate_with_rng(policy, &mut OsRng, key, salt_spec)
}

/// Hash `key` under `policy`, drawing any generated salt from `rng`.
pub fn generate_with_rng<R>(
    policy: &SaltPolicy,
    rng: &mut R,
    key: &[u8],
    salt_spec: &[u8],
) -> Result<String, CryptError>
where
    R: RngCore + CryptoRng,
{
    policy.validate()?;

    let generated;
    let salt_spec = if salt_spec.is_empty() {
        generated =
            policy.generate_salt_with_rounds(rng, policy.salt_len_max, policy.rounds_default)?;
        generated.as_bytes()
    } else {
        salt_spec
    };

    let parsed = ParsedSalt::parse(salt_spec, policy)?;
    Ok(derive_hash(policy, &parsed, key))
}

/// Derive the hash string for `key` from an already parsed salt.
pub fn derive_hash(policy: &SaltPolicy, parsed: &ParsedSalt, key: &[u8]) -> String {
    let state = {
        let seqs = MixSequences::build(key, parsed.salt().as_bytes());
        RoundState::mix(&seqs, parsed.rounds())
    };
    let encoded = encode_digest(&state);
    drop(state);

    let mut out = parsed.setting(policy);
    out.reserve(1 + ENCODED_DIGEST_LEN);
    out.push('$');
    out.push_str(&encoded);
    out
}
