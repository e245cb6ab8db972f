//! # Salt Specification Parsing
//!
//! A salt specification is either a bare setting (`$6$salt`,
//! `$6$rounds=N$salt`) or a complete hash string whose trailing digest
//! field is ignored. Parsing yields a [`ParsedSalt`]: the resolved rounds
//! count, whether the specification named rounds explicitly, and the salt
//! itself.
//!
//! ## Leniency
//!
//! - Explicit rounds outside the policy bounds are clamped, not rejected.
//! - Salts longer than the policy maximum are truncated.
//! - The salt alphabet is not validated; stored hashes pass through
//!   whatever bytes they carry, provided the truncated salt is UTF-8.

use crate::error::CryptError;
use crate::policy::{SaltPolicy, ROUNDS_PREFIX};

/// Salt and rounds resolved from a salt specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSalt {
    rounds: u32,
    rounds_explicit: bool,
    salt: String,
}

impl ParsedSalt {
    /// Parse a salt specification under `policy`.
    ///
    /// # Errors
    ///
    /// - [`CryptError::InvalidPolicy`] if `policy` fails
    ///   [`SaltPolicy::validate`].
    /// - [`CryptError::InvalidPrefix`] if `spec` does not start with the
    ///   magic prefix.
    /// - [`CryptError::InvalidFormat`] if there are fewer than three
    ///   `$`-delimited fields or the salt field is missing or empty.
    /// - [`CryptError::InvalidFormat`] if the salt, after truncation to
    ///   `salt_len_max` bytes, is not UTF-8. This includes a salt that is
    ///   valid UTF-8 as given but whose truncation point falls inside a
    ///   multibyte character, e.g. `$6$a` followed by eight `é`.
    /// - [`CryptError::InvalidRounds`] if the `rounds=` field is not a
    ///   decimal integer.
    pub fn parse(spec: &[u8], policy: &SaltPolicy) -> Result<Self, CryptError> {
        policy.validate()?;

        if !spec.starts_with(policy.magic_prefix.as_bytes()) {
            return Err(CryptError::InvalidPrefix {
                expected: policy.magic_prefix.to_string(),
            });
        }

        let tokens: Vec<&[u8]> = spec.split(|b| *b == b'$').collect();
        if tokens.len() < 3 {
            return Err(CryptError::InvalidFormat(format!(
                "expected at least 3 '$'-delimited fields, got {}",
                tokens.len()
            )));
        }

        let (rounds, rounds_explicit, salt) =
            match tokens[2].strip_prefix(ROUNDS_PREFIX.as_bytes()) {
                Some(digits) => {
                    let requested = parse_rounds(digits)?;
                    let rounds = policy.clamp_rounds(i64::from(requested));
                    if i64::from(rounds) != i64::from(requested) {
                        tracing::debug!(
                            requested,
                            rounds,
                            "explicit rounds clamped into policy bounds"
                        );
                    }
                    let salt = tokens.get(3).copied().ok_or_else(|| {
                        CryptError::InvalidFormat("missing salt after rounds field".into())
                    })?;
                    (rounds, true, salt)
                }
                None => (policy.rounds_default, false, tokens[2]),
            };

        let salt = &salt[..salt.len().min(policy.salt_len_max)];
        if salt.len() < policy.salt_len_min {
            return Err(CryptError::InvalidFormat(format!(
                "salt must be at least {} bytes, got {}",
                policy.salt_len_min,
                salt.len()
            )));
        }
        let salt = std::str::from_utf8(salt)
            .map_err(|_| CryptError::InvalidFormat("salt is not valid UTF-8".into()))?;

        tracing::debug!(
            rounds,
            rounds_explicit,
            salt_len = salt.len(),
            "parsed salt specification"
        );

        Ok(Self {
            rounds,
            rounds_explicit,
            salt: salt.to_owned(),
        })
    }

    /// Rounds to run, already clamped to the policy.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Whether the specification carried a `rounds=` field.
    pub fn rounds_explicit(&self) -> bool {
        self.rounds_explicit
    }

    /// The (possibly truncated) salt.
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Render the setting prefix of a hash string under `policy`:
    /// `prefix ‖ ["rounds=N$"] ‖ salt`.
    pub fn setting(&self, policy: &SaltPolicy) -> String {
        let mut out = String::with_capacity(policy.magic_prefix.len() + 17 + self.salt.len());
        out.push_str(&policy.magic_prefix);
        if self.rounds_explicit {
            out.push_str(ROUNDS_PREFIX);
            out.push_str(&self.rounds.to_string());
            out.push('$');
        }
        out.push_str(&self.salt);
        out
    }
}

fn parse_rounds(digits: &[u8]) -> Result<i32, CryptError> {
    std::str::from_utf8(digits)
        .ok()
        .and_then(|s| s.parse::<i32>().ok())
        .ok_or_else(|| {
            CryptError::InvalidRounds(format!("{:?}", String::from_utf8_lossy(digits)))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(spec: &str) -> Result<ParsedSalt, CryptError> {
        ParsedSalt::parse(spec.as_bytes(), &SaltPolicy::SHA512)
    }

    #[test]
    fn bare_salt_uses_default_rounds() {
        let p = parse("$6$saltstring").unwrap();
        assert_eq!(p.rounds(), 5000);
        assert!(!p.rounds_explicit());
        assert_eq!(p.salt(), "saltstring");
    }

    #[test]
    fn explicit_rounds_are_parsed() {
        let p = parse("$6$rounds=10000$saltstringsaltstring").unwrap();
        assert_eq!(p.rounds(), 10_000);
        assert!(p.rounds_explicit());
        assert_eq!(p.salt(), "saltstringsaltst");
    }

    #[test]
    fn explicit_default_rounds_stay_explicit() {
        let p = parse("$6$rounds=5000$abc").unwrap();
        assert_eq!(p.rounds(), 5000);
        assert!(p.rounds_explicit());
        assert_eq!(p.setting(&SaltPolicy::SHA512), "$6$rounds=5000$abc");
    }

    #[test]
    fn low_rounds_are_clamped_to_minimum() {
        assert_eq!(parse("$6$rounds=1$abc").unwrap().rounds(), 1000);
        assert_eq!(parse("$6$rounds=10$roundstoolow").unwrap().rounds(), 1000);
        assert_eq!(parse("$6$rounds=-20$abc").unwrap().rounds(), 1000);
    }

    #[test]
    fn high_rounds_are_clamped_to_maximum() {
        let p = parse("$6$rounds=2000000000$abc").unwrap();
        assert_eq!(p.rounds(), 999_999_999);
    }

    #[test]
    fn rounds_beyond_i32_are_rejected() {
        let err = parse("$6$rounds=99999999999$abc").unwrap_err();
        assert!(matches!(err, CryptError::InvalidRounds(_)));
    }

    #[test]
    fn non_numeric_rounds_are_rejected() {
        for spec in ["$6$rounds=abc$salt", "$6$rounds=$salt", "$6$rounds= 5$salt"] {
            let err = parse(spec).unwrap_err();
            assert!(matches!(err, CryptError::InvalidRounds(_)), "{spec}");
        }
    }

    #[test]
    fn missing_prefix_is_rejected() {
        for spec in ["", "$5$saltstring", "saltstring", "$6"] {
            let err = parse(spec).unwrap_err();
            assert!(matches!(err, CryptError::InvalidPrefix { .. }), "{spec}");
        }
    }

    #[test]
    fn missing_salt_after_rounds_is_rejected() {
        let err = parse("$6$rounds=5000").unwrap_err();
        assert!(matches!(err, CryptError::InvalidFormat(_)));
    }

    #[test]
    fn empty_salt_is_rejected() {
        let err = parse("$6$").unwrap_err();
        assert!(matches!(err, CryptError::InvalidFormat(_)));
        let err = parse("$6$rounds=5000$").unwrap_err();
        assert!(matches!(err, CryptError::InvalidFormat(_)));
    }

    #[test]
    fn malformed_prefix_policy_is_rejected() {
        let policy = SaltPolicy {
            magic_prefix: "$".into(),
            ..SaltPolicy::SHA512
        };
        let err = ParsedSalt::parse(b"$abc", &policy).unwrap_err();
        assert!(matches!(err, CryptError::InvalidPolicy(_)));
    }

    #[test]
    fn inverted_policy_is_rejected_instead_of_clamping() {
        let salt_bounds = SaltPolicy {
            salt_len_min: 8,
            salt_len_max: 4,
            ..SaltPolicy::SHA512
        };
        let err = ParsedSalt::parse(b"$6$saltstring", &salt_bounds).unwrap_err();
        assert!(matches!(err, CryptError::InvalidPolicy(_)));

        let rounds_bounds = SaltPolicy {
            rounds_min: 10_000,
            rounds_max: 1000,
            ..SaltPolicy::SHA512
        };
        let err = ParsedSalt::parse(b"$6$rounds=5000$abc", &rounds_bounds).unwrap_err();
        assert!(matches!(err, CryptError::InvalidPolicy(_)));
    }

    #[test]
    fn custom_prefix_policy_parses_and_renders() {
        let policy = SaltPolicy {
            magic_prefix: "$x$".into(),
            ..SaltPolicy::SHA512
        };
        let p = ParsedSalt::parse(b"$x$rounds=2000$abc", &policy).unwrap();
        assert_eq!(p.rounds(), 2000);
        assert_eq!(p.setting(&policy), "$x$rounds=2000$abc");
    }

    #[test]
    fn long_salt_is_truncated_to_sixteen_bytes() {
        let p = parse("$6$abcdefghijklmnopqrstuvwxy").unwrap();
        assert_eq!(p.salt(), "abcdefghijklmnop");
    }

    #[test]
    fn full_hash_string_is_accepted_as_spec() {
        let p = parse(
            "$6$rounds=11531$G/gkPn17kHYo0gTF$Kq.uZBHlSBXyzsOJXtxJruOOH4yc0Is13\
             uY7yK0PvAvXxbvc1w8DO1RzREMhKsc82K/Jh8OquV8FZUlreYPJk1",
        )
        .unwrap();
        assert_eq!(p.rounds(), 11_531);
        assert_eq!(p.salt(), "G/gkPn17kHYo0gTF");
    }

    #[test]
    fn non_utf8_salt_is_rejected() {
        let err = ParsedSalt::parse(b"$6$ab\xffcd", &SaltPolicy::SHA512).unwrap_err();
        assert!(matches!(err, CryptError::InvalidFormat(_)));
    }

    #[test]
    fn truncation_inside_multibyte_char_is_rejected() {
        // 'a' + eight two-byte 'é' is 17 bytes; the 16-byte cut splits the last one.
        let spec = format!("$6$a{}", "é".repeat(8));
        let err = parse(&spec).unwrap_err();
        assert!(matches!(err, CryptError::InvalidFormat(_)));

        let fits = format!("$6${}", "é".repeat(8));
        assert_eq!(parse(&fits).unwrap().salt(), "é".repeat(8));
    }

    #[test]
    fn setting_omits_implicit_rounds() {
        let p = parse("$6$saltstring").unwrap();
        assert_eq!(p.setting(&SaltPolicy::SHA512), "$6$saltstring");
    }

    #[test]
    fn setting_reports_clamped_rounds() {
        let p = parse("$6$rounds=1$abc").unwrap();
        assert_eq!(p.setting(&SaltPolicy::SHA512), "$6$rounds=1000$abc");
    }
}
