//! # shacrypt-core — Foundational Types for SHA-crypt
//!
//! The leaf crate of the workspace. It owns everything about a crypt hash
//! that is not the digest computation itself:
//!
//! - **`SaltPolicy`** — magic prefix, salt length bounds, rounds bounds and
//!   default. `SaltPolicy::SHA512` is the `$6$` policy; custom policies
//!   load through serde and are checked by `validate()`.
//! - **`ParsedSalt`** — the salt specification parser. Clamps explicit
//!   rounds, truncates long salts, and renders the setting prefix of a
//!   hash string.
//! - **`radix64`** — the crypt radix-64 encoder (`./0-9A-Za-z`,
//!   little-endian bit packing).
//! - **`CryptError`** — the structured error hierarchy.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `shacrypt` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod policy;
pub mod radix64;
pub mod salt;

pub use error::CryptError;
pub use policy::{SaltPolicy, MAX_SALT_LEN, ROUNDS_PREFIX};
pub use salt::ParsedSalt;
