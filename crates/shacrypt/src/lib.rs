//! # shacrypt — SHA-512 crypt (`$6$`) Password Hashing
//!
//! Implements Drepper's SHA-crypt construction on SHA-512:
//!
//! - **`sequences`** — derives `Asum`, the P-sequence, and the S-sequence
//!   from the key and salt.
//! - **`rounds`** — the parity/modulo round mixer.
//! - **`encode`** — the fixed digest permutation and crypt radix-64
//!   encoding.
//! - **`hash`** — `generate` and friends, assembling the hash string.
//! - **`verify`** — constant-time verification of a key against a stored
//!   hash.
//!
//! Salt parsing, policy, and the radix-64 alphabet live in
//! [`shacrypt_core`].
//!
//! ```
//! let hash = shacrypt::generate(b"Hello world!", b"$6$saltstring").unwrap();
//! assert_eq!(
//!     hash,
//!     "$6$saltstring$svn8UoSVapNtMuq1ukKS4tPQd8iKwSMHWjl/O817G3uBnIFNjnQJu\
//!      esI68u4OTLiBFdcbYEdFCoEOfaS35inz1"
//! );
//! assert!(shacrypt::verify(b"Hello world!", &hash));
//! ```
//!
//! ## Crate Policy
//!
//! - Key-correlated state this crate owns is wiped synchronously on drop via
//!   `zeroize`. Block buffers inside `sha2` hashers are outside that
//!   guarantee.
//! - Nothing derived from the key is logged.
//! - No `unsafe` code.

pub mod encode;
pub mod hash;
pub mod rounds;
pub mod sequences;
pub mod verify;

pub use hash::{derive_hash, generate, generate_with_policy, generate_with_rng, hash_password};
pub use shacrypt_core::{CryptError, ParsedSalt, SaltPolicy};
pub use verify::{verify, verify_with_policy};
