//! Secret hashing library
//!
//! Wraps Argon2id behind a small hash/verify interface suitable for
//! credential storage: salted, deliberately slow, cost-factor based.
//!
//! A mismatched secret is a normal `Ok(false)`; only a hash string that
//! was never produced by this hasher is an error.
//!
//! # Examples
//!
//! ```
//! use hashing::SecretHasher;
//!
//! let hasher = SecretHasher::new();
//! let hash = hasher.hash("my_secret").unwrap();
//! assert!(hasher.verify("my_secret", &hash).unwrap());
//! assert!(!hasher.verify("wrong_secret", &hash).unwrap());
//! ```

pub mod errors;
pub mod hasher;

pub use errors::HashError;
pub use hasher::SecretHasher;
