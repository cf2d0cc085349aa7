//! Cryptographic primitives for Vote With Sense.
//!
//! - **Blake2b-256** for evidence digests (the selfie captured during
//!   identity verification is never stored, only its hash)

pub mod hash;

pub use hash::{blake2b_256, blake2b_256_multi, hash_evidence};
