//! Nullable infrastructure for deterministic testing.
//!
//! The ledger's collaborators (clock, identity verifier, vote submitter)
//! sit behind traits or plain values. This crate provides test-friendly
//! implementations that:
//! - Return scripted, deterministic outcomes
//! - Record every call for assertions
//! - Never touch the network or sleep
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod submitter;
pub mod verifier;

pub use clock::NullClock;
pub use submitter::{NullSubmitter, SubmitOutcome};
pub use verifier::NullVerifier;
