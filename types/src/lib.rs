//! Fundamental types for Vote With Sense.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! poll target identifiers, millisecond timestamps, evidence hashes, and the
//! voting parameters a session starts with.

pub mod error;
pub mod hash;
pub mod params;
pub mod target;
pub mod time;

pub use error::TypesError;
pub use hash::EvidenceHash;
pub use params::{VotingParams, DEFAULT_MAX_VOTES_PER_TARGET, DEFAULT_TOTAL_CREDITS};
pub use target::TargetId;
pub use time::Timestamp;
