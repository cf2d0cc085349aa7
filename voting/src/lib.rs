//! Quadratic voting for Vote With Sense.
//!
//! A verified participant receives a fixed budget of credits and spreads it
//! across poll targets. Casting `v` votes on one target costs `v²` credits,
//! so the nth vote on the same target costs `2n - 1`: doubling influence on
//! one target costs four times as much, which pushes participants to spread
//! their preferences instead of concentrating them.
//!
//! Layers, from the inside out:
//! - [`cost`]: the pricing law, pure integer functions.
//! - [`CreditLedger`]: budget, per-target allocations, verification gate,
//!   and the single async mutation [`CreditLedger::submit_vote`].
//! - [`VoteSubmitter`]: the external effect each vote goes through.
//! - [`VotingSession`]: the host that runs identity verification, clamps
//!   requests to the per-target UI maximum, and reports outcomes.

pub mod config;
pub mod cost;
pub mod error;
pub mod ledger;
pub mod session;
pub mod submitter;

pub use config::VotingConfig;
pub use cost::{marginal_cost, max_affordable_votes, quadratic_cost};
pub use error::VotingError;
pub use ledger::{AppliedVote, CreditLedger, SubmitOrdering};
pub use session::VotingSession;
pub use submitter::{DelaySubmitter, SubmissionError, SubmissionReceipt, VoteSubmitter};
