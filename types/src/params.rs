//! Voting parameters fixed at session start.

use serde::{Deserialize, Serialize};

/// Default credit budget granted to each session.
pub const DEFAULT_TOTAL_CREDITS: u64 = 100;

/// Default upper bound the UI places on votes for a single target.
pub const DEFAULT_MAX_VOTES_PER_TARGET: u32 = 10;

/// Parameters a voting session starts with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingParams {
    /// Credit budget for the whole session. Immutable once the ledger exists.
    pub total_credits: u64,

    /// Clamp applied by the host before a vote reaches the ledger.
    /// Not a ledger invariant.
    pub max_votes_per_target: u32,
}

impl Default for VotingParams {
    fn default() -> Self {
        Self {
            total_credits: DEFAULT_TOTAL_CREDITS,
            max_votes_per_target: DEFAULT_MAX_VOTES_PER_TARGET,
        }
    }
}
