//! The credit ledger: budget, per-target allocations, verification gate.
//!
//! Invariant after every successful mutation:
//! `Σ quadratic_cost(votes[t]) <= total_credits`.
//!
//! The ledger never logs; reporting outcomes is the host's job.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use vws_types::{TargetId, VotingParams};
use vws_verification::VerificationRecord;

use crate::cost::quadratic_cost;
use crate::error::VotingError;
use crate::submitter::VoteSubmitter;

/// When a vote is written relative to the submission effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOrdering {
    /// Await the submitter, then write the vote.
    #[default]
    AwaitThenApply,
    /// Write the vote, await the submitter, restore on failure.
    Optimistic,
}

/// A vote that went through the submitter and is now final.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppliedVote {
    pub target: TargetId,
    pub previous: u32,
    pub votes: u32,
    pub remaining_credits: u64,
}

/// Tracks one participant's credit budget across poll targets.
///
/// One instance per session, owned by the caller. Zero-vote allocations are
/// not stored.
#[derive(Debug)]
pub struct CreditLedger {
    total_credits: u64,
    votes: HashMap<TargetId, u32>,
    ordering: SubmitOrdering,
    verification: Option<VerificationRecord>,
    verifying: bool,
}

impl CreditLedger {
    pub fn new(total_credits: u64) -> Self {
        Self {
            total_credits,
            votes: HashMap::new(),
            ordering: SubmitOrdering::default(),
            verification: None,
            verifying: false,
        }
    }

    pub fn from_params(params: &VotingParams) -> Self {
        Self::new(params.total_credits)
    }

    pub fn with_ordering(mut self, ordering: SubmitOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn ordering(&self) -> SubmitOrdering {
        self.ordering
    }

    pub fn total_credits(&self) -> u64 {
        self.total_credits
    }

    pub fn is_verified(&self) -> bool {
        self.verification.is_some()
    }

    pub fn is_verifying(&self) -> bool {
        self.verifying
    }

    /// Flag an identity check as in flight. Raised and cleared by the
    /// session's verification guard.
    pub(crate) fn set_verifying(&mut self, verifying: bool) {
        self.verifying = verifying;
    }

    /// The record stored when the participant was verified.
    pub fn verification(&self) -> Option<&VerificationRecord> {
        self.verification.as_ref()
    }

    /// Open the verification gate. Later calls keep the first record.
    ///
    /// The record is trusted as given; checking the evidence is the
    /// verifier's job.
    pub fn mark_verified(&mut self, record: VerificationRecord) {
        if self.verification.is_none() {
            self.verification = Some(record);
        }
    }

    /// Votes currently held on `target` (0 if none).
    pub fn votes_for(&self, target: &TargetId) -> u32 {
        self.votes.get(target).copied().unwrap_or(0)
    }

    /// Non-zero allocations, in no particular order.
    pub fn allocations(&self) -> impl Iterator<Item = (&TargetId, u32)> + '_ {
        self.votes.iter().map(|(target, &votes)| (target, votes))
    }

    /// Never exceeds [`total_credits`](Self::total_credits).
    pub fn spent_credits(&self) -> u64 {
        let spent = spend(self.votes.values().copied());
        u64::try_from(spent).unwrap_or(u64::MAX)
    }

    pub fn remaining_credits(&self) -> u64 {
        self.total_credits.saturating_sub(self.spent_credits())
    }

    /// Credits that moving `target` to `votes` would consume (negative when
    /// the allocation shrinks).
    pub fn cost_delta(&self, target: &TargetId, votes: u32) -> i128 {
        i128::from(quadratic_cost(votes)) - i128::from(quadratic_cost(self.votes_for(target)))
    }

    /// Whether `target` may be moved to `votes` without exceeding the budget.
    /// Always `false` before verification.
    pub fn can_afford(&self, target: &TargetId, votes: u32) -> bool {
        self.is_verified() && self.fits_budget(target, votes)
    }

    fn fits_budget(&self, target: &TargetId, votes: u32) -> bool {
        let other_spend = spend(
            self.votes
                .iter()
                .filter(|(t, _)| *t != target)
                .map(|(_, &v)| v),
        );
        other_spend + u128::from(quadratic_cost(votes)) <= u128::from(self.total_credits)
    }

    /// Move `target` to `votes`, passing the change through `submitter`.
    ///
    /// Rejected without touching the ledger when unverified or unaffordable.
    /// If the submitter declines or errors, or the returned future is dropped
    /// before it resolves, the ledger is left exactly as it was.
    pub async fn submit_vote<S: VoteSubmitter>(
        &mut self,
        submitter: &S,
        target: &TargetId,
        votes: u32,
    ) -> Result<AppliedVote, VotingError> {
        if !self.is_verified() {
            return Err(VotingError::VerificationRequired);
        }
        if !self.fits_budget(target, votes) {
            let needed = quadratic_cost(votes).saturating_sub(quadratic_cost(self.votes_for(target)));
            return Err(VotingError::InsufficientCredits {
                needed,
                available: self.remaining_credits(),
            });
        }

        let pending = PendingVote::begin(self, target.clone(), votes);
        match submitter.submit(target, votes).await {
            Ok(receipt) if receipt.success => Ok(pending.commit()),
            Ok(_) => Err(VotingError::SubmissionFailed(
                "submitter declined the vote".into(),
            )),
            Err(e) => Err(VotingError::SubmissionFailed(e.to_string())),
        }
    }

    fn write(&mut self, target: &TargetId, votes: u32) {
        if votes == 0 {
            self.votes.remove(target);
        } else {
            self.votes.insert(target.clone(), votes);
        }
    }
}

/// Total cost of `allocations`, widened so a budget near `u64::MAX` cannot
/// wrap or saturate into looking affordable.
fn spend(allocations: impl Iterator<Item = u32>) -> u128 {
    allocations.map(|v| u128::from(quadratic_cost(v))).sum()
}

/// An allocation waiting on the submitter. Restores the previous value on
/// drop unless committed.
struct PendingVote<'a> {
    ledger: &'a mut CreditLedger,
    target: TargetId,
    previous: u32,
    votes: u32,
    applied: bool,
    committed: bool,
}

impl<'a> PendingVote<'a> {
    fn begin(ledger: &'a mut CreditLedger, target: TargetId, votes: u32) -> Self {
        let previous = ledger.votes_for(&target);
        let applied = ledger.ordering == SubmitOrdering::Optimistic;
        if applied {
            ledger.write(&target, votes);
        }
        Self {
            ledger,
            target,
            previous,
            votes,
            applied,
            committed: false,
        }
    }

    fn commit(mut self) -> AppliedVote {
        if !self.applied {
            self.ledger.write(&self.target, self.votes);
            self.applied = true;
        }
        self.committed = true;
        AppliedVote {
            target: self.target.clone(),
            previous: self.previous,
            votes: self.votes,
            remaining_credits: self.ledger.remaining_credits(),
        }
    }
}

impl Drop for PendingVote<'_> {
    fn drop(&mut self) {
        if self.applied && !self.committed {
            self.ledger.write(&self.target, self.previous);
        }
    }
}
