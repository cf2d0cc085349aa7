//! A participant's voting session: verification flow plus vote submission.
//!
//! The session is the host around a [`CreditLedger`]. It runs the identity
//! verifier, clamps requested votes to the per-target maximum shown in the
//! UI, and reports every outcome through `tracing`.

use tracing::{debug, info, warn};
use vws_types::{TargetId, VotingParams};
use vws_verification::{Evidence, IdentityVerifier, VerificationRecord};

use crate::config::VotingConfig;
use crate::error::VotingError;
use crate::ledger::{AppliedVote, CreditLedger, SubmitOrdering};
use crate::submitter::VoteSubmitter;

pub struct VotingSession<V, S> {
    ledger: CreditLedger,
    verifier: V,
    submitter: S,
    max_votes_per_target: u32,
}

impl<V: IdentityVerifier, S: VoteSubmitter> VotingSession<V, S> {
    pub fn new(params: &VotingParams, ordering: SubmitOrdering, verifier: V, submitter: S) -> Self {
        Self {
            ledger: CreditLedger::from_params(params).with_ordering(ordering),
            verifier,
            submitter,
            max_votes_per_target: params.max_votes_per_target,
        }
    }

    pub fn from_config(config: &VotingConfig, verifier: V, submitter: S) -> Self {
        Self::new(&config.params(), config.submit_ordering, verifier, submitter)
    }

    pub fn ledger(&self) -> &CreditLedger {
        &self.ledger
    }

    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    pub fn max_votes_per_target(&self) -> u32 {
        self.max_votes_per_target
    }

    /// Clamp a requested vote count to what the UI allows for one target.
    pub fn clamp_votes(&self, requested: u32) -> u32 {
        requested.min(self.max_votes_per_target)
    }

    /// Verify the participant's identity from captured evidence.
    ///
    /// An already verified session returns its existing record without
    /// consulting the verifier again.
    pub async fn verify(&mut self, evidence: &Evidence) -> Result<VerificationRecord, VotingError> {
        if let Some(record) = self.ledger.verification() {
            debug!(method = %record.method, "already verified");
            return Ok(record.clone());
        }

        let mut flag = VerifyingFlag::raise(&mut self.ledger);
        let result = match self.verifier.verify(evidence).await {
            Ok(result) => result,
            Err(e) => {
                warn!(method = self.verifier.name(), error = %e, "verification failed");
                return Err(e.into());
            }
        };

        if !result.verified {
            warn!(
                method = self.verifier.name(),
                confidence = result.confidence,
                "verification rejected"
            );
            return Err(VotingError::VerificationRejected {
                confidence: result.confidence,
            });
        }

        let record = VerificationRecord::new(result, evidence, self.verifier.name());
        flag.ledger().mark_verified(record.clone());
        info!(
            method = %record.method,
            evidence = %record.evidence,
            confidence = record.result.confidence,
            "verification successful"
        );
        Ok(record)
    }

    /// Clamp `requested` and submit it for `target`.
    pub async fn submit_vote(
        &mut self,
        target: &TargetId,
        requested: u32,
    ) -> Result<AppliedVote, VotingError> {
        let votes = self.clamp_votes(requested);
        if votes != requested {
            debug!(%target, requested, votes, "vote request clamped");
        }

        match self.ledger.submit_vote(&self.submitter, target, votes).await {
            Ok(applied) => {
                info!(
                    %target,
                    previous = applied.previous,
                    votes = applied.votes,
                    remaining = applied.remaining_credits,
                    "vote submitted"
                );
                Ok(applied)
            }
            Err(e) => {
                warn!(%target, votes, error = %e, "vote not submitted");
                Err(e)
            }
        }
    }
}

/// Holds the ledger's `is_verifying` flag up until dropped.
struct VerifyingFlag<'a> {
    ledger: &'a mut CreditLedger,
}

impl<'a> VerifyingFlag<'a> {
    fn raise(ledger: &'a mut CreditLedger) -> Self {
        ledger.set_verifying(true);
        Self { ledger }
    }

    fn ledger(&mut self) -> &mut CreditLedger {
        self.ledger
    }
}

impl Drop for VerifyingFlag<'_> {
    fn drop(&mut self) {
        self.ledger.set_verifying(false);
    }
}
