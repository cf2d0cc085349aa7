//! Nullable vote submitter — record submissions without sending them.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use vws_types::TargetId;
use vws_voting::{SubmissionError, SubmissionReceipt, VoteSubmitter};

/// How the next submission resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accept,
    /// Resolve with `success == false`.
    Decline,
    /// Resolve with a transport error.
    Fail(String),
    /// Never resolve.
    Hang,
}

/// A submitter that records every call and resolves with scripted outcomes.
///
/// Outcomes are consumed in order; once the script runs out every
/// submission is accepted.
#[derive(Default)]
pub struct NullSubmitter {
    script: Mutex<VecDeque<SubmitOutcome>>,
    calls: Mutex<Vec<(TargetId, u32)>>,
}

impl NullSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with outcomes for the next submissions, in order.
    pub fn scripted(outcomes: impl IntoIterator<Item = SubmitOutcome>) -> Self {
        Self {
            script: Mutex::new(outcomes.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue an outcome after the ones already scripted.
    pub fn push(&self, outcome: SubmitOutcome) {
        lock(&self.script).push_back(outcome);
    }

    /// All submissions seen so far (for assertions).
    pub fn calls(&self) -> Vec<(TargetId, u32)> {
        lock(&self.calls).clone()
    }

    fn next(&self, target: &TargetId, votes: u32) -> SubmitOutcome {
        lock(&self.calls).push((target.clone(), votes));
        lock(&self.script)
            .pop_front()
            .unwrap_or(SubmitOutcome::Accept)
    }
}

impl VoteSubmitter for NullSubmitter {
    async fn submit(
        &self,
        target: &TargetId,
        votes: u32,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        match self.next(target, votes) {
            SubmitOutcome::Accept => Ok(SubmissionReceipt::ACCEPTED),
            SubmitOutcome::Decline => Ok(SubmissionReceipt::DECLINED),
            SubmitOutcome::Fail(reason) => Err(SubmissionError::Transport(reason)),
            SubmitOutcome::Hang => std::future::pending().await,
        }
    }
}

// Poisoned locks still hold valid recordings.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn consumes_script_then_accepts() {
        let submitter = NullSubmitter::scripted([SubmitOutcome::Decline]);
        submitter.push(SubmitOutcome::Fail("boom".into()));
        let target = TargetId::new("p1").unwrap();

        assert!(!submitter.submit(&target, 1).await.unwrap().success);
        assert!(submitter.submit(&target, 2).await.is_err());
        assert!(submitter.submit(&target, 3).await.unwrap().success);
        assert_eq!(
            submitter.calls(),
            vec![(target.clone(), 1), (target.clone(), 2), (target, 3)]
        );
    }
}
