//! The external effect every vote goes through before it is final.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vws_types::TargetId;

/// Default simulated round trip of [`DelaySubmitter`].
pub const DEFAULT_SUBMISSION_DELAY: Duration = Duration::from_millis(1000);

/// What the submission collaborator reports back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub success: bool,
}

impl SubmissionReceipt {
    pub const ACCEPTED: Self = Self { success: true };
    pub const DECLINED: Self = Self { success: false };
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("transport error: {0}")]
    Transport(String),
}

/// Records a vote allocation outside the ledger (chain, API, simulation).
///
/// Called exactly once per [`CreditLedger::submit_vote`](crate::CreditLedger::submit_vote).
/// A declined receipt and an `Err` are both failures; the ledger does not retry.
pub trait VoteSubmitter: Send + Sync {
    fn submit(
        &self,
        target: &TargetId,
        votes: u32,
    ) -> impl Future<Output = Result<SubmissionReceipt, SubmissionError>> + Send;
}

/// Simulated submission: waits out a fixed delay, then accepts.
#[derive(Clone, Debug)]
pub struct DelaySubmitter {
    delay: Duration,
}

impl DelaySubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for DelaySubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMISSION_DELAY)
    }
}

impl VoteSubmitter for DelaySubmitter {
    async fn submit(
        &self,
        _target: &TargetId,
        _votes: u32,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        tokio::time::sleep(self.delay).await;
        Ok(SubmissionReceipt::ACCEPTED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delay_submitter_accepts() {
        let submitter = DelaySubmitter::new(Duration::from_millis(1));
        let target = TargetId::new("p1").unwrap();
        let receipt = submitter.submit(&target, 4).await.unwrap();
        assert!(receipt.success);
    }

    #[test]
    fn default_delay_is_one_second() {
        assert_eq!(DelaySubmitter::default().delay(), Duration::from_secs(1));
    }
}
