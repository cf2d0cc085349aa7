//! Nullable identity verifier — scripted verification results.

use std::sync::atomic::{AtomicUsize, Ordering};

use vws_verification::{Evidence, IdentityVerifier, VerificationError, VerificationResult};

enum Script {
    Verdict { verified: bool, confidence: f64 },
    Unavailable(String),
}

/// A verifier that answers every call the same way and counts calls.
pub struct NullVerifier {
    script: Script,
    calls: AtomicUsize,
}

impl NullVerifier {
    /// Verifies everyone with the given confidence.
    pub fn accepting(confidence: f64) -> Self {
        Self::with(Script::Verdict {
            verified: true,
            confidence,
        })
    }

    /// Rejects everyone with the given confidence.
    pub fn rejecting(confidence: f64) -> Self {
        Self::with(Script::Verdict {
            verified: false,
            confidence,
        })
    }

    /// Fails every call as if the service were down.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::with(Script::Unavailable(reason.into()))
    }

    fn with(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `verify` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IdentityVerifier for NullVerifier {
    fn name(&self) -> &str {
        "null"
    }

    async fn verify(&self, evidence: &Evidence) -> Result<VerificationResult, VerificationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Verdict {
                verified,
                confidence,
            } => Ok(VerificationResult {
                verified: *verified,
                confidence: *confidence,
                timestamp: evidence.captured_at,
            }),
            Script::Unavailable(reason) => Err(VerificationError::Unavailable(reason.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vws_types::Timestamp;

    #[tokio::test]
    async fn scripted_verdicts_and_call_count() {
        let evidence = Evidence::new(vec![1], true, 0.5, Timestamp::from_millis(9));
        let yes = NullVerifier::accepting(0.99);
        let result = yes.verify(&evidence).await.unwrap();
        assert!(result.verified);
        assert_eq!(result.timestamp, Timestamp::from_millis(9));
        assert_eq!(yes.calls(), 1);

        let down = NullVerifier::unavailable("offline");
        assert!(down.verify(&evidence).await.is_err());
    }
}
