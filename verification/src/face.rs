//! Threshold verifier over face-detector output.

use crate::{Evidence, IdentityVerifier, VerificationError, VerificationResult};

/// Minimum detector confidence accepted when none is configured.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.5;

/// Verifies a participant when a face was detected with enough confidence.
#[derive(Clone, Debug)]
pub struct FaceEvidenceVerifier {
    min_confidence: f64,
}

impl FaceEvidenceVerifier {
    pub fn new(min_confidence: f64) -> Result<Self, VerificationError> {
        check_confidence(min_confidence)?;
        Ok(Self { min_confidence })
    }

    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }

    /// Synchronous assessment shared by the async trait method.
    pub fn assess(&self, evidence: &Evidence) -> Result<VerificationResult, VerificationError> {
        if evidence.image.is_empty() {
            return Err(VerificationError::EmptyEvidence);
        }
        check_confidence(evidence.confidence)?;

        Ok(VerificationResult {
            verified: evidence.face_detected && evidence.confidence >= self.min_confidence,
            confidence: evidence.confidence,
            timestamp: evidence.captured_at,
        })
    }
}

impl Default for FaceEvidenceVerifier {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}

impl IdentityVerifier for FaceEvidenceVerifier {
    fn name(&self) -> &str {
        "face-evidence"
    }

    async fn verify(&self, evidence: &Evidence) -> Result<VerificationResult, VerificationError> {
        self.assess(evidence)
    }
}

fn check_confidence(value: f64) -> Result<(), VerificationError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(VerificationError::InvalidConfidence(value))
    }
}
