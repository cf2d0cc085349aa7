//! Pluggable identity verification method.

use std::future::Future;

use serde::{Deserialize, Serialize};
use vws_types::Timestamp;

use crate::{Evidence, VerificationError};

/// What a verifier reports about a piece of evidence.
///
/// The ledger only reads `verified`; `confidence` is carried for display
/// and audit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub verified: bool,
    /// Confidence that this is a live, unique person [0.0, 1.0].
    pub confidence: f64,
    pub timestamp: Timestamp,
}

/// A pluggable verification method.
///
/// Implementations might include:
/// - Local face detection with a confidence threshold
/// - A remote liveness/attestation service
/// - Government ID verification
pub trait IdentityVerifier: Send + Sync {
    /// Human-readable name of this method.
    fn name(&self) -> &str;

    /// Assess the evidence. An `Err` means the assessment could not be made
    /// at all; a negative assessment is `Ok` with `verified == false`.
    fn verify(
        &self,
        evidence: &Evidence,
    ) -> impl Future<Output = Result<VerificationResult, VerificationError>> + Send;
}
