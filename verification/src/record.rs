//! What a ledger keeps once a participant is verified.

use serde::{Deserialize, Serialize};
use vws_types::EvidenceHash;

use crate::{Evidence, VerificationResult};

/// Proof of a successful verification, stored by the ledger.
///
/// Holds the evidence digest instead of the image itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerificationRecord {
    pub result: VerificationResult,
    pub evidence: EvidenceHash,
    /// Name of the verification method that produced `result`.
    pub method: String,
}

impl VerificationRecord {
    pub fn new(result: VerificationResult, evidence: &Evidence, method: impl Into<String>) -> Self {
        Self {
            result,
            evidence: evidence.digest(),
            method: method.into(),
        }
    }
}
