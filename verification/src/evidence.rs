//! Evidence captured for identity verification.

use serde::{Deserialize, Serialize};
use vws_types::{EvidenceHash, Timestamp};

/// A captured selfie together with the face detector's assessment of it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Evidence {
    /// Encoded image bytes (JPEG/PNG as captured).
    pub image: Vec<u8>,
    /// Whether the detector found a face in the image.
    pub face_detected: bool,
    /// Detector confidence [0.0, 1.0].
    pub confidence: f64,
    /// When the image was captured.
    pub captured_at: Timestamp,
}

impl Evidence {
    pub fn new(image: Vec<u8>, face_detected: bool, confidence: f64, captured_at: Timestamp) -> Self {
        Self {
            image,
            face_detected,
            confidence,
            captured_at,
        }
    }

    /// Digest of the captured image. Only the digest outlives verification.
    pub fn digest(&self) -> EvidenceHash {
        vws_crypto::hash_evidence(&self.image)
    }
}
