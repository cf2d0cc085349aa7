use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("verification evidence contains no image data")]
    EmptyEvidence,

    #[error("confidence {0} is outside the range 0.0..=1.0")]
    InvalidConfidence(f64),

    #[error("verification service unavailable: {0}")]
    Unavailable(String),
}
