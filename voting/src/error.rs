use thiserror::Error;

#[derive(Debug, Error)]
pub enum VotingError {
    #[error("identity verification is required before voting")]
    VerificationRequired,

    #[error("insufficient credits: need {needed}, have {available}")]
    InsufficientCredits { needed: u64, available: u64 },

    #[error("vote submission failed: {0}")]
    SubmissionFailed(String),

    #[error("identity verification was not accepted (confidence {confidence})")]
    VerificationRejected { confidence: f64 },

    #[error("verification error: {0}")]
    Verification(#[from] vws_verification::VerificationError),

    #[error("config error: {0}")]
    Config(String),
}
