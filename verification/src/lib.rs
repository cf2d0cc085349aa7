//! Identity verification for voting sessions.
//!
//! A participant proves they are a live person by capturing a selfie. A
//! face detector reports whether a face was found and with what confidence;
//! an [`IdentityVerifier`] turns that evidence into a [`VerificationResult`].
//!
//! The verification *method* is modular: the voting ledger only needs to
//! know *that* verification succeeded, not *how*. The built-in
//! [`FaceEvidenceVerifier`] applies a confidence threshold; other methods
//! (remote attestation services, government ID checks) can be plugged in.

pub mod error;
pub mod evidence;
pub mod face;
pub mod method;
pub mod record;

pub use error::VerificationError;
pub use evidence::Evidence;
pub use face::{FaceEvidenceVerifier, DEFAULT_MIN_CONFIDENCE};
pub use method::{IdentityVerifier, VerificationResult};
pub use record::VerificationRecord;
