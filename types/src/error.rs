//! Error type for parsing the shared types.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypesError {
    #[error("invalid target id: {0:?}")]
    InvalidTarget(String),

    #[error("invalid evidence hash: {0}")]
    InvalidHash(String),
}
