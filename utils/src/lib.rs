//! Shared utilities for Vote With Sense.

pub mod logging;

pub use logging::{init_logging, LogFormat, ParseLogFormatError};
