//! Session configuration with TOML file support.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use vws_types::{VotingParams, DEFAULT_MAX_VOTES_PER_TARGET, DEFAULT_TOTAL_CREDITS};
use vws_utils::LogFormat;
use vws_verification::DEFAULT_MIN_CONFIDENCE;

use crate::ledger::SubmitOrdering;
use crate::VotingError;

/// Configuration for a voting session.
///
/// Can be loaded from a TOML file via [`VotingConfig::from_toml_file`] or
/// built programmatically (e.g. for tests). Every field has a default.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VotingConfig {
    /// Credit budget granted at session start.
    #[serde(default = "default_total_credits")]
    pub total_credits: u64,

    /// UI clamp on votes for a single target.
    #[serde(default = "default_max_votes_per_target")]
    pub max_votes_per_target: u32,

    /// `await_then_apply` or `optimistic`.
    #[serde(default)]
    pub submit_ordering: SubmitOrdering,

    /// Round trip of the simulated submitter, in milliseconds.
    #[serde(default = "default_submission_delay_ms")]
    pub submission_delay_ms: u64,

    /// Minimum face-detector confidence accepted by the built-in verifier.
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_total_credits() -> u64 {
    DEFAULT_TOTAL_CREDITS
}

fn default_max_votes_per_target() -> u32 {
    DEFAULT_MAX_VOTES_PER_TARGET
}

fn default_submission_delay_ms() -> u64 {
    1000
}

fn default_min_confidence() -> f64 {
    DEFAULT_MIN_CONFIDENCE
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl VotingConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, VotingError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| VotingError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, VotingError> {
        let config: Self = toml::from_str(s).map_err(|e| VotingError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, VotingError> {
        toml::to_string_pretty(self).map_err(|e| VotingError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), VotingError> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(VotingError::Config(format!(
                "min_confidence must be within 0.0..=1.0, got {}",
                self.min_confidence
            )));
        }
        Ok(())
    }

    pub fn params(&self) -> VotingParams {
        VotingParams {
            total_credits: self.total_credits,
            max_votes_per_target: self.max_votes_per_target,
        }
    }

    pub fn submission_delay(&self) -> Duration {
        Duration::from_millis(self.submission_delay_ms)
    }
}

impl Default for VotingConfig {
    fn default() -> Self {
        Self {
            total_credits: default_total_credits(),
            max_votes_per_target: default_max_votes_per_target(),
            submit_ordering: SubmitOrdering::default(),
            submission_delay_ms: default_submission_delay_ms(),
            min_confidence: default_min_confidence(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}
