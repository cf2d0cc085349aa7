//! Ballot files replayed by `vws run`.
//!
//! ```toml
//! [[vote]]
//! target = "climate"
//! votes = 5
//! ```

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use vws_types::TargetId;

#[derive(Debug, Deserialize)]
pub struct Ballot {
    #[serde(default, rename = "vote")]
    pub votes: Vec<BallotEntry>,
}

#[derive(Debug, Deserialize)]
pub struct BallotEntry {
    pub target: TargetId,
    pub votes: u32,
}

impl Ballot {
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading ballot {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("parsing ballot {}", path.display()))
    }

    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_entries_in_order() {
        let ballot = Ballot::from_toml_str(
            r#"
                [[vote]]
                target = "p1"
                votes = 5

                [[vote]]
                target = " p2 "
                votes = 9
            "#,
        )
        .unwrap();
        assert_eq!(ballot.votes.len(), 2);
        assert_eq!(ballot.votes[1].target.as_str(), "p2");
        assert_eq!(ballot.votes[1].votes, 9);
    }

    #[test]
    fn empty_file_is_an_empty_ballot() {
        assert!(Ballot::from_toml_str("").unwrap().votes.is_empty());
    }

    #[test]
    fn blank_target_is_rejected() {
        let result = Ballot::from_toml_str("[[vote]]\ntarget = \"  \"\nvotes = 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[vote]]\ntarget = \"parks\"\nvotes = 2").unwrap();
        let ballot = Ballot::from_toml_file(file.path()).unwrap();
        assert_eq!(ballot.votes[0].target.as_str(), "parks");
    }
}
