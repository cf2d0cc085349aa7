//! vws — price quadratic votes and replay ballots through a voting session.

mod ballot;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use vws_types::Timestamp;
use vws_utils::{init_logging, LogFormat};
use vws_verification::{Evidence, FaceEvidenceVerifier};
use vws_voting::{
    marginal_cost, max_affordable_votes, quadratic_cost, DelaySubmitter, SubmitOrdering,
    VotingConfig, VotingSession,
};

use crate::ballot::Ballot;

#[derive(Parser)]
#[command(name = "vws", about = "Vote With Sense quadratic voting")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, global = true, env = "VWS_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, global = true, env = "VWS_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, global = true, env = "VWS_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Credit budget for the session.
    #[arg(long, global = true, env = "VWS_TOTAL_CREDITS")]
    credits: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Print the credit cost of a vote count on one target.
    Cost {
        votes: u32,
    },
    /// Verify with a selfie, then replay a ballot file through a session.
    Run {
        /// Ballot file with `[[vote]]` entries.
        #[arg(long)]
        ballot: PathBuf,

        /// Captured selfie used as verification evidence.
        #[arg(long)]
        selfie: PathBuf,

        /// Face-detector confidence reported for the selfie.
        #[arg(long, default_value_t = 0.9)]
        confidence: f64,

        /// Apply votes before the submitter confirms them.
        #[arg(long)]
        optimistic: bool,

        /// Simulated submission round trip in milliseconds.
        #[arg(long, env = "VWS_SUBMISSION_DELAY_MS")]
        delay_ms: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = resolve_config(&cli)?;
    init_logging(config.log_format, &config.log_level);

    match cli.command {
        Command::Cost { votes } => {
            println!("votes:         {votes}");
            println!("cost:          {}", quadratic_cost(votes));
            println!("marginal cost: {}", marginal_cost(votes));
            println!(
                "max on {} credits: {}",
                config.total_credits,
                max_affordable_votes(config.total_credits)
            );
        }
        Command::Run {
            ballot,
            selfie,
            confidence,
            optimistic,
            delay_ms,
        } => {
            if optimistic {
                config.submit_ordering = SubmitOrdering::Optimistic;
            }
            if let Some(delay_ms) = delay_ms {
                config.submission_delay_ms = delay_ms;
            }
            run(&config, &ballot, &selfie, confidence).await?;
        }
    }

    Ok(())
}

/// Load the config file (if any) and apply the global flag overrides.
fn resolve_config(cli: &Cli) -> anyhow::Result<VotingConfig> {
    let mut config = match &cli.config {
        Some(path) => VotingConfig::from_toml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => VotingConfig::default(),
    };
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    if let Some(credits) = cli.credits {
        config.total_credits = credits;
    }
    Ok(config)
}

async fn run(
    config: &VotingConfig,
    ballot_path: &std::path::Path,
    selfie_path: &std::path::Path,
    confidence: f64,
) -> anyhow::Result<()> {
    let ballot = Ballot::from_toml_file(ballot_path)?;
    let image = std::fs::read(selfie_path)
        .with_context(|| format!("reading selfie {}", selfie_path.display()))?;

    let verifier = FaceEvidenceVerifier::new(config.min_confidence)?;
    let submitter = DelaySubmitter::new(config.submission_delay());
    let mut session = VotingSession::from_config(config, verifier, submitter);

    tracing::info!(
        credits = config.total_credits,
        ordering = ?config.submit_ordering,
        entries = ballot.votes.len(),
        "starting voting session"
    );

    let evidence = Evidence::new(image, true, confidence, Timestamp::now());
    session.verify(&evidence).await?;

    let mut rejected = 0usize;
    for entry in &ballot.votes {
        // Rejections are reported by the session; keep going like a user would.
        if session.submit_vote(&entry.target, entry.votes).await.is_err() {
            rejected += 1;
        }
    }

    let ledger = session.ledger();
    let mut allocations: Vec<_> = ledger.allocations().collect();
    allocations.sort();
    for (target, votes) in allocations {
        println!("{target:<24} {votes:>4} votes  {:>6} credits", quadratic_cost(votes));
    }
    println!(
        "spent {} of {} credits, {} remaining ({} rejected)",
        ledger.spent_credits(),
        ledger.total_credits(),
        ledger.remaining_credits(),
        rejected
    );

    tracing::info!(remaining = ledger.remaining_credits(), rejected, "voting session finished");
    Ok(())
}
