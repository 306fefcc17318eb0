//! tag-notes - release notes between two git tags
//!
//! CLI binary that prints the GitHub release notes of every tag merged into
//! a target tag but not into a source tag.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tag_notes::config::Config;
use tag_notes::notes::DEFAULT_CONCURRENCY;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "tag-notes")]
#[command(about = "Print release notes for tags reachable from TARGET_TAG but not SOURCE_TAG")]
#[command(version)]
struct Cli {
    /// Tag (or any git reference) whose merged tags are excluded
    source_tag: String,

    /// Tag (or any git reference) whose merged tags are reported
    target_tag: String,

    /// Path to git repository (defaults to current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Maximum number of release lookups in flight
    #[arg(short, long, default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn,tag_notes=info",
            1 => "warn,tag_notes=debug",
            _ => "info,tag_notes=trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // A missing .env file is fine; variables may come from the shell.
    dotenvy::dotenv().ok();
    init_logging(cli.verbose);

    let config = Config::from_env()?;
    config.log_summary();

    let path = cli.path.unwrap_or_else(|| PathBuf::from("."));
    cli::run_notes(
        &config,
        &path,
        &cli.source_tag,
        &cli.target_tag,
        cli.concurrency,
    )
    .await?;

    Ok(())
}
