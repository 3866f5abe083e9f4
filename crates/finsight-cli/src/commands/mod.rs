//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod score;
pub mod serve;
pub mod videos;

/// Finsight - Learn money. Know your score.
#[derive(Parser)]
#[command(name = "finsight")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web UI server
    Serve(serve::ServeArgs),

    /// Calculate a credit score from financial details
    Score(score::ScoreArgs),

    /// Search finance learning videos
    Videos(videos::VideosArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Score(args) => score::execute(args).await,
            Commands::Videos(args) => videos::execute(args).await,
        }
    }
}
