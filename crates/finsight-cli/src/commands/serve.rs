//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use finsight_client::{
    ScoringClient, VideoSearchClient, DEFAULT_SCORING_URL, DEFAULT_SEARCH_API_URL,
};

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3030")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Scoring backend base URL
    #[arg(long, env = "FINSIGHT_SCORING_URL", default_value = DEFAULT_SCORING_URL)]
    pub scoring_url: String,

    /// Video search API base URL
    #[arg(long, env = "FINSIGHT_VIDEO_API_URL", default_value = DEFAULT_SEARCH_API_URL)]
    pub video_api_url: String,

    /// Video search API key
    #[arg(long, env = "FINSIGHT_VIDEO_API_KEY", default_value = "")]
    pub video_api_key: String,

    /// Tee logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to .finsight/serve.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let videos = VideoSearchClient::new(&args.video_api_url, &args.video_api_key);
    let scoring = ScoringClient::new(&args.scoring_url);

    println!();
    println!("  {} {}", "Finsight".cyan().bold(), "Web Server".bold());
    println!();
    println!(
        "  {}  http://{}:{}",
        "Dashboard".green(),
        args.host,
        args.port
    );
    println!("  {}    {}", "Scoring".green(), args.scoring_url);
    println!();
    if args.video_api_key.is_empty() {
        println!(
            "  {}",
            "No video API key set (--video-api-key); the gallery will show an error.".yellow()
        );
        println!();
    }
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    finsight_web::run_server(videos, scoring, &args.host, args.port).await?;

    Ok(())
}
