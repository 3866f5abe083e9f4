//! Video search command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use finsight_client::{VideoSearchClient, DEFAULT_SEARCH_API_URL};
use finsight_core::video::{Gallery, GalleryView};

use crate::output;

#[derive(Args)]
pub struct VideosArgs {
    /// Search term (free-text searches get the " finance" suffix appended)
    pub query: String,

    /// Treat the query as a preset topic instead of free text
    #[arg(long)]
    pub topic: bool,

    /// Video search API base URL
    #[arg(long, env = "FINSIGHT_VIDEO_API_URL", default_value = DEFAULT_SEARCH_API_URL)]
    pub video_api_url: String,

    /// Video search API key
    #[arg(long, env = "FINSIGHT_VIDEO_API_KEY", default_value = "")]
    pub video_api_key: String,
}

pub async fn execute(args: VideosArgs) -> Result<()> {
    let mut gallery = Gallery::new();
    let query = if args.topic {
        gallery.load_topic(&args.query)
    } else {
        match gallery.search(&args.query) {
            Some(query) => query,
            None => {
                println!("{}", "Nothing to search for.".dimmed());
                return Ok(());
            }
        }
    };

    let client = VideoSearchClient::new(&args.video_api_url, &args.video_api_key);
    let token = gallery.begin_request();
    let result = client.search(&query).await.map_err(|e| e.to_string());
    gallery.apply_response(token, result);

    println!();
    println!("{} {}", "Results for".bold(), query.cyan());
    println!();

    match gallery.view() {
        GalleryView::Results(videos) => output::print_videos_table(videos),
        GalleryView::Empty => println!("{}", "No videos found. Try another search term!".dimmed()),
        GalleryView::Error(message) => {
            println!("{} {}", "Unable to load videos:".red(), message)
        }
        GalleryView::Loading => {}
    }

    Ok(())
}
