//! Video search HTTP client.
//!
//! Wraps the external video search endpoint with the fixed parameter set
//! the gallery uses: education category, strict safe-search, twelve results.

use chrono::{DateTime, Utc};
use finsight_core::video::VideoResult;
use serde::Deserialize;
use tracing::debug;

use crate::error::{extract_error_message, ApiError};

/// Default video search API base URL.
pub const DEFAULT_SEARCH_API_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Base URL for the embedded player.
pub const EMBED_BASE_URL: &str = "https://www.youtube.com/embed";

/// Fixed result cap per search.
pub const MAX_RESULTS: u32 = 12;

/// Video search client.
#[derive(Clone)]
pub struct VideoSearchClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Deserialize)]
struct SearchItem {
    id: ItemId,
    snippet: Snippet,
}

#[derive(Deserialize)]
struct ItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: String,
    channel_title: String,
    thumbnails: Thumbnails,
    #[serde(default)]
    description: String,
    published_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct Thumbnails {
    medium: Thumbnail,
}

#[derive(Deserialize)]
struct Thumbnail {
    url: String,
}

impl VideoSearchClient {
    /// Create a client for the given API base URL and key.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        }
    }

    /// The fixed search parameter set: only the query varies.
    fn search_params(&self, query: &str) -> Vec<(&'static str, String)> {
        vec![
            ("part", "snippet".to_string()),
            ("q", query.to_string()),
            ("type", "video".to_string()),
            ("maxResults", MAX_RESULTS.to_string()),
            ("videoCategoryId", "26".to_string()),
            ("relevanceLanguage", "en".to_string()),
            ("safeSearch", "strict".to_string()),
            ("key", self.api_key.clone()),
        ]
    }

    /// Search for videos. Items without a video id (channels, playlists)
    /// are skipped.
    pub async fn search(&self, query: &str) -> Result<Vec<VideoResult>, ApiError> {
        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&self.search_params(query))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_message(&body)
                .unwrap_or_else(|| format!("video search failed with status {status}"));
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;

        let videos: Vec<VideoResult> = parsed
            .items
            .into_iter()
            .filter_map(|item| {
                let video_id = item.id.video_id?;
                Some(VideoResult {
                    video_id,
                    title: item.snippet.title,
                    channel: item.snippet.channel_title,
                    thumbnail_url: item.snippet.thumbnails.medium.url,
                    description: item.snippet.description,
                    published_at: item.snippet.published_at,
                })
            })
            .collect();

        debug!(query, count = videos.len(), "video search completed");
        Ok(videos)
    }
}

/// Embedded-player URL for a video, with autoplay and no related videos.
pub fn embed_url(video_id: &str) -> String {
    format!("{EMBED_BASE_URL}/{video_id}?autoplay=1&rel=0")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_search_params() {
        let client = VideoSearchClient::new("https://api.example/v3/", "test-key");
        let params = client.search_params("budgeting finance");

        let lookup = |k: &str| {
            params
                .iter()
                .find(|(key, _)| *key == k)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(lookup("q"), Some("budgeting finance"));
        assert_eq!(lookup("maxResults"), Some("12"));
        assert_eq!(lookup("videoCategoryId"), Some("26"));
        assert_eq!(lookup("safeSearch"), Some("strict"));
        assert_eq!(lookup("relevanceLanguage"), Some("en"));
        assert_eq!(lookup("type"), Some("video"));
        assert_eq!(lookup("part"), Some("snippet"));
        assert_eq!(lookup("key"), Some("test-key"));
        assert_eq!(client.base_url, "https://api.example/v3");
    }

    #[test]
    fn test_parse_search_response_skips_non_videos() {
        let body = r#"{
            "items": [
                {
                    "id": {"kind": "youtube#channel"},
                    "snippet": {
                        "title": "A channel",
                        "channelTitle": "A channel",
                        "thumbnails": {"medium": {"url": "https://img/c.jpg"}},
                        "description": "",
                        "publishedAt": "2023-01-02T03:04:05Z"
                    }
                },
                {
                    "id": {"videoId": "abc123"},
                    "snippet": {
                        "title": "Budgeting 101",
                        "channelTitle": "Finance Channel",
                        "thumbnails": {"medium": {"url": "https://img/v.jpg"}},
                        "description": "Start here",
                        "publishedAt": "2024-05-06T07:08:09Z"
                    }
                }
            ]
        }"#;
        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        let videos: Vec<_> = parsed
            .items
            .into_iter()
            .filter_map(|i| i.id.video_id)
            .collect();
        assert_eq!(videos, vec!["abc123"]);
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            embed_url("abc123"),
            "https://www.youtube.com/embed/abc123?autoplay=1&rel=0"
        );
    }
}
