//! Video result model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One video search result, flattened from the search API response.
/// Created per response, rendered once, discarded on the next search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoResult {
    pub video_id: String,
    pub title: String,
    pub channel: String,
    pub thumbnail_url: String,
    pub description: String,
    pub published_at: DateTime<Utc>,
}
