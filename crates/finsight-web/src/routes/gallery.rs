//! Video gallery route handlers.
//!
//! Returns HTML fragments for HTMX partial page updates. Every response to
//! a search also carries an out-of-band swap of the gallery controls so the
//! active-topic highlight and the search box track the server-side state.

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use finsight_core::timefmt;
use finsight_core::video::{GalleryView, VideoResult, PRESET_TOPICS};

use crate::state::AppState;

// ============================================================
// TEMPLATES
// ============================================================

#[derive(Template)]
#[template(path = "partials/gallery_grid.html")]
struct GalleryGridTemplate {
    cards: Vec<VideoCardView>,
}

#[derive(Template)]
#[template(path = "partials/gallery_empty.html")]
struct GalleryEmptyTemplate {}

#[derive(Template)]
#[template(path = "partials/gallery_error.html")]
struct GalleryErrorTemplate {
    message: String,
}

#[derive(Template)]
#[template(path = "partials/gallery_controls.html")]
struct GalleryControlsTemplate {
    query_text: String,
    topics: Vec<TopicView>,
    oob: bool,
}

#[derive(Template)]
#[template(path = "partials/player_modal.html")]
struct PlayerModalTemplate {
    title: String,
    channel: String,
    description: String,
    embed_url: String,
}

/// View model for one video card.
struct VideoCardView {
    video_id: String,
    title: String,
    channel: String,
    thumbnail_url: String,
    time_ago: String,
}

impl VideoCardView {
    fn from_video(video: &VideoResult) -> Self {
        Self {
            video_id: video.video_id.clone(),
            title: video.title.clone(),
            channel: video.channel.clone(),
            thumbnail_url: video.thumbnail_url.clone(),
            time_ago: timefmt::time_ago(video.published_at, Utc::now()),
        }
    }
}

/// View model for a preset topic button.
pub struct TopicView {
    pub name: String,
    pub active: bool,
}

/// Topic buttons with the active one highlighted.
pub fn topic_views(active: Option<&str>) -> Vec<TopicView> {
    PRESET_TOPICS
        .iter()
        .map(|topic| TopicView {
            name: (*topic).to_string(),
            active: active == Some(*topic),
        })
        .collect()
}

// ============================================================
// REQUEST TYPES
// ============================================================

#[derive(Deserialize)]
pub struct GalleryQuery {
    pub q: Option<String>,
    pub topic: Option<String>,
}

// ============================================================
// HANDLERS
// ============================================================

/// GET /videos - Run a search (free text or preset topic) and render the
/// gallery fragment. A blank free-text search is a no-op; a stale response
/// (an older search finishing after a newer one) swaps nothing.
pub async fn load_videos(
    State(state): State<AppState>,
    Query(params): Query<GalleryQuery>,
) -> Response {
    let raw_text = params.q.clone().unwrap_or_default();

    let (query, token) = {
        let mut gallery = state.gallery.lock().unwrap();
        let query = match (&params.topic, &params.q) {
            (Some(topic), _) => Some(gallery.load_topic(topic)),
            (None, Some(q)) => gallery.search(q),
            (None, None) => None,
        };
        let Some(query) = query else {
            return StatusCode::NO_CONTENT.into_response();
        };
        (query, gallery.begin_request())
    };

    let result = state
        .videos
        .search(&query)
        .await
        .map_err(|e| e.to_string());

    let mut gallery = state.gallery.lock().unwrap();
    if !gallery.apply_response(token, result) {
        return StatusCode::NO_CONTENT.into_response();
    }

    let grid_html = match render_view(gallery.view()) {
        Ok(html) => html,
        Err(e) => return template_error(e),
    };

    // Topic buttons reflect the new active topic; the search box keeps the
    // typed term on a free search and clears on a topic load.
    let controls = GalleryControlsTemplate {
        query_text: if params.topic.is_some() {
            String::new()
        } else {
            raw_text.trim().to_string()
        },
        topics: topic_views(gallery.active_topic()),
        oob: true,
    };
    match controls.render() {
        Ok(controls_html) => Html(format!("{grid_html}{controls_html}")).into_response(),
        Err(e) => template_error(e),
    }
}

/// GET /player/{video_id} - Open the modal player for a video in the
/// current results.
pub async fn open_player(State(state): State<AppState>, Path(video_id): Path<String>) -> Response {
    let mut gallery = state.gallery.lock().unwrap();

    let Some(selection) = gallery.open_player(&video_id) else {
        return (StatusCode::NOT_FOUND, Html("Video not found".to_string())).into_response();
    };

    let description = if selection.description.is_empty() {
        "No description available.".to_string()
    } else {
        selection.description.clone()
    };

    let template = PlayerModalTemplate {
        title: selection.title.clone(),
        channel: selection.channel.clone(),
        description,
        embed_url: finsight_client::embed_url(&selection.video_id),
    };

    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => template_error(e),
    }
}

/// GET /player/close - Close the modal and stop playback by dropping the
/// embed frame entirely.
pub async fn close_player(State(state): State<AppState>) -> Response {
    state.gallery.lock().unwrap().close_player();
    Html(String::new()).into_response()
}

// ============================================================
// HELPERS
// ============================================================

fn render_view(view: &GalleryView) -> Result<String, askama::Error> {
    match view {
        GalleryView::Results(videos) => GalleryGridTemplate {
            cards: videos.iter().map(VideoCardView::from_video).collect(),
        }
        .render(),
        GalleryView::Empty => GalleryEmptyTemplate {}.render(),
        GalleryView::Error(message) => GalleryErrorTemplate {
            message: message.clone(),
        }
        .render(),
        // The loading placeholder is client-side; a fetch that is still
        // pending never renders through here.
        GalleryView::Loading => Ok(String::new()),
    }
}

fn template_error(e: askama::Error) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(format!("Template error: {}", e)),
    )
        .into_response()
}
