//! Gallery controller.
//!
//! Holds the transient state of the video-learning section: the current
//! query, the active preset topic, the rendered view, and the modal player
//! selection. Responses are matched against a monotonic sequence token so a
//! slow response from an older search can never overwrite a newer one.

use crate::video::model::VideoResult;

/// Suffix appended to every free-text search.
pub const SEARCH_SUFFIX: &str = " finance";

/// Preset learning topics. The first entry is the initial query on load.
pub const PRESET_TOPICS: &[&str] = &[
    "personal finance basics",
    "budgeting for beginners",
    "saving money",
    "investing for beginners",
    "understanding credit scores",
    "debt management",
];

/// What the gallery section currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryView {
    Loading,
    Results(Vec<VideoResult>),
    Empty,
    Error(String),
}

/// The video selected into the modal player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSelection {
    pub video_id: String,
    pub title: String,
    pub channel: String,
    pub description: String,
}

/// The gallery view-model.
#[derive(Debug)]
pub struct Gallery {
    current_query: String,
    active_topic: Option<String>,
    /// Newest issued request token; responses carrying an older token are stale.
    seq: u64,
    view: GalleryView,
    player: Option<PlayerSelection>,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

impl Gallery {
    pub fn new() -> Self {
        Self {
            current_query: PRESET_TOPICS[0].to_string(),
            active_topic: None,
            seq: 0,
            view: GalleryView::Loading,
            player: None,
        }
    }

    pub fn current_query(&self) -> &str {
        &self.current_query
    }

    pub fn active_topic(&self) -> Option<&str> {
        self.active_topic.as_deref()
    }

    pub fn view(&self) -> &GalleryView {
        &self.view
    }

    pub fn player(&self) -> Option<&PlayerSelection> {
        self.player.as_ref()
    }

    /// Free-text search. Whitespace-only input is a no-op; otherwise the
    /// fixed suffix is appended, the active topic is cleared, and the query
    /// to fetch is returned.
    pub fn search(&mut self, raw: &str) -> Option<String> {
        let term = raw.trim();
        if term.is_empty() {
            return None;
        }
        self.current_query = format!("{term}{SEARCH_SUFFIX}");
        self.active_topic = None;
        Some(self.current_query.clone())
    }

    /// Preset-topic search. Marks the topic active; the search box is
    /// cleared by the UI.
    pub fn load_topic(&mut self, topic: &str) -> String {
        self.current_query = topic.to_string();
        self.active_topic = Some(topic.to_string());
        self.current_query.clone()
    }

    /// Start a fetch: show the loading placeholder and issue a token the
    /// response must present to `apply_response`.
    pub fn begin_request(&mut self) -> u64 {
        self.seq += 1;
        self.view = GalleryView::Loading;
        self.seq
    }

    /// Apply a fetch outcome. Returns false (leaving state untouched) when
    /// the token is stale, i.e. a newer request has been issued since.
    pub fn apply_response(&mut self, token: u64, result: Result<Vec<VideoResult>, String>) -> bool {
        if token < self.seq {
            tracing::debug!(token, newest = self.seq, "dropping stale gallery response");
            return false;
        }
        self.view = match result {
            Ok(videos) if videos.is_empty() => GalleryView::Empty,
            Ok(videos) => GalleryView::Results(videos),
            Err(message) => GalleryView::Error(message),
        };
        true
    }

    /// Open the modal player for a video in the current results.
    /// Unknown ids are a no-op.
    pub fn open_player(&mut self, video_id: &str) -> Option<&PlayerSelection> {
        let GalleryView::Results(videos) = &self.view else {
            return None;
        };
        let video = videos.iter().find(|v| v.video_id == video_id)?;
        self.player = Some(PlayerSelection {
            video_id: video.video_id.clone(),
            title: video.title.clone(),
            channel: video.channel.clone(),
            description: video.description.clone(),
        });
        self.player.as_ref()
    }

    pub fn close_player(&mut self) {
        self.player = None;
    }

    /// Escape closes the player only when one is open. Returns whether the
    /// key was consumed.
    pub fn handle_escape(&mut self) -> bool {
        if self.player.is_some() {
            self.player = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn video(id: &str) -> VideoResult {
        VideoResult {
            video_id: id.to_string(),
            title: format!("Video {id}"),
            channel: "Finance Channel".to_string(),
            thumbnail_url: format!("https://img.example/{id}/medium.jpg"),
            description: "How money works".to_string(),
            published_at: Utc::now(),
        }
    }

    #[test]
    fn test_search_appends_suffix_and_clears_topic() {
        let mut gallery = Gallery::new();
        gallery.load_topic("saving money");
        assert_eq!(gallery.active_topic(), Some("saving money"));

        let query = gallery.search("  index funds  ").unwrap();
        assert_eq!(query, "index funds finance");
        assert_eq!(gallery.current_query(), "index funds finance");
        assert_eq!(gallery.active_topic(), None);
    }

    #[test]
    fn test_blank_search_is_noop() {
        let mut gallery = Gallery::new();
        gallery.load_topic("saving money");
        assert!(gallery.search("   ").is_none());
        assert_eq!(gallery.current_query(), "saving money");
        assert_eq!(gallery.active_topic(), Some("saving money"));
    }

    #[test]
    fn test_empty_results_show_empty_view() {
        let mut gallery = Gallery::new();
        let token = gallery.begin_request();
        assert_eq!(*gallery.view(), GalleryView::Loading);
        assert!(gallery.apply_response(token, Ok(vec![])));
        assert_eq!(*gallery.view(), GalleryView::Empty);
    }

    #[test]
    fn test_failure_shows_error_view() {
        let mut gallery = Gallery::new();
        let token = gallery.begin_request();
        assert!(gallery.apply_response(token, Err("connection refused".into())));
        assert_eq!(
            *gallery.view(),
            GalleryView::Error("connection refused".into())
        );
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut gallery = Gallery::new();
        let first = gallery.begin_request();
        let second = gallery.begin_request();

        assert!(gallery.apply_response(second, Ok(vec![video("new")])));
        // The slow first response arrives afterwards and must not win.
        assert!(!gallery.apply_response(first, Ok(vec![video("old")])));

        match gallery.view() {
            GalleryView::Results(videos) => assert_eq!(videos[0].video_id, "new"),
            other => panic!("unexpected view: {other:?}"),
        }
    }

    #[test]
    fn test_player_open_close_and_escape() {
        let mut gallery = Gallery::new();
        let token = gallery.begin_request();
        gallery.apply_response(token, Ok(vec![video("abc123")]));

        assert!(gallery.open_player("missing").is_none());
        let selection = gallery.open_player("abc123").unwrap();
        assert_eq!(selection.title, "Video abc123");

        assert!(gallery.handle_escape());
        assert!(gallery.player().is_none());
        // Escape with no player open is not consumed.
        assert!(!gallery.handle_escape());
    }
}
