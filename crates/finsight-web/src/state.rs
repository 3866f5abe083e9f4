//! Application state.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use finsight_client::{ScoringClient, VideoSearchClient};
use finsight_core::score::ScoreWorkflow;
use finsight_core::video::Gallery;

/// State shared across handlers.
///
/// The original page keeps its transient state in module-scoped variables;
/// here the two controllers live behind mutexes with the same single-session
/// semantics. Locks are held only for state mutation, never across a
/// network call.
#[derive(Clone)]
pub struct AppState {
    pub videos: VideoSearchClient,
    pub scoring: ScoringClient,
    pub gallery: Arc<Mutex<Gallery>>,
    pub workflow: Arc<Mutex<ScoreWorkflow>>,
    handoff: Arc<Mutex<HashMap<String, String>>>,
}

impl AppState {
    pub fn new(videos: VideoSearchClient, scoring: ScoringClient) -> Self {
        Self {
            videos,
            scoring,
            gallery: Arc::new(Mutex::new(Gallery::new())),
            workflow: Arc::new(Mutex::new(ScoreWorkflow::new())),
            handoff: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Write fixed keys into the session handoff store. The store is
    /// write-only here; the downstream feature pages read it.
    pub fn stash(&self, entries: &[(&str, String)]) {
        let mut store = self.handoff.lock().unwrap();
        for (key, value) in entries {
            store.insert((*key).to_string(), value.clone());
        }
    }

    #[cfg(test)]
    pub fn stashed(&self, key: &str) -> Option<String> {
        self.handoff.lock().unwrap().get(key).cloned()
    }
}
