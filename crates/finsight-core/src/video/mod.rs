//! Video learning gallery domain.

pub mod gallery;
pub mod model;

pub use gallery::{Gallery, GalleryView, PlayerSelection, PRESET_TOPICS, SEARCH_SUFFIX};
pub use model::VideoResult;
