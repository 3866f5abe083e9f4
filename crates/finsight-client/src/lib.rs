//! HTTP clients for Finsight's two external collaborators: the video
//! search API and the scoring backend. All business logic (scoring, AI
//! analysis, loan underwriting, video relevance) lives on the other side of
//! these calls; this crate only owns the wire contracts and their
//! validation.

pub mod error;
pub mod scoring;
pub mod videos;

pub use error::ApiError;
pub use scoring::{ScoringClient, DEFAULT_SCORING_URL};
pub use videos::{embed_url, VideoSearchClient, DEFAULT_SEARCH_API_URL, MAX_RESULTS};
