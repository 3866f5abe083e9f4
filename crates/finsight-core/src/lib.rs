//! Finsight Core Library
//!
//! Domain models and controller state machines for the Finsight
//! personal-finance UI. This crate does no I/O: network calls live in
//! `finsight-client`, rendering in `finsight-web` and `finsight-cli`.

pub mod error;
pub mod loan;
pub mod profile;
pub mod score;
pub mod timefmt;
pub mod video;

pub use error::{FinsightError, FinsightResult};
