//! Credit profile captured from the score form.

pub mod model;

pub use model::{CreditProfile, HistoryTier, StabilityTier};
