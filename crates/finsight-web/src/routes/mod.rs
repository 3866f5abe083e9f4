//! Route handlers. Each module owns its templates and view models.

pub mod gallery;
pub mod handoff;
pub mod home;
pub mod loan;
pub mod score;
