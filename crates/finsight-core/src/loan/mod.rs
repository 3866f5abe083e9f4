//! Loan suggestion domain.

pub mod model;

pub use model::LoanSuggestion;
