//! Command implementations

pub mod score;
pub mod simple;

pub use score::{ScoreReport, score_codes};
pub use simple::run_simple;
