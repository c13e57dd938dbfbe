//! Terminal output formatting
//!
//! Display utilities for the text front-end and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_game_over, print_palette, print_score_result, print_turn};
