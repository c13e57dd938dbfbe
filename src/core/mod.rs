//! Core domain types for Mastermind
//!
//! Colors, codes and scoring. Everything here is pure: no I/O, no randomness,
//! no game state.

mod code;
mod color;
mod score;

pub use code::{Code, ParseCodeError};
pub use color::{Color, ParseColorError};
pub use score::Score;
