//! Game state and rules
//!
//! This module contains the engine that owns one game's secret and turn
//! counter, plus its configuration and error types.

mod config;
mod engine;
mod error;

pub use config::GameConfig;
pub use engine::{GameEngine, GameState, Turn};
pub use error::{ConfigError, GameError, GuessError};
