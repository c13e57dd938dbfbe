//! Mastermind
//!
//! A code-breaking game: guess the hidden sequence of colors from black-peg
//! and white-peg feedback before the attempts run out.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::Color::*;
//! use mastermind::game::{GameConfig, GameEngine, GameState};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut game = GameEngine::new(GameConfig::default(), &mut rng).unwrap();
//!
//! let (score, state) = game.submit_guess(&[Red, Green, Blue, Yellow]).unwrap();
//! println!("{score}");
//! assert!(matches!(state, GameState::InProgress { .. } | GameState::Won));
//! ```

// Core domain types
pub mod core;

// Game engine and rules
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
