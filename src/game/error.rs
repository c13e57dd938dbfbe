//! Game error types
//!
//! Every failure is a distinct variant so a front-end can pick its own message.
//! `InvalidGuess` and `GameAlreadyOver` are recoverable and leave the game
//! untouched; `InvalidConfiguration` only occurs at construction.

use crate::core::Color;
use std::fmt;

/// Error returned by game engine operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidConfiguration(ConfigError),
    InvalidGuess(GuessError),
    GameAlreadyOver,
}

/// Why a configuration was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroCodeLength,
    EmptyPalette,
    DuplicateColor(Color),
    ZeroAttempts,
}

/// Why a guess was rejected before scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    WrongLength { expected: usize, actual: usize },
    NotInPalette { position: usize, color: Color },
    Unfilled { position: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(err) => write!(f, "Invalid configuration: {err}"),
            Self::InvalidGuess(err) => write!(f, "Invalid guess: {err}"),
            Self::GameAlreadyOver => write!(f, "Game is already over"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCodeLength => write!(f, "code length must be at least 1"),
            Self::EmptyPalette => write!(f, "palette must contain at least one color"),
            Self::DuplicateColor(color) => write!(f, "palette lists {color} more than once"),
            Self::ZeroAttempts => write!(f, "max attempts must be at least 1"),
        }
    }
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "expected {expected} colors, got {actual}")
            }
            Self::NotInPalette { position, color } => {
                write!(f, "{color} at position {} is not in the palette", position + 1)
            }
            Self::Unfilled { position } => {
                write!(f, "position {} has no color selected", position + 1)
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidConfiguration(err) => Some(err),
            Self::InvalidGuess(err) => Some(err),
            Self::GameAlreadyOver => None,
        }
    }
}

impl std::error::Error for ConfigError {}

impl std::error::Error for GuessError {}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfiguration(err)
    }
}

impl From<GuessError> for GameError {
    fn from(err: GuessError) -> Self {
        Self::InvalidGuess(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_error_positions_are_one_based() {
        let err = GuessError::Unfilled { position: 0 };
        assert_eq!(err.to_string(), "position 1 has no color selected");

        let err = GuessError::NotInPalette {
            position: 2,
            color: Color::Purple,
        };
        assert_eq!(err.to_string(), "Purple at position 3 is not in the palette");
    }

    #[test]
    fn game_error_wraps_details() {
        let err = GameError::from(GuessError::WrongLength {
            expected: 4,
            actual: 3,
        });
        assert_eq!(err.to_string(), "Invalid guess: expected 4 colors, got 3");
        assert!(std::error::Error::source(&err).is_some());
        assert!(std::error::Error::source(&GameError::GameAlreadyOver).is_none());
    }
}
