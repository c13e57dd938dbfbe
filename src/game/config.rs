//! Game configuration

use super::error::ConfigError;
use crate::core::Color;

/// Parameters fixed for the lifetime of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub code_length: usize,
    pub palette: Vec<Color>,
    pub max_attempts: usize,
}

impl GameConfig {
    pub const DEFAULT_CODE_LENGTH: usize = 4;
    pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

    #[must_use]
    pub const fn new(code_length: usize, palette: Vec<Color>, max_attempts: usize) -> Self {
        Self {
            code_length,
            palette,
            max_attempts,
        }
    }

    /// Check the configuration can produce a playable game
    ///
    /// # Errors
    /// Returns `ConfigError` if:
    /// - `code_length` is zero
    /// - the palette is empty or lists a color twice
    /// - `max_attempts` is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.code_length == 0 {
            return Err(ConfigError::ZeroCodeLength);
        }

        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }

        for (i, color) in self.palette.iter().enumerate() {
            if self.palette[..i].contains(color) {
                return Err(ConfigError::DuplicateColor(*color));
            }
        }

        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            code_length: Self::DEFAULT_CODE_LENGTH,
            palette: Color::ALL.to_vec(),
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }
}
