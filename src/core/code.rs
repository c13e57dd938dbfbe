//! Color code representation
//!
//! A `Code` is an ordered sequence of colors. Secrets and guesses share this
//! type; length and palette rules are enforced by the game engine, not here.

use super::color::{Color, ParseColorError};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// An ordered sequence of peg colors
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code(Vec<Color>);

/// Error type for code strings that cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCodeError {
    Empty,
    Color(ParseColorError),
}

impl fmt::Display for ParseCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Code must contain at least one color"),
            Self::Color(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ParseCodeError {}

impl From<ParseColorError> for ParseCodeError {
    fn from(err: ParseColorError) -> Self {
        Self::Color(err)
    }
}

impl Code {
    /// Get the colors as a slice
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    /// Compact notation, one initial per peg (e.g. "RRBG")
    #[must_use]
    pub fn to_initials(&self) -> String {
        self.0.iter().map(|c| c.initial()).collect()
    }
}

impl Deref for Code {
    type Target = [Color];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Color>> for Code {
    fn from(colors: Vec<Color>) -> Self {
        Self(colors)
    }
}

impl<const N: usize> From<[Color; N]> for Code {
    fn from(colors: [Color; N]) -> Self {
        Self(colors.to_vec())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = ParseCodeError;

    /// Parse a code from text
    ///
    /// Accepts:
    /// - separated tokens: "red red blue green", "R, R, B, G"
    /// - compact initials: "RRBG"
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Color};
    ///
    /// let a: Code = "rrbg".parse().unwrap();
    /// let b: Code = "Red, Red, Blue, Green".parse().unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a[2], Color::Blue);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();

        match tokens.as_slice() {
            [] => Err(ParseCodeError::Empty),
            [single] => {
                // Compact initials first; a lone full name falls through
                let compact: Option<Vec<Color>> =
                    single.chars().map(Color::from_initial).collect();
                match compact {
                    Some(colors) => Ok(Self(colors)),
                    None => Ok(Self(vec![single.parse()?])),
                }
            }
            _ => {
                let colors = tokens
                    .iter()
                    .map(|t| t.parse::<Color>())
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self(colors))
            }
        }
    }
}
