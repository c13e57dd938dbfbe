//! Peg colors
//!
//! The standard palette has six colors. Each color parses from its full name
//! or its initial letter, case-insensitively.

use std::fmt;
use std::str::FromStr;

/// A single peg color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
}

/// Error type for unrecognized color names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(pub String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown color '{}'", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl Color {
    /// The standard six-color palette, in cycling order
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Orange,
        Self::Purple,
    ];

    /// Full display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
            Self::Orange => "Orange",
            Self::Purple => "Purple",
        }
    }

    /// Single uppercase letter used in compact code notation
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Yellow => 'Y',
            Self::Orange => 'O',
            Self::Purple => 'P',
        }
    }

    /// Look up a color by its initial letter (either case)
    #[must_use]
    pub fn from_initial(ch: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.initial() == ch.to_ascii_uppercase())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse a full name ("red", "Purple") or an initial ("r", "P")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();

        if let (Some(ch), None) = (chars.next(), chars.next())
            && let Some(color) = Self::from_initial(ch)
        {
            return Ok(color);
        }

        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseColorError(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_names_case_insensitive() {
        assert_eq!("red".parse::<Color>(), Ok(Color::Red));
        assert_eq!("PURPLE".parse::<Color>(), Ok(Color::Purple));
        assert_eq!(" Orange ".parse::<Color>(), Ok(Color::Orange));
    }

    #[test]
    fn parse_initials() {
        assert_eq!("g".parse::<Color>(), Ok(Color::Green));
        assert_eq!("Y".parse::<Color>(), Ok(Color::Yellow));
    }

    #[test]
    fn parse_unknown_color_fails() {
        assert_eq!(
            "white".parse::<Color>(),
            Err(ParseColorError("white".to_string()))
        );
        assert!("x".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn initials_are_unique() {
        let mut initials: Vec<char> = Color::ALL.iter().map(|c| c.initial()).collect();
        initials.sort_unstable();
        initials.dedup();
        assert_eq!(initials.len(), Color::ALL.len());
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Color::Blue.to_string(), "Blue");
    }
}
