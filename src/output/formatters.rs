//! Formatting utilities for terminal output

use crate::core::{Code, Color, Score};
use colored::{ColoredString, Colorize};

/// Terminal color used to paint a peg
#[must_use]
pub const fn term_color(color: Color) -> colored::Color {
    match color {
        Color::Red => colored::Color::Red,
        Color::Green => colored::Color::Green,
        Color::Blue => colored::Color::Blue,
        Color::Yellow => colored::Color::Yellow,
        Color::Orange => colored::Color::TrueColor {
            r: 255,
            g: 165,
            b: 0,
        },
        Color::Purple => colored::Color::Magenta,
    }
}

/// A color name painted in its own color
#[must_use]
pub fn color_label(color: Color) -> ColoredString {
    color.name().color(term_color(color)).bold()
}

/// Format a code as a row of painted pegs, e.g. "● ● ● ●"
#[must_use]
pub fn code_to_pegs(code: &Code) -> String {
    code.iter()
        .map(|&c| "●".color(term_color(c)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a score as pegs padded to `code_length` with empty holes
///
/// Uncolored output renders as e.g. "●○··" for one black and one white peg.
#[must_use]
pub fn score_to_pegs(score: Score, code_length: usize) -> String {
    let empty = code_length.saturating_sub(score.exact + score.color);
    format!("{}{}", score.to_pegs(), "·".repeat(empty))
}
