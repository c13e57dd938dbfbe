//! Guess scoring
//!
//! A score counts black pegs (right color, right position) and white pegs
//! (right color, wrong position) for one guess against the secret.

use super::Color;
use std::fmt;

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    /// Black pegs: guess color equals secret color at the same position
    pub exact: usize,
    /// White pegs: guess color found at a different, unclaimed secret position
    pub color: usize,
}

impl Score {
    #[inline]
    #[must_use]
    pub const fn new(exact: usize, color: usize) -> Self {
        Self { exact, color }
    }

    /// Score `guess` against `secret`
    ///
    /// Duplicate colors are resolved deterministically.
    ///
    /// # Algorithm
    /// 1. First pass: count exact matches and consume both positions
    /// 2. Second pass: for each unconsumed guess position, left to right, claim
    ///    the leftmost unconsumed secret position holding the same color
    ///
    /// Each secret position is claimed at most once, so
    /// `exact + color <= secret.len()`.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Color::*, Score};
    ///
    /// let secret = [Red, Red, Blue, Green];
    /// let guess = [Green, Green, Green, Yellow];
    ///
    /// // The secret has one Green, so only the first guess Green claims it
    /// assert_eq!(Score::calculate(&guess, &secret), Score::new(0, 1));
    /// ```
    #[must_use]
    pub fn calculate(guess: &[Color], secret: &[Color]) -> Self {
        let mut secret_used = vec![false; secret.len()];
        let mut guess_used = vec![false; guess.len()];
        let mut exact = 0;

        // First pass: exact position matches
        for (i, (g, s)) in guess.iter().zip(secret).enumerate() {
            if g == s {
                exact += 1;
                secret_used[i] = true;
                guess_used[i] = true;
            }
        }

        // Second pass: leftmost unclaimed secret peg of the same color
        let mut color = 0;
        for (g, _) in guess.iter().zip(&guess_used).filter(|(_, used)| !**used) {
            let claim = secret
                .iter()
                .zip(secret_used.iter_mut())
                .find(|(s, used)| !**used && *s == g);

            if let Some((_, used)) = claim {
                *used = true;
                color += 1;
            }
        }

        Self { exact, color }
    }

    /// Check if every one of `code_length` pegs is an exact match
    #[inline]
    #[must_use]
    pub const fn is_solved(self, code_length: usize) -> bool {
        self.exact == code_length
    }

    /// Render as black pegs followed by white pegs, e.g. "●○○"
    #[must_use]
    pub fn to_pegs(self) -> String {
        let mut result = String::with_capacity((self.exact + self.color) * 3);
        result.extend(std::iter::repeat_n('●', self.exact));
        result.extend(std::iter::repeat_n('○', self.color));
        result
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Black Pegs: {}, White Pegs: {}", self.exact, self.color)
    }
}
