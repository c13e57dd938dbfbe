//! Score command
//!
//! Scores one guess against a known code without running a game.

use crate::core::{Code, Score};

/// Result of scoring a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub secret: Code,
    pub guess: Code,
    pub score: Score,
}

/// Parse both codes and score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if:
/// - Either code contains an unknown color or is empty
/// - The codes have different lengths
pub fn score_codes(secret: &str, guess: &str) -> Result<ScoreReport, String> {
    let secret: Code = secret
        .parse()
        .map_err(|e| format!("Invalid secret: {e}"))?;
    let guess: Code = guess.parse().map_err(|e| format!("Invalid guess: {e}"))?;

    if secret.len() != guess.len() {
        return Err(format!(
            "Secret has {} colors but guess has {}",
            secret.len(),
            guess.len()
        ));
    }

    let score = Score::calculate(&guess, &secret);

    Ok(ScoreReport {
        secret,
        guess,
        score,
    })
}
