//! Display functions for game results

use super::formatters::{code_to_pegs, color_label, score_to_pegs};
use crate::core::{Code, Color, Score};
use crate::game::{GameEngine, GameState};
use colored::Colorize;

/// Print the palette with each color's shortcut letter
pub fn print_palette(palette: &[Color]) {
    let entries: Vec<String> = palette
        .iter()
        .map(|&c| format!("{} ({})", color_label(c), c.initial()))
        .collect();
    println!("Colors: {}", entries.join("  "));
}

/// Print one scored guess as a board row
pub fn print_turn(turn: usize, guess: &Code, score: Score, code_length: usize) {
    println!(
        "  {}. {}  {}  {}",
        turn.to_string().bright_black(),
        code_to_pegs(guess),
        score_to_pegs(score, code_length).bright_white().bold(),
        guess.to_initials().bright_black()
    );
}

/// Print the outcome of a finished game
pub fn print_game_over(game: &GameEngine) {
    match game.state() {
        GameState::Won => {
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!(
                "{}",
                "     🎉  Congratulations! You've cracked the code!  🎉     "
                    .bright_green()
                    .bold()
            );
            println!("{}", "═".repeat(60).bright_cyan());

            let turns = game.history().len();
            println!(
                "\n  Solved in {} {}",
                turns.to_string().bright_cyan().bold(),
                if turns == 1 { "guess" } else { "guesses" }
            );
        }
        GameState::Lost { secret } => {
            println!("\n{}", "═".repeat(60).red());
            println!("{}", "     Game Over! You've run out of attempts.".red().bold());
            println!("{}", "═".repeat(60).red());
            println!(
                "\n  The correct code was: {}  ({})",
                code_to_pegs(secret),
                secret
            );
        }
        GameState::InProgress { .. } => return,
    }

    println!("\n  Board:");
    for (i, turn) in game.history().iter().enumerate() {
        print_turn(i + 1, &turn.guess, turn.score, game.code_length());
    }
    println!();
}

/// Print the result of scoring a single guess against a known code
pub fn print_score_result(secret: &Code, guess: &Code, score: Score) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Secret: {}  ({})", code_to_pegs(secret), secret);
    println!("Guess:  {}  ({})", code_to_pegs(guess), guess);
    println!("{}", "─".repeat(60).cyan());
    println!(
        "\n{}  {}",
        score_to_pegs(score, secret.len()).bright_white().bold(),
        score
    );
}
