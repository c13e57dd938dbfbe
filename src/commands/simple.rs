//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::core::Code;
use crate::game::{GameConfig, GameEngine, GameError, GameState};
use crate::output::{print_game_over, print_palette, print_turn};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// What the player typed at the guess prompt
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Quit,
    NewGame,
    Help,
    Guess(Code),
    Invalid(String),
}

fn parse_input(line: &str) -> Input {
    match line.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Input::Quit,
        "new" | "n" => Input::NewGame,
        "help" | "h" | "?" => Input::Help,
        other => match other.parse::<Code>() {
            Ok(code) => Input::Guess(code),
            Err(e) => Input::Invalid(e.to_string()),
        },
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// prompts.
pub fn run_simple<R: Rng + ?Sized>(rng: &mut R) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Mastermind - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let mut game = GameEngine::new(GameConfig::default(), rng)?;
    print_help(&game);

    loop {
        if game.is_over() {
            print_game_over(&game);

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    game = GameEngine::new(GameConfig::default(), rng)?;
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let turn = game.history().len() + 1;
        let prompt = format!("Guess {turn} ({} attempts left)", game.attempts_left());

        let guess = match parse_input(&get_user_input(&prompt)?) {
            Input::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Input::NewGame => {
                game = GameEngine::new(GameConfig::default(), rng)?;
                println!("\n🔄 New game started!\n");
                continue;
            }
            Input::Help => {
                print_help(&game);
                continue;
            }
            Input::Invalid(reason) => {
                println!("❌ {reason}\n");
                continue;
            }
            Input::Guess(code) => code,
        };

        match game.submit_guess(&guess) {
            Ok((score, state)) => {
                print_turn(turn, &guess, score, game.code_length());
                if let GameState::InProgress { attempts_left } = state {
                    println!(
                        "     {}. Attempts left: {}\n",
                        score,
                        attempts_left.to_string().bright_yellow()
                    );
                }
            }
            Err(GameError::InvalidGuess(reason)) => {
                println!("❌ {reason}. Try again, no attempt used.\n");
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn print_help(game: &GameEngine) {
    println!(
        "Crack the {}-color code in {} attempts. Colors may repeat.",
        game.code_length(),
        game.max_attempts()
    );
    print_palette(game.palette());
    println!("\nEnter a guess as initials (RGBY) or names (red green blue yellow).");
    println!("  ● = right color, right position");
    println!("  ○ = right color, wrong position\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'help' for this text\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        anyhow::bail!("Input closed");
    }

    Ok(input.trim().to_string())
}
