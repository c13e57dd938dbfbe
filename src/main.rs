//! Mastermind - CLI
//!
//! Code-breaking game with TUI and plain text modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind::{commands::score_codes, output::print_score_result};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{Level, debug};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Crack a hidden 4-color code from black and white peg feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for secret generation (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log engine events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type guesses as text)
    Simple,

    /// Score a guess against a known code, e.g. `score RRBG BGRR`
    Score {
        /// The secret code (initials like RRBG, or names)
        secret: String,

        /// The guess to score
        guess: String,
    },
}

/// Install the stderr log subscriber
///
/// The TUI owns the terminal, so it only logs when asked to.
fn init_logging(verbose: bool, tui: bool) {
    let level = match (verbose, tui) {
        (true, _) => Level::DEBUG,
        (false, false) => Level::WARN,
        (false, true) => return,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!(seed, "using fixed seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(cli.verbose, matches!(command, Commands::Play));

    match command {
        Commands::Play => run_play_command(make_rng(cli.seed)),
        Commands::Simple => run_simple_command(make_rng(cli.seed)),
        Commands::Score { secret, guess } => run_score_command(&secret, &guess),
    }
}

fn run_play_command(rng: StdRng) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let app = App::new(rng)?;
    run_tui(app)
}

fn run_simple_command(mut rng: StdRng) -> Result<()> {
    mastermind::commands::run_simple(&mut rng)
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let report = score_codes(secret, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&report.secret, &report.guess, report.score);
    Ok(())
}
