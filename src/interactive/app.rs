//! TUI application state and logic

use crate::core::Color;
use crate::game::{GameConfig, GameEngine, GameError, GameState, GuessError};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub game: GameEngine,
    pub slots: Vec<Option<Color>>,
    pub cursor: usize,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Selecting,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results of the games finished this session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts games won in `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, state: &GameState, guesses: usize) {
        self.total_games += 1;
        if *state == GameState::Won {
            self.games_won += 1;
            if self.guess_distribution.len() <= guesses {
                self.guess_distribution.resize(guesses + 1, 0);
            }
            self.guess_distribution[guesses] += 1;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if the default game configuration is rejected.
    pub fn new(mut rng: StdRng) -> Result<Self> {
        let game = GameEngine::new(GameConfig::default(), &mut rng)?;
        let slots = vec![None; game.code_length()];

        let mut app = Self {
            game,
            slots,
            cursor: 0,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Selecting,
            rng,
        };
        app.add_message(
            "Welcome! Pick a color for every slot, then press Enter.",
            MessageStyle::Info,
        );
        app.add_message(
            &format!("Attempts left: {}", app.game.attempts_left()),
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Discard the current game and start another
    ///
    /// # Errors
    ///
    /// Returns an error if the default game configuration is rejected.
    pub fn new_game(&mut self) -> Result<()> {
        self.game = GameEngine::new(GameConfig::default(), &mut self.rng)?;
        self.slots = vec![None; self.game.code_length()];
        self.cursor = 0;
        self.messages.clear();
        self.input_mode = InputMode::Selecting;
        self.add_message("New game started!", MessageStyle::Info);
        self.add_message(
            &format!("Attempts left: {}", self.game.attempts_left()),
            MessageStyle::Info,
        );
        Ok(())
    }

    pub fn move_cursor(&mut self, forward: bool) {
        let len = self.slots.len();
        self.cursor = if forward {
            (self.cursor + 1) % len
        } else {
            (self.cursor + len - 1) % len
        };
    }

    /// Step the selected slot through the palette, wrapping at either end
    pub fn cycle_color(&mut self, forward: bool) {
        let palette = self.game.palette();
        let len = palette.len();
        let current = self.slots[self.cursor].and_then(|c| palette.iter().position(|&p| p == c));

        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };

        self.slots[self.cursor] = Some(palette[next]);
    }

    /// Fill the selected slot and move to the next one
    pub fn pick_color(&mut self, color: Color) {
        if self.game.palette().contains(&color) {
            self.slots[self.cursor] = Some(color);
            if self.cursor + 1 < self.slots.len() {
                self.cursor += 1;
            }
        }
    }

    /// Pick by 1-based palette index
    pub fn pick_index(&mut self, index: usize) {
        if let Some(&color) = index
            .checked_sub(1)
            .and_then(|i| self.game.palette().get(i))
        {
            self.pick_color(color);
        }
    }

    pub fn clear_slot(&mut self) {
        if self.slots[self.cursor].is_none() && self.cursor > 0 {
            self.cursor -= 1;
        }
        self.slots[self.cursor] = None;
    }

    pub fn submit(&mut self) {
        match self.game.submit_slots(&self.slots) {
            Ok((score, GameState::InProgress { attempts_left })) => {
                self.cursor = 0;
                self.add_message(
                    &format!("{score}. Attempts left: {attempts_left}"),
                    MessageStyle::Info,
                );
            }
            Ok((_, state)) => {
                let guesses = self.game.history().len();
                self.stats.record(&state, guesses);
                self.input_mode = InputMode::GameOver;

                if let GameState::Lost { secret } = &state {
                    self.add_message(
                        &format!("Game Over! The correct code was: {secret}"),
                        MessageStyle::Error,
                    );
                } else {
                    let celebration = match guesses {
                        1 => "🎯 First try! Extraordinary! 🌟".to_string(),
                        2..=4 => format!("🔥 Congratulations! Cracked in {guesses} guesses! 🔥"),
                        _ => format!("🎉 You've cracked the code in {guesses} guesses! 🎉"),
                    };
                    self.add_message(&celebration, MessageStyle::Success);
                }
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Err(GameError::InvalidGuess(GuessError::Unfilled { .. })) => {
                self.add_message(
                    "Please select a color for all positions.",
                    MessageStyle::Error,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match (app.input_mode, key.code) {
                (_, KeyCode::Char('c')) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                (_, KeyCode::Char('q') | KeyCode::Esc) => app.should_quit = true,
                (_, KeyCode::Char('n')) => app.new_game()?,
                (InputMode::GameOver, _) => {
                    // Board is frozen until a new game starts
                }
                (InputMode::Selecting, code) => handle_selecting_key(&mut app, code),
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_selecting_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Left => app.move_cursor(false),
        KeyCode::Right | KeyCode::Tab => app.move_cursor(true),
        KeyCode::Up | KeyCode::Char(' ') => app.cycle_color(true),
        KeyCode::Down => app.cycle_color(false),
        KeyCode::Backspace | KeyCode::Delete => app.clear_slot(),
        KeyCode::Enter => app.submit(),
        KeyCode::Char(c) => {
            if let Some(digit) = c.to_digit(10) {
                app.pick_index(digit as usize);
            } else if let Some(color) = Color::from_initial(c) {
                app.pick_color(color);
            }
        }
        _ => {}
    }
}
