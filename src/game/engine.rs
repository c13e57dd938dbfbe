//! Mastermind game engine
//!
//! Owns the secret code and the attempt counter for one game, and drives the
//! `InProgress -> Won | Lost` state machine.

use super::config::GameConfig;
use super::error::{GameError, GuessError};
use crate::core::{Code, Color, Score};
use rand::Rng;
use std::fmt;
use tracing::{debug, info};

/// Current phase of a game
///
/// `Won` and `Lost` are terminal. The secret is only revealed through `Lost`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    InProgress { attempts_left: usize },
    Won,
    Lost { secret: Code },
}

impl GameState {
    /// Check if no further guesses will be accepted
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self, Self::InProgress { .. })
    }
}

/// One scored guess of the current game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Code,
    pub score: Score,
}

/// A single Mastermind game
///
/// Mutated only through [`GameEngine::submit_guess`] and
/// [`GameEngine::submit_slots`]. Start a new game by building a new engine.
#[derive(Clone)]
pub struct GameEngine {
    config: GameConfig,
    secret: Code,
    attempts_left: usize,
    state: GameState,
    history: Vec<Turn>,
}

// Secret stays out of debug output until the game is lost
impl fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("config", &self.config)
            .field("attempts_left", &self.attempts_left)
            .field("state", &self.state)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

impl GameEngine {
    /// Start a new game with a secret drawn from `rng`
    ///
    /// Each secret peg is drawn independently and uniformly from the palette,
    /// so the secret may repeat colors.
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` if the config fails
    /// [`GameConfig::validate`].
    ///
    /// # Examples
    /// ```
    /// use mastermind::game::{GameConfig, GameEngine, GameState};
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let game = GameEngine::new(GameConfig::default(), &mut rng).unwrap();
    /// assert_eq!(game.state(), &GameState::InProgress { attempts_left: 10 });
    /// ```
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, GameError> {
        config.validate()?;

        let secret: Code = (0..config.code_length)
            .map(|_| config.palette[rng.random_range(0..config.palette.len())])
            .collect::<Vec<_>>()
            .into();

        debug!(
            code_length = config.code_length,
            palette_size = config.palette.len(),
            max_attempts = config.max_attempts,
            "new game started"
        );

        Ok(Self::from_parts(config, secret))
    }

    fn from_parts(config: GameConfig, secret: Code) -> Self {
        let attempts_left = config.max_attempts;
        Self {
            config,
            secret,
            attempts_left,
            state: GameState::InProgress { attempts_left },
            history: Vec::new(),
        }
    }

    /// Build a game around a known secret
    #[cfg(test)]
    pub(crate) fn with_secret(config: GameConfig, secret: Code) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::from_parts(config, secret))
    }

    #[cfg(test)]
    pub(crate) const fn secret(&self) -> &Code {
        &self.secret
    }

    /// Score a complete guess and advance the game
    ///
    /// A rejected guess never consumes an attempt.
    ///
    /// # Errors
    /// - `GameError::GameAlreadyOver` if the game is won or lost
    /// - `GameError::InvalidGuess` if the guess has the wrong length or uses a
    ///   color outside the palette
    pub fn submit_guess(&mut self, guess: &[Color]) -> Result<(Score, GameState), GameError> {
        if self.state.is_over() {
            return Err(GameError::GameAlreadyOver);
        }

        self.validate_guess(guess)?;

        let score = Score::calculate(guess, &self.secret);
        self.history.push(Turn {
            guess: Code::from(guess.to_vec()),
            score,
        });

        if score.is_solved(self.config.code_length) {
            self.state = GameState::Won;
            info!(turns = self.history.len(), "code cracked");
        } else {
            self.attempts_left -= 1;
            if self.attempts_left == 0 {
                self.state = GameState::Lost {
                    secret: self.secret.clone(),
                };
                info!(turns = self.history.len(), "out of attempts");
            } else {
                self.state = GameState::InProgress {
                    attempts_left: self.attempts_left,
                };
            }
        }

        debug!(
            exact = score.exact,
            color = score.color,
            attempts_left = self.attempts_left,
            "guess scored"
        );

        Ok((score, self.state.clone()))
    }

    /// Submit a per-position selection where some slots may still be empty
    ///
    /// # Errors
    /// Same as [`GameEngine::submit_guess`], plus `GuessError::Unfilled` for
    /// the first empty slot.
    pub fn submit_slots(
        &mut self,
        slots: &[Option<Color>],
    ) -> Result<(Score, GameState), GameError> {
        if self.state.is_over() {
            return Err(GameError::GameAlreadyOver);
        }

        let guess = slots
            .iter()
            .enumerate()
            .map(|(position, slot)| slot.ok_or(GuessError::Unfilled { position }))
            .collect::<Result<Vec<_>, _>>()?;

        self.submit_guess(&guess)
    }

    fn validate_guess(&self, guess: &[Color]) -> Result<(), GuessError> {
        if guess.len() != self.config.code_length {
            return Err(GuessError::WrongLength {
                expected: self.config.code_length,
                actual: guess.len(),
            });
        }

        if let Some((position, &color)) = guess
            .iter()
            .enumerate()
            .find(|(_, c)| !self.config.palette.contains(*c))
        {
            return Err(GuessError::NotInPalette { position, color });
        }

        Ok(())
    }

    /// Current game state
    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[inline]
    #[must_use]
    pub const fn attempts_left(&self) -> usize {
        self.attempts_left
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.config.max_attempts
    }

    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.config.code_length
    }

    #[inline]
    #[must_use]
    pub fn palette(&self) -> &[Color] {
        &self.config.palette
    }

    /// Guesses scored so far, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ConfigError;
    use Color::{Blue, Green, Orange, Purple, Red, Yellow};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn game_with_secret(secret: [Color; 4]) -> GameEngine {
        GameEngine::with_secret(GameConfig::default(), Code::from(secret)).unwrap()
    }

    #[test]
    fn new_game_starts_in_progress() {
        let mut rng = StdRng::seed_from_u64(1);
        let game = GameEngine::new(GameConfig::default(), &mut rng).unwrap();

        assert_eq!(game.state(), &GameState::InProgress { attempts_left: 10 });
        assert_eq!(game.attempts_left(), 10);
        assert_eq!(game.code_length(), 4);
        assert!(game.history().is_empty());
        assert!(!game.is_over());
    }

    #[test]
    fn new_game_rejects_bad_config() {
        let mut rng = StdRng::seed_from_u64(1);

        let result = GameEngine::new(GameConfig::new(0, Color::ALL.to_vec(), 10), &mut rng);
        assert_eq!(
            result.unwrap_err(),
            GameError::InvalidConfiguration(ConfigError::ZeroCodeLength)
        );

        let result = GameEngine::new(GameConfig::new(4, Vec::new(), 10), &mut rng);
        assert_eq!(
            result.unwrap_err(),
            GameError::InvalidConfiguration(ConfigError::EmptyPalette)
        );

        let result = GameEngine::new(GameConfig::new(4, Color::ALL.to_vec(), 0), &mut rng);
        assert_eq!(
            result.unwrap_err(),
            GameError::InvalidConfiguration(ConfigError::ZeroAttempts)
        );
    }

    #[test]
    fn same_seed_same_secret() {
        let a = GameEngine::new(GameConfig::default(), &mut StdRng::seed_from_u64(99)).unwrap();
        let b = GameEngine::new(GameConfig::default(), &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a.secret(), b.secret());
    }

    #[test]
    fn single_color_palette_fills_secret() {
        let config = GameConfig::new(5, vec![Orange], 3);
        let game = GameEngine::new(config, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(game.secret().colors(), &[Orange; 5]);
    }

    #[test]
    fn secrets_can_repeat_colors() {
        // Six-color palette, length 4: some seed in the first hundred repeats a color
        let repeated = (0..100).any(|seed| {
            let game =
                GameEngine::new(GameConfig::default(), &mut StdRng::seed_from_u64(seed)).unwrap();
            let secret = game.secret();
            (1..secret.len()).any(|i| secret[..i].contains(&secret[i]))
        });
        assert!(repeated);
    }

    #[test]
    fn correct_guess_wins() {
        let mut game = game_with_secret([Red, Green, Blue, Yellow]);
        let (score, state) = game.submit_guess(&[Red, Green, Blue, Yellow]).unwrap();

        assert_eq!(score, Score::new(4, 0));
        assert_eq!(state, GameState::Won);
        assert!(game.is_over());
        // Winning does not consume an attempt
        assert_eq!(game.attempts_left(), 10);
    }

    #[test]
    fn wrong_guess_consumes_attempt() {
        let mut game = game_with_secret([Red, Red, Blue, Green]);
        let (score, state) = game.submit_guess(&[Green, Green, Green, Yellow]).unwrap();

        assert_eq!(score, Score::new(0, 1));
        assert_eq!(state, GameState::InProgress { attempts_left: 9 });
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0].score, score);
    }

    #[test]
    fn debug_output_hides_secret() {
        let game = GameEngine::new(GameConfig::default(), &mut StdRng::seed_from_u64(4)).unwrap();
        let output = format!("{game:?}");

        assert!(output.starts_with("GameEngine"));
        assert!(!output.contains("secret"));
        assert!(!output.contains(&format!("{:?}", game.secret())));
    }

    #[test]
    fn exhausting_attempts_loses_and_reveals_secret() {
        let secret = [Red, Red, Blue, Green];
        let mut game = game_with_secret(secret);

        for expected_left in (1..10).rev() {
            let (_, state) = game.submit_guess(&[Purple; 4]).unwrap();
            assert_eq!(
                state,
                GameState::InProgress {
                    attempts_left: expected_left
                }
            );
        }

        let (_, state) = game.submit_guess(&[Purple; 4]).unwrap();
        assert_eq!(
            state,
            GameState::Lost {
                secret: Code::from(secret)
            }
        );
        assert_eq!(game.attempts_left(), 0);
    }

    #[test]
    fn win_on_last_attempt() {
        let config = GameConfig::new(4, Color::ALL.to_vec(), 2);
        let mut game = GameEngine::with_secret(config, Code::from([Blue; 4])).unwrap();

        game.submit_guess(&[Red; 4]).unwrap();
        let (_, state) = game.submit_guess(&[Blue; 4]).unwrap();
        assert_eq!(state, GameState::Won);
        assert_eq!(game.attempts_left(), 1);
    }

    #[test]
    fn guess_after_win_rejected() {
        let mut game = game_with_secret([Red, Green, Blue, Yellow]);
        game.submit_guess(&[Red, Green, Blue, Yellow]).unwrap();

        let err = game.submit_guess(&[Red, Green, Blue, Yellow]).unwrap_err();
        assert_eq!(err, GameError::GameAlreadyOver);
        assert_eq!(game.attempts_left(), 10);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.state(), &GameState::Won);
    }

    #[test]
    fn guess_after_loss_rejected() {
        let config = GameConfig::new(4, Color::ALL.to_vec(), 1);
        let mut game = GameEngine::with_secret(config, Code::from([Blue; 4])).unwrap();
        game.submit_guess(&[Red; 4]).unwrap();

        let err = game.submit_guess(&[Blue; 4]).unwrap_err();
        assert_eq!(err, GameError::GameAlreadyOver);
        assert_eq!(game.attempts_left(), 0);
        assert!(matches!(game.state(), GameState::Lost { .. }));
    }

    #[test]
    fn wrong_length_rejected_without_penalty() {
        let mut game = game_with_secret([Red, Green, Blue, Yellow]);

        let err = game.submit_guess(&[Red, Green, Blue]).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidGuess(GuessError::WrongLength {
                expected: 4,
                actual: 3
            })
        );

        let err = game.submit_guess(&[Red; 5]).unwrap_err();
        assert!(matches!(err, GameError::InvalidGuess(_)));

        assert_eq!(game.attempts_left(), 10);
        assert!(game.history().is_empty());
    }

    #[test]
    fn color_outside_palette_rejected() {
        let config = GameConfig::new(4, vec![Red, Green, Blue], 10);
        let mut game = GameEngine::with_secret(config, Code::from([Red; 4])).unwrap();

        let err = game.submit_guess(&[Red, Green, Purple, Blue]).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidGuess(GuessError::NotInPalette {
                position: 2,
                color: Purple
            })
        );
        assert_eq!(game.attempts_left(), 10);
    }

    #[test]
    fn unfilled_slot_rejected() {
        let mut game = game_with_secret([Red, Green, Blue, Yellow]);

        let err = game
            .submit_slots(&[Some(Red), None, Some(Blue), None])
            .unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidGuess(GuessError::Unfilled { position: 1 })
        );
        assert_eq!(game.attempts_left(), 10);
    }

    #[test]
    fn filled_slots_are_scored() {
        let mut game = game_with_secret([Red, Red, Blue, Green]);

        let (score, _) = game
            .submit_slots(&[Some(Blue), Some(Green), Some(Red), Some(Red)])
            .unwrap();
        assert_eq!(score, Score::new(0, 4));
    }

    #[test]
    fn slots_after_game_over_rejected() {
        let mut game = game_with_secret([Red; 4]);
        game.submit_guess(&[Red; 4]).unwrap();

        let err = game.submit_slots(&[None; 4]).unwrap_err();
        assert_eq!(err, GameError::GameAlreadyOver);
    }

    proptest! {
        #[test]
        fn generated_secret_uses_palette(
            seed in any::<u64>(),
            code_length in 1usize..10,
            palette in prop::sample::subsequence(Color::ALL.to_vec(), 1..=6),
        ) {
            let config = GameConfig::new(code_length, palette.clone(), 10);
            let game = GameEngine::new(config, &mut StdRng::seed_from_u64(seed)).unwrap();

            prop_assert_eq!(game.secret().len(), code_length);
            prop_assert!(game.secret().iter().all(|c| palette.contains(c)));
        }

        #[test]
        fn guessing_the_secret_always_wins(seed in any::<u64>()) {
            let mut game =
                GameEngine::new(GameConfig::default(), &mut StdRng::seed_from_u64(seed)).unwrap();
            let secret = game.secret().clone();

            let (score, state) = game.submit_guess(&secret).unwrap();
            prop_assert_eq!(score, Score::new(4, 0));
            prop_assert_eq!(state, GameState::Won);
        }

        #[test]
        fn attempts_never_increase(
            seed in any::<u64>(),
            guesses in prop::collection::vec(
                prop::collection::vec(prop::sample::select(Color::ALL.to_vec()), 3..=5),
                1..20,
            ),
        ) {
            let mut game =
                GameEngine::new(GameConfig::default(), &mut StdRng::seed_from_u64(seed)).unwrap();
            let mut previous = game.attempts_left();

            for guess in guesses {
                let _ = game.submit_guess(&guess);
                prop_assert!(game.attempts_left() <= previous);
                previous = game.attempts_left();
            }
        }
    }
}
