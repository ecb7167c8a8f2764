//! Number-guessing game: find a secret in 1..=100 with a limited number of lives.

use std::ops::RangeInclusive;

use rand::Rng;

/// Range the secret is drawn from and guesses must fall in.
pub const SECRET_RANGE: RangeInclusive<u32> = 1..=100;

/// Guesses allowed per game.
pub const STARTING_LIVES: u32 = 7;

/// What a single guess did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Outside [`SECRET_RANGE`]; no life consumed.
    OutOfRange,
    TooHigh { lives_left: u32 },
    TooLow { lives_left: u32 },
    Won { attempts: u32 },
    /// Last life spent on a wrong guess.
    Lost { secret: u32 },
    /// The game had already ended; nothing changed.
    Finished,
}

#[derive(Debug, Clone)]
pub struct GuessingGame {
    secret: u32,
    lives_left: u32,
    attempts: u32,
    finished: bool,
}

impl GuessingGame {
    /// New game with a uniformly random secret.
    pub fn new() -> Self {
        Self::with_secret(rand::rng().random_range(SECRET_RANGE), STARTING_LIVES)
    }

    pub fn with_secret(secret: u32, lives: u32) -> Self {
        Self {
            secret,
            lives_left: lives,
            attempts: 0,
            finished: lives == 0,
        }
    }

    pub fn guess(&mut self, guess: u32) -> GuessOutcome {
        if self.finished {
            return GuessOutcome::Finished;
        }
        if !SECRET_RANGE.contains(&guess) {
            return GuessOutcome::OutOfRange;
        }

        self.attempts += 1;
        self.lives_left -= 1;

        if guess == self.secret {
            self.finished = true;
            return GuessOutcome::Won {
                attempts: self.attempts,
            };
        }
        if self.lives_left == 0 {
            self.finished = true;
            return GuessOutcome::Lost {
                secret: self.secret,
            };
        }
        if guess > self.secret {
            GuessOutcome::TooHigh {
                lives_left: self.lives_left,
            }
        } else {
            GuessOutcome::TooLow {
                lives_left: self.lives_left,
            }
        }
    }

    pub fn lives_left(&self) -> u32 {
        self.lives_left
    }

    /// 1-based number of the next attempt.
    pub fn next_attempt(&self) -> u32 {
        self.attempts + 1
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn secret(&self) -> u32 {
        self.secret
    }
}

impl Default for GuessingGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_secret_in_range() {
        for _ in 0..200 {
            let game = GuessingGame::new();
            assert!(SECRET_RANGE.contains(&game.secret()));
            assert_eq!(game.lives_left(), STARTING_LIVES);
        }
    }

    #[test]
    fn test_hints_and_win() {
        let mut game = GuessingGame::with_secret(42, STARTING_LIVES);
        assert_eq!(game.guess(50), GuessOutcome::TooHigh { lives_left: 6 });
        assert_eq!(game.guess(25), GuessOutcome::TooLow { lives_left: 5 });
        assert_eq!(game.guess(42), GuessOutcome::Won { attempts: 3 });
        assert!(game.is_finished());
        assert_eq!(game.guess(42), GuessOutcome::Finished);
    }

    #[test]
    fn test_out_of_range_costs_nothing() {
        let mut game = GuessingGame::with_secret(10, 3);
        assert_eq!(game.guess(0), GuessOutcome::OutOfRange);
        assert_eq!(game.guess(101), GuessOutcome::OutOfRange);
        assert_eq!(game.lives_left(), 3);
        assert_eq!(game.next_attempt(), 1);
    }

    #[test]
    fn test_lose_after_last_life() {
        let mut game = GuessingGame::with_secret(10, 2);
        assert_eq!(game.guess(1), GuessOutcome::TooLow { lives_left: 1 });
        assert_eq!(game.guess(2), GuessOutcome::Lost { secret: 10 });
        assert!(game.is_finished());
    }

    #[test]
    fn test_win_on_last_life() {
        let mut game = GuessingGame::with_secret(10, 1);
        assert_eq!(game.guess(10), GuessOutcome::Won { attempts: 1 });
    }
}
