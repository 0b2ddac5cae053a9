use super::{GameConfigError, Strategy};

/// The fewest doors a game can have: the contestant's pick, one door for
/// the host to open and one door to switch to.
pub const MIN_DOORS: usize = 3;

/// Configuration for a single game of Monty Hall.
///
/// A `GameConfig` can only be built through [`GameConfig::new`], so every
/// value in circulation satisfies `door_count >= 3` and
/// `1 <= reveal_count <= door_count - 2`. The host can therefore always
/// find a door to open and a switching contestant always has somewhere to
/// go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameConfig {
    door_count: usize,
    reveal_count: usize,
    strategy: Strategy,
}

impl Default for GameConfig {
    /// The classic game: three doors, one goat revealed, and switching.
    fn default() -> Self {
        Self {
            door_count: MIN_DOORS,
            reveal_count: 1,
            strategy: Strategy::Switch,
        }
    }
}

impl GameConfig {
    /// Create a validated game configuration.
    ///
    /// # Errors
    ///
    /// - [`GameConfigError::NotEnoughDoors`] if `door_count < 3`
    /// - [`GameConfigError::TooManyRevealed`] if `reveal_count > door_count - 2`
    /// - [`GameConfigError::NotEnoughRevealed`] if `reveal_count == 0`
    ///
    /// # Examples
    ///
    /// ```
    /// use monty_hall::game::{GameConfig, GameConfigError, Strategy};
    ///
    /// let config = GameConfig::new(10, 8, Strategy::Switch).unwrap();
    /// assert_eq!(config.max_reveal_count(), 8);
    ///
    /// assert_eq!(
    ///     GameConfig::new(3, 0, Strategy::Stay),
    ///     Err(GameConfigError::NotEnoughRevealed)
    /// );
    /// ```
    pub fn new(
        door_count: usize,
        reveal_count: usize,
        strategy: Strategy,
    ) -> Result<Self, GameConfigError> {
        Self::validate_counts(door_count, reveal_count)?;
        Ok(Self {
            door_count,
            reveal_count,
            strategy,
        })
    }

    /// Check a door and reveal count pair without building a config.
    pub fn validate_counts(door_count: usize, reveal_count: usize) -> Result<(), GameConfigError> {
        if door_count < MIN_DOORS {
            return Err(GameConfigError::NotEnoughDoors { door_count });
        }

        let max_reveal = door_count - 2;
        if reveal_count > max_reveal {
            return Err(GameConfigError::TooManyRevealed {
                reveal_count,
                door_count,
                max_reveal,
            });
        }

        if reveal_count == 0 {
            return Err(GameConfigError::NotEnoughRevealed);
        }

        Ok(())
    }

    pub fn door_count(&self) -> usize {
        self.door_count
    }

    pub fn reveal_count(&self) -> usize {
        self.reveal_count
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The largest legal reveal count for this many doors.
    pub fn max_reveal_count(&self) -> usize {
        self.door_count - 2
    }

    /// A copy of this config with a different strategy.
    pub fn with_strategy(self, strategy: Strategy) -> Self {
        Self { strategy, ..self }
    }

    /// The exact probability of winning the car.
    ///
    /// Staying wins whenever the first pick was right, `1 / N`. Switching
    /// only wins when the first pick was wrong, `(N - 1) / N`, and the
    /// uniform switch then lands on the car among the `N - R - 1` doors
    /// still closed, giving `(N - 1) / (N * (N - R - 1))`.
    pub fn theoretical_win_probability(&self) -> f64 {
        let doors = self.door_count as f64;
        match self.strategy {
            Strategy::Stay => 1.0 / doors,
            Strategy::Switch => {
                let closed_alternatives = (self.door_count - self.reveal_count - 1) as f64;
                (doors - 1.0) / (doors * closed_alternatives)
            }
        }
    }
}
