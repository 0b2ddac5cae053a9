use crate::game::{GameConfig, GameOutcome};

/// How far `car_ratio + goat_ratio` may drift from one.
pub const RATIO_EPSILON: f64 = 1e-4;

/// Tally of many games played under one configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationResult {
    /// The configuration every game was played with
    config: GameConfig,
    /// Number of games played
    game_instances: usize,
    /// Games that ended with the car
    cars_won: usize,
    /// Games that ended with a goat
    goats_won: usize,
}

impl SimulationResult {
    /// An empty tally for `config`
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            game_instances: 0,
            cars_won: 0,
            goats_won: 0,
        }
    }

    /// Count the outcome of one game
    pub fn record(&mut self, outcome: GameOutcome) {
        self.game_instances += 1;
        if outcome {
            self.cars_won += 1;
        } else {
            self.goats_won += 1;
        }
    }

    /// Fold another tally for the same configuration into this one
    ///
    /// # Panics
    ///
    /// Panics if the two tallies were played with different configurations.
    pub fn merge(&mut self, other: &SimulationResult) {
        assert_eq!(
            self.config, other.config,
            "Can only merge results of the same game configuration"
        );
        self.game_instances += other.game_instances;
        self.cars_won += other.cars_won;
        self.goats_won += other.goats_won;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn game_instances(&self) -> usize {
        self.game_instances
    }

    pub fn cars_won(&self) -> usize {
        self.cars_won
    }

    pub fn goats_won(&self) -> usize {
        self.goats_won
    }

    /// Fraction of games that ended with the car
    pub fn car_ratio(&self) -> f64 {
        ratio(self.cars_won, self.game_instances)
    }

    /// Fraction of games that ended with a goat
    pub fn goat_ratio(&self) -> f64 {
        ratio(self.goats_won, self.game_instances)
    }

    /// The exact win probability for the configuration played
    pub fn theoretical_car_ratio(&self) -> f64 {
        self.config.theoretical_win_probability()
    }

    /// Standard error of the empirical car ratio
    pub fn standard_error(&self) -> f64 {
        if self.game_instances == 0 {
            return 0.0;
        }
        let p = self.car_ratio();
        (p * (1.0 - p) / self.game_instances as f64).sqrt()
    }

    /// Assert that every game was counted exactly once.
    ///
    /// A game can only end with a car or a goat, so a failure here is a
    /// bug in outcome counting and not something a caller can recover
    /// from.
    ///
    /// # Panics
    ///
    /// Panics if the counts don't add up or the ratios don't sum to one.
    pub fn assert_consistent(&self) {
        assert_eq!(
            self.cars_won + self.goats_won,
            self.game_instances,
            "Cars ({}) and goats ({}) don't add up to the games played ({})",
            self.cars_won,
            self.goats_won,
            self.game_instances
        );
        if self.game_instances > 0 {
            let delta = 1.0 - (self.car_ratio() + self.goat_ratio());
            assert!(
                delta.abs() < RATIO_EPSILON,
                "Car and goat ratios must sum to one, off by {delta}"
            );
        }
    }

    /// Format the result as Markdown
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str("# Monty Hall Simulation Results\n\n");

        output.push_str("## Configuration\n\n");
        output.push_str(&format!("- **Doors**: {}\n", self.config.door_count()));
        output.push_str(&format!(
            "- **Doors Revealed**: {}\n",
            self.config.reveal_count()
        ));
        output.push_str(&format!("- **Strategy**: {}\n", self.config.strategy()));
        output.push_str(&format!("- **Games Played**: {}\n", self.game_instances));
        output.push('\n');

        output.push_str("## Outcomes\n\n");
        output.push_str("| Metric | Value |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!(
            "| Cars Won | {} ({:.2}%) |\n",
            self.cars_won,
            100.0 * self.car_ratio()
        ));
        output.push_str(&format!(
            "| Goats Won | {} ({:.2}%) |\n",
            self.goats_won,
            100.0 * self.goat_ratio()
        ));
        output.push_str(&format!("| Car Ratio | {:.4} |\n", self.car_ratio()));
        output.push_str(&format!(
            "| Theoretical | {:.4} |\n",
            self.theoretical_car_ratio()
        ));
        output.push_str(&format!(
            "| Standard Error | {:.4} |\n",
            self.standard_error()
        ));

        output
    }
}

fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::game::Strategy;

    use super::*;

    fn tally(cars: usize, goats: usize) -> SimulationResult {
        let mut result = SimulationResult::new(GameConfig::default());
        for _ in 0..cars {
            result.record(true);
        }
        for _ in 0..goats {
            result.record(false);
        }
        result
    }

    #[test]
    fn test_empty_result() {
        let result = SimulationResult::new(GameConfig::default());
        assert_eq!(result.game_instances(), 0);
        assert_eq!(result.car_ratio(), 0.0);
        assert_eq!(result.standard_error(), 0.0);
        result.assert_consistent();
    }

    #[test]
    fn test_record_counts() {
        let result = tally(3, 1);
        assert_eq!(result.game_instances(), 4);
        assert_eq!(result.cars_won(), 3);
        assert_eq!(result.goats_won(), 1);
        assert_relative_eq!(result.car_ratio(), 0.75);
        assert_relative_eq!(result.goat_ratio(), 0.25);
        result.assert_consistent();
    }

    #[test]
    fn test_merge() {
        let mut a = tally(2, 3);
        let b = tally(5, 0);
        a.merge(&b);
        assert_eq!(a.game_instances(), 10);
        assert_eq!(a.cars_won(), 7);
        assert_eq!(a.goats_won(), 3);
        a.assert_consistent();
    }

    #[test]
    #[should_panic(expected = "same game configuration")]
    fn test_merge_different_configs_panics() {
        let mut a = tally(1, 1);
        let b = SimulationResult::new(GameConfig::default().with_strategy(Strategy::Stay));
        a.merge(&b);
    }

    #[test]
    #[should_panic(expected = "don't add up")]
    fn test_inconsistent_counts_panic() {
        let mut result = tally(1, 1);
        result.cars_won += 1;
        result.assert_consistent();
    }

    #[test]
    fn test_standard_error() {
        let result = tally(50, 50);
        assert_relative_eq!(result.standard_error(), 0.05);
    }

    #[test]
    fn test_markdown_contains_counts() {
        let markdown = tally(2, 1).to_markdown();
        assert!(markdown.contains("- **Doors**: 3"));
        assert!(markdown.contains("- **Strategy**: Switch"));
        assert!(markdown.contains("| Cars Won | 2 (66.67%) |"));
        assert!(markdown.contains("| Goats Won | 1 (33.33%) |"));
        assert!(markdown.contains("| Theoretical | 0.6667 |"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_json() {
        let json = serde_json::to_value(tally(1, 2)).unwrap();
        assert_eq!(json["game_instances"], 3);
        assert_eq!(json["cars_won"], 1);
        assert_eq!(json["goats_won"], 2);
        assert_eq!(json["config"]["door_count"], 3);
        assert_eq!(json["config"]["strategy"], "Switch");
    }
}
