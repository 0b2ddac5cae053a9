use std::fmt::Display;
use std::str::FromStr;

use super::GameConfigError;

/// What the contestant does once the host has finished opening doors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Move to a different closed door chosen uniformly at random.
    #[default]
    Switch,
    /// Keep the door picked at the start of the game.
    Stay,
}

impl Strategy {
    /// Both strategies, in the order they are usually reported.
    pub const ALL: [Strategy; 2] = [Strategy::Switch, Strategy::Stay];

    /// The literal token used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Switch => "Switch",
            Strategy::Stay => "Stay",
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = GameConfigError;

    /// Parsing is case sensitive: only `Switch` and `Stay` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Switch" => Ok(Strategy::Switch),
            "Stay" => Ok(Strategy::Stay),
            other => Err(GameConfigError::UnknownStrategy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_strategies() {
        assert_eq!("Switch".parse::<Strategy>(), Ok(Strategy::Switch));
        assert_eq!("Stay".parse::<Strategy>(), Ok(Strategy::Stay));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        for bad in ["switch", "STAY", "stay", " Switch", ""] {
            assert_eq!(
                bad.parse::<Strategy>(),
                Err(GameConfigError::UnknownStrategy(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_variant_names() {
        let json = serde_json::to_string(&Strategy::Stay).unwrap();
        assert_eq!(json, "\"Stay\"");
        let back: Strategy = serde_json::from_str("\"Switch\"").unwrap();
        assert_eq!(back, Strategy::Switch);
    }
}
