use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::Points;
use crate::errors::ConfigurationError;

/// Match points awarded per result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringSettings {
    pub win: Points,
    pub draw: Points,
    pub loss: Points,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            win: 3,
            draw: 1,
            loss: 0,
        }
    }
}

impl ScoringSettings {
    /// Build weights from a loose key/value set. Keys left out keep their
    /// default value; an empty set or an unknown key is rejected.
    pub fn from_map(weights: &HashMap<String, Points>) -> Result<Self, ConfigurationError> {
        if weights.is_empty() {
            return Err(ConfigurationError::EmptyScoringWeights);
        }

        let mut settings = Self::default();
        for (key, &value) in weights {
            match key.as_str() {
                "win" => settings.win = value,
                "draw" => settings.draw = value,
                "loss" => settings.loss = value,
                other => return Err(ConfigurationError::UnknownScoringKey(other.to_string())),
            }
        }

        Ok(settings)
    }

    /// Parse `win=3,draw=1,loss=0` and apply it with [`Self::from_map`]
    pub fn parse(weights: &str) -> Result<Self, ConfigurationError> {
        let map = weights
            .split(',')
            .map(str::trim)
            .filter(|pair| !pair.is_empty())
            .map(parse_weight)
            .collect::<Result<HashMap<_, _>, _>>()?;

        Self::from_map(&map)
    }
}

fn parse_weight(pair: &str) -> Result<(String, Points), ConfigurationError> {
    let malformed = || ConfigurationError::MalformedScoringWeight(pair.to_string());
    let (key, value) = pair.split_once('=').ok_or_else(malformed)?;
    let value = value.trim().parse().map_err(|_| malformed())?;

    Ok((key.trim().to_string(), value))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TiebreakSettings {
    /// Lower bound for every tiebreak percentage
    pub floor: f64,
}

impl Default for TiebreakSettings {
    fn default() -> Self {
        Self { floor: 1.0 / 3.0 }
    }
}

impl TiebreakSettings {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if (0.0..=1.0).contains(&self.floor) {
            Ok(())
        } else {
            Err(ConfigurationError::FloorOutOfRange(self.floor))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutSettings {
    /// Fixed amounts by rank, used when a tournament has no entry fee split
    pub amounts: Vec<u64>,
    /// Entry fee per paying player; enables the prize pool split
    pub entry_fee: Option<u64>,
    /// Fraction of the pool paid to each rank
    pub shares: Vec<f64>,
}

impl Default for PayoutSettings {
    fn default() -> Self {
        Self {
            amounts: Vec::new(),
            entry_fee: None,
            shares: vec![0.5, 0.3, 0.2],
        }
    }
}

/// Deck breakdown published with each league
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetagameSettings {
    /// Decks listed by name; the rest go into "Others"
    pub max_shown: usize,
    /// Labels always counted under "Others"
    pub grouped: Vec<String>,
}

impl Default for MetagameSettings {
    fn default() -> Self {
        Self {
            max_shown: 16,
            grouped: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotSettings {
    pub data_dir: String,
    pub raw_subdir: &'static str,
    pub database_key: &'static str,
}

impl Default for SnapshotSettings {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            raw_subdir: "raw",
            database_key: "db",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub scoring: ScoringSettings,
    pub tiebreak: TiebreakSettings,
    pub payout: PayoutSettings,
    pub metagame: MetagameSettings,
    pub snapshot: SnapshotSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scoring(mut self, scoring: ScoringSettings) -> Self {
        self.scoring = scoring;
        self
    }

    /// Point the snapshot store somewhere else, e.g. from `LEAGUE_DATA_DIR`
    pub fn with_data_dir(mut self, data_dir: impl Into<String>) -> Self {
        self.snapshot.data_dir = data_dir.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_from_map() {
        let weights: HashMap<String, Points> =
            [("win".to_string(), 2), ("draw".to_string(), 1)].into_iter().collect();
        let settings = ScoringSettings::from_map(&weights).unwrap();
        assert_eq!(settings, ScoringSettings { win: 2, draw: 1, loss: 0 });
    }

    #[test]
    fn test_scoring_rejects_empty_and_unknown_keys() {
        assert_eq!(
            ScoringSettings::from_map(&HashMap::new()),
            Err(ConfigurationError::EmptyScoringWeights)
        );

        let weights: HashMap<String, Points> = [("bye".to_string(), 3)].into_iter().collect();
        assert_eq!(
            ScoringSettings::from_map(&weights),
            Err(ConfigurationError::UnknownScoringKey("bye".to_string()))
        );
    }

    #[test]
    fn test_scoring_parse() {
        assert_eq!(
            ScoringSettings::parse("win=2, loss=-1").unwrap(),
            ScoringSettings { win: 2, draw: 1, loss: -1 }
        );
        assert_eq!(ScoringSettings::parse(" "), Err(ConfigurationError::EmptyScoringWeights));
        assert_eq!(
            ScoringSettings::parse("win=3,bye=3"),
            Err(ConfigurationError::UnknownScoringKey("bye".to_string()))
        );
        assert_eq!(
            ScoringSettings::parse("win:3"),
            Err(ConfigurationError::MalformedScoringWeight("win:3".to_string()))
        );
        assert_eq!(
            ScoringSettings::parse("draw=one"),
            Err(ConfigurationError::MalformedScoringWeight("draw=one".to_string()))
        );
    }

    #[test]
    fn test_tiebreak_floor_range() {
        assert!(TiebreakSettings::default().validate().is_ok());
        assert!(TiebreakSettings { floor: 0.0 }.validate().is_ok());
        assert!(TiebreakSettings { floor: 1.5 }.validate().is_err());
        assert!(TiebreakSettings { floor: -0.1 }.validate().is_err());
    }
}
