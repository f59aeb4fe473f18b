use anyhow::Context as _;
use thiserror::Error;

/// Errors returned by the two engine entry points
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("malformed input: {0}")]
    MalformedInput(#[from] MalformedInput),
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInput {
    #[error("round {round} has a match without a real participant")]
    NoRealParticipant { round: u32 },
    #[error("round {round} pairs {player} against themselves")]
    SelfPairing { round: u32, player: String },
    #[error("{player} is paired more than once in round {round}")]
    DuplicatePairing { round: u32, player: String },
    #[error("round index {round} appears more than once")]
    DuplicateRound { round: u32 },
    #[error("scores for {player} reference tournament {tournament} outside the season")]
    UnknownTournament { player: String, tournament: String },
    #[error("tournament {tournament} is listed more than once")]
    DuplicateTournament { tournament: String },
    #[error("season references tournament {tournament} which has no record")]
    MissingTournament { tournament: String },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("best-N must not be negative (got {0})")]
    NegativeBestN(i64),
    #[error("scoring weights are empty")]
    EmptyScoringWeights,
    #[error("unknown scoring weight key: {0}")]
    UnknownScoringKey(String),
    #[error("scoring weight must look like key=points (got {0:?})")]
    MalformedScoringWeight(String),
    #[error("tiebreak floor must lie in [0, 1] (got {0})")]
    FloorOutOfRange(f64),
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Add context to snapshot store errors
pub fn snapshot_context(operation: &str, key: &str) -> String {
    format!("Failed to {} snapshot for key: {}", operation, key)
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(data_type))
}
