pub mod leagues;
pub mod settings;

pub use leagues::{get_leagues, league_for_week, LeagueConfig, ALL_TIME_ID, ALL_TIME_NAME};
pub use settings::{
    AppConfig, MetagameSettings, PayoutSettings, ScoringSettings, SnapshotSettings, TiebreakSettings,
};
