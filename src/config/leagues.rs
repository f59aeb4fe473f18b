use std::ops::RangeInclusive;

pub const ALL_TIME_ID: &str = "all-time";
pub const ALL_TIME_NAME: &str = "All-Time Records";

/// Season calendar entry: which weeks belong to it and how many results count
#[derive(Debug, Clone)]
pub struct LeagueConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub weeks: RangeInclusive<u32>,
    pub best_n: Option<i64>,
}

impl LeagueConfig {
    pub fn new(
        id: &'static str,
        name: &'static str,
        weeks: RangeInclusive<u32>,
        best_n: Option<i64>,
    ) -> Self {
        Self {
            id,
            name,
            weeks,
            best_n,
        }
    }

    pub fn contains_week(&self, week: u32) -> bool {
        self.weeks.contains(&week)
    }
}

/// Get the league seasons, newest first
pub fn get_leagues() -> Vec<LeagueConfig> {
    vec![
        LeagueConfig::new("spring-2026", "Spring League 2026", 89..=99, Some(7)),
        LeagueConfig::new("autumn-2025", "Autumn League 2025", 71..=82, Some(8)),
        LeagueConfig::new("spring-2025", "Spring League 2025", 49..=63, Some(10)),
        LeagueConfig::new("autumn-2024", "Autumn League 2024", 31..=45, Some(10)),
        LeagueConfig::new("spring-2024", "Spring League 2024", 9..=25, Some(12)),
    ]
}

/// Weeks outside every season are off-season and only feed the all-time table
pub fn league_for_week(leagues: &[LeagueConfig], week: u32) -> Option<&LeagueConfig> {
    leagues.iter().find(|l| l.contains_week(week))
}
