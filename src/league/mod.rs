//! League aggregator: best-N season standings and the views derived from them.

mod grid;
mod head_to_head;
mod history;
mod matrix;
mod metagame;
mod season;
mod selection;
mod standings;
mod types;

pub use head_to_head::{head_to_head, head_to_head_between, records_for, HeadToHeadRecord};
pub use metagame::{deck_metagame, DeckShare, OTHERS};
pub use season::{aggregate_season, collect_scores};
pub use selection::{select, BestN, Selection};
pub use types::{
    HistoryStep, LeagueReport, LeagueStandingRow, MatrixCell, MatrixRow, PlayerScores, PlayerTotal,
    SeasonRecord,
};

use crate::domain::TournamentId;
use crate::errors::EngineResult;
use grid::ScoreGrid;

/// Aggregate a season.
///
/// `tournament_ids` must be chronological. Every player's best-N selection is
/// made once per view by the same rule, so the final history step always
/// equals the standings total and the matrix flags always sum to it.
pub fn aggregate(
    tournament_ids: &[TournamentId],
    players: &[PlayerScores],
    best_n: Option<i64>,
) -> EngineResult<LeagueReport> {
    let best_n = BestN::from_raw(best_n)?;
    let grid = ScoreGrid::build(tournament_ids, players)?;

    let selections: Vec<Selection> = grid
        .rows
        .iter()
        .map(|row| select(&row.scores, best_n))
        .collect();
    let order = standings::standing_order(&selections);

    Ok(LeagueReport {
        standings: standings::build_standings(&grid, &selections, &order, best_n),
        matrix: matrix::build_matrix(&grid, &selections, &order),
        history: history::build_history(&grid, best_n),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        LeagueSeason, Match, Participant, PlayerTournamentResult, Points, Round, TournamentCollection,
        TournamentMetadata, TournamentRecord,
    };
    use crate::errors::{ConfigurationError, EngineError, MalformedInput};
    use chrono::NaiveDate;

    fn ids(n: usize) -> Vec<TournamentId> {
        (1..=n).map(|i| format!("week-{}", i)).collect()
    }

    fn player(name: &str, scores: &[Points]) -> PlayerScores {
        scores
            .iter()
            .enumerate()
            .filter(|(_, s)| **s != 0)
            .fold(PlayerScores::new(name), |p, (i, &s)| p.with_score(format!("week-{}", i + 1), s))
    }

    fn step_totals(report: &LeagueReport, name: &str) -> Vec<Points> {
        report
            .history
            .iter()
            .map(|step| step.total_for(name).unwrap())
            .collect()
    }

    #[test]
    fn test_best_two_of_four() {
        let report = aggregate(&ids(4), &[player("Ann", &[10, 10, 6, 0])], Some(2)).unwrap();

        assert_eq!(report.standings[0].points, 20);
        let flags: Vec<bool> = report.matrix[0].cells.iter().map(|c| c.counted).collect();
        assert_eq!(flags, vec![true, true, false, false]);
        assert_eq!(step_totals(&report, "Ann"), vec![10, 20, 20, 20]);
        assert_eq!(report.standings[0].tournaments_played, 3);
        assert_eq!(report.standings[0].counted, 2);
        assert_eq!(report.standings[0].lowest_counting, 10);
    }

    #[test]
    fn test_count_all_when_best_n_missing() {
        let report = aggregate(&ids(3), &[player("Ann", &[5, 7, 3])], None).unwrap();
        assert_eq!(report.standings[0].points, 15);
        assert!(report.matrix[0].cells.iter().all(|c| c.counted));
        assert_eq!(report.standings[0].lowest_counting, 3);
    }

    #[test]
    fn test_history_reselects_at_each_step() {
        let report = aggregate(&ids(4), &[player("Ann", &[4, 2, 9, 6])], Some(2)).unwrap();

        // week-2's 2 counts until week-3's 9 displaces it, then 4 gives way to 6
        assert_eq!(step_totals(&report, "Ann"), vec![4, 6, 13, 15]);
        let flags: Vec<bool> = report.matrix[0].cells.iter().map(|c| c.counted).collect();
        assert_eq!(flags, vec![false, false, true, true]);
    }

    #[test]
    fn test_final_history_matches_standings_and_matrix() {
        let players = vec![
            player("Ann", &[9, 0, 3, 9, 6, 3]),
            player("Bea", &[3, 3, 3, 3, 3, 3]),
            player("Cid", &[0, 0, 12, 0, 0, 1]),
            player("Dan", &[]),
        ];
        let report = aggregate(&ids(6), &players, Some(3)).unwrap();
        let last = report.history.last().unwrap();

        for row in &report.standings {
            assert_eq!(last.total_for(&row.name), Some(row.points));

            let matrix_row = report.matrix.iter().find(|m| m.name == row.name).unwrap();
            let counted_sum: Points = matrix_row
                .cells
                .iter()
                .filter(|c| c.counted)
                .map(|c| c.score)
                .sum();
            assert_eq!(counted_sum, row.points);
        }

        assert_eq!(aggregate(&ids(6), &players, Some(3)).unwrap(), report);
    }

    #[test]
    fn test_dense_ranks_for_ties() {
        let players = vec![
            player("Ann", &[10]),
            player("Bea", &[20]),
            player("Cid", &[30]),
            player("Dan", &[20]),
        ];
        let report = aggregate(&ids(1), &players, None).unwrap();

        let table: Vec<(&str, usize)> = report
            .standings
            .iter()
            .map(|r| (r.name.as_str(), r.rank))
            .collect();
        assert_eq!(table, vec![("Cid", 1), ("Bea", 2), ("Dan", 2), ("Ann", 3)]);

        let matrix_order: Vec<&str> = report.matrix.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(matrix_order, vec!["Cid", "Bea", "Dan", "Ann"]);
    }

    #[test]
    fn test_zero_scores_are_played_but_never_counted() {
        let players = vec![PlayerScores::new("Ann").with_score("week-1", 0).with_score("week-2", 3)];
        let report = aggregate(&ids(2), &players, Some(1)).unwrap();

        let row = &report.standings[0];
        assert_eq!(row.tournaments_played, 2);
        assert_eq!(row.counted, 1);
        assert_eq!(row.tournaments_display(), "1 (2)");
        assert_eq!(row.history.get("week-1"), Some(&0));

        let first = &report.matrix[0].cells[0];
        assert!(first.participated && !first.counted);
    }

    #[test]
    fn test_lowest_counting_is_zero_before_n_results() {
        let report = aggregate(&ids(3), &[player("Ann", &[5, 8, 0])], Some(3)).unwrap();
        assert_eq!(report.standings[0].lowest_counting, 0);
        assert_eq!(report.standings[0].points, 13);
    }

    #[test]
    fn test_input_errors() {
        assert_eq!(
            aggregate(&ids(2), &[], Some(-3)),
            Err(EngineError::Configuration(ConfigurationError::NegativeBestN(-3)))
        );

        let stray = vec![PlayerScores::new("Ann").with_score("week-9", 3)];
        assert_eq!(
            aggregate(&ids(2), &stray, None),
            Err(EngineError::MalformedInput(MalformedInput::UnknownTournament {
                player: "Ann".to_string(),
                tournament: "week-9".to_string()
            }))
        );

        let repeated = vec!["week-1".to_string(), "week-1".to_string()];
        assert!(matches!(
            aggregate(&repeated, &[], None),
            Err(EngineError::MalformedInput(MalformedInput::DuplicateTournament { .. }))
        ));
    }

    #[test]
    fn test_empty_season() {
        let report = aggregate(&[], &[], Some(5)).unwrap();
        assert!(report.standings.is_empty());
        assert!(report.history.is_empty());
    }

    fn result(name: &str, points: Points, wins: u32, losses: u32) -> PlayerTournamentResult {
        PlayerTournamentResult {
            rank: 0,
            name: name.to_string(),
            deck: None,
            points,
            record: format!("{}-{}-0", wins, losses),
            wins,
            losses,
            draws: 0,
            omw: 0.0,
            gw: 0.0,
            ogw: 0.0,
            mw: 0.0,
            payout: 0,
        }
    }

    fn record(id: &str, week: u32, standings: Vec<PlayerTournamentResult>) -> TournamentRecord {
        TournamentRecord {
            id: id.to_string(),
            name: id.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            week_number: week,
            league_id: None,
            metadata: TournamentMetadata::default(),
            rounds: vec![Round {
                index: 1,
                matches: vec![Match::new(
                    Participant::Real("Ann".to_string()),
                    Participant::Real("Bea".to_string()),
                    2,
                    0,
                    0,
                )],
            }],
            standings,
        }
    }

    #[test]
    fn test_aggregate_season_from_records() {
        let mut collection = TournamentCollection::new();
        collection.add(record("week-71", 71, vec![result("Ann", 9, 3, 0), result("Bea", 3, 1, 2)]));
        collection.add(record("week-72", 72, vec![result("Bea", 6, 2, 1), result("Ann", 0, 0, 3)]));

        let season = LeagueSeason {
            id: "autumn-2025".to_string(),
            name: "Autumn League 2025".to_string(),
            tournaments: vec!["week-71".to_string(), "week-72".to_string()],
            best_n: Some(1),
        };

        let report = aggregate_season(&season, &collection).unwrap();
        let ann = &report.standings[0];
        assert_eq!((ann.name.as_str(), ann.points), ("Ann", 9));
        assert_eq!((ann.wins, ann.losses, ann.matches), (3, 3, 6));
        assert_eq!(ann.tournaments_played, 2);

        let bea = &report.standings[1];
        assert_eq!((bea.name.as_str(), bea.points), ("Bea", 6));

        let missing = LeagueSeason {
            tournaments: vec!["week-99".to_string()],
            ..season
        };
        assert!(matches!(
            aggregate_season(&missing, &collection),
            Err(EngineError::MalformedInput(MalformedInput::MissingTournament { .. }))
        ));
    }
}
