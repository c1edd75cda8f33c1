//! Schedule-strength aggregation (OCLWP and OOCLWP)
//!
//! Both hops exclude the rated team: an opponent's CLWP ignores its games
//! against the rated team, and a second-order CLWP ignores games against both
//! the intermediate opponent and the rated team. Peers with nothing left after
//! exclusion are omitted from the mean rather than counted as zero.

use crate::rating::level::LevelTable;
use crate::rating::schedule::Schedule;
use crate::utils::mean;

/// First- and second-order schedule strength for one team
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StrengthOfSchedule {
    pub oclwp: f64,
    pub ooclwp: f64,
}

/// Mean CLWP of the team's opponents, their games against it removed
pub fn opponents_clwp(schedule: &Schedule, table: &LevelTable, team: usize) -> Option<f64> {
    mean(
        schedule
            .team(team)
            .opponents
            .iter()
            .filter_map(|&opponent| table.clwp_excluding(opponent, &[team])),
    )
}

/// OCLWP of `opponent` as seen from `rated`: `rated` never appears at either hop
fn opponent_oclwp_excluding(
    schedule: &Schedule,
    table: &LevelTable,
    opponent: usize,
    rated: usize,
) -> Option<f64> {
    mean(
        schedule
            .team(opponent)
            .opponents
            .iter()
            .filter(|&&peer| peer != rated)
            .filter_map(|&peer| table.clwp_excluding(peer, &[opponent, rated])),
    )
}

/// Mean over the team's opponents of their OCLWP, the team excluded throughout
pub fn opponents_opponents_clwp(
    schedule: &Schedule,
    table: &LevelTable,
    team: usize,
) -> Option<f64> {
    mean(
        schedule
            .team(team)
            .opponents
            .iter()
            .filter_map(|&opponent| opponent_oclwp_excluding(schedule, table, opponent, team)),
    )
}

/// Compute both aggregates for one team, 0 where nothing is eligible
pub fn strength_of_schedule(
    schedule: &Schedule,
    table: &LevelTable,
    team: usize,
) -> StrengthOfSchedule {
    StrengthOfSchedule {
        oclwp: opponents_clwp(schedule, table, team).unwrap_or(0.0),
        ooclwp: opponents_opponents_clwp(schedule, table, team).unwrap_or(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RpiCoefficients;
    use crate::rating::win_pct::win_percentages;
    use crate::types::{Game, Team};

    fn flat() -> RpiCoefficients {
        RpiCoefficients {
            clgw_step: 0.0,
            clgl_step: 0.0,
            ..RpiCoefficients::default()
        }
    }

    fn build(teams: &[Team]) -> (Schedule, LevelTable) {
        let (schedule, _) = Schedule::build(teams).unwrap();
        let table = LevelTable::build(&schedule, &win_percentages(&schedule), &flat());
        (schedule, table)
    }

    #[test]
    fn test_two_team_league_has_no_eligible_opponents() {
        let teams = vec![
            Team::new("a", "Alpha")
                .with_game(Game::scored("b", 2, 1))
                .with_game(Game::scored("b", 3, 1)),
            Team::new("b", "Beta")
                .with_game(Game::scored("a", 1, 2))
                .with_game(Game::scored("a", 1, 3)),
        ];
        let (schedule, table) = build(&teams);

        assert_eq!(opponents_clwp(&schedule, &table, 0), None);
        assert_eq!(opponents_opponents_clwp(&schedule, &table, 0), None);

        let sos = strength_of_schedule(&schedule, &table, 0);
        assert_eq!(sos, StrengthOfSchedule::default());
    }

    #[test]
    fn test_opponent_games_against_rated_team_are_ignored() {
        // b lost to a, but beat c; from a's point of view b is a 1.0 opponent
        let teams = vec![
            Team::new("a", "Alpha").with_game(Game::scored("b", 1, 0)),
            Team::new("b", "Beta")
                .with_game(Game::scored("a", 0, 1))
                .with_game(Game::scored("c", 1, 0)),
            Team::new("c", "Gamma").with_game(Game::scored("b", 0, 1)),
        ];
        let (schedule, table) = build(&teams);

        assert_eq!(opponents_clwp(&schedule, &table, 0), Some(1.0));
        // c's only opponent is b, whose remaining game is the loss to a
        assert_eq!(opponents_clwp(&schedule, &table, 2), Some(0.0));
    }

    #[test]
    fn test_second_order_chain() {
        // a - b - c - d chain, each team beats the next one
        let teams = vec![
            Team::new("a", "A").with_game(Game::scored("b", 1, 0)),
            Team::new("b", "B")
                .with_game(Game::scored("a", 0, 1))
                .with_game(Game::scored("c", 1, 0)),
            Team::new("c", "C")
                .with_game(Game::scored("b", 0, 1))
                .with_game(Game::scored("d", 1, 0)),
            Team::new("d", "D").with_game(Game::scored("c", 0, 1)),
        ];
        let (schedule, table) = build(&teams);

        // a -> b -> c, c's games without b and a: the win over d
        assert_eq!(opponents_opponents_clwp(&schedule, &table, 0), Some(1.0));
        // d -> c -> b, b's games without c and d: the loss to a
        assert_eq!(opponents_opponents_clwp(&schedule, &table, 3), Some(0.0));
        // b -> {a, c}; a has no other opponents, c -> d whose games without c are empty
        assert_eq!(opponents_opponents_clwp(&schedule, &table, 1), None);

        let sos = strength_of_schedule(&schedule, &table, 0);
        assert_eq!(sos.oclwp, 1.0);
        assert_eq!(sos.ooclwp, 1.0);

        for team in 0..schedule.len() {
            let sos = strength_of_schedule(&schedule, &table, team);
            assert_eq!(sos.oclwp, opponents_clwp(&schedule, &table, team).unwrap_or(0.0));
            assert_eq!(
                sos.ooclwp,
                opponents_opponents_clwp(&schedule, &table, team).unwrap_or(0.0)
            );
        }
    }

    #[test]
    fn test_team_without_games() {
        let teams = vec![
            Team::new("a", "A").with_game(Game::scored("b", 1, 0)),
            Team::new("b", "B").with_game(Game::scored("a", 0, 1)),
            Team::new("idle", "Idle"),
        ];
        let (schedule, table) = build(&teams);
        assert_eq!(
            strength_of_schedule(&schedule, &table, 2),
            StrengthOfSchedule::default()
        );
    }
}
