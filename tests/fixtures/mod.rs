//! Shared rosters and coefficient sets for integration testing

#![allow(dead_code)]

use rpi_engine::config::RpiCoefficients;
use rpi_engine::roster::RosterBuilder;
use rpi_engine::types::{Team, TeamRpiResult};
use rpi_engine::RankingReport;

/// Float comparison tolerance for hand-computed expectations
pub const EPSILON: f64 = 1e-9;

pub fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "{}: expected {}, got {}",
        what,
        expected,
        actual
    );
}

pub fn team<'a>(report: &'a RankingReport, team_id: &str) -> &'a TeamRpiResult {
    report
        .get(team_id)
        .unwrap_or_else(|| panic!("team {} missing from report", team_id))
}

/// Generic profile with a game threshold every fixture team meets
pub fn fixture_coefficients() -> RpiCoefficients {
    RpiCoefficients {
        min_games: 4,
        ..RpiCoefficients::default()
    }
}

/// Generic profile with the level adjustment switched off
pub fn flat_coefficients() -> RpiCoefficients {
    RpiCoefficients {
        min_games: 1,
        clgw_step: 0.0,
        clgl_step: 0.0,
        ..RpiCoefficients::default()
    }
}

/// Three teams, each pair meets twice
///
/// - A beats B 3-1 and 2-0
/// - A and C split: A wins 1-0, C wins 2-1
/// - B and C split: B wins 3-2, C wins 4-1
pub fn three_team_round_robin() -> Vec<Team> {
    RosterBuilder::new()
        .team("a", "Alpha")
        .team("b", "Beta")
        .team("c", "Gamma")
        .played("a", "b", 3, 1)
        .played("b", "a", 0, 2)
        .played("a", "c", 1, 0)
        .played("c", "a", 2, 1)
        .played("b", "c", 3, 2)
        .played("c", "b", 4, 1)
        .build()
}

/// Same outcomes as [`three_team_round_robin`] with different margins
pub fn three_team_round_robin_blowouts() -> Vec<Team> {
    RosterBuilder::new()
        .team("a", "Alpha")
        .team("b", "Beta")
        .team("c", "Gamma")
        .played("a", "b", 30, 1)
        .played("b", "a", 0, 21)
        .played("a", "c", 11, 0)
        .played("c", "a", 2, 1)
        .played("b", "c", 3, 2)
        .played("c", "b", 40, 1)
        .build()
}

/// Two teams, A beats B twice
pub fn two_team_league() -> Vec<Team> {
    RosterBuilder::new()
        .team("a", "Alpha")
        .team("b", "Beta")
        .played("a", "b", 2, 1)
        .played("b", "a", 0, 3)
        .build()
}

/// Four teams, single round robin, strict chain A > B > C > D
pub fn four_team_chain() -> Vec<Team> {
    RosterBuilder::new()
        .team("a", "Alpha")
        .team("b", "Beta")
        .team("c", "Gamma")
        .team("d", "Delta")
        .played("a", "b", 2, 1)
        .played("a", "c", 2, 0)
        .played("a", "d", 3, 0)
        .played("b", "c", 1, 0)
        .played("b", "d", 2, 1)
        .played("c", "d", 4, 3)
        .build()
}

/// Every team meets every other team `rounds` times with rotating winners
pub fn generated_league(team_count: usize, rounds: usize) -> Vec<Team> {
    let mut builder = RosterBuilder::new();
    for i in 0..team_count {
        builder = builder.team(format!("t{:03}", i), format!("Team {}", i));
    }
    for round in 0..rounds {
        for i in 0..team_count {
            for j in (i + 1)..team_count {
                let home_score = ((i * 7 + j * 3 + round) % 5) as i32;
                let away_score = ((i * 2 + j * 5 + round * 3) % 5) as i32;
                builder = builder.played(
                    format!("t{:03}", i),
                    format!("t{:03}", j),
                    home_score,
                    away_score,
                );
            }
        }
    }
    builder.build()
}

/// `a` meets twenty strong sides once each and beats the first `beaten` of
/// them; every strong side also beats `f` nineteen times
pub fn gauntlet_league(beaten: usize) -> Vec<Team> {
    let mut builder = RosterBuilder::new().team("a", "Alpha").team("f", "Foil");
    for i in 0..20 {
        let side = format!("s{:02}", i);
        builder = builder.team(side.clone(), format!("Side {}", i));
        builder = if i < beaten {
            builder.played("a", side.clone(), 2, 1)
        } else {
            builder.played("a", side.clone(), 1, 2)
        };
        for _ in 0..19 {
            builder = builder.played(side.clone(), "f", 3, 0);
        }
    }
    builder.build()
}
