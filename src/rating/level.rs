//! Contest-level win percentage (CLWP)
//!
//! Every counted game is scored once per calculation: a win over an opponent
//! whose full-schedule WP sits one or more levels above an even record earns
//! `clgw_step` per level, a loss to an opponent one or more levels below an
//! even record costs `clgl_step` per level, ties are worth 0.5. Levels are
//! bands of `level_width` on the WP scale. A game's value depends only on the
//! outcome and the opponent's WP, never on the rated team's own record.
//! CLWP over any subset of a team's games is then an index filter over
//! those scores.

use crate::config::RpiCoefficients;
use crate::rating::schedule::Schedule;
use crate::types::GameOutcome;
use crate::utils::clamp_unit;

/// WP of an even record; opponent levels are measured from here
pub const LEVEL_BASELINE: f64 = 0.5;

/// Slack so gaps landing exactly on a level boundary count as a full level
const LEVEL_TOLERANCE: f64 = 1e-9;

/// Number of whole levels in a positive WP gap
pub fn levels_above(gap: f64, level_width: f64) -> u32 {
    if gap <= 0.0 {
        return 0;
    }
    (gap / level_width + LEVEL_TOLERANCE).floor() as u32
}

/// Adjusted value of one game for the team that played it
pub fn game_contribution(
    outcome: GameOutcome,
    opponent_wp: f64,
    coefficients: &RpiCoefficients,
) -> f64 {
    match outcome {
        GameOutcome::Win => {
            let levels = levels_above(opponent_wp - LEVEL_BASELINE, coefficients.level_width);
            1.0 + coefficients.clgw_step * levels as f64
        }
        GameOutcome::Loss => {
            let levels = levels_above(LEVEL_BASELINE - opponent_wp, coefficients.level_width);
            0.0 - coefficients.clgl_step * levels as f64
        }
        GameOutcome::Tie => 0.5,
    }
}

#[derive(Debug, Clone, Copy)]
struct ScoredGame {
    opponent: usize,
    value: f64,
}

/// Per-game adjusted values for every team, in arena order
#[derive(Debug, Clone)]
pub struct LevelTable {
    games: Vec<Vec<ScoredGame>>,
}

impl LevelTable {
    /// Score every counted game against the full-schedule win percentages
    pub fn build(schedule: &Schedule, win_percentages: &[f64], coefficients: &RpiCoefficients) -> Self {
        let games = schedule
            .teams()
            .iter()
            .map(|node| {
                node.games
                    .iter()
                    .map(|game| ScoredGame {
                        opponent: game.opponent,
                        value: game_contribution(
                            game.outcome,
                            win_percentages[game.opponent],
                            coefficients,
                        ),
                    })
                    .collect()
            })
            .collect();

        Self { games }
    }

    /// CLWP over the team's full schedule, 0 with no games
    pub fn clwp(&self, team: usize) -> f64 {
        self.clwp_excluding(team, &[]).unwrap_or(0.0)
    }

    /// CLWP over the team's games against opponents not in `excluded`
    ///
    /// Returns `None` when no games remain.
    pub fn clwp_excluding(&self, team: usize, excluded: &[usize]) -> Option<f64> {
        let (sum, count) = self.games[team]
            .iter()
            .filter(|game| !excluded.contains(&game.opponent))
            .fold((0.0, 0usize), |(sum, count), game| (sum + game.value, count + 1));

        if count == 0 {
            None
        } else {
            Some(clamp_unit(sum / count as f64))
        }
    }
}
