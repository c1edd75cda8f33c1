//! Score margin (DIFF) and domination signals

use crate::config::RpiCoefficients;
use crate::rating::schedule::CountedGame;
use crate::types::GameOutcome;
use crate::utils::clamp_signed_unit;

/// Margin-derived signals for one team
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MarginSummary {
    /// Mean margin over `diff_interval`, clamped to `[-1, 1]`
    pub diff: f64,
    /// Lopsided wins over scored games
    pub domination: f64,
    pub scored_games: u32,
    pub lopsided_wins: u32,
}

/// Summarize margins over the counted games that carry scores
///
/// A lopsided win is one whose margin reaches `diff_interval`. Games decided
/// without a score count toward neither term.
pub fn margin_summary(games: &[CountedGame], coefficients: &RpiCoefficients) -> MarginSummary {
    let mut total_margin = 0i64;
    let mut scored_games = 0u32;
    let mut lopsided_wins = 0u32;

    for game in games {
        let Some(margin) = game.margin else {
            continue;
        };
        scored_games += 1;
        total_margin += i64::from(margin);

        if game.outcome == GameOutcome::Win && f64::from(margin) >= coefficients.diff_interval {
            lopsided_wins += 1;
        }
    }

    if scored_games == 0 {
        return MarginSummary::default();
    }

    let average_margin = total_margin as f64 / scored_games as f64;

    MarginSummary {
        diff: clamp_signed_unit(average_margin / coefficients.diff_interval),
        domination: lopsided_wins as f64 / scored_games as f64,
        scored_games,
        lopsided_wins,
    }
}
