//! Rating calculator trait and the RPI implementation
//!
//! This module defines the interface for ranking a roster and provides the
//! RPI calculator that runs every stage once per call: schedule graph,
//! win percentage, level table, then per-team aggregation and ranking.

use crate::config::RpiCoefficients;
use crate::error::{RatingError, Result};
use crate::rating::composite::{composite_rpi, rank_results, RatingComponents};
use crate::rating::level::LevelTable;
use crate::rating::margin::margin_summary;
use crate::rating::schedule::{InputIssue, Schedule};
use crate::rating::strength::strength_of_schedule;
use crate::rating::suggest::suggest_coefficients;
use crate::rating::win_pct::{win_percentages, RecordSummary};
use crate::types::{Team, TeamRpiResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Roster size from which per-team aggregation runs on the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Cooperative cancellation flag shared between a caller and a calculation
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; running calculations stop at the next team
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            return Err(RatingError::Cancelled.into());
        }
        Ok(())
    }
}

/// Result of a ranking calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingReport {
    /// Per-team breakdowns in rank order
    pub results: Vec<TeamRpiResult>,
    /// Records skipped during validation
    pub issues: Vec<InputIssue>,
    /// Coefficient set the ranking was computed with
    pub coefficients: RpiCoefficients,
}

impl RankingReport {
    /// Look up a team's breakdown
    pub fn get(&self, team_id: &str) -> Option<&TeamRpiResult> {
        self.results.iter().find(|result| result.team_id == team_id)
    }

    /// Look up a team's breakdown, failing when the team is not ranked
    pub fn require(&self, team_id: &str) -> Result<&TeamRpiResult> {
        self.get(team_id).ok_or_else(|| {
            RatingError::TeamNotFound {
                team_id: team_id.to_string(),
            }
            .into()
        })
    }

    /// Teams that reached the minimum game count
    pub fn reliable_results(&self) -> impl Iterator<Item = &TeamRpiResult> {
        self.results.iter().filter(|result| result.reliable)
    }

    /// Candidate coefficients tuned to one team's breakdown
    pub fn suggest_for(&self, team_id: &str) -> Result<RpiCoefficients> {
        let result = self.require(team_id)?;
        Ok(suggest_coefficients(result, &self.coefficients))
    }
}

/// Trait for ranking a roster from its game results
pub trait RatingCalculator: Send + Sync {
    /// Rank every team in the roster
    ///
    /// # Arguments
    /// * `teams` - Roster with each team's recorded games
    /// * `coefficients` - Weights and thresholds for this run
    ///
    /// # Returns
    /// Result containing the ranked breakdowns and any skipped records
    fn calculate(&self, teams: &[Team], coefficients: &RpiCoefficients) -> Result<RankingReport> {
        self.calculate_with_cancellation(teams, coefficients, &CancellationToken::new())
    }

    /// Rank every team, stopping early when `token` is cancelled
    ///
    /// A cancelled run returns `RatingError::Cancelled` and no partial results.
    fn calculate_with_cancellation(
        &self,
        teams: &[Team],
        coefficients: &RpiCoefficients,
        token: &CancellationToken,
    ) -> Result<RankingReport>;
}

/// RPI calculator
#[derive(Debug, Clone)]
pub struct RpiCalculator {
    parallel_threshold: usize,
}

impl RpiCalculator {
    /// Create a new RPI calculator
    pub fn new() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Run per-team aggregation in parallel from `threshold` teams upward
    pub fn with_parallel_threshold(threshold: usize) -> Self {
        Self {
            parallel_threshold: threshold,
        }
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }
}

impl Default for RpiCalculator {
    fn default() -> Self {
        Self::new()
    }
}

fn rate_team(
    schedule: &Schedule,
    table: &LevelTable,
    win_percentages: &[f64],
    coefficients: &RpiCoefficients,
    team: usize,
) -> TeamRpiResult {
    let node = schedule.team(team);
    let record = RecordSummary::from_games(&node.games);
    let strength = strength_of_schedule(schedule, table, team);
    let margins = margin_summary(&node.games, coefficients);

    let components = RatingComponents {
        clwp: table.clwp(team),
        oclwp: strength.oclwp,
        ooclwp: strength.ooclwp,
        diff: margins.diff,
        domination: margins.domination,
    };

    TeamRpiResult {
        rank: 0,
        team_id: node.id.clone(),
        team_name: node.name.clone(),
        games: record.games,
        wins: record.wins,
        losses: record.losses,
        ties: record.ties,
        wp: win_percentages[team],
        clwp: components.clwp,
        oclwp: components.oclwp,
        ooclwp: components.ooclwp,
        diff: components.diff,
        domination: components.domination,
        rpi: composite_rpi(&components, coefficients),
        reliable: record.games >= coefficients.min_games,
    }
}

impl RpiCalculator {
    /// Rate every team in arena order, checking `token` before each one
    fn rate_teams(
        &self,
        schedule: &Schedule,
        table: &LevelTable,
        win_percentages: &[f64],
        coefficients: &RpiCoefficients,
        token: &CancellationToken,
    ) -> Result<Vec<TeamRpiResult>> {
        let parallel = schedule.len() >= self.parallel_threshold;
        debug!(
            teams = schedule.len(),
            games = schedule.counted_games(),
            parallel,
            "Rating teams"
        );

        let rate = |team: usize| -> Result<TeamRpiResult> {
            token.check()?;
            Ok(rate_team(
                schedule,
                table,
                win_percentages,
                coefficients,
                team,
            ))
        };

        if parallel {
            (0..schedule.len())
                .into_par_iter()
                .map(rate)
                .collect::<Result<Vec<_>>>()
        } else {
            (0..schedule.len()).map(rate).collect::<Result<Vec<_>>>()
        }
    }
}

impl RatingCalculator for RpiCalculator {
    fn calculate_with_cancellation(
        &self,
        teams: &[Team],
        coefficients: &RpiCoefficients,
        token: &CancellationToken,
    ) -> Result<RankingReport> {
        coefficients.validate()?;
        token.check()?;

        let (schedule, issues) = Schedule::build(teams)?;
        let win_percentages = win_percentages(&schedule);
        let table = LevelTable::build(&schedule, &win_percentages, coefficients);

        let mut results =
            self.rate_teams(&schedule, &table, &win_percentages, coefficients, token)?;
        rank_results(&mut results);

        info!(
            "Ranked {} teams with '{}' coefficients ({} reliable, {} skipped records)",
            results.len(),
            coefficients.name,
            results.iter().filter(|r| r.reliable).count(),
            issues.len()
        );

        Ok(RankingReport {
            results,
            issues,
            coefficients: coefficients.clone(),
        })
    }
}
