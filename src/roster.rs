//! Roster construction from head-to-head results
//!
//! The engine consumes per-team game lists. Most sources record a game once
//! with a home and an away side, so this module expands such results into
//! both perspectives and loads roster files in JSON.

use crate::error::Result;
use crate::types::{Game, GameOutcome, GameStatus, Team, TeamId};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

/// One game recorded from both sides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home_id: TeamId,
    pub away_id: TeamId,
    #[serde(default)]
    pub home_score: Option<i32>,
    #[serde(default)]
    pub away_score: Option<i32>,
    #[serde(default)]
    pub status: GameStatus,
    /// Outcome for the home side when the game has no score
    #[serde(default)]
    pub home_result: Option<GameOutcome>,
}

impl MatchResult {
    pub fn scored(
        home_id: impl Into<TeamId>,
        away_id: impl Into<TeamId>,
        home_score: i32,
        away_score: i32,
    ) -> Self {
        Self {
            home_id: home_id.into(),
            away_id: away_id.into(),
            home_score: Some(home_score),
            away_score: Some(away_score),
            status: GameStatus::Completed,
            home_result: None,
        }
    }

    /// The game as recorded by the home team
    pub fn home_game(&self) -> Game {
        Game {
            opponent_id: self.away_id.clone(),
            own_score: self.home_score,
            opponent_score: self.away_score,
            status: self.status,
            result: self.home_result,
        }
    }

    /// The game as recorded by the away team
    pub fn away_game(&self) -> Game {
        Game {
            opponent_id: self.home_id.clone(),
            own_score: self.away_score,
            opponent_score: self.home_score,
            status: self.status,
            result: self.home_result.map(GameOutcome::reversed),
        }
    }
}

/// Builds a roster, keeping teams in insertion order
#[derive(Debug, Clone, Default)]
pub struct RosterBuilder {
    teams: Vec<Team>,
    index: HashMap<TeamId, usize>,
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team(mut self, id: impl Into<TeamId>, name: impl Into<String>) -> Self {
        self.add_team(Team::new(id, name));
        self
    }

    /// Add a team; a repeated id merges its games into the existing entry
    pub fn add_team(&mut self, team: Team) {
        match self.index.get(&team.id) {
            Some(&position) => self.teams[position].games.extend(team.games),
            None => {
                self.index.insert(team.id.clone(), self.teams.len());
                self.teams.push(team);
            }
        }
    }

    /// Add a team as a separate entry even when its id repeats
    ///
    /// Results keep attaching to the first team with the id, so the repeat
    /// reaches validation and is reported as a duplicate.
    pub fn push_team(&mut self, team: Team) {
        self.index.entry(team.id.clone()).or_insert(self.teams.len());
        self.teams.push(team);
    }

    /// Record a scored game for both sides
    pub fn played(
        mut self,
        home_id: impl Into<TeamId>,
        away_id: impl Into<TeamId>,
        home_score: i32,
        away_score: i32,
    ) -> Self {
        self.add_result(&MatchResult::scored(home_id, away_id, home_score, away_score));
        self
    }

    pub fn result(mut self, result: MatchResult) -> Self {
        self.add_result(&result);
        self
    }

    /// Record a result for both sides, registering unknown teams under their id
    pub fn add_result(&mut self, result: &MatchResult) {
        let home = self.position_or_insert(&result.home_id);
        self.teams[home].games.push(result.home_game());

        let away = self.position_or_insert(&result.away_id);
        self.teams[away].games.push(result.away_game());
    }

    fn position_or_insert(&mut self, team_id: &str) -> usize {
        if let Some(&position) = self.index.get(team_id) {
            return position;
        }
        warn!("Result references unregistered team '{}', adding it", team_id);
        self.add_team(Team::new(team_id, team_id));
        self.teams.len() - 1
    }

    pub fn build(self) -> Vec<Team> {
        self.teams
    }
}

/// Roster file: teams with their own game lists and/or head-to-head results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterFile {
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub results: Vec<MatchResult>,
}

impl RosterFile {
    pub fn from_json_str(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).context("Invalid roster file")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster file {}", path.display()))?;
        Self::from_json_str(&contents)
    }

    /// Flatten into per-team game lists
    ///
    /// Teams keep their file order and repeated ids are kept as separate
    /// entries, so they are reported during validation whether or not the
    /// file has results. Results attach to the first team with each id.
    pub fn into_teams(self) -> Vec<Team> {
        let mut builder = RosterBuilder::new();
        for team in self.teams {
            builder.push_team(team);
        }
        for result in &self.results {
            builder.add_result(result);
        }
        builder.build()
    }
}
