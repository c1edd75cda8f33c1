//! Immutable schedule graph built once per calculation
//!
//! Teams are stored in an arena in roster order and games reference their
//! opponent by index, so every self-exclusion rule downstream is a plain
//! index filter. Malformed records are skipped and reported as
//! [`InputIssue`]s instead of failing the whole batch.

use crate::error::{RatingError, Result};
use crate::types::{GameOutcome, Team, TeamId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Problem found in one input record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    #[error("team id is empty")]
    EmptyTeamId,

    #[error("duplicate team id")]
    DuplicateTeam,

    #[error("negative score")]
    NegativeScore,

    #[error("unknown opponent {opponent_id}")]
    UnknownOpponent { opponent_id: TeamId },

    #[error("game against itself")]
    SelfGame,

    #[error("explicit result contradicts the scores")]
    ConflictingResult,
}

/// A skipped team or game and the reason it was skipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputIssue {
    pub team_id: TeamId,
    /// Position of the game in the team's list, `None` for team-level issues
    pub game_index: Option<usize>,
    pub kind: IssueKind,
}

impl std::fmt::Display for InputIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.game_index {
            Some(index) => write!(f, "team '{}' game #{}: {}", self.team_id, index, self.kind),
            None => write!(f, "team '{}': {}", self.team_id, self.kind),
        }
    }
}

/// A completed game with a resolved outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountedGame {
    /// Arena index of the opponent
    pub opponent: usize,
    pub outcome: GameOutcome,
    pub margin: Option<i32>,
}

/// One team in the schedule arena
#[derive(Debug, Clone)]
pub struct TeamNode {
    pub id: TeamId,
    pub name: String,
    /// Counted games in input order
    pub games: Vec<CountedGame>,
    /// Distinct opponents of counted games, ascending by arena index
    pub opponents: Vec<usize>,
}

/// Validated, index-based view of a roster
#[derive(Debug, Clone)]
pub struct Schedule {
    teams: Vec<TeamNode>,
    index: HashMap<TeamId, usize>,
}

impl Schedule {
    /// Build the schedule graph, collecting per-record issues
    pub fn build(teams: &[Team]) -> Result<(Self, Vec<InputIssue>)> {
        if teams.is_empty() {
            return Err(RatingError::EmptyRoster {
                reason: "no teams provided".to_string(),
            }
            .into());
        }

        let mut issues = Vec::new();
        let mut index: HashMap<TeamId, usize> = HashMap::new();
        let mut accepted: Vec<&Team> = Vec::with_capacity(teams.len());

        for team in teams {
            let kind = if team.id.trim().is_empty() {
                Some(IssueKind::EmptyTeamId)
            } else if index.contains_key(&team.id) {
                Some(IssueKind::DuplicateTeam)
            } else {
                None
            };

            match kind {
                Some(kind) => issues.push(InputIssue {
                    team_id: team.id.clone(),
                    game_index: None,
                    kind,
                }),
                None => {
                    index.insert(team.id.clone(), accepted.len());
                    accepted.push(team);
                }
            }
        }

        if accepted.is_empty() {
            return Err(RatingError::EmptyRoster {
                reason: "no valid teams after validation".to_string(),
            }
            .into());
        }

        let mut nodes = Vec::with_capacity(accepted.len());
        for (position, team) in accepted.iter().enumerate() {
            let mut games = Vec::with_capacity(team.games.len());

            for (game_index, game) in team.games.iter().enumerate() {
                let issue = |kind| InputIssue {
                    team_id: team.id.clone(),
                    game_index: Some(game_index),
                    kind,
                };

                let opponent = match index.get(&game.opponent_id) {
                    Some(&opponent) if opponent == position => {
                        issues.push(issue(IssueKind::SelfGame));
                        continue;
                    }
                    Some(&opponent) => opponent,
                    None => {
                        issues.push(issue(IssueKind::UnknownOpponent {
                            opponent_id: game.opponent_id.clone(),
                        }));
                        continue;
                    }
                };

                let negative = |score: Option<i32>| score.is_some_and(|s| s < 0);
                if negative(game.own_score) || negative(game.opponent_score) {
                    issues.push(issue(IssueKind::NegativeScore));
                    continue;
                }

                let Some(outcome) = game.outcome() else {
                    debug!(
                        team = %team.id,
                        game_index,
                        status = %game.status,
                        "Game not counted"
                    );
                    continue;
                };

                if let (Some(explicit), Some(_)) = (game.result, game.scores()) {
                    if explicit != outcome {
                        issues.push(issue(IssueKind::ConflictingResult));
                        continue;
                    }
                }

                games.push(CountedGame {
                    opponent,
                    outcome,
                    margin: game.margin(),
                });
            }

            let mut opponents: Vec<usize> = games.iter().map(|g| g.opponent).collect();
            opponents.sort_unstable();
            opponents.dedup();

            nodes.push(TeamNode {
                id: team.id.clone(),
                name: team.name.clone(),
                games,
                opponents,
            });
        }

        for issue in &issues {
            warn!("Skipping input record: {}", issue);
        }

        Ok((
            Self {
                teams: nodes,
                index,
            },
            issues,
        ))
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn teams(&self) -> &[TeamNode] {
        &self.teams
    }

    pub fn team(&self, index: usize) -> &TeamNode {
        &self.teams[index]
    }

    /// Arena index of a team id
    pub fn index_of(&self, team_id: &str) -> Option<usize> {
        self.index.get(team_id).copied()
    }

    /// Total number of counted game appearances
    pub fn counted_games(&self) -> usize {
        self.teams.iter().map(|t| t.games.len()).sum()
    }
}
