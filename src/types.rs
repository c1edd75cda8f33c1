//! Common types used throughout the rating engine

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Unique identifier for teams
pub type TeamId = String;

/// Lifecycle status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Completed,
    InProgress,
    ToBePlayed,
    Cancelled,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Completed => write!(f, "completed"),
            GameStatus::InProgress => write!(f, "in_progress"),
            GameStatus::ToBePlayed => write!(f, "to_be_played"),
            GameStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Result of a game from one team's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    Win,
    Loss,
    Tie,
}

impl GameOutcome {
    /// Derive the outcome from a pair of scores
    pub fn from_scores(own: i32, opponent: i32) -> Self {
        match own.cmp(&opponent) {
            Ordering::Greater => GameOutcome::Win,
            Ordering::Less => GameOutcome::Loss,
            Ordering::Equal => GameOutcome::Tie,
        }
    }

    /// The same game seen from the other side
    pub fn reversed(self) -> Self {
        match self {
            GameOutcome::Win => GameOutcome::Loss,
            GameOutcome::Loss => GameOutcome::Win,
            GameOutcome::Tie => GameOutcome::Tie,
        }
    }
}

/// A game as recorded by one team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub opponent_id: TeamId,
    #[serde(default)]
    pub own_score: Option<i32>,
    #[serde(default)]
    pub opponent_score: Option<i32>,
    #[serde(default)]
    pub status: GameStatus,
    /// Explicit outcome for games decided without a score (forfeits)
    #[serde(default)]
    pub result: Option<GameOutcome>,
}

impl Game {
    /// A completed game with both scores
    pub fn scored(opponent_id: impl Into<TeamId>, own_score: i32, opponent_score: i32) -> Self {
        Self {
            opponent_id: opponent_id.into(),
            own_score: Some(own_score),
            opponent_score: Some(opponent_score),
            status: GameStatus::Completed,
            result: None,
        }
    }

    /// A completed game with an explicit outcome and no scores
    pub fn decided(opponent_id: impl Into<TeamId>, outcome: GameOutcome) -> Self {
        Self {
            opponent_id: opponent_id.into(),
            own_score: None,
            opponent_score: None,
            status: GameStatus::Completed,
            result: Some(outcome),
        }
    }

    /// A fixture that has not been played yet
    pub fn scheduled(opponent_id: impl Into<TeamId>) -> Self {
        Self {
            opponent_id: opponent_id.into(),
            own_score: None,
            opponent_score: None,
            status: GameStatus::ToBePlayed,
            result: None,
        }
    }

    pub fn with_status(mut self, status: GameStatus) -> Self {
        self.status = status;
        self
    }

    /// Both scores, when the game carries them
    pub fn scores(&self) -> Option<(i32, i32)> {
        match (self.own_score, self.opponent_score) {
            (Some(own), Some(opponent)) => Some((own, opponent)),
            _ => None,
        }
    }

    /// Score margin from this team's perspective
    pub fn margin(&self) -> Option<i32> {
        self.scores().map(|(own, opponent)| own - opponent)
    }

    /// Outcome used by the rating math
    ///
    /// Returns `None` for games that are not completed or whose outcome cannot
    /// be resolved. Scores take precedence over an explicit result.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.status != GameStatus::Completed {
            return None;
        }
        match self.scores() {
            Some((own, opponent)) => Some(GameOutcome::from_scores(own, opponent)),
            None => self.result,
        }
    }
}

/// A team and the games it has recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub games: Vec<Game>,
}

impl Team {
    pub fn new(id: impl Into<TeamId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            games: Vec::new(),
        }
    }

    pub fn with_game(mut self, game: Game) -> Self {
        self.games.push(game);
        self
    }
}

/// Rating breakdown for a single team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRpiResult {
    /// 1-based position in the ranking
    pub rank: usize,
    pub team_id: TeamId,
    pub team_name: String,
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub wp: f64,
    pub clwp: f64,
    pub oclwp: f64,
    pub ooclwp: f64,
    pub diff: f64,
    pub domination: f64,
    pub rpi: f64,
    /// Whether the team reached the minimum game count
    pub reliable: bool,
}
