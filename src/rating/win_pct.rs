//! Direct win/loss/tie record and win percentage

use crate::rating::schedule::{CountedGame, Schedule};
use crate::types::GameOutcome;

/// Win/loss/tie counts over counted games
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordSummary {
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl RecordSummary {
    pub fn from_games(games: &[CountedGame]) -> Self {
        games.iter().fold(Self::default(), |mut record, game| {
            record.games += 1;
            match game.outcome {
                GameOutcome::Win => record.wins += 1,
                GameOutcome::Loss => record.losses += 1,
                GameOutcome::Tie => record.ties += 1,
            }
            record
        })
    }

    /// `(wins + ties / 2) / games`, or 0 with no games
    pub fn win_percentage(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        (self.wins as f64 + 0.5 * self.ties as f64) / self.games as f64
    }
}

/// Full-schedule win percentage of every team, in arena order
pub fn win_percentages(schedule: &Schedule) -> Vec<f64> {
    schedule
        .teams()
        .iter()
        .map(|team| RecordSummary::from_games(&team.games).win_percentage())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(outcome: GameOutcome) -> CountedGame {
        CountedGame {
            opponent: 1,
            outcome,
            margin: None,
        }
    }

    #[test]
    fn test_record_counts() {
        let games = vec![
            game(GameOutcome::Win),
            game(GameOutcome::Win),
            game(GameOutcome::Tie),
            game(GameOutcome::Loss),
        ];
        let record = RecordSummary::from_games(&games);
        assert_eq!(
            record,
            RecordSummary {
                games: 4,
                wins: 2,
                losses: 1,
                ties: 1
            }
        );
        assert_eq!(record.games, record.wins + record.losses + record.ties);
        assert!((record.win_percentage() - 0.625).abs() < 1e-12);
    }

    #[test]
    fn test_no_games_gives_zero() {
        let record = RecordSummary::from_games(&[]);
        assert_eq!(record.games, 0);
        assert_eq!(record.win_percentage(), 0.0);
    }
}
