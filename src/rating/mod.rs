//! RPI rating engine
//!
//! This module provides the rating stages (win percentage, level-adjusted win
//! percentage, schedule strength, margins, composite) and the calculator that
//! runs them over a roster.

pub mod calculator;
pub mod composite;
pub mod level;
pub mod margin;
pub mod schedule;
pub mod strength;
pub mod suggest;
pub mod win_pct;

// Re-export commonly used types
pub use calculator::{CancellationToken, RankingReport, RatingCalculator, RpiCalculator};
pub use schedule::{InputIssue, IssueKind, Schedule};
pub use suggest::suggest_coefficients;
