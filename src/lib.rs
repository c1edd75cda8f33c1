//! RPI Engine - Strength-of-schedule rating for competing teams
//!
//! This crate ranks teams by a Rating Percentage Index built from their own
//! results, their opponents' results and their opponents' opponents' results,
//! adjusted by score margin and tuned by per-sport coefficient sets.

pub mod config;
pub mod error;
pub mod rating;
pub mod roster;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use config::{CoefficientProvider, RpiCoefficients, StaticCoefficientProvider};
pub use rating::{
    suggest_coefficients, CancellationToken, RankingReport, RatingCalculator, RpiCalculator,
};
pub use roster::{MatchResult, RosterBuilder, RosterFile};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
