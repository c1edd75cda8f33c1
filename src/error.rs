//! Error types for the rating engine
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the crate. Domain failures are `RatingError` variants; callers that
//! need the variant can `downcast_ref` the returned `anyhow::Error`.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating scenarios
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    #[error("Empty roster: {reason}")]
    EmptyRoster { reason: String },

    #[error("Invalid coefficients: {reason}")]
    InvalidCoefficients { reason: String },

    #[error("Unknown sport: {sport}")]
    UnknownSport { sport: String },

    #[error("Team not found: {team_id}")]
    TeamNotFound { team_id: String },

    #[error("Rating calculation cancelled")]
    Cancelled,

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
