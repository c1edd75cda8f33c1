//! Configuration management for the rpi-engine
//!
//! This module handles coefficient sets, the built-in sport profiles, and
//! application configuration loading from TOML files and environment variables.

pub mod app;
pub mod coefficients;
pub mod sport;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, EngineSettings, ServiceSettings};
pub use coefficients::RpiCoefficients;
pub use sport::{CoefficientProvider, SportProfile, StaticCoefficientProvider, DEFAULT_SPORT};
