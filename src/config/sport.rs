//! Sport profile traits and implementations
//!
//! This module defines the interface for looking up default coefficient sets
//! by sport identifier, along with a static provider holding the built-in
//! profiles. The rating engine never consults a provider itself; callers
//! resolve a coefficient set first and pass it in.

use crate::config::coefficients::RpiCoefficients;
use crate::error::{RatingError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sport identifier used when no sport is configured
pub const DEFAULT_SPORT: &str = "generic";

/// Default coefficients and display name for one sport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportProfile {
    pub id: String,
    pub display_name: String,
    pub coefficients: RpiCoefficients,
}

impl SportProfile {
    pub fn generic() -> Self {
        Self {
            id: DEFAULT_SPORT.to_string(),
            display_name: "Generic".to_string(),
            coefficients: RpiCoefficients::default(),
        }
    }

    pub fn basketball() -> Self {
        Self::tuned("basketball", "Basketball", |c| {
            c.clwp_coeff = 0.25;
            c.oclwp_coeff = 0.50;
            c.ooclwp_coeff = 0.25;
            c.diff_coeff = 0.05;
            c.domination_coeff = 0.02;
            c.min_games = 10;
            c.diff_interval = 15.0;
        })
    }

    pub fn football() -> Self {
        Self::tuned("football", "Football", |c| {
            c.clwp_coeff = 0.35;
            c.oclwp_coeff = 0.40;
            c.ooclwp_coeff = 0.25;
            c.diff_coeff = 0.05;
            c.domination_coeff = 0.03;
            c.min_games = 4;
            c.diff_interval = 14.0;
            c.clgw_step = 0.15;
        })
    }

    pub fn soccer() -> Self {
        Self::tuned("soccer", "Soccer", |c| {
            c.clwp_coeff = 0.35;
            c.oclwp_coeff = 0.40;
            c.ooclwp_coeff = 0.25;
            c.diff_coeff = 0.05;
            c.domination_coeff = 0.02;
            c.min_games = 6;
            c.diff_interval = 3.0;
        })
    }

    pub fn hockey() -> Self {
        Self::tuned("hockey", "Hockey", |c| {
            c.clwp_coeff = 0.30;
            c.oclwp_coeff = 0.45;
            c.ooclwp_coeff = 0.25;
            c.diff_coeff = 0.04;
            c.domination_coeff = 0.02;
            c.min_games = 8;
            c.diff_interval = 3.0;
        })
    }

    pub fn baseball() -> Self {
        Self::tuned("baseball", "Baseball", |c| {
            c.clwp_coeff = 0.25;
            c.oclwp_coeff = 0.50;
            c.ooclwp_coeff = 0.25;
            c.diff_coeff = 0.03;
            c.domination_coeff = 0.01;
            c.min_games = 15;
            c.diff_interval = 5.0;
        })
    }

    pub fn volleyball() -> Self {
        Self::tuned("volleyball", "Volleyball", |c| {
            c.clwp_coeff = 0.30;
            c.oclwp_coeff = 0.45;
            c.ooclwp_coeff = 0.25;
            c.diff_coeff = 0.05;
            c.domination_coeff = 0.03;
            c.min_games = 8;
            c.diff_interval = 2.0;
        })
    }

    fn tuned(id: &str, display_name: &str, adjust: impl FnOnce(&mut RpiCoefficients)) -> Self {
        let mut coefficients = RpiCoefficients {
            name: id.to_string(),
            ..RpiCoefficients::default()
        };
        adjust(&mut coefficients);

        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            coefficients,
        }
    }
}

/// Trait for looking up per-sport coefficient sets
pub trait CoefficientProvider: Send + Sync {
    /// Get the coefficient set for a sport identifier
    fn coefficients_for(&self, sport: &str) -> Result<RpiCoefficients>;

    /// Get all known sport identifiers, sorted
    fn available_sports(&self) -> Vec<String>;

    /// Get the full profile for a sport identifier
    fn profile(&self, sport: &str) -> Option<SportProfile>;
}

/// Static provider holding the built-in sport profiles
#[derive(Debug, Clone)]
pub struct StaticCoefficientProvider {
    profiles: BTreeMap<String, SportProfile>,
}

impl StaticCoefficientProvider {
    /// Create a provider with the built-in profiles
    pub fn new() -> Self {
        let profiles = [
            SportProfile::generic(),
            SportProfile::basketball(),
            SportProfile::football(),
            SportProfile::soccer(),
            SportProfile::hockey(),
            SportProfile::baseball(),
            SportProfile::volleyball(),
        ]
        .into_iter()
        .map(|profile| (profile.id.clone(), profile))
        .collect();

        Self { profiles }
    }

    /// Create with custom profiles only
    pub fn with_profiles(profiles: Vec<SportProfile>) -> Result<Self> {
        let mut provider = Self {
            profiles: BTreeMap::new(),
        };
        for profile in profiles {
            provider.register(profile)?;
        }
        Ok(provider)
    }

    /// Add or replace a profile
    pub fn register(&mut self, profile: SportProfile) -> Result<()> {
        if profile.id.trim().is_empty() {
            return Err(RatingError::ConfigurationError {
                message: "Sport profile id cannot be empty".to_string(),
            }
            .into());
        }

        profile.coefficients.validate()?;
        self.profiles.insert(profile.id.to_lowercase(), profile);
        Ok(())
    }
}

impl Default for StaticCoefficientProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CoefficientProvider for StaticCoefficientProvider {
    fn coefficients_for(&self, sport: &str) -> Result<RpiCoefficients> {
        self.profile(sport)
            .map(|profile| profile.coefficients)
            .ok_or_else(|| {
                RatingError::UnknownSport {
                    sport: sport.to_string(),
                }
                .into()
            })
    }

    fn available_sports(&self) -> Vec<String> {
        self.profiles.keys().cloned().collect()
    }

    fn profile(&self, sport: &str) -> Option<SportProfile> {
        self.profiles.get(&sport.to_lowercase()).cloned()
    }
}
