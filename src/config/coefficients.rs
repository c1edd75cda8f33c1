//! RPI coefficient sets
//!
//! A coefficient set weights the three schedule-strength levels and the
//! margin terms, and carries the numeric knobs used by the level adjustment.

use crate::error::{RatingError, Result};
use serde::{Deserialize, Serialize};

fn default_level_width() -> f64 {
    0.25
}

/// Tunable weights and thresholds for one RPI calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpiCoefficients {
    /// Human-readable label, e.g. the sport the set was tuned for
    pub name: String,
    /// Weight on the team's own level-adjusted win percentage
    pub clwp_coeff: f64,
    /// Weight on the opponents' level-adjusted win percentage
    pub oclwp_coeff: f64,
    /// Weight on the opponents' opponents' level-adjusted win percentage
    pub ooclwp_coeff: f64,
    /// Weight on the normalized score margin
    pub diff_coeff: f64,
    /// Weight on the lopsided-win ratio
    pub domination_coeff: f64,
    /// Minimum counted games for a rating to be reliable
    pub min_games: u32,
    /// Score margin that maps to a full DIFF of 1.0; also the lopsided-win threshold
    pub diff_interval: f64,
    /// Bonus per level when beating a stronger opponent
    pub clgw_step: f64,
    /// Penalty per level when losing to a weaker opponent
    pub clgl_step: f64,
    /// Width of one strength level on the win-percentage scale
    #[serde(default = "default_level_width")]
    pub level_width: f64,
}

impl Default for RpiCoefficients {
    fn default() -> Self {
        Self {
            name: "generic".to_string(),
            clwp_coeff: 0.25,
            oclwp_coeff: 0.50,
            ooclwp_coeff: 0.25,
            diff_coeff: 0.0,
            domination_coeff: 0.0,
            min_games: 5,
            diff_interval: 10.0,
            clgw_step: 0.1,
            clgl_step: 0.1,
            level_width: default_level_width(),
        }
    }
}

impl RpiCoefficients {
    /// Sum of the three schedule-strength weights
    pub fn level_weight_sum(&self) -> f64 {
        self.clwp_coeff + self.oclwp_coeff + self.ooclwp_coeff
    }

    /// Validate coefficient values
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("clwp_coeff", self.clwp_coeff),
            ("oclwp_coeff", self.oclwp_coeff),
            ("ooclwp_coeff", self.ooclwp_coeff),
            ("diff_coeff", self.diff_coeff),
            ("domination_coeff", self.domination_coeff),
            ("diff_interval", self.diff_interval),
            ("clgw_step", self.clgw_step),
            ("clgl_step", self.clgl_step),
            ("level_width", self.level_width),
        ];
        for (field, value) in weights {
            if !value.is_finite() {
                return Err(invalid(format!("{} must be finite, got {}", field, value)));
            }
        }

        if self.min_games == 0 {
            return Err(invalid("min_games must be at least 1".to_string()));
        }

        if self.diff_interval <= 0.0 {
            return Err(invalid("diff_interval must be positive".to_string()));
        }

        if self.level_width <= 0.0 || self.level_width > 1.0 {
            return Err(invalid("level_width must be in (0, 1]".to_string()));
        }

        if self.clgw_step < 0.0 || self.clgl_step < 0.0 {
            return Err(invalid("level steps must be non-negative".to_string()));
        }

        Ok(())
    }
}

fn invalid(reason: String) -> anyhow::Error {
    RatingError::InvalidCoefficients { reason }.into()
}
