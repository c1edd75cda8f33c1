//! Coefficient suggestion for a single team
//!
//! Redistributes the three schedule-strength weights in proportion to how
//! much of the team's rating each level currently carries. The total level
//! weight and every non-level setting are copied from the base set. Nothing
//! is recalculated; callers decide whether to apply the candidate.

use crate::config::RpiCoefficients;
use crate::types::TeamRpiResult;

/// Propose a coefficient set matching one team's schedule-strength profile
pub fn suggest_coefficients(result: &TeamRpiResult, base: &RpiCoefficients) -> RpiCoefficients {
    let shares = [
        base.clwp_coeff * result.clwp,
        base.oclwp_coeff * result.oclwp,
        base.ooclwp_coeff * result.ooclwp,
    ];
    let share_sum: f64 = shares.iter().sum();

    if share_sum <= 0.0 || !share_sum.is_finite() {
        return base.clone();
    }

    let total_weight = base.level_weight_sum();
    let [clwp, oclwp, ooclwp] = shares.map(|share| share / share_sum * total_weight);

    RpiCoefficients {
        name: format!("{} (tuned for {})", base.name, result.team_id),
        clwp_coeff: clwp,
        oclwp_coeff: oclwp,
        ooclwp_coeff: ooclwp,
        ..base.clone()
    }
}
