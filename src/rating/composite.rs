//! Composite RPI and ranking order

use crate::config::RpiCoefficients;
use crate::types::TeamRpiResult;
use crate::utils::clamp_unit;
use std::cmp::Ordering;

/// Stage outputs feeding the composite rating
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatingComponents {
    pub clwp: f64,
    pub oclwp: f64,
    pub ooclwp: f64,
    pub diff: f64,
    pub domination: f64,
}

/// Weighted blend of the components, clamped to `[0, 1]`
pub fn composite_rpi(components: &RatingComponents, coefficients: &RpiCoefficients) -> f64 {
    let raw = coefficients.clwp_coeff * components.clwp
        + coefficients.oclwp_coeff * components.oclwp
        + coefficients.ooclwp_coeff * components.ooclwp
        + coefficients.diff_coeff * components.diff
        + coefficients.domination_coeff * components.domination;

    clamp_unit(raw)
}

/// Ranking order: reliable teams first, then higher RPI, higher WP, fewer
/// losses, and finally team id ascending
pub fn ranking_order(a: &TeamRpiResult, b: &TeamRpiResult) -> Ordering {
    b.reliable
        .cmp(&a.reliable)
        .then_with(|| b.rpi.total_cmp(&a.rpi))
        .then_with(|| b.wp.total_cmp(&a.wp))
        .then_with(|| a.losses.cmp(&b.losses))
        .then_with(|| a.team_id.cmp(&b.team_id))
}

/// Sort results into ranking order and assign 1-based ranks
pub fn rank_results(results: &mut [TeamRpiResult]) {
    results.sort_by(ranking_order);
    for (position, result) in results.iter_mut().enumerate() {
        result.rank = position + 1;
    }
}
