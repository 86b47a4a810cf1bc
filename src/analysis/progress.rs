use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::utils::percentage::minutes_percentage;

use super::ContractError;

/// Progress toward the daily goal. `percent` is deliberately unbounded
/// above so overshoot stays visible to text output; `clamped_percent` is
/// the only value allowed to drive a bounded visual such as an arc sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressState {
    pub used_minutes: i64,
    pub goal_minutes: i64,
    pub percent: f64,
    pub clamped_percent: f64,
    pub is_over: bool,
    pub overshoot_minutes: i64,
}

pub fn compute_progress(
    used_minutes: i64,
    goal_minutes: i64,
) -> Result<ProgressState, ContractError> {
    if goal_minutes <= 0 {
        return Err(ContractError::InvalidGoal(goal_minutes));
    }
    if used_minutes < 0 {
        return Err(ContractError::InvalidDuration(used_minutes));
    }
    let percent = *minutes_percentage(used_minutes, goal_minutes);
    Ok(ProgressState {
        used_minutes,
        goal_minutes,
        percent,
        clamped_percent: percent.min(100.),
        is_over: used_minutes > goal_minutes,
        overshoot_minutes: (used_minutes - goal_minutes).max(0),
    })
}

/// Total drawn length of a full progress ring.
pub fn circle_path_length(radius: f64) -> f64 {
    2. * PI * radius
}

/// Total drawn length of a semicircular gauge.
pub fn semicircle_path_length(radius: f64) -> f64 {
    PI * radius
}

/// Stroke-dash offset that leaves `clamped_percent` of the path visible.
/// An unclamped percent above 100 would go negative here and render as a
/// wrapped-around stroke, so callers must pass
/// [ProgressState::clamped_percent].
pub fn dash_offset(path_length: f64, clamped_percent: f64) -> f64 {
    path_length * (1. - clamped_percent / 100.)
}

/// Position of the tip marker on a semicircular gauge drawn left to right
/// above the center `(cx, cy)`. The angle is measured from the start of
/// the arc, so 0% sits at the left end and 100% at the right. Works for
/// any radius and center, the gauge is resolution independent.
pub fn gauge_tip(clamped_percent: f64, radius: f64, cx: f64, cy: f64) -> (f64, f64) {
    let theta = PI * (1. - clamped_percent / 100.);
    (cx + radius * theta.cos(), cy - radius * theta.sin())
}

#[cfg(test)]
mod tests {
    use crate::analysis::ContractError;

    use super::{
        circle_path_length, compute_progress, dash_offset, gauge_tip, semicircle_path_length,
    };

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "{actual} is not close to {expected}"
        );
    }

    #[test]
    fn test_zero_usage() {
        let state = compute_progress(0, 480).unwrap();
        assert_eq!(state.percent, 0.);
        assert_eq!(state.clamped_percent, 0.);
        assert!(!state.is_over);
        assert_eq!(state.overshoot_minutes, 0);
    }

    #[test]
    fn test_overshoot() {
        let state = compute_progress(620, 480).unwrap();
        assert_close(state.percent, 620. / 480. * 100.);
        assert_eq!(state.clamped_percent, 100.);
        assert!(state.is_over);
        assert_eq!(state.overshoot_minutes, 140);
    }

    #[test]
    fn test_reaching_the_goal_exactly_is_not_over() {
        let state = compute_progress(480, 480).unwrap();
        assert_eq!(state.clamped_percent, 100.);
        assert!(!state.is_over);
        assert_eq!(state.overshoot_minutes, 0);
    }

    #[test]
    fn test_invalid_goal() {
        assert_eq!(compute_progress(100, 0), Err(ContractError::InvalidGoal(0)));
        assert_eq!(
            compute_progress(100, -30),
            Err(ContractError::InvalidGoal(-30))
        );
    }

    #[test]
    fn test_negative_usage_is_a_contract_violation() {
        assert_eq!(
            compute_progress(-1, 480),
            Err(ContractError::InvalidDuration(-1))
        );
    }

    #[test]
    fn test_clamped_percent_bounds() {
        for (used, goal) in [(0, 480), (240, 480), (480, 480), (5000, 480), (1, 1)] {
            let state = compute_progress(used, goal).unwrap();
            assert!(state.clamped_percent >= 0. && state.clamped_percent <= 100.);
            assert_eq!(state.is_over, used > goal);
        }
    }

    #[test]
    fn test_dash_offset_endpoints() {
        let length = semicircle_path_length(80.);
        assert_close(dash_offset(length, 0.), length);
        assert_close(dash_offset(length, 100.), 0.);
        assert_close(dash_offset(length, 50.), length / 2.);
        assert_close(circle_path_length(80.), 2. * length);
    }

    #[test]
    fn test_gauge_tip_positions() {
        // 0% at the left end of the arc, 100% at the right, 50% at the top.
        let (x, y) = gauge_tip(0., 80., 120., 100.);
        assert_close(x, 40.);
        assert_close(y, 100.);

        let (x, y) = gauge_tip(100., 80., 120., 100.);
        assert_close(x, 200.);
        assert_close(y, 100.);

        let (x, y) = gauge_tip(50., 80., 120., 100.);
        assert_close(x, 120.);
        assert_close(y, 20.);
    }
}
