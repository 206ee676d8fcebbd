//! Benefit functions for sleep and cramming.
//!
//! Both return projected score points. Sleep is a step function with a
//! sharp cliff below four hours; cramming accumulates in hourly tiers and
//! is then scaled by cognitive state and confidence.

use crate::types::ConfidenceBand;

/// `(hours reached, points)` for each productive study hour
pub const CRAM_TIERS: [(f64, f64); 3] = [(1.0, 20.0), (2.0, 12.0), (3.0, 8.0)];

/// Projected score change for a night of `sleep_hours`.
///
/// | sleep        | points |
/// |--------------|--------|
/// | >= 8h        | +25    |
/// | >= 6h        | +15    |
/// | >= 4h        | +5     |
/// | (0h, 4h)     | -25    |
/// | 0h           | -40    |
pub fn sleep_benefit(sleep_hours: f64) -> f64 {
    if sleep_hours >= 8.0 {
        25.0
    } else if sleep_hours >= 6.0 {
        15.0
    } else if sleep_hours >= 4.0 {
        5.0
    } else if sleep_hours > 0.0 {
        -25.0
    } else {
        -40.0
    }
}

/// Raw points for `study_hours` before any scaling.
///
/// 20 points once the first hour is reached, +12 at the second, +8 at the
/// third. Partial hours earn nothing extra.
pub fn cram_base_points(study_hours: f64) -> f64 {
    CRAM_TIERS
        .iter()
        .filter(|(reached, _)| study_hours >= *reached)
        .map(|(_, points)| points)
        .sum()
}

/// Projected score change for `study_hours` of cramming.
///
/// ## Algorithm
/// `cram_base_points(hours) * cognitive_state_factor * band.cram_multiplier()`
pub fn cram_benefit(study_hours: f64, cognitive_state_factor: f64, band: ConfidenceBand) -> f64 {
    cram_base_points(study_hours) * cognitive_state_factor * band.cram_multiplier()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sleep_benefit_breakpoints() {
        assert_eq!(sleep_benefit(10.0), 25.0);
        assert_eq!(sleep_benefit(8.0), 25.0);
        assert_eq!(sleep_benefit(7.99), 15.0);
        assert_eq!(sleep_benefit(6.0), 15.0);
        assert_eq!(sleep_benefit(5.99), 5.0);
        assert_eq!(sleep_benefit(4.0), 5.0);
        assert_eq!(sleep_benefit(3.9), -25.0);
        assert_eq!(sleep_benefit(0.1), -25.0);
        assert_eq!(sleep_benefit(0.0), -40.0);
    }

    #[test]
    fn test_cram_base_points_tiers() {
        assert_eq!(cram_base_points(0.0), 0.0);
        assert_eq!(cram_base_points(0.9), 0.0);
        assert_eq!(cram_base_points(1.0), 20.0);
        assert_eq!(cram_base_points(1.5), 20.0);
        assert_eq!(cram_base_points(2.0), 32.0);
        assert_eq!(cram_base_points(3.0), 40.0);
        assert_eq!(cram_base_points(5.0), 40.0);
    }

    #[test]
    fn test_cram_benefit_scaling() {
        assert_eq!(cram_benefit(3.0, 0.5, ConfidenceBand::Low), 25.0);
        assert_eq!(cram_benefit(3.0, 1.0, ConfidenceBand::Neutral), 40.0);
        assert_eq!(cram_benefit(3.0, 1.0, ConfidenceBand::High), 30.0);
        assert_eq!(cram_benefit(0.0, 1.0, ConfidenceBand::Low), 0.0);
    }

    proptest! {
        #[test]
        fn prop_confidence_band_orders_cram_benefit(
            hours in 1.0f64..3.0,
            factor in prop::sample::select(vec![0.2, 0.3, 0.4, 0.5, 0.6, 1.0]),
        ) {
            let low = cram_benefit(hours, factor, ConfidenceBand::Low);
            let neutral = cram_benefit(hours, factor, ConfidenceBand::Neutral);
            let high = cram_benefit(hours, factor, ConfidenceBand::High);
            prop_assert!(high < neutral);
            prop_assert!(neutral < low);
        }

        #[test]
        fn prop_sleep_benefit_is_monotone(a in 0.0f64..24.0, b in 0.0f64..24.0) {
            let (short, long) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(sleep_benefit(short) <= sleep_benefit(long));
        }
    }
}
