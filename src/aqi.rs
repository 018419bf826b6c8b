//! AQI computation from raw PM2.5 concentrations.

use crate::breakpoints::{Breakpoint, PM25_BREAKPOINTS};

/// Returns the first segment whose upper concentration bound covers the
/// input. The upper bound is inclusive: a concentration exactly equal to a
/// segment's `concentration_high` belongs to that segment, not the next.
///
/// Concentrations beyond the final segment fall back to the final segment;
/// there is no out-of-range state.
///
/// The table is passed in explicitly rather than read from a global. It must
/// contain at least one segment.
pub fn select_segment(breakpoints: &[Breakpoint], concentration: f64) -> &Breakpoint {
    let (last, head) = breakpoints
        .split_last()
        .expect("breakpoint table must contain at least one segment");

    head.iter()
        .find(|segment| concentration <= segment.concentration_high)
        .unwrap_or(last)
}

/// Linearly maps a concentration's position within a segment's concentration
/// range onto the segment's index range:
///
/// `(index_high - index_low) / (concentration_high - concentration_low) * (concentration - concentration_low) + index_low`
///
/// A concentration above the segment's upper bound short-circuits to
/// `index_high`. That clamp matters when the caller holds the last segment
/// for a value beyond the whole table.
///
/// Inputs are not validated: a negative concentration extrapolates below the
/// segment's `index_low`, and non-finite input propagates through the
/// arithmetic (NaN in, NaN out).
pub fn compute_aqi(concentration: f64, segment: &Breakpoint) -> f64 {
    if concentration > segment.concentration_high {
        return segment.index_high;
    }

    ((segment.index_high - segment.index_low)
        / (segment.concentration_high - segment.concentration_low))
        * (concentration - segment.concentration_low)
        + segment.index_low
}

/// Computes the AQI for a PM2.5 concentration (µg/m³) against the EPA table.
///
/// The result is continuous; rounding to a whole reported index is left to
/// the caller.
pub fn aqi_for(concentration: f64) -> f64 {
    compute_aqi(concentration, select_segment(&PM25_BREAKPOINTS, concentration))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_zero_concentration_is_zero_index() {
        let segment = select_segment(&PM25_BREAKPOINTS, 0.0);
        assert_eq!(segment, &PM25_BREAKPOINTS[0]);
        assert_close(aqi_for(0.0), 0.0);
    }

    #[test]
    fn test_segment_boundaries_are_inclusive_above() {
        // 12.0 stays in segment 1, 12.1 starts segment 2
        assert_eq!(select_segment(&PM25_BREAKPOINTS, 12.0), &PM25_BREAKPOINTS[0]);
        assert_eq!(select_segment(&PM25_BREAKPOINTS, 12.1), &PM25_BREAKPOINTS[1]);
        assert_close(aqi_for(12.0), 50.0);
        assert_close(aqi_for(12.1), 51.0);

        assert_eq!(select_segment(&PM25_BREAKPOINTS, 35.4), &PM25_BREAKPOINTS[1]);
        assert_eq!(select_segment(&PM25_BREAKPOINTS, 35.5), &PM25_BREAKPOINTS[2]);
        assert_close(aqi_for(35.4), 100.0);
        assert_close(aqi_for(35.5), 101.0);
    }

    #[test]
    fn test_interpolation_inside_a_segment() {
        // 100 µg/m³ lands in segment 4 (55.5–150.4 → 151–200)
        let segment = select_segment(&PM25_BREAKPOINTS, 100.0);
        assert_eq!(segment, &PM25_BREAKPOINTS[3]);

        let expected = ((200.0 - 151.0) / (150.4 - 55.5)) * (100.0 - 55.5) + 151.0;
        assert_eq!(aqi_for(100.0), expected);
        assert!(expected > 173.9 && expected < 174.0);
    }

    #[test]
    fn test_each_segment_maps_its_own_bounds_to_its_index_range() {
        for segment in &PM25_BREAKPOINTS {
            assert_close(compute_aqi(segment.concentration_low, segment), segment.index_low);
            assert_close(compute_aqi(segment.concentration_high, segment), segment.index_high);
        }
    }

    #[test]
    fn test_concentration_beyond_table_clamps_to_max_index() {
        assert_eq!(select_segment(&PM25_BREAKPOINTS, 600.0), &PM25_BREAKPOINTS[6]);
        assert_eq!(aqi_for(600.0), 500.0);
        assert_eq!(aqi_for(f64::INFINITY), 500.0);
    }

    #[test]
    fn test_clamp_is_independent_of_segment_choice() {
        // compute_aqi accepts any segment; above its range it reports the
        // segment's own ceiling
        let segment = &PM25_BREAKPOINTS[1];
        assert_eq!(compute_aqi(40.0, segment), segment.index_high);
    }

    #[test]
    fn test_monotonic_over_the_table_range() {
        let mut previous = aqi_for(0.0);
        for step in 1..=5004 {
            let concentration = step as f64 * 0.1;
            let current = aqi_for(concentration);
            assert!(
                current >= previous,
                "index decreased between {} and {} µg/m³",
                (step - 1) as f64 * 0.1,
                concentration
            );
            assert!((0.0..=500.0).contains(&current));
            previous = current;
        }
    }

    #[test]
    fn test_negative_concentration_extrapolates_below_zero() {
        // No input validation: out-of-range arithmetic is allowed to run
        assert_eq!(select_segment(&PM25_BREAKPOINTS, -3.0), &PM25_BREAKPOINTS[0]);
        assert!(aqi_for(-3.0) < 0.0);
    }

    #[test]
    fn test_nan_concentration_propagates() {
        assert!(aqi_for(f64::NAN).is_nan());
    }
}
