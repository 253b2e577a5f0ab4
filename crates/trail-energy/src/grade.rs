//! Grade and walking velocity model.

/// Grades steeper than this do not make walking any faster.
pub const MIN_PERCENT_GRADE: f64 = -8.0;

/// Percent grade of a segment, clamped at [`MIN_PERCENT_GRADE`].
///
/// `distance` must be non-zero; zero-distance segments are short-circuited
/// by the caller before any grade is computed.
pub fn percent_grade(distance: f64, elevation_delta: f64) -> f64 {
    clamp_grade((elevation_delta / distance) * 100.0)
}

/// Applies the downhill floor. There is no uphill cap.
pub fn clamp_grade(percent_grade: f64) -> f64 {
    if percent_grade <= MIN_PERCENT_GRADE {
        MIN_PERCENT_GRADE
    } else {
        percent_grade
    }
}

/// Walking velocity in m/s for a clamped percent grade.
///
/// Exponential hiking-speed curve: 6 km/h peak at a -5% grade, converted
/// to meters per second.
pub fn walking_velocity(percent_grade: f64) -> f64 {
    (6.0 * (-3.5 * (percent_grade / 100.0 + 0.05)).exp() * 1000.0) / 3600.0
}

/// Integer elevation change between two instruction start points,
/// truncated toward zero.
pub fn elevation_delta(from: f64, to: f64) -> f64 {
    (to - from).trunc()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_grade() {
        assert_eq!(percent_grade(100.0, 0.0), 0.0);
    }

    #[test]
    fn test_uphill_not_clamped() {
        assert!((percent_grade(100.0, 45.0) - 45.0).abs() < 1e-12);
        assert!((percent_grade(10.0, 100.0) - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_downhill_clamped() {
        assert_eq!(percent_grade(100.0, -50.0), MIN_PERCENT_GRADE);
        assert_eq!(percent_grade(100.0, -8.0), MIN_PERCENT_GRADE);
        assert!((percent_grade(100.0, -7.0) + 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_clamp_is_idempotent() {
        assert_eq!(clamp_grade(-20.0), clamp_grade(-8.0));
        assert_eq!(
            walking_velocity(clamp_grade(-20.0)),
            walking_velocity(clamp_grade(-8.0))
        );
    }

    #[test]
    fn test_flat_velocity() {
        let expected = (6.0 * (-3.5f64 * 0.05).exp() * 1000.0) / 3600.0;
        assert!((walking_velocity(0.0) - expected).abs() < 1e-12);
        assert!((walking_velocity(0.0) - 1.39910).abs() < 1e-4);
    }

    #[test]
    fn test_peak_velocity_at_minus_five() {
        // exp(0) => 6 km/h
        assert!((walking_velocity(-5.0) - 6.0 / 3.6).abs() < 1e-12);
        assert!(walking_velocity(-5.0) > walking_velocity(0.0));
        assert!(walking_velocity(10.0) < walking_velocity(0.0));
    }

    #[test]
    fn test_elevation_delta_truncates_toward_zero() {
        assert_eq!(elevation_delta(10.0, 13.7), 3.0);
        assert_eq!(elevation_delta(13.7, 10.0), -3.0);
        assert_eq!(elevation_delta(100.2, 100.9), 0.0);
    }
}
