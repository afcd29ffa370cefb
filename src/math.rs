#[allow(unused_imports)]
use core_maths::CoreFloat;

/// Normalizes an angle in degrees to the range [0, 360).
///
/// Negative angles wrap forward, so `-1.0` becomes `359.0`.
pub(crate) fn normalize_degrees_360(degrees: f64) -> f64 {
    floored_mod(degrees, 360.0)
}

/// Normalizes a clock value in hours to the range [0, 24).
///
/// Negative values wrap forward, so `-1.0` becomes `23.0`.
pub(crate) fn normalize_hours_24(hours: f64) -> f64 {
    floored_mod(hours, 24.0)
}

/// Computes the floored modulo operation (Python-style modulo).
///
/// Unlike Rust's `%` operator which can return negative values, this function
/// always returns a non-negative result in the range [0, m). Values a hair
/// below zero land on `0.0` rather than on `m`.
///
/// # Examples
///
/// ```
/// # fn floored_mod(x: f64, m: f64) -> f64 { ((x % m) + m) % m }
/// assert_eq!(floored_mod(7.0, 3.0), 1.0);
/// assert_eq!(floored_mod(-7.0, 3.0), 2.0);  // Unlike -7 % 3 which would be -1
/// assert_eq!(floored_mod(-1e-17, 24.0), 0.0);
/// ```
pub(crate) fn floored_mod(x: f64, m: f64) -> f64 {
    ((x % m) + m) % m
}

// Degree based trigonometry. The solver works in degrees throughout.

pub(crate) fn dsin(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

pub(crate) fn dcos(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

pub(crate) fn dtan(degrees: f64) -> f64 {
    degrees.to_radians().tan()
}

pub(crate) fn darcsin(x: f64) -> f64 {
    x.asin().to_degrees()
}

pub(crate) fn darccos(x: f64) -> f64 {
    x.acos().to_degrees()
}

pub(crate) fn darctan(x: f64) -> f64 {
    x.atan().to_degrees()
}

pub(crate) fn darctan2(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_angles_wrap_forward() {
        assert!((normalize_degrees_360(-1.0) - 359.0).abs() < 1e-12);
        assert!((normalize_degrees_360(721.0) - 1.0).abs() < 1e-12);
        assert_eq!(normalize_degrees_360(0.0), 0.0);
    }

    #[test]
    fn negative_hours_wrap_forward() {
        assert!((normalize_hours_24(-1.0) - 23.0).abs() < 1e-12);
        assert!((normalize_hours_24(25.5) - 1.5).abs() < 1e-12);
        assert!(normalize_hours_24(-1e-17) < 24.0);
    }

    #[test]
    fn degree_trig_matches_known_values() {
        assert!((dsin(30.0) - 0.5).abs() < 1e-12);
        assert!((dcos(60.0) - 0.5).abs() < 1e-12);
        assert!((dtan(45.0) - 1.0).abs() < 1e-12);
        assert!((darcsin(0.5) - 30.0).abs() < 1e-9);
        assert!((darccos(-1.0) - 180.0).abs() < 1e-9);
        assert!((darctan(1.0) - 45.0).abs() < 1e-9);
        assert!((darctan2(-1.0, -1.0) + 135.0).abs() < 1e-9);
    }
}
