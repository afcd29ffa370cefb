//! Low-order solar ephemeris.
//!
//! Good to roughly a minute of time for dates within a few centuries of
//! J2000.0, which is all a prayer timetable needs. No nutation, aberration or
//! ΔT corrections are applied.

use crate::math::{darcsin, darctan2, dcos, dsin, normalize_degrees_360, normalize_hours_24};

/// Reference Julian Day for J2000.0 epoch
const J2000_EPOCH_JD: f64 = 2451545.0;

/// The Sun's declination and the equation of time at a single instant.
///
/// # Fields
///
/// - `declination`: Declination in degrees (positive north)
/// - `equation_of_time`: Mean minus apparent solar time, in hours
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolarPosition {
    /// Declination in degrees
    pub declination: f64,
    /// Equation of time in hours
    pub equation_of_time: f64,
}

/// Computes the Sun's position for a Julian date.
///
/// The function is pure and total over finite input.
///
/// # Example
///
/// ```
/// use prayer_calculator::solar_position;
///
/// // Near the December solstice the Sun sits about 23° south.
/// let pos = solar_position(2451544.5);
/// assert!((pos.declination + 23.0).abs() < 0.1);
/// ```
pub fn solar_position(julian_date: f64) -> SolarPosition {
    let days = julian_date - J2000_EPOCH_JD;

    let mean_anomaly = normalize_degrees_360(357.529 + 0.98560028 * days);
    let mean_longitude = normalize_degrees_360(280.459 + 0.98564736 * days);
    let ecliptic_longitude = normalize_degrees_360(
        mean_longitude + 1.915 * dsin(mean_anomaly) + 0.020 * dsin(2.0 * mean_anomaly),
    );
    let obliquity = 23.439 - 0.00000036 * days;

    let right_ascension = normalize_hours_24(
        darctan2(dcos(obliquity) * dsin(ecliptic_longitude), dcos(ecliptic_longitude)) / 15.0,
    );

    SolarPosition {
        declination: darcsin(dsin(obliquity) * dsin(ecliptic_longitude)),
        equation_of_time: mean_longitude / 15.0 - right_ascension,
    }
}
