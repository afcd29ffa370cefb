//! # Prayer Calculator
//!
//! Prayer time calculation from a low-order solar ephemeris.
//!
//! Given a date, a location, a time zone offset and a named calculation
//! method, this library computes the clock time of Imsak, Fajr, sunrise,
//! Dhuhr, Asr, sunset, Maghrib, Isha and the night midpoint. Times are
//! produced as zero-padded `HH:mm` strings, or as fractional hours through
//! [`PrayerCalculator::compute_hours`].
//!
//! ## Basic Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use prayer_calculator::{Event, PrayerCalculator};
//!
//! // Baku: 40.3953°N, 49.8822°E, UTC+4
//! let calc = PrayerCalculator::configure("MWL");
//! let date = NaiveDate::from_ymd_opt(2025, 3, 21).unwrap();
//!
//! let times = calc.compute(date, 40.3953, 49.8822, 0.0, 4.0);
//! assert_eq!(times[&Event::Fajr], "05:11");
//! assert_eq!(times[&Event::Sunrise], "06:42");
//! assert_eq!(times[&Event::Maghrib], "18:54");
//! ```
//!
//! ## Configuration
//!
//! A calculator is configured once and then reused. Unknown method names fall
//! back to the Muslim World League method instead of failing; use
//! [`CalculationMethod`]'s `FromStr` impl or [`config::PrayerSettings`] when
//! unknown names should be rejected.
//!
//! ```
//! use prayer_calculator::{AsrJuristic, CalculationMethod, Event, PrayerCalculator, Tuning};
//!
//! let calc = PrayerCalculator::new(CalculationMethod::Isna)
//!     .with_asr(AsrJuristic::Standard)
//!     .with_imsak_minutes(10.0)
//!     .with_tuning(Tuning::new().with(Event::Dhuhr, 2.0));
//! assert_eq!(calc.method(), CalculationMethod::Isna);
//! ```
#![no_std]

extern crate alloc;

pub mod config;
pub mod fasting;
mod math;
pub mod methods;
pub mod schedule;
mod sun;
mod time;
mod types;

#[cfg(test)]
mod tests;

use alloc::collections::BTreeMap;
use alloc::string::String;

use chrono::NaiveDate;
#[allow(unused_imports)]
use core_maths::*;

use crate::math::{darccos, darctan, dcos, dsin, dtan, normalize_hours_24};

pub use crate::methods::{AsrJuristic, CalculationMethod, DuskRule, HighLatitudeRule, MethodParams, MidnightRule};
pub use crate::sun::{solar_position, SolarPosition};
pub use crate::time::{format_hours, julian_day, normalize_to_hhmmss, PLACEHOLDER};
pub use crate::types::{Event, EventTimes, ParseError, Tuning};

/// Number of fixed-point refinement passes. Not a convergence loop.
const REFINEMENT_PASSES: usize = 2;

/// Minutes between Imsak and Fajr unless configured otherwise.
pub const DEFAULT_IMSAK_MINUTES: f64 = 5.0;

/// Refraction plus solar semi-diameter at sea level, degrees.
const HORIZON_ANGLE: f64 = 0.833;

/// Horizon dip per square root metre of elevation, degrees.
const DIP_PER_SQRT_METRE: f64 = 0.0347;

/// Prayer time solver for one fixed configuration.
///
/// Holds no per-call state, so one instance can serve any number of dates and
/// locations, from any number of threads.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use prayer_calculator::{Event, PrayerCalculator};
///
/// let calc = PrayerCalculator::configure("Tehran");
/// let date = NaiveDate::from_ymd_opt(2025, 3, 21).unwrap();
/// let hours = calc.compute_hours(date, 40.3953, 49.8822, 0.0, 4.0);
///
/// // Tehran defines its own Maghrib angle, so Maghrib follows sunset.
/// assert!(hours.maghrib > hours.sunset);
/// assert!(hours.get(Event::Isha) > hours.maghrib);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PrayerCalculator {
    method: CalculationMethod,
    params: MethodParams,
    asr: AsrJuristic,
    imsak_minutes: f64,
    high_latitudes: HighLatitudeRule,
    tuning: Tuning,
}

impl Default for PrayerCalculator {
    fn default() -> Self {
        Self::new(CalculationMethod::default())
    }
}

impl PrayerCalculator {
    /// Creates a calculator using `method` and its implied Asr convention.
    pub fn new(method: CalculationMethod) -> Self {
        let params = method.params();
        Self {
            method,
            params,
            asr: params.asr,
            imsak_minutes: DEFAULT_IMSAK_MINUTES,
            high_latitudes: HighLatitudeRule::default(),
            tuning: Tuning::default(),
        }
    }

    /// Creates a calculator from a method name.
    ///
    /// Blank names select the default method silently. Names missing from the
    /// catalog select it as well, with a warning logged.
    pub fn configure(name: &str) -> Self {
        if name.trim().is_empty() {
            return Self::default();
        }
        match CalculationMethod::lookup(name) {
            Some(method) => Self::new(method),
            None => {
                log::warn!(
                    "unknown calculation method '{}', falling back to {}",
                    name,
                    CalculationMethod::default()
                );
                Self::default()
            }
        }
    }

    /// Overrides the Asr convention implied by the method.
    pub fn with_asr(mut self, asr: AsrJuristic) -> Self {
        self.asr = asr;
        self
    }

    /// Sets how many minutes before Fajr Imsak falls.
    pub fn with_imsak_minutes(mut self, minutes: f64) -> Self {
        self.imsak_minutes = minutes;
        self
    }

    /// Sets per-event minute offsets, applied after solving.
    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Records a high latitude rule. The solver does not consult it.
    pub fn with_high_latitude_rule(mut self, rule: HighLatitudeRule) -> Self {
        self.high_latitudes = rule;
        self
    }

    pub fn method(&self) -> CalculationMethod {
        self.method
    }

    pub fn params(&self) -> &MethodParams {
        &self.params
    }

    pub fn asr(&self) -> AsrJuristic {
        self.asr
    }

    pub fn imsak_minutes(&self) -> f64 {
        self.imsak_minutes
    }

    pub fn high_latitude_rule(&self) -> HighLatitudeRule {
        self.high_latitudes
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Computes every event as a zero-padded `HH:mm` string.
    ///
    /// Undefined times are rendered as [`PLACEHOLDER`]. This never fails:
    /// out-of-range geometry is clamped rather than rejected.
    ///
    /// # Arguments
    ///
    /// * `date` - Local calendar date
    /// * `latitude` - Degrees, positive north
    /// * `longitude` - Degrees, positive east
    /// * `elevation` - Metres above the surrounding terrain, `0.0` for sea level
    /// * `timezone` - Offset from UTC in hours, fractions allowed
    pub fn compute(
        &self,
        date: NaiveDate,
        latitude: f64,
        longitude: f64,
        elevation: f64,
        timezone: f64,
    ) -> BTreeMap<Event, String> {
        self.compute_hours(date, latitude, longitude, elevation, timezone)
            .iter()
            .map(|(event, hours)| (event, format_hours(hours)))
            .collect()
    }

    /// Computes every event as a fractional local hour.
    ///
    /// Values are not wrapped into [0, 24); [`format_hours`] does that.
    pub fn compute_hours(
        &self,
        date: NaiveDate,
        latitude: f64,
        longitude: f64,
        elevation: f64,
        timezone: f64,
    ) -> EventTimes {
        log::debug!(
            "computing {} prayer times for {} at ({}, {}), elevation {} m, UTC{:+}",
            self.method,
            date,
            latitude,
            longitude,
            elevation,
            timezone
        );
        let observer = Observer {
            julian_day: julian_day(date),
            latitude,
            rise_set_angle: rise_set_angle(elevation),
        };

        let mut times = EventTimes::initial();
        for pass in 0..REFINEMENT_PASSES {
            times = self.refine(&observer, &times);
            log::trace!("pass {}: {:?}", pass + 1, times);
        }

        let shift = timezone - longitude / 15.0;
        for event in Event::ALL {
            *times.get_mut(event) += shift;
        }

        times.midnight = times.sunset + normalize_hours_24(times.fajr - times.sunset) / 2.0;

        for event in Event::ALL {
            *times.get_mut(event) += self.tuning.minutes(event) / 60.0;
        }
        times
    }

    /// One refinement pass: re-solves every event at the instant guessed for it.
    fn refine(&self, observer: &Observer, guess: &EventTimes) -> EventTimes {
        let portion = |event: Event| guess.get(event) / 24.0;

        let fajr = observer.sun_angle_time(self.params.fajr, portion(Event::Fajr), Direction::Morning);
        let sunrise = observer.sun_angle_time(observer.rise_set_angle, portion(Event::Sunrise), Direction::Morning);
        let sunset = observer.sun_angle_time(observer.rise_set_angle, portion(Event::Sunset), Direction::Evening);
        let maghrib = match self.params.maghrib {
            Some(angle) => observer.sun_angle_time(angle, portion(Event::Maghrib), Direction::Evening),
            None => sunset,
        };
        let isha = match self.params.isha {
            DuskRule::Angle(angle) => observer.sun_angle_time(angle, portion(Event::Isha), Direction::Evening),
            DuskRule::MinutesAfterSunset(minutes) => sunset + minutes / 60.0,
        };

        EventTimes {
            imsak: fajr - self.imsak_minutes / 60.0,
            fajr,
            sunrise,
            dhuhr: observer.mid_day(portion(Event::Dhuhr)),
            asr: observer.asr_time(self.asr.factor(), portion(Event::Asr)),
            sunset,
            maghrib,
            isha,
            midnight: guess.midnight,
        }
    }
}

/// Apparent altitude of the Sun's upper limb at rise and set, as a depression angle.
fn rise_set_angle(elevation: f64) -> f64 {
    HORIZON_ANGLE + DIP_PER_SQRT_METRE * elevation.sqrt()
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Direction {
    /// Before solar noon
    Morning,
    /// After solar noon
    Evening,
}

/// Inputs shared by every event of one solve.
struct Observer {
    julian_day: f64,
    latitude: f64,
    rise_set_angle: f64,
}

impl Observer {
    /// Solar noon as a clock hour, for the instant `portion` days into the date.
    fn mid_day(&self, portion: f64) -> f64 {
        let eqt = solar_position(self.julian_day + portion).equation_of_time;
        normalize_hours_24(12.0 - eqt)
    }

    /// Time at which the Sun is `angle` degrees below the horizon.
    ///
    /// The hour angle cosine is clamped to [-1, 1], so a Sun that never
    /// reaches the angle yields solar midnight or noon instead of `NaN`.
    fn sun_angle_time(&self, angle: f64, portion: f64, direction: Direction) -> f64 {
        let declination = solar_position(self.julian_day + portion).declination;
        let noon = self.mid_day(portion);
        let cos_hour_angle = (-dsin(angle) - dsin(declination) * dsin(self.latitude))
            / (dcos(declination) * dcos(self.latitude));
        let hours = darccos(cos_hour_angle.clamp(-1.0, 1.0)) / 15.0;
        match direction {
            Direction::Morning => noon - hours,
            Direction::Evening => noon + hours,
        }
    }

    /// Time at which a shadow reaches `factor` times its object's length plus the noon shadow.
    fn asr_time(&self, factor: f64, portion: f64) -> f64 {
        let declination = solar_position(self.julian_day + portion).declination;
        let angle = -darctan(1.0 / (factor + dtan((self.latitude - declination).abs())));
        self.sun_angle_time(angle, portion, Direction::Evening)
    }
}
