//! Request validation and presentation on top of [`PrayerCalculator`].
//!
//! This is the layer a service calls: it checks coordinates, fills in the
//! default time zone and method, and hands back `HH:mm:ss` strings together
//! with the Imsak and iftar times a fasting timetable needs.

use alloc::collections::BTreeMap;
use alloc::string::String;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use thiserror::Error;

use crate::fasting::fasting_countdown;
use crate::time::normalize_to_hhmmss;
use crate::{CalculationMethod, Event, ParseError, PrayerCalculator, PLACEHOLDER};

/// Time zone used when a request does not carry one (Asia/Baku).
pub const DEFAULT_TIMEZONE: f64 = 4.0;

/// Errors returned by [`calculate`] and [`parse_date`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// Latitude outside [-90, 90] degrees
    #[error("Latitude out of range: {0}")]
    LatitudeOutOfRange(f64),

    /// Longitude outside [-180, 180] degrees
    #[error("Longitude out of range: {0}")]
    LongitudeOutOfRange(f64),

    /// Time zone offset outside [-12, 14] hours
    #[error("Time zone offset out of range: {0}")]
    TimezoneOutOfRange(f64),

    /// Negative or non-finite elevation
    #[error("Elevation out of range: {0}")]
    ElevationOutOfRange(f64),

    /// Date is neither `today` nor `YYYY-MM-DD`
    #[error("Invalid date: '{0}'")]
    InvalidDate(String),

    #[error(transparent)]
    Method(#[from] ParseError),
}

/// One timetable request.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleRequest<'a> {
    pub date: NaiveDate,
    pub latitude: f64,
    pub longitude: f64,
    /// Metres; `0.0` when unknown
    pub elevation: f64,
    /// Hours from UTC; [`DEFAULT_TIMEZONE`] when `None`
    pub timezone: Option<f64>,
    /// Method name; the default method when `None` or blank
    pub method: Option<&'a str>,
}

impl<'a> ScheduleRequest<'a> {
    /// A sea-level request using the default time zone and method.
    pub fn new(date: NaiveDate, latitude: f64, longitude: f64) -> Self {
        Self {
            date,
            latitude,
            longitude,
            elevation: 0.0,
            timezone: None,
            method: None,
        }
    }

    pub fn timezone(mut self, hours: f64) -> Self {
        self.timezone = Some(hours);
        self
    }

    pub fn method(mut self, name: &'a str) -> Self {
        self.method = Some(name);
        self
    }

    pub fn elevation(mut self, metres: f64) -> Self {
        self.elevation = metres;
        self
    }
}

/// A computed timetable for one date and place.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PrayerSchedule {
    pub date: NaiveDate,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: f64,
    /// Method actually used, after defaulting
    pub method: CalculationMethod,
    /// Imsak as `HH:mm:ss`
    pub imsak: String,
    /// Maghrib as `HH:mm:ss`
    pub iftar: String,
    /// Every event as `HH:mm:ss`
    pub times: BTreeMap<Event, String>,
}

impl PrayerSchedule {
    /// Iterates `(label, time)` pairs in chronological order.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use prayer_calculator::schedule::{calculate, ScheduleRequest};
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 3, 21).unwrap();
    /// let schedule = calculate(&ScheduleRequest::new(date, 40.3953, 49.8822)).unwrap();
    /// let (label, time) = schedule.labelled().next().unwrap();
    /// assert_eq!(label, "İmsak");
    /// assert_eq!(time, "05:06:00");
    /// ```
    pub fn labelled(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.times.iter().map(|(event, time)| (event.label(), time.as_str()))
    }

    /// Time until the next fasting boundary, measured from `now` in local time.
    ///
    /// `None` when Imsak or iftar could not be computed.
    pub fn fasting_countdown(&self, now: NaiveDateTime) -> Option<TimeDelta> {
        let imsak = parse_clock(&self.imsak)?;
        let iftar = parse_clock(&self.iftar)?;
        Some(fasting_countdown(now, imsak, iftar))
    }
}

/// Validates `request` and computes its timetable.
///
/// # Errors
///
/// Returns an error if a coordinate, the time zone or the elevation is out of
/// range, or if the method name is not in the catalog. Blank method names are
/// not an error.
pub fn calculate(request: &ScheduleRequest<'_>) -> Result<PrayerSchedule, ScheduleError> {
    if !(-90.0..=90.0).contains(&request.latitude) {
        return Err(ScheduleError::LatitudeOutOfRange(request.latitude));
    }
    if !(-180.0..=180.0).contains(&request.longitude) {
        return Err(ScheduleError::LongitudeOutOfRange(request.longitude));
    }
    let timezone = request.timezone.unwrap_or(DEFAULT_TIMEZONE);
    if !(-12.0..=14.0).contains(&timezone) {
        return Err(ScheduleError::TimezoneOutOfRange(timezone));
    }
    if !request.elevation.is_finite() || request.elevation < 0.0 {
        return Err(ScheduleError::ElevationOutOfRange(request.elevation));
    }
    let method = match request.method.map(str::trim) {
        None | Some("") => CalculationMethod::default(),
        Some(name) => name.parse()?,
    };

    log::debug!(
        "schedule request: {} ({}, {}) UTC{:+} method {}",
        request.date,
        request.latitude,
        request.longitude,
        timezone,
        method
    );
    let times: BTreeMap<Event, String> = PrayerCalculator::new(method)
        .compute(request.date, request.latitude, request.longitude, request.elevation, timezone)
        .into_iter()
        .map(|(event, time)| (event, normalize_to_hhmmss(&time)))
        .collect();

    let time_of = |event: Event| {
        times
            .get(&event)
            .cloned()
            .unwrap_or_else(|| String::from(PLACEHOLDER))
    };
    let imsak = time_of(Event::Imsak);
    let iftar = time_of(Event::Maghrib);
    Ok(PrayerSchedule {
        date: request.date,
        latitude: request.latitude,
        longitude: request.longitude,
        timezone,
        method,
        imsak,
        iftar,
        times,
    })
}

/// Resolves a request date.
///
/// `None`, blank input and `today` (any case) resolve to `today`; anything
/// else must be an ISO `YYYY-MM-DD` date.
pub fn parse_date(input: Option<&str>, today: NaiveDate) -> Result<NaiveDate, ScheduleError> {
    let input = input.map(str::trim).unwrap_or_default();
    if input.is_empty() || input.eq_ignore_ascii_case("today") {
        return Ok(today);
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| ScheduleError::InvalidDate(input.into()))
}

/// Parses an `HH:mm:ss` or `HH:mm` clock string; the placeholder yields `None`.
pub fn parse_clock(time: &str) -> Option<NaiveTime> {
    let time = time.trim();
    NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .ok()
}
