use alloc::collections::BTreeMap;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// The events of a prayer day, in chronological order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "lowercase"))]
pub enum Event {
    /// Start of the fast, a fixed number of minutes before Fajr
    Imsak,
    /// Dawn twilight
    Fajr,
    Sunrise,
    /// Solar noon
    Dhuhr,
    /// Afternoon shadow event
    Asr,
    Sunset,
    /// Night onset; coincides with sunset unless the method defines its own angle
    Maghrib,
    /// Dusk twilight
    Isha,
    /// Midpoint between sunset and the following Fajr
    Midnight,
}

impl Event {
    /// Every event, in chronological order.
    pub const ALL: [Event; 9] = [
        Event::Imsak,
        Event::Fajr,
        Event::Sunrise,
        Event::Dhuhr,
        Event::Asr,
        Event::Sunset,
        Event::Maghrib,
        Event::Isha,
        Event::Midnight,
    ];

    /// Lowercase key used in settings and tuning tables.
    pub const fn key(self) -> &'static str {
        match self {
            Event::Imsak => "imsak",
            Event::Fajr => "fajr",
            Event::Sunrise => "sunrise",
            Event::Dhuhr => "dhuhr",
            Event::Asr => "asr",
            Event::Sunset => "sunset",
            Event::Maghrib => "maghrib",
            Event::Isha => "isha",
            Event::Midnight => "midnight",
        }
    }

    /// Caller-facing label.
    pub const fn label(self) -> &'static str {
        match self {
            Event::Imsak => "İmsak",
            Event::Fajr => "Sübh",
            Event::Sunrise => "Günəş çıxışı",
            Event::Dhuhr => "Zöhr",
            Event::Asr => "Əsr",
            Event::Sunset => "Günəş batışı",
            Event::Maghrib => "Məğrib",
            Event::Isha => "İşa",
            Event::Midnight => "Gecə yarısı",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Event {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Event::ALL
            .into_iter()
            .find(|event| event.key() == key)
            .ok_or_else(|| ParseError::UnknownEvent(s.into()))
    }
}

/// Fractional hours of the day for every [`Event`].
///
/// Values may fall outside [0, 24) until they are formatted. `NaN` marks an
/// event whose geometry could not be resolved.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EventTimes {
    pub imsak: f64,
    pub fajr: f64,
    pub sunrise: f64,
    pub dhuhr: f64,
    pub asr: f64,
    pub sunset: f64,
    pub maghrib: f64,
    pub isha: f64,
    pub midnight: f64,
}

impl EventTimes {
    /// Seed values for the first refinement pass.
    pub(crate) const fn initial() -> Self {
        Self {
            imsak: 5.0,
            fajr: 5.0,
            sunrise: 6.0,
            dhuhr: 12.0,
            asr: 13.0,
            sunset: 18.0,
            maghrib: 18.0,
            isha: 18.0,
            midnight: f64::NAN,
        }
    }

    pub fn get(&self, event: Event) -> f64 {
        match event {
            Event::Imsak => self.imsak,
            Event::Fajr => self.fajr,
            Event::Sunrise => self.sunrise,
            Event::Dhuhr => self.dhuhr,
            Event::Asr => self.asr,
            Event::Sunset => self.sunset,
            Event::Maghrib => self.maghrib,
            Event::Isha => self.isha,
            Event::Midnight => self.midnight,
        }
    }

    pub fn get_mut(&mut self, event: Event) -> &mut f64 {
        match event {
            Event::Imsak => &mut self.imsak,
            Event::Fajr => &mut self.fajr,
            Event::Sunrise => &mut self.sunrise,
            Event::Dhuhr => &mut self.dhuhr,
            Event::Asr => &mut self.asr,
            Event::Sunset => &mut self.sunset,
            Event::Maghrib => &mut self.maghrib,
            Event::Isha => &mut self.isha,
            Event::Midnight => &mut self.midnight,
        }
    }

    /// Iterates `(event, hours)` pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Event, f64)> + '_ {
        Event::ALL.into_iter().map(move |event| (event, self.get(event)))
    }
}

/// Per-event minute offsets applied after solving.
///
/// Events without an entry are not shifted.
///
/// ```
/// use prayer_calculator::{Event, Tuning};
///
/// let tuning = Tuning::new().with(Event::Fajr, 2.0).with(Event::Isha, -3.0);
/// assert_eq!(tuning.minutes(Event::Fajr), 2.0);
/// assert_eq!(tuning.minutes(Event::Sunset), 0.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Tuning(BTreeMap<Event, f64>);

impl Tuning {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the offset for `event`, replacing any previous value.
    pub fn with(mut self, event: Event, minutes: f64) -> Self {
        self.0.insert(event, minutes);
        self
    }

    pub fn minutes(&self, event: Event) -> f64 {
        self.0.get(&event).copied().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|minutes| *minutes == 0.0)
    }
}

impl FromIterator<(Event, f64)> for Tuning {
    fn from_iter<I: IntoIterator<Item = (Event, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Errors returned when parsing configuration tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Name is not in the method catalog
    #[error("Invalid calculation method: '{0}'. Allowed values: MWL, ISNA, Egypt, Makkah, Karachi, Tehran, Jafari")]
    UnknownMethod(String),

    /// Not one of `Standard`, `Jafari` or `Hanafi`
    #[error("Unknown asr convention: '{0}'")]
    UnknownAsr(String),

    #[error("Unknown high latitude rule: '{0}'")]
    UnknownHighLatitudeRule(String),

    /// Not an [`Event`] key
    #[error("Unknown prayer time event: '{0}'")]
    UnknownEvent(String),
}
