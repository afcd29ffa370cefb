//! Plain settings that build a [`PrayerCalculator`].
//!
//! Every field is a string or number so the settings can come from a config
//! file or a request. With the `serde` feature enabled `PrayerSettings` is
//! (de)serializable; missing fields take their defaults.
//!
//! ```
//! use prayer_calculator::config::PrayerSettings;
//! use prayer_calculator::{AsrJuristic, CalculationMethod};
//!
//! let settings = PrayerSettings {
//!     method: Some("Karachi".into()),
//!     asr: Some("Standard".into()),
//!     ..PrayerSettings::default()
//! };
//! let calc = settings.build().unwrap();
//! assert_eq!(calc.method(), CalculationMethod::Karachi);
//! assert_eq!(calc.asr(), AsrJuristic::Standard);
//! ```

use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::{AsrJuristic, CalculationMethod, Event, HighLatitudeRule, ParseError, PrayerCalculator, Tuning};

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct PrayerSettings {
    /// Catalog name; blank or missing selects the default method
    pub method: Option<String>,
    /// `Standard`, `Jafari` or `Hanafi`; missing keeps the method's choice
    pub asr: Option<String>,
    /// Minutes from Imsak to Fajr
    pub imsak_minutes: Option<f64>,
    /// `None`, `NightMiddle`, `AngleBased` or `OneSeventh`
    pub high_latitudes: Option<String>,
    /// Event key to signed minutes
    pub tuning: BTreeMap<String, f64>,
}

impl PrayerSettings {
    /// Parses every field and assembles the calculator.
    ///
    /// # Errors
    ///
    /// Unlike [`PrayerCalculator::configure`], unknown method names are an
    /// error here, as are unknown Asr conventions, high latitude rules and
    /// tuning keys.
    pub fn build(&self) -> Result<PrayerCalculator, ParseError> {
        let method = match self.method.as_deref().map(str::trim) {
            None | Some("") => CalculationMethod::default(),
            Some(name) => name.parse()?,
        };
        let mut calc = PrayerCalculator::new(method);
        if let Some(asr) = &self.asr {
            calc = calc.with_asr(asr.parse::<AsrJuristic>()?);
        }
        if let Some(minutes) = self.imsak_minutes {
            calc = calc.with_imsak_minutes(minutes);
        }
        if let Some(rule) = &self.high_latitudes {
            calc = calc.with_high_latitude_rule(rule.parse::<HighLatitudeRule>()?);
        }
        let tuning = self
            .tuning
            .iter()
            .map(|(key, minutes)| key.parse::<Event>().map(|event| (event, *minutes)))
            .collect::<Result<Tuning, ParseError>>()?;
        Ok(calc.with_tuning(tuning))
    }
}
