//! Fasting day helpers.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// Time from `now` to the next fasting boundary on the same local clock.
///
/// Before Imsak this counts down to Imsak, between Imsak and iftar it counts
/// down to iftar, and after iftar it counts down to the next day's Imsak.
///
/// ```
/// use chrono::{NaiveDate, NaiveTime, TimeDelta};
/// use prayer_calculator::fasting::fasting_countdown;
///
/// let imsak = NaiveTime::from_hms_opt(5, 6, 0).unwrap();
/// let iftar = NaiveTime::from_hms_opt(18, 54, 0).unwrap();
/// let now = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap().and_hms_opt(18, 0, 0).unwrap();
/// assert_eq!(fasting_countdown(now, imsak, iftar), TimeDelta::minutes(54));
/// ```
pub fn fasting_countdown(now: NaiveDateTime, imsak: NaiveTime, iftar: NaiveTime) -> TimeDelta {
    let today = now.date();
    let imsak_today = today.and_time(imsak);
    if now < imsak_today {
        return imsak_today - now;
    }
    let iftar_today = today.and_time(iftar);
    if now < iftar_today {
        return iftar_today - now;
    }
    match today.succ_opt() {
        Some(tomorrow) => tomorrow.and_time(imsak) - now,
        // Last representable date: the next Imsak is one day after today's.
        None => imsak_today + TimeDelta::days(1) - now,
    }
}

/// The days of one Ramadan.
///
/// ```
/// use chrono::NaiveDate;
/// use prayer_calculator::fasting::RamadanCalendar;
///
/// let ramadan = RamadanCalendar::new(NaiveDate::from_ymd_opt(2026, 2, 19).unwrap(), 30);
/// assert_eq!(ramadan.day_of(NaiveDate::from_ymd_opt(2026, 2, 19).unwrap()), Some(1));
/// assert_eq!(ramadan.day_of(NaiveDate::from_ymd_opt(2026, 2, 18).unwrap()), None);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RamadanCalendar {
    start: NaiveDate,
    length: u32,
}

impl RamadanCalendar {
    /// A month of `length` days beginning on `start`.
    pub const fn new(start: NaiveDate, length: u32) -> Self {
        Self { start, length }
    }

    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    pub const fn length(&self) -> u32 {
        self.length
    }

    /// 1-based day of the month, or `None` outside it.
    pub fn day_of(&self, today: NaiveDate) -> Option<u32> {
        let elapsed = (today - self.start).num_days();
        let day = u32::try_from(elapsed).ok()?.checked_add(1)?;
        (day <= self.length).then_some(day)
    }
}
