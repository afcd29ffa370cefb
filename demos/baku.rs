#![allow(missing_docs, clippy::unwrap_used)]
use chrono::{NaiveDate, Offset, Utc};
use chrono_tz::Asia::Baku;
use prayer_calculator::fasting::RamadanCalendar;
use prayer_calculator::schedule::{calculate, ScheduleRequest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Baku, Azerbaijan
    let latitude = 40.3953;
    let longitude = 49.8822;
    let elevation = 0.0; // meters above sea level

    let now = Utc::now().with_timezone(&Baku);
    let offset_hours = f64::from(now.offset().fix().local_minus_utc()) / 3600.0;
    let today = now.date_naive();

    println!("Prayer Times - Baku, Azerbaijan");
    println!("Location: {:.4}°N, {:.4}°E", latitude, longitude);
    println!("Date: {}", today.format("%B %d, %Y"));
    println!("Time zone: UTC{:+}", offset_hours);
    println!("{:=<40}", "");

    let request = ScheduleRequest::new(today, latitude, longitude)
        .elevation(elevation)
        .timezone(offset_hours)
        .method("MWL");
    let schedule = calculate(&request)?;

    for (label, time) in schedule.labelled() {
        println!("  {:<14} {}", label, time);
    }
    println!();

    println!("Imsak: {}", schedule.imsak);
    println!("Iftar: {}", schedule.iftar);
    if let Some(remaining) = schedule.fasting_countdown(now.naive_local()) {
        println!(
            "Next boundary in {}h {:02}m",
            remaining.num_hours(),
            remaining.num_minutes() % 60
        );
    }

    let ramadan = RamadanCalendar::new(NaiveDate::from_ymd_opt(2026, 2, 19).unwrap(), 30);
    match ramadan.day_of(today) {
        Some(day) => println!("Ramadan day {} of {}", day, ramadan.length()),
        None => println!("Outside Ramadan (starts {})", ramadan.start()),
    }
    Ok(())
}
