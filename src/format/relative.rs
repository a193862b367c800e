//! Human-readable distance between two instants ("3 days", "1 year")

use chrono::{DateTime, Utc};

const MINUTES_IN_HOUR: f64 = 60.0;
const MINUTES_IN_DAY: f64 = 1_440.0;
const MINUTES_IN_MONTH: f64 = 43_200.0;
const MINUTES_IN_YEAR: f64 = 525_600.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl Unit {
    fn label(self, count: u64) -> &'static str {
        let plural = count != 1;
        match (self, plural) {
            (Unit::Second, false) => "second",
            (Unit::Second, true) => "seconds",
            (Unit::Minute, false) => "minute",
            (Unit::Minute, true) => "minutes",
            (Unit::Hour, false) => "hour",
            (Unit::Hour, true) => "hours",
            (Unit::Day, false) => "day",
            (Unit::Day, true) => "days",
            (Unit::Month, false) => "month",
            (Unit::Month, true) => "months",
            (Unit::Year, false) => "year",
            (Unit::Year, true) => "years",
        }
    }
}

/// Distance between two instants in the largest fitting unit.
///
/// Order of the arguments does not matter. Counts are rounded half up, and
/// a distance that rounds to twelve months is reported as one year.
pub fn format_distance(from: DateTime<Utc>, to: DateTime<Utc>) -> String {
    let millis = (to - from).num_milliseconds().unsigned_abs() as f64;
    let minutes = millis / 60_000.0;

    let (count, unit) = if minutes < 1.0 {
        (round_half_up(millis / 1_000.0), Unit::Second)
    } else if minutes < MINUTES_IN_HOUR {
        (round_half_up(minutes), Unit::Minute)
    } else if minutes < MINUTES_IN_DAY {
        (round_half_up(minutes / MINUTES_IN_HOUR), Unit::Hour)
    } else if minutes < MINUTES_IN_MONTH {
        (round_half_up(minutes / MINUTES_IN_DAY), Unit::Day)
    } else if minutes < MINUTES_IN_YEAR {
        match round_half_up(minutes / MINUTES_IN_MONTH) {
            12 => (1, Unit::Year),
            months => (months, Unit::Month),
        }
    } else {
        (round_half_up(minutes / MINUTES_IN_YEAR), Unit::Year)
    };

    format!("{} {}", count, unit.label(count))
}

fn round_half_up(value: f64) -> u64 {
    (value + 0.5).floor() as u64
}
