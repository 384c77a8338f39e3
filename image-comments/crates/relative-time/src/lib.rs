//! English relative time phrases for display layers.
//!
//! The crate turns the distance between a date and a reference instant into
//! a short phrase such as `1 second ago`, `3 weeks ago` or `in 2 days`. It
//! deliberately knows nothing about comments or views so presenters can
//! depend on it through a formatter port.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use relative_time::RelativeTime;
//!
//! let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).single().expect("valid date");
//! let week_ago = now - TimeDelta::days(7);
//!
//! assert_eq!(RelativeTime::between(week_ago, now).to_string(), "1 week ago");
//! ```

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;
const SECONDS_PER_WEEK: u64 = 7 * SECONDS_PER_DAY;
const SECONDS_PER_MONTH: u64 = 30 * SECONDS_PER_DAY;
const SECONDS_PER_YEAR: u64 = 365 * SECONDS_PER_DAY;

/// Calendar unit used to express a relative distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Distances below one minute.
    Second,
    /// Distances below one hour.
    Minute,
    /// Distances below one day.
    Hour,
    /// Distances below one week.
    Day,
    /// Distances below thirty days.
    Week,
    /// Distances below 365 days.
    Month,
    /// Everything longer.
    Year,
}

impl TimeUnit {
    /// English label for `amount` units, pluralised when `amount != 1`.
    #[must_use]
    pub const fn label(self, amount: u64) -> &'static str {
        let singular = amount == 1;
        match self {
            Self::Second if singular => "second",
            Self::Second => "seconds",
            Self::Minute if singular => "minute",
            Self::Minute => "minutes",
            Self::Hour if singular => "hour",
            Self::Hour => "hours",
            Self::Day if singular => "day",
            Self::Day => "days",
            Self::Week if singular => "week",
            Self::Week => "weeks",
            Self::Month if singular => "month",
            Self::Month => "months",
            Self::Year if singular => "year",
            Self::Year => "years",
        }
    }
}

/// Whether the described date lies before or after the reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The date precedes the reference (`... ago`).
    Past,
    /// The date follows the reference (`in ...`).
    Future,
}

/// A whole-unit distance between a date and a reference instant.
///
/// Sub-second remainders are truncated, so a zero `amount` renders as `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelativeTime {
    /// Number of whole `unit`s between the two instants.
    pub amount: u64,
    /// Largest unit that fits into the distance at least once.
    pub unit: TimeUnit,
    /// Side of the reference the date falls on.
    pub direction: Direction,
}

impl RelativeTime {
    /// Measure `date` relative to `reference`.
    #[must_use]
    pub fn between(date: DateTime<Utc>, reference: DateTime<Utc>) -> Self {
        let delta = date.signed_duration_since(reference);
        let direction = if delta < TimeDelta::zero() {
            Direction::Past
        } else {
            Direction::Future
        };
        let (amount, unit) = bucket(delta.num_seconds().unsigned_abs());
        Self {
            amount,
            unit,
            direction,
        }
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.amount == 0 {
            return f.write_str("now");
        }
        let label = self.unit.label(self.amount);
        match self.direction {
            Direction::Past => write!(f, "{} {label} ago", self.amount),
            Direction::Future => write!(f, "in {} {label}", self.amount),
        }
    }
}

/// Describe `date` relative to `reference` as an English phrase.
#[must_use]
pub fn describe(date: DateTime<Utc>, reference: DateTime<Utc>) -> String {
    RelativeTime::between(date, reference).to_string()
}

const fn bucket(seconds: u64) -> (u64, TimeUnit) {
    if seconds < SECONDS_PER_MINUTE {
        (seconds, TimeUnit::Second)
    } else if seconds < SECONDS_PER_HOUR {
        (seconds.div_euclid(SECONDS_PER_MINUTE), TimeUnit::Minute)
    } else if seconds < SECONDS_PER_DAY {
        (seconds.div_euclid(SECONDS_PER_HOUR), TimeUnit::Hour)
    } else if seconds < SECONDS_PER_WEEK {
        (seconds.div_euclid(SECONDS_PER_DAY), TimeUnit::Day)
    } else if seconds < SECONDS_PER_MONTH {
        (seconds.div_euclid(SECONDS_PER_WEEK), TimeUnit::Week)
    } else if seconds < SECONDS_PER_YEAR {
        (seconds.div_euclid(SECONDS_PER_MONTH), TimeUnit::Month)
    } else {
        (seconds.div_euclid(SECONDS_PER_YEAR), TimeUnit::Year)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for relative phrase bucketing.

    use super::*;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    #[fixture]
    fn reference() -> DateTime<Utc> {
        match Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).single() {
            Some(reference) => reference,
            None => panic!("fixture reference date must be valid"),
        }
    }

    #[rstest]
    #[case::one_second(TimeDelta::seconds(-1), "1 second ago")]
    #[case::seconds(TimeDelta::seconds(-59), "59 seconds ago")]
    #[case::one_minute(TimeDelta::seconds(-60), "1 minute ago")]
    #[case::hours(TimeDelta::hours(-5), "5 hours ago")]
    #[case::one_day(TimeDelta::days(-1), "1 day ago")]
    #[case::six_days(TimeDelta::days(-6), "6 days ago")]
    #[case::one_week(TimeDelta::days(-7), "1 week ago")]
    #[case::four_weeks(TimeDelta::days(-29), "4 weeks ago")]
    #[case::one_month(TimeDelta::days(-30), "1 month ago")]
    #[case::one_year(TimeDelta::days(-365), "1 year ago")]
    #[case::future_days(TimeDelta::days(2), "in 2 days")]
    #[case::future_second(TimeDelta::seconds(1), "in 1 second")]
    fn describes_distance_in_largest_whole_unit(
        reference: DateTime<Utc>,
        #[case] offset: TimeDelta,
        #[case] expected: &str,
    ) {
        assert_eq!(describe(reference + offset, reference), expected);
    }

    #[rstest]
    fn identical_instants_render_as_now(reference: DateTime<Utc>) {
        assert_eq!(describe(reference, reference), "now");
    }

    #[rstest]
    fn sub_second_distances_truncate_to_now(reference: DateTime<Utc>) {
        let relative = RelativeTime::between(reference - TimeDelta::milliseconds(400), reference);
        assert_eq!(relative.amount, 0);
        assert_eq!(relative.direction, Direction::Past);
        assert_eq!(relative.to_string(), "now");
    }

    #[rstest]
    fn between_reports_unit_and_direction(reference: DateTime<Utc>) {
        let relative = RelativeTime::between(reference + TimeDelta::hours(3), reference);
        assert_eq!(
            relative,
            RelativeTime {
                amount: 3,
                unit: TimeUnit::Hour,
                direction: Direction::Future,
            }
        );
    }
}
