//! Relative-time formatting collaborator.

use chrono::{DateTime, Utc};

/// Describes a date relative to a reference instant.
#[cfg_attr(test, mockall::automock)]
pub trait RelativeDateFormatter: Send + Sync {
    /// Text describing `date` as seen from `reference`.
    fn format(&self, date: DateTime<Utc>, reference: DateTime<Utc>) -> String;
}

/// English phrases such as `1 second ago` or `in 2 days`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishRelativeDateFormatter;

impl RelativeDateFormatter for EnglishRelativeDateFormatter {
    fn format(&self, date: DateTime<Utc>, reference: DateTime<Utc>) -> String {
        relative_time::describe(date, reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};
    use rstest::rstest;

    #[rstest]
    #[case(TimeDelta::seconds(-1), "1 second ago")]
    #[case(TimeDelta::days(-7), "1 week ago")]
    #[case(TimeDelta::days(2), "in 2 days")]
    fn english_formatter_delegates_to_relative_time(
        #[case] offset: TimeDelta,
        #[case] expected: &str,
    ) {
        let reference = Utc
            .with_ymd_and_hms(2026, 10, 14, 9, 0, 0)
            .single()
            .expect("valid reference");

        assert_eq!(
            EnglishRelativeDateFormatter.format(reference + offset, reference),
            expected
        );
    }
}
