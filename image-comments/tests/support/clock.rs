//! Frozen clock for presenter tests.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

pub struct FixtureClock(DateTime<Utc>);

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Clock frozen at a whole second, returned with that instant.
pub fn fixture_clock() -> (Arc<dyn Clock>, DateTime<Utc>) {
    let now = match Utc.with_ymd_and_hms(2026, 10, 14, 9, 30, 0).single() {
        Some(now) => now,
        None => panic!("fixture timestamp must be valid"),
    };
    (Arc::new(FixtureClock(now)), now)
}
