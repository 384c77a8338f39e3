//! Shared unit test doubles.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

pub(crate) fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 24, 10, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Clock frozen at [`fixture_timestamp`], returned with that instant.
pub(crate) fn fixture_clock() -> (Arc<dyn Clock>, DateTime<Utc>) {
    let now = fixture_timestamp();
    (Arc::new(FixtureClock { utc_now: now }), now)
}
