use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Mutex;
use stressboard::domain::ports::clock::Clock;

/// Clock that only moves when a test tells it to.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn starting_at_noon() -> Self {
        Self::new(Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap())
    }

    pub fn set(&self, to: DateTime<Utc>) {
        *self.now.lock().unwrap() = to;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now = *now + by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
