// tests/support/mocks/time.rs
use chrono::{DateTime, Duration, Utc};
use handbook_core::application::ports::time::Clock;
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex};

/// Deterministic timestamp shared by all fixtures.
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Clock starting at [`fixed_now`] that only moves when told to.
#[derive(Clone)]
pub struct FixedClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl Default for FixedClock {
    fn default() -> Self {
        Self {
            now: Arc::new(Mutex::new(fixed_now())),
        }
    }
}

impl FixedClock {
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
