use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};

/// Wall clock at millisecond precision. Articles are stored with
/// millisecond timestamps and ids embed the same reading, so an article
/// returned from a save compares equal to the one read back later.
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        let now = Utc::now();
        DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
    }
}
