//! Timestamp helpers

use chrono::{DateTime, Duration, Utc};

/// Current time, nudged forward so it is strictly after `previous`.
///
/// Two updates inside one clock tick would otherwise share a timestamp.
pub fn now_after(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strictly_after_future_timestamp() {
        let future = Utc::now() + Duration::hours(1);
        assert!(now_after(future) > future);
    }

    #[test]
    fn uses_wall_clock_when_ahead() {
        let past = Utc::now() - Duration::hours(1);
        let stamp = now_after(past);
        assert!(stamp > past + Duration::minutes(59));
    }
}
