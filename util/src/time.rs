//! General time utility functions

use chrono;

/// Number of nanoseconds in a second
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Convert a duration into a number of seconds, or `None` if overflow
pub fn duration_to_seconds(duration: chrono::Duration) -> Option<f64> {
    duration.num_nanoseconds()
        .map(|ns| ns as f64 / NANOS_PER_SECOND as f64)
}

/// Get the period of a loop running at the given frequency.
///
/// Returns `None` if the rate is not positive or the period cannot be held in a `Duration`.
pub fn period_from_rate(rate_hz: f64) -> Option<std::time::Duration> {
    if !(rate_hz > 0.0) {
        return None
    }

    std::time::Duration::try_from_secs_f64(1.0 / rate_hz).ok()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_duration_to_seconds() {
        assert_eq!(
            duration_to_seconds(chrono::Duration::milliseconds(1500)),
            Some(1.5)
        );
    }

    #[test]
    fn test_period_from_rate() {
        assert_eq!(period_from_rate(20.0), Some(std::time::Duration::from_millis(50)));
    }

    #[test]
    fn test_period_from_unusable_rate() {
        assert_eq!(period_from_rate(1e-20), None);
        assert_eq!(period_from_rate(0.0), None);
        assert_eq!(period_from_rate(-1.0), None);
        assert_eq!(period_from_rate(std::f64::NAN), None);

        // Very fast loops just get a zero period
        assert_eq!(period_from_rate(std::f64::INFINITY), Some(std::time::Duration::from_secs(0)));
    }
}
