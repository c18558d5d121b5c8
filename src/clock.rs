use chrono::{DateTime, Utc};

/// Source of the current instant for [`DateConverter::now`](crate::DateConverter::now).
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc> + Send + Sync,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock() {
        let instant = Utc.with_ymd_and_hms(2024, 10, 15, 10, 30, 0).unwrap();
        let clock = FixedClock(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_closure_clock() {
        let instant = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let clock = move || instant;
        assert_eq!(Clock::now(&clock), instant);
    }

    #[test]
    fn test_system_clock_advances() {
        let first = SystemClock.now();
        let second = SystemClock.now();
        assert!(first <= second);
    }
}
