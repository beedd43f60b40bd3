use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Remaining time until the drawing, broken into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownTime {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl CountdownTime {
    pub fn new(days: u32, hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Remaining time between `now` and `deadline`, clamped to zero once the
    /// deadline has passed.
    pub fn until(deadline: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let total = (deadline - now).num_seconds();
        if total <= 0 {
            return Self::new(0, 0, 0, 0);
        }
        let total = total as u32;
        Self {
            days: total / 86_400,
            hours: total % 86_400 / 3_600,
            minutes: total % 3_600 / 60,
            seconds: total % 60,
        }
    }

    /// One-second decrement with borrow cascade: seconds borrow from minutes,
    /// minutes from hours, hours from days. All-zero stays all-zero, the
    /// countdown freezes at the end instead of wrapping.
    pub fn tick(self) -> Self {
        if self.seconds > 0 {
            Self {
                seconds: self.seconds - 1,
                ..self
            }
        } else if self.minutes > 0 {
            Self {
                minutes: self.minutes - 1,
                seconds: 59,
                ..self
            }
        } else if self.hours > 0 {
            Self {
                hours: self.hours - 1,
                minutes: 59,
                seconds: 59,
                ..self
            }
        } else if self.days > 0 {
            Self {
                days: self.days - 1,
                hours: 23,
                minutes: 59,
                seconds: 59,
            }
        } else {
            self
        }
    }

    pub fn is_finished(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_tick_decrements_seconds() {
        let t = CountdownTime::new(3, 14, 22, 10).tick();
        assert_eq!(t, CountdownTime::new(3, 14, 22, 9));
    }

    #[test]
    fn test_tick_borrows_through_units() {
        assert_eq!(
            CountdownTime::new(3, 14, 22, 0).tick(),
            CountdownTime::new(3, 14, 21, 59)
        );
        assert_eq!(
            CountdownTime::new(3, 14, 0, 0).tick(),
            CountdownTime::new(3, 13, 59, 59)
        );
        assert_eq!(
            CountdownTime::new(3, 0, 0, 0).tick(),
            CountdownTime::new(2, 23, 59, 59)
        );
    }

    #[test]
    fn test_tick_freezes_at_zero() {
        let zero = CountdownTime::new(0, 0, 0, 0);
        assert_eq!(zero.tick(), zero);
        assert!(zero.is_finished());
    }

    #[test]
    fn test_until_splits_units() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let deadline = Utc.with_ymd_and_hms(2024, 3, 4, 14, 22, 0).unwrap();
        assert_eq!(
            CountdownTime::until(deadline, now),
            CountdownTime::new(3, 14, 22, 0)
        );
    }

    #[test]
    fn test_until_past_deadline_is_zero() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
        let deadline = Utc.with_ymd_and_hms(2024, 3, 4, 0, 0, 0).unwrap();
        assert!(CountdownTime::until(deadline, now).is_finished());
    }
}
