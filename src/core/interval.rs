//! Resolved time intervals.

use std::fmt;

use chrono::NaiveTime;
use serde::Serialize;

/// A resolved pair of clock times.
///
/// Equal start and end denote a single instant. Nothing enforces
/// `start <= end`; near-midnight phrases can legitimately produce an
/// inverted pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interval {
    /// Start of the interval.
    pub start: NaiveTime,
    /// End of the interval.
    pub end: NaiveTime,
}

impl Interval {
    /// Create an interval from a start and end time.
    #[must_use]
    pub const fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Create an interval denoting a single instant.
    #[must_use]
    pub const fn instant(at: NaiveTime) -> Self {
        Self { start: at, end: at }
    }

    /// Check whether this interval denotes a single instant.
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.start == self.end
    }

    /// Render as `"HH:MM"` for an instant, `"HH:MM-HH:MM"` for a range.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_instant() {
            write!(f, "{}", self.start.format("%H:%M"))
        } else {
            write!(
                f,
                "{}-{}",
                self.start.format("%H:%M"),
                self.end.format("%H:%M")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_render_instant() {
        assert_eq!(Interval::instant(hm(5, 0)).render(), "05:00");
        assert_eq!(Interval::new(hm(9, 30), hm(9, 30)).render(), "09:30");
    }

    #[test]
    fn test_render_range() {
        assert_eq!(Interval::new(hm(5, 30), hm(6, 30)).render(), "05:30-06:30");
        assert_eq!(Interval::new(hm(0, 0), hm(10, 0)).render(), "00:00-10:00");
    }

    #[test]
    fn test_render_zero_padded() {
        assert_eq!(Interval::new(hm(1, 5), hm(2, 0)).render(), "01:05-02:00");
    }

    #[test]
    fn test_is_instant() {
        assert!(Interval::instant(hm(12, 0)).is_instant());
        assert!(!Interval::new(hm(12, 0), hm(13, 0)).is_instant());
    }

    #[test]
    fn test_inverted_range_renders_as_given() {
        // No ordering invariant: start > end passes through untouched.
        assert_eq!(Interval::new(hm(23, 45), hm(0, 15)).render(), "23:45-00:15");
    }
}
