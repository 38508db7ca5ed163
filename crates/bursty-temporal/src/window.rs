//! Time windows over continuous timestamps.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Anything observed at a continuous instant.
pub trait Timed {
    /// The instant, always finite.
    fn time(&self) -> f64;
}

/// A closed time window `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WindowBounds")]
pub struct TimeWindow {
    /// Start time (inclusive).
    start: f64,
    /// End time (inclusive).
    end: f64,
}

impl TimeWindow {
    /// Create a new time window.
    ///
    /// Both bounds must be finite and `start` must not exceed `end`.
    pub fn new(start: f64, end: f64) -> Result<Self> {
        if !start.is_finite() {
            return Err(Error::non_finite("window start", start));
        }
        if !end.is_finite() {
            return Err(Error::non_finite("window end", end));
        }
        if start > end {
            return Err(Error::InvalidTimeRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Create a window centered at a time with given radius.
    pub fn centered(center: f64, radius: f64) -> Result<Self> {
        Self::new(center - radius, center + radius)
    }

    /// Start time.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// End time.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Check if an instant is within this window.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start && time <= self.end
    }

    /// Check if a timed value falls within this window.
    pub fn covers<T: Timed + ?Sized>(&self, item: &T) -> bool {
        self.contains(item.time())
    }

    /// Duration of the window.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Check if two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Intersection of two windows, if any.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);

        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }
}

#[derive(Deserialize)]
struct WindowBounds {
    start: f64,
    end: f64,
}

impl TryFrom<WindowBounds> for TimeWindow {
    type Error = Error;

    fn try_from(bounds: WindowBounds) -> Result<Self> {
        Self::new(bounds.start, bounds.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let w = TimeWindow::new(1.0, 2.0).unwrap();

        assert!(w.contains(1.0));
        assert!(w.contains(1.5));
        assert!(w.contains(2.0));
        assert!(!w.contains(0.999));
        assert!(!w.contains(2.001));
        assert_eq!(w.duration(), 1.0);
    }

    #[test]
    fn test_invalid_windows() {
        assert!(matches!(
            TimeWindow::new(5.0, 1.0),
            Err(Error::InvalidTimeRange { .. })
        ));
        assert!(matches!(
            TimeWindow::new(f64::NAN, 1.0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            TimeWindow::centered(0.0, f64::INFINITY),
            Err(Error::InvalidArgument(_))
        ));
        assert!(TimeWindow::new(3.0, 3.0).is_ok());
    }

    #[test]
    fn test_overlap_and_intersection() {
        let a = TimeWindow::new(0.0, 10.0).unwrap();
        let b = TimeWindow::new(5.0, 15.0).unwrap();
        let c = TimeWindow::new(11.0, 12.0).unwrap();

        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert_eq!(a.intersect(&b), Some(TimeWindow::new(5.0, 10.0).unwrap()));
        assert_eq!(a.intersect(&c), None);
    }

    #[test]
    fn test_deserialize_validates() {
        let w: TimeWindow = serde_json::from_str(r#"{ "start": 1.0, "end": 4.0 }"#).unwrap();
        assert_eq!(w.duration(), 3.0);

        let reversed = serde_json::from_str::<TimeWindow>(r#"{ "start": 4.0, "end": 1.0 }"#);
        assert!(reversed.is_err());
    }

    #[test]
    fn test_centered() {
        let w = TimeWindow::centered(10.0, 2.5).unwrap();
        assert_eq!((w.start(), w.end()), (7.5, 12.5));
    }
}
