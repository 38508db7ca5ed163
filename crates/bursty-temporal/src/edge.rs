//! Timestamped edge payloads.

use crate::window::Timed;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Edge payload carrying the instant at which a relationship was observed.
///
/// The payload holds no endpoints: the graph container that owns it decides
/// which pair of vertices it connects. The timestamp is always finite and
/// defaults to `0.0`, which doubles as the "unset" sentinel.
///
/// Edges have no natural order. Callers that need one sort explicitly with
/// [`TimedEdge::cmp_by_time`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TimedEdgeRecord")]
pub struct TimedEdge {
    timestamp: f64,
}

impl TimedEdge {
    /// Create an edge with the default `0.0` timestamp.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an edge observed at `instant`.
    ///
    /// Fails with [`Error::InvalidArgument`] if `instant` is NaN or infinite.
    pub fn at(instant: f64) -> Result<Self> {
        Ok(Self {
            timestamp: finite(instant)?,
        })
    }

    /// Current timestamp.
    pub fn time(&self) -> f64 {
        self.timestamp
    }

    /// Replace the timestamp.
    ///
    /// A non-finite `instant` is rejected and the previous value is kept.
    pub fn set_time(&mut self, instant: f64) -> Result<()> {
        self.timestamp = finite(instant)?;
        Ok(())
    }

    /// Whether the timestamp still holds the `0.0` sentinel.
    pub fn is_unset(&self) -> bool {
        self.timestamp == 0.0
    }

    /// Order two edges by timestamp.
    pub fn cmp_by_time(&self, other: &Self) -> Ordering {
        self.timestamp.total_cmp(&other.timestamp)
    }
}

impl Timed for TimedEdge {
    fn time(&self) -> f64 {
        self.timestamp
    }
}

fn finite(instant: f64) -> Result<f64> {
    if instant.is_finite() {
        Ok(instant)
    } else {
        Err(Error::non_finite("edge timestamp", instant))
    }
}

/// Unvalidated wire form; converted through [`TimedEdge::at`].
#[derive(Deserialize)]
struct TimedEdgeRecord {
    #[serde(default)]
    timestamp: f64,
}

impl TryFrom<TimedEdgeRecord> for TimedEdge {
    type Error = Error;

    fn try_from(record: TimedEdgeRecord) -> Result<Self> {
        Self::at(record.timestamp)
    }
}
