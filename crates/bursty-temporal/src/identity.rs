//! Temporal vertex identities.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Discrete time instant attached to a vertex identity.
pub type Tick = i64;

/// A vertex observed at a specific point in time.
///
/// Identities are ordered by `time` first and by `vertex` label second, so a
/// sorted collection of identities reads as a time-ordered event stream.
/// Equality and hashing use the same two fields, which keeps them consistent
/// with the ordering.
///
/// # Example
///
/// ```rust
/// use bursty_temporal::TemporalId;
///
/// let early = TemporalId::new("x", 5);
/// let late = TemporalId::new("a", 10);
///
/// assert!(early < late);
/// assert_eq!(early.to_string(), "(x;5)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemporalId {
    vertex: String,
    time: Tick,
}

impl TemporalId {
    /// Create an identity from a vertex label and an instant.
    pub fn new(vertex: impl Into<String>, time: Tick) -> Self {
        Self {
            vertex: vertex.into(),
            time,
        }
    }

    /// Create an identity from a label that may be absent.
    ///
    /// Fails with [`Error::InvalidArgument`] when `vertex` is `None`. The
    /// empty label is accepted.
    pub fn try_new<S: Into<String>>(vertex: Option<S>, time: Tick) -> Result<Self> {
        match vertex {
            Some(vertex) => Ok(Self::new(vertex, time)),
            None => Err(Error::InvalidArgument(format!(
                "vertex label is required (time {time})"
            ))),
        }
    }

    /// The smallest identity at `time`.
    ///
    /// Every identity with the same time compares greater than or equal to
    /// this one, which makes it an inclusive lower bound for range scans.
    pub fn first_at(time: Tick) -> Self {
        Self {
            vertex: String::new(),
            time,
        }
    }

    /// Vertex label.
    pub fn vertex(&self) -> &str {
        &self.vertex
    }

    /// Time instant.
    pub fn time(&self) -> Tick {
        self.time
    }

    /// Split into label and instant.
    pub fn into_parts(self) -> (String, Tick) {
        (self.vertex, self.time)
    }
}

impl PartialOrd for TemporalId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TemporalId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time
            .cmp(&other.time)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Diagnostic form `(vertex;time)`.
///
/// Labels are written verbatim, so a label containing `;`, `(` or `)` yields
/// an ambiguous string. There is no parser for this form.
impl fmt::Display for TemporalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({};{})", self.vertex, self.time)
    }
}

impl From<(&str, Tick)> for TemporalId {
    fn from((vertex, time): (&str, Tick)) -> Self {
        Self::new(vertex, time)
    }
}

impl From<(String, Tick)> for TemporalId {
    fn from((vertex, time): (String, Tick)) -> Self {
        Self::new(vertex, time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(id: &TemporalId) -> u64 {
        let mut hasher = DefaultHasher::new();
        id.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_time_dominates_label() {
        assert!(TemporalId::new("x", 5) < TemporalId::new("a", 10));
        assert!(TemporalId::new("a", 10) > TemporalId::new("x", 5));
    }

    #[test]
    fn test_label_breaks_ties() {
        assert!(TemporalId::new("a", 5) < TemporalId::new("b", 5));
        assert_eq!(
            TemporalId::new("b", 5).cmp(&TemporalId::new("b", 5)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_negative_and_zero_times() {
        let mut ids = vec![
            TemporalId::new("v", 0),
            TemporalId::new("v", -3),
            TemporalId::new("v", 2),
            TemporalId::new("u", -3),
        ];
        ids.sort();

        let times: Vec<Tick> = ids.iter().map(TemporalId::time).collect();
        assert_eq!(times, vec![-3, -3, 0, 2]);
        assert_eq!(ids[0].vertex(), "u");
    }

    #[test]
    fn test_sorted_scenario() {
        let mut ids = vec![
            TemporalId::new("alice", 2),
            TemporalId::new("bob", 1),
            TemporalId::new("alice", 1),
        ];
        ids.sort();

        assert_eq!(
            ids,
            vec![
                TemporalId::new("alice", 1),
                TemporalId::new("bob", 1),
                TemporalId::new("alice", 2),
            ]
        );
    }

    #[test]
    fn test_equal_ids_hash_equally() {
        let a = TemporalId::new("v1", 3);
        let b = TemporalId::from(("v1".to_string(), 3));

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, TemporalId::new("v1", 4));
    }

    #[test]
    fn test_display() {
        assert_eq!(TemporalId::new("v1", 3).to_string(), "(v1;3)");
        assert_eq!(TemporalId::new("", -1).to_string(), "(;-1)");
        // Delimiters pass through unescaped.
        assert_eq!(TemporalId::new("a;b", 1).to_string(), "(a;b;1)");
    }

    #[test]
    fn test_try_new() {
        let id = TemporalId::try_new(Some(""), 7).unwrap();
        assert_eq!(id.vertex(), "");
        assert_eq!(id.time(), 7);

        let err = TemporalId::try_new(None::<&str>, 7).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_first_at_is_lower_bound() {
        let bound = TemporalId::first_at(4);

        assert!(bound <= TemporalId::new("", 4));
        assert!(bound < TemporalId::new("a", 4));
        assert!(bound > TemporalId::new("zzz", 3));
    }

    #[test]
    fn test_serde_record() {
        let id = TemporalId::new("alice", 12);
        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(json, serde_json::json!({ "vertex": "alice", "time": 12 }));

        let back: TemporalId = serde_json::from_value(json).unwrap();
        assert_eq!(back, id);

        let missing = serde_json::from_str::<TemporalId>(r#"{ "time": 1 }"#);
        assert!(missing.is_err());
    }
}
