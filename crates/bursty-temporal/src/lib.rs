//! Temporal graph primitives.
//!
//! The identity and ordering substrate for time-sliced graphs:
//! - [`TemporalId`] - a vertex observed at a discrete instant, totally ordered
//!   by time and then by label
//! - [`TimedEdge`] - an edge payload carrying a continuous, validated timestamp
//! - [`TemporalGraph`] - a petgraph-backed container generic over vertex key
//!   and edge payload
//! - [`TimeWindow`] - closed time windows for filtering and snapshots
//!
//! # Example
//!
//! ```rust
//! use bursty_temporal::{TemporalId, TimedEdge};
//!
//! let mut ids = vec![
//!     TemporalId::new("alice", 2),
//!     TemporalId::new("bob", 1),
//!     TemporalId::new("alice", 1),
//! ];
//! ids.sort();
//! assert_eq!(ids[1].to_string(), "(bob;1)");
//!
//! let mut edge = TimedEdge::new();
//! edge.set_time(7.5)?;
//! assert_eq!(edge.time(), 7.5);
//! assert!(edge.set_time(f64::NAN).is_err());
//! # Ok::<(), bursty_temporal::Error>(())
//! ```
//!
//! # Features
//!
//! - `logging`: emit `log` records from graph construction and snapshots.

mod edge;
mod error;
mod graph;
mod identity;
mod window;

pub use edge::TimedEdge;
pub use error::{Error, Result};
pub use graph::TemporalGraph;
pub use identity::{TemporalId, Tick};
pub use window::{TimeWindow, Timed};

// Re-export petgraph for index types and advanced graph operations
pub use petgraph;
