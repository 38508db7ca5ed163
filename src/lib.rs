//! `bursty` is the identity and edge substrate for bursty community detection.
//!
//! Design goal: a small, stable surface of value types that time-windowed
//! graph algorithms can rely on for ordering, equality and serialization.
//! All types live in [`bursty_temporal`] and are re-exported here.

pub use bursty_temporal::{
    petgraph, Error, Result, TemporalGraph, TemporalId, Tick, TimeWindow, Timed, TimedEdge,
};
