//! Time-annotated graph container.

use crate::edge::TimedEdge;
use crate::identity::{TemporalId, Tick};
use crate::window::{TimeWindow, Timed};
use crate::{Error, Result};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::BTreeMap;
use std::fmt;

/// A directed graph keyed by vertex identity and carrying edge payloads.
///
/// Uses petgraph's directed graph for storage and keeps an ordered index
/// from key to node, so vertices iterate in key order. With the default
/// parameters the keys are [`TemporalId`]s and the payloads are
/// [`TimedEdge`]s, which makes [`TemporalGraph::vertices`] a time-ordered
/// listing.
///
/// # Example
///
/// ```rust
/// use bursty_temporal::{TemporalGraph, TemporalId, TimedEdge, TimeWindow};
///
/// let mut tg: TemporalGraph = TemporalGraph::new();
/// tg.connect(TemporalId::new("alice", 1), TemporalId::new("bob", 1), TimedEdge::at(1.2)?);
/// tg.connect(TemporalId::new("bob", 2), TemporalId::new("carol", 2), TimedEdge::at(2.7)?);
///
/// let window = TimeWindow::new(0.0, 2.0)?;
/// assert_eq!(tg.edges_in_window(&window).len(), 1);
/// assert_eq!(tg.snapshot(&window).vertex_count(), 2);
/// # Ok::<(), bursty_temporal::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct TemporalGraph<K = TemporalId, E = TimedEdge> {
    /// The underlying directed graph.
    graph: DiGraph<K, E>,
    /// Map from key to node index, ordered by key.
    index: BTreeMap<K, NodeIndex>,
}

impl<K: Ord + Clone, E> Default for TemporalGraph<K, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, E> TemporalGraph<K, E> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            index: BTreeMap::new(),
        }
    }

    /// Create with estimated capacity.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(vertices, edges),
            index: BTreeMap::new(),
        }
    }

    /// Add a vertex, returning the existing node if the key is known.
    pub fn add_vertex(&mut self, key: K) -> NodeIndex {
        if let Some(&idx) = self.index.get(&key) {
            return idx;
        }

        let idx = self.graph.add_node(key.clone());
        self.index.insert(key, idx);

        #[cfg(feature = "logging")]
        log::trace!("added vertex as node {}", idx.index());

        idx
    }

    /// Add an edge between two existing vertices.
    ///
    /// Fails with [`Error::VertexNotFound`] if either endpoint is missing.
    pub fn add_edge(&mut self, src: &K, dst: &K, payload: E) -> Result<EdgeIndex>
    where
        K: fmt::Display,
    {
        let a = self.require(src)?;
        let b = self.require(dst)?;
        Ok(self.graph.add_edge(a, b, payload))
    }

    /// Add an edge, inserting whichever endpoints are missing.
    pub fn connect(&mut self, src: K, dst: K, payload: E) -> EdgeIndex {
        let a = self.add_vertex(src);
        let b = self.add_vertex(dst);
        self.graph.add_edge(a, b, payload)
    }

    fn require(&self, key: &K) -> Result<NodeIndex>
    where
        K: fmt::Display,
    {
        self.index
            .get(key)
            .copied()
            .ok_or_else(|| Error::VertexNotFound(key.to_string()))
    }

    /// Payload of an edge.
    pub fn edge(&self, edge: EdgeIndex) -> Option<&E> {
        self.graph.edge_weight(edge)
    }

    /// Mutable payload of an edge.
    ///
    /// Writes land in the graph's single copy of the payload.
    pub fn edge_mut(&mut self, edge: EdgeIndex) -> Option<&mut E> {
        self.graph.edge_weight_mut(edge)
    }

    /// Source and target keys of an edge.
    pub fn endpoints(&self, edge: EdgeIndex) -> Option<(&K, &K)> {
        self.graph
            .edge_endpoints(edge)
            .map(|(a, b)| (&self.graph[a], &self.graph[b]))
    }

    /// Node index for a key.
    pub fn node_index(&self, key: &K) -> Option<NodeIndex> {
        self.index.get(key).copied()
    }

    /// Whether the key is a vertex of this graph.
    pub fn contains_vertex(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// All vertex keys, in ascending key order.
    pub fn vertices(&self) -> impl Iterator<Item = &K> {
        self.index.keys()
    }

    /// All edges as `(source, target, payload)`, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K, &E)> {
        self.graph
            .edge_references()
            .map(move |e| (&self.graph[e.source()], &self.graph[e.target()], e.weight()))
    }

    /// Outgoing edges of a vertex as `(target, payload)`.
    pub fn edges_from<'a>(&'a self, key: &K) -> impl Iterator<Item = (&'a K, &'a E)> {
        let node = self.index.get(key).copied();
        node.into_iter().flat_map(move |n| {
            self.graph
                .edges_directed(n, Direction::Outgoing)
                .map(move |e| (&self.graph[e.target()], e.weight()))
        })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Get the underlying petgraph for advanced operations.
    pub fn as_petgraph(&self) -> &DiGraph<K, E> {
        &self.graph
    }
}

impl<E> TemporalGraph<TemporalId, E> {
    /// Identities whose time lies in `[start, end]`, in ascending order.
    pub fn vertices_in_range(
        &self,
        start: Tick,
        end: Tick,
    ) -> Result<impl Iterator<Item = &TemporalId>> {
        if start > end {
            return Err(Error::InvalidTimeRange {
                start: start as f64,
                end: end as f64,
            });
        }

        Ok(self
            .index
            .range(TemporalId::first_at(start)..)
            .map(|(id, _)| id)
            .take_while(move |id| id.time() <= end))
    }

    /// Identities observed exactly at `time`.
    pub fn vertices_at(&self, time: Tick) -> impl Iterator<Item = &TemporalId> {
        self.index
            .range(TemporalId::first_at(time)..)
            .map(|(id, _)| id)
            .take_while(move |id| id.time() == time)
    }
}

impl<K: Ord + Clone, E: Timed> TemporalGraph<K, E> {
    /// Edges whose payload time falls in `window`, earliest first.
    ///
    /// Edges with equal times keep insertion order.
    pub fn edges_in_window(&self, window: &TimeWindow) -> Vec<(&K, &K, &E)> {
        let mut hits: Vec<_> = self.edges().filter(|(_, _, e)| window.covers(*e)).collect();
        hits.sort_by(|a, b| a.2.time().total_cmp(&b.2.time()));
        hits
    }

    /// Earliest and latest edge time, or `None` for an edgeless graph.
    pub fn time_range(&self) -> Option<(f64, f64)> {
        self.graph.edge_weights().map(Timed::time).fold(None, |acc, t| match acc {
            None => Some((t, t)),
            Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
        })
    }

    /// The subgraph of edges inside `window` together with their endpoints.
    pub fn snapshot(&self, window: &TimeWindow) -> Self
    where
        E: Clone,
    {
        let mut snap = Self::new();
        for (src, dst, payload) in self.edges_in_window(window) {
            snap.connect(src.clone(), dst.clone(), payload.clone());
        }

        #[cfg(feature = "logging")]
        log::debug!(
            "snapshot [{}, {}]: kept {} of {} edges, {} vertices",
            window.start(),
            window.end(),
            snap.edge_count(),
            self.edge_count(),
            snap.vertex_count()
        );

        snap
    }
}
