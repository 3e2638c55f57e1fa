//! Adjacency-list graph implementation.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use log::{debug, trace};

use super::vertex::{Edge, Vertex};
use crate::error::GraphError;

#[derive(Debug, Clone)]
struct Entry<T> {
    vertex: Vertex<T>,
    edges: Vec<Edge<T>>,
}

/// A directed graph stored as vertex index -> outgoing edges.
///
/// Entries are ordered by vertex index, so every traversal is deterministic.
/// The graph has no edge limit and allows disconnected vertices.
#[derive(Debug, Clone)]
pub struct AdjacencyList<T> {
    entries: BTreeMap<usize, Entry<T>>,
    next_index: usize,
}

impl<T> Default for AdjacencyList<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_index: 0,
        }
    }
}

impl<T: Clone + PartialEq> AdjacencyList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex carrying `data` and returns it.
    ///
    /// Indices are handed out sequentially from zero.
    pub fn create_vertex(&mut self, data: T) -> Vertex<T> {
        let vertex = Vertex::new(self.next_index, data);
        self.next_index += 1;
        self.entries.insert(
            vertex.index(),
            Entry {
                vertex: vertex.clone(),
                edges: Vec::new(),
            },
        );
        vertex
    }

    /// Whether `vertex` (same index and payload) belongs to this graph.
    pub fn contains(&self, vertex: &Vertex<T>) -> bool {
        self.entries
            .get(&vertex.index())
            .is_some_and(|entry| entry.vertex == *vertex)
    }

    pub fn vertex(&self, index: usize) -> Option<&Vertex<T>> {
        self.entries.get(&index).map(|entry| &entry.vertex)
    }

    /// Vertices in index order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.entries.values().map(|entry| &entry.vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.entries.len()
    }

    pub fn edge_count(&self) -> usize {
        self.entries.values().map(|entry| entry.edges.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds `source -> destination` unless an identical edge already exists.
    ///
    /// Returns whether the edge was inserted. Duplicate detection compares
    /// source, destination and weight, so it costs `O(out-degree)`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if either endpoint is not in the graph.
    pub fn add_directed_edge(
        &mut self,
        source: &Vertex<T>,
        destination: &Vertex<T>,
        weight: Option<i64>,
    ) -> Result<bool, GraphError> {
        self.require(destination)?;
        let entry = self.entry_mut(source)?;
        let edge = Edge::new(source.clone(), destination.clone(), weight);
        if entry.edges.contains(&edge) {
            return Ok(false);
        }
        entry.edges.push(edge);
        Ok(true)
    }

    /// Adds the edge in both directions; returns whether either was inserted.
    pub fn add_undirected_edge(
        &mut self,
        a: &Vertex<T>,
        b: &Vertex<T>,
        weight: Option<i64>,
    ) -> Result<bool, GraphError> {
        self.require(a)?;
        self.require(b)?;
        let forward = self.add_directed_edge(a, b, weight)?;
        let backward = self.add_directed_edge(b, a, weight)?;
        Ok(forward || backward)
    }

    /// Outgoing edges of `vertex` in insertion order.
    pub fn edges(&self, vertex: &Vertex<T>) -> Result<&[Edge<T>], GraphError> {
        self.require(vertex)?;
        Ok(self.edges_of(vertex.index()))
    }

    /// Destinations of the outgoing edges of `vertex`.
    pub fn neighbours(
        &self,
        vertex: &Vertex<T>,
    ) -> Result<impl Iterator<Item = &Vertex<T>>, GraphError> {
        Ok(self.edges(vertex)?.iter().map(Edge::destination))
    }

    /// Depth-first search from `start` for a cycle.
    ///
    /// Returns the vertices visited, in visit order, up to the edge that leads
    /// back onto the current search path. Returns `None` if no cycle is
    /// reachable from `start`. Vertices visited on exhausted branches are part
    /// of the result, so it is a superset of the cycle itself.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `start` is not in the graph.
    pub fn get_cycle(&self, start: &Vertex<T>) -> Result<Option<Vec<Vertex<T>>>, GraphError> {
        self.require(start)?;

        let mut visited = HashSet::from([start.index()]);
        let mut on_stack = HashSet::from([start.index()]);
        let mut order = vec![start.index()];
        // (vertex, next edge to follow)
        let mut stack = vec![(start.index(), 0usize)];

        while let Some(&(current, cursor)) = stack.last() {
            let Some(edge) = self.edges_of(current).get(cursor) else {
                on_stack.remove(&current);
                stack.pop();
                continue;
            };
            if let Some(top) = stack.last_mut() {
                top.1 += 1;
            }

            let next = edge.destination().index();
            if on_stack.contains(&next) {
                trace!(
                    "cycle from vertex {} closes at {} -> {} after {} vertices",
                    start.index(),
                    current,
                    next,
                    order.len()
                );
                return Ok(Some(
                    order
                        .iter()
                        .filter_map(|index| self.vertex(*index).cloned())
                        .collect(),
                ));
            }
            if visited.insert(next) {
                on_stack.insert(next);
                order.push(next);
                stack.push((next, 0));
            }
        }

        trace!(
            "no cycle reachable from vertex {} ({} vertices visited)",
            start.index(),
            order.len()
        );
        Ok(None)
    }

    /// Removes every vertex without outgoing edges, and every edge into one.
    ///
    /// This is a single pass: vertices that lose their last edge here are kept
    /// until the next call. Returns the removed vertices in index order.
    pub fn prune_graph(&mut self) -> Vec<Vertex<T>> {
        let dead_ends: BTreeSet<usize> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.edges.is_empty())
            .map(|(index, _)| *index)
            .collect();

        let removed: Vec<Vertex<T>> = dead_ends
            .iter()
            .filter_map(|index| self.entries.remove(index))
            .map(|entry| entry.vertex)
            .collect();
        for entry in self.entries.values_mut() {
            entry
                .edges
                .retain(|edge| !dead_ends.contains(&edge.destination().index()));
        }

        debug!(
            "pruned {} dead-end vertices, {} remain",
            removed.len(),
            self.entries.len()
        );
        removed
    }

    /// Repeats [`prune_graph`](Self::prune_graph) until nothing is removed.
    ///
    /// What remains is exactly the set of vertices from which a path of any
    /// length can be followed, i.e. those that reach a cycle.
    pub fn prune_to_fixed_point(&mut self) -> Vec<Vertex<T>> {
        let mut removed = Vec::new();
        loop {
            let pass = self.prune_graph();
            if pass.is_empty() {
                return removed;
            }
            removed.extend(pass);
        }
    }

    fn require(&self, vertex: &Vertex<T>) -> Result<(), GraphError> {
        if self.contains(vertex) {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound(vertex.index()))
        }
    }

    fn entry_mut(&mut self, vertex: &Vertex<T>) -> Result<&mut Entry<T>, GraphError> {
        self.require(vertex)?;
        self.entries
            .get_mut(&vertex.index())
            .ok_or(GraphError::VertexNotFound(vertex.index()))
    }

    fn edges_of(&self, index: usize) -> &[Edge<T>] {
        self.entries
            .get(&index)
            .map(|entry| entry.edges.as_slice())
            .unwrap_or_default()
    }
}
