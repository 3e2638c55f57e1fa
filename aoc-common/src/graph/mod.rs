//! Small directed graphs for simulation and search puzzles
//!
//! [`AdjacencyList`] stores every vertex with its outgoing edges, keyed by the
//! vertex index assigned at creation. Indices are stable for the lifetime of
//! the graph and are never reused, even after pruning.
//!
//! # Example
//!
//! ```rust
//! use aoc_common::graph::AdjacencyList;
//!
//! let mut graph = AdjacencyList::new();
//! let a = graph.create_vertex("a");
//! let b = graph.create_vertex("b");
//! let c = graph.create_vertex("c");
//! graph.add_directed_edge(&a, &b, None).unwrap();
//! graph.add_directed_edge(&b, &c, None).unwrap();
//! assert_eq!(graph.get_cycle(&a).unwrap(), None);
//!
//! graph.add_directed_edge(&c, &a, None).unwrap();
//! let cycle = graph.get_cycle(&a).unwrap().unwrap();
//! assert_eq!(cycle, vec![a, b, c]);
//! ```

mod adjacency;
mod vertex;

pub use adjacency::AdjacencyList;
pub use vertex::{Edge, Vertex};

#[cfg(test)]
mod tests;
