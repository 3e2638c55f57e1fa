//! Vertex and edge values.

/// A graph vertex: a payload plus the index assigned when it was created.
///
/// Vertices are plain values. Edges keep their own copies, and two vertices
/// are equal when both the index and the payload match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex<T> {
    index: usize,
    data: T,
}

impl<T> Vertex<T> {
    pub(crate) fn new(index: usize, data: T) -> Self {
        Self { index, data }
    }

    /// Creation-order index, stable for the lifetime of the graph.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn data(&self) -> &T {
        &self.data
    }
}

/// A directed edge with an optional weight.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<T> {
    source: Vertex<T>,
    destination: Vertex<T>,
    weight: Option<i64>,
}

impl<T> Edge<T> {
    pub(crate) fn new(source: Vertex<T>, destination: Vertex<T>, weight: Option<i64>) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    pub fn source(&self) -> &Vertex<T> {
        &self.source
    }

    pub fn destination(&self) -> &Vertex<T> {
        &self.destination
    }

    pub fn weight(&self) -> Option<i64> {
        self.weight
    }
}
