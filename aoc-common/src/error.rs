//! Error types for the common utilities

use thiserror::Error;

use crate::point::Point;

/// Error type for grid construction and addressing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A cell coordinate lies outside the grid
    #[error("index out of bounds: the grid is {width}x{height} but the index is ({x}, {y})")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },
    /// The requested row does not exist
    #[error("row {row} out of bounds for grid of height {height}")]
    RowOutOfBounds { row: usize, height: usize },
    /// The requested column does not exist
    #[error("column {column} out of bounds for grid of width {width}")]
    ColumnOutOfBounds { column: usize, width: usize },
    /// A sub-grid region extends past the grid edges
    #[error(
        "region {region_width}x{region_height} at ({x}, {y}) out of bounds for {width}x{height} grid"
    )]
    RegionOutOfBounds {
        x: usize,
        y: usize,
        region_width: usize,
        region_height: usize,
        width: usize,
        height: usize,
    },
    /// A diagonal offset does not touch the grid
    #[error("diagonal offset {offset} out of bounds for {width}x{height} grid")]
    DiagonalOutOfBounds {
        offset: i64,
        width: usize,
        height: usize,
    },
    /// Rows of nested input have different lengths
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// A flat cell buffer does not match the requested dimensions
    #[error("expected {expected} cells for the requested dimensions, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    /// The operation needs a square grid
    #[error("operation requires a square grid, got {width}x{height}")]
    NotSquare { width: usize, height: usize },
}

/// Error type for adjacency list operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The vertex was never created by this graph, or has been pruned
    #[error("vertex {0} is not part of the graph")]
    VertexNotFound(usize),
}

/// Error type for geometric constructions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Rectangle corners are not ordered componentwise
    #[error("rectangle corner {top_left} is not above and left of {bottom_right}")]
    InvertedRectangle { top_left: Point, bottom_right: Point },
}
