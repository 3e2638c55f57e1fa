//! Shared utilities for Advent of Code puzzle solutions
//!
//! Puzzle solutions parse their input into the types in this crate and run
//! their searches on top of them. The crate does no I/O and keeps no global
//! state.
//!
//! # Overview
//!
//! - [`Point`]: 2-D `i64` coordinate / direction with rotation and neighbours
//! - [`Rectangle`]: half-open bounding region with containment tests
//! - [`PointProgression`]: lazy, restartable row-major point sequences
//! - [`Grid`]: dense fixed-size 2-D container, read and written through the
//!   [`GridView`] / [`GridViewMut`] traits, with zero-copy transposed and
//!   flipped views
//! - [`graph::AdjacencyList`]: directed graph with cycle detection and pruning
//! - [`permutation::IndexPermutations`]: allocation-free Steinhaus-Johnson-Trotter
//!   permutation enumeration
//!
//! # Quick Example
//!
//! ```
//! use aoc_common::{Grid, GridView, Point};
//!
//! let grid = Grid::parse_chars("S.#\n..#\n#..").unwrap();
//! let start = grid.position(|c| *c == 'S').unwrap();
//!
//! let open: Vec<Point> = grid
//!     .neighbours(start)
//!     .filter(|(_, c)| **c == '.')
//!     .map(|(p, _)| p)
//!     .collect();
//! assert_eq!(open, vec![Point::new(0, 1), Point::new(1, 0)]);
//! ```
//!
//! # Errors
//!
//! Fallible operations return the `thiserror` enums in [`error`]. Lookups that
//! are expected to miss at the grid edges return `Option` instead, and the
//! `Index` operators panic like slice indexing does.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Point`], [`Rectangle`] and [`Grid`]

pub mod error;
pub mod graph;
pub mod grid;
pub mod permutation;
mod point;
mod progression;
mod rectangle;

// Re-export public API
pub use error::{GeometryError, GraphError, GridError};
pub use grid::{FlipAxis, Flipped, Grid, GridView, GridViewMut, Transposed};
pub use point::Point;
pub use progression::{PointIter, PointProgression};
pub use rectangle::Rectangle;
