//! Dense two-dimensional grids
//!
//! [`Grid`] owns a fixed `width x height` block of cells stored in row-major
//! order (`index = y * width + x`). It never resizes after construction.
//!
//! Reads and writes go through the [`GridView`] and [`GridViewMut`] traits,
//! which are also implemented by the zero-copy views:
//!
//! - [`Transposed`]: swaps the axes, created by `transposed()` / `transposed_mut()`
//! - [`Flipped`]: mirrors columns or rows, created by `flipped_horizontal()` /
//!   `flipped_vertical()` and their `_mut` variants
//!
//! Views borrow the grid they wrap, so the borrow checker rules out resizing
//! or aliasing writes while a view or an iterator is alive. Call
//! [`GridView::to_grid`] to turn a view into an owned copy.
//!
//! # Addressing
//!
//! - `get(x, y)` / `get_at(point)` return `None` outside the grid
//! - `try_at(x, y)` and `set(x, y, value)` return [`GridError`](crate::GridError)
//! - `grid[(x, y)]`, `grid[point]` and `at(x, y)` panic outside the grid
//!
//! # Example
//!
//! ```rust
//! use aoc_common::{Grid, GridView, Point};
//!
//! let grid = Grid::parse_chars("#..\n.#.\n").unwrap();
//! assert_eq!((grid.width(), grid.height()), (3, 2));
//! assert_eq!(grid[Point::new(1, 1)], '#');
//! assert_eq!(grid.get_at(Point::new(-1, 0)), None);
//!
//! let walls: Vec<Point> = grid.positions(|c| *c == '#').collect();
//! assert_eq!(walls, vec![Point::new(0, 0), Point::new(1, 1)]);
//! ```

mod flipped;
mod transposed;
mod view;

use std::ops::{Index, IndexMut};

use itertools::iproduct;

use crate::error::GridError;
use crate::point::Point;

pub use flipped::{FlipAxis, Flipped};
pub use transposed::Transposed;
pub use view::{Cells, GridView, GridViewMut, Line, Lines};

/// A fixed-size, row-major 2-D array.
///
/// With the `serde` feature, deserialization goes through [`Grid::from_vec`],
/// so a payload whose cell count disagrees with its shape is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid<T>"))]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

/// Unchecked wire form of [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = GridError;

    fn try_from(raw: RawGrid<T>) -> Result<Self, GridError> {
        Grid::from_vec(raw.width, raw.height, raw.cells)
    }
}

impl<T> Grid<T> {
    /// Builds a grid by calling `init(x, y)` for every cell in row-major order.
    pub fn from_fn<F>(width: usize, height: usize, mut init: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let cells = iproduct!(0..height, 0..width)
            .map(|(y, x)| init(x, y))
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// Builds a grid from a row-major cell buffer.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::SizeMismatch`] unless `cells.len() == width * height`.
    pub fn from_vec(width: usize, height: usize, cells: Vec<T>) -> Result<Self, GridError> {
        let expected = width.checked_mul(height).ok_or(GridError::SizeMismatch {
            expected: usize::MAX,
            actual: cells.len(),
        })?;
        if cells.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Builds a grid from nested rows.
    ///
    /// An empty outer sequence gives a `0 x 0` grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RaggedRows`] if a row length differs from the first row.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;
        for (row, values) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(values);
            let actual = cells.len() - before;
            let expected = *width.get_or_insert(actual);
            if actual != expected {
                return Err(GridError::RaggedRows {
                    row,
                    expected,
                    actual,
                });
            }
            height += 1;
        }
        Ok(Self {
            width: width.unwrap_or(0),
            height,
            cells,
        })
    }

    /// Parses one row per input line, converting each character with `convert`.
    ///
    /// `\r\n` line endings and trailing blank lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RaggedRows`] if the lines differ in length.
    pub fn parse_with<F>(input: &str, mut convert: F) -> Result<Self, GridError>
    where
        F: FnMut(char) -> T,
    {
        let mut lines: Vec<&str> = input.lines().collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        let width = lines.first().map_or(0, |line| line.chars().count());
        let mut cells = Vec::with_capacity(width * lines.len());
        for (row, line) in lines.iter().enumerate() {
            let before = cells.len();
            cells.extend(line.chars().map(&mut convert));
            let actual = cells.len() - before;
            if actual != width {
                return Err(GridError::RaggedRows {
                    row,
                    expected: width,
                    actual,
                });
            }
        }
        Ok(Self {
            width,
            height: lines.len(),
            cells,
        })
    }

    /// Converts every cell, keeping the shape.
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Iterates `(x, y, &mut cell)` in row-major order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut T)> {
        let width = self.width;
        self.cells
            .iter_mut()
            .enumerate()
            .map(move |(i, value)| (i % width, i / width, value))
    }

    /// Cells in row-major order without coordinates.
    pub fn values(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    pub fn into_vec(self) -> Vec<T> {
        self.cells
    }

    /// Transposes a square grid without allocating.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NotSquare`] if `width != height`.
    pub fn transpose_in_place(&mut self) -> Result<(), GridError> {
        if self.width != self.height {
            return Err(GridError::NotSquare {
                width: self.width,
                height: self.height,
            });
        }
        let n = self.width;
        for y in 0..n {
            for x in (y + 1)..n {
                self.cells.swap(y * n + x, x * n + y);
            }
        }
        Ok(())
    }

    fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    fn out_of_bounds(&self, x: i64, y: i64) -> GridError {
        GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    fn index_or_panic(&self, x: i64, y: i64) -> usize {
        let index = usize::try_from(x)
            .ok()
            .zip(usize::try_from(y).ok())
            .and_then(|(ux, uy)| self.index_of(ux, uy));
        match index {
            Some(index) => index,
            None => panic!("{}", self.out_of_bounds(x, y)),
        }
    }
}

impl<T: Clone> Grid<T> {
    /// A grid with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }
}

impl Grid<char> {
    /// Parses one row of characters per input line.
    pub fn parse_chars(input: &str) -> Result<Self, GridError> {
        Self::parse_with(input, |c| c)
    }
}

impl<T> GridView<T> for Grid<T> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.cells.get(self.index_of(x, y)?)
    }
}

impl<T> GridViewMut<T> for Grid<T> {
    fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        let index = self.index_of(x, y)?;
        self.cells.get_mut(index)
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        self.at(x, y)
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        let point = Point::saturating_from_grid_index(x, y);
        let index = self.index_or_panic(point.x, point.y);
        &mut self.cells[index]
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    fn index(&self, point: Point) -> &T {
        &self.cells[self.index_or_panic(point.x, point.y)]
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, point: Point) -> &mut T {
        let index = self.index_or_panic(point.x, point.y);
        &mut self.cells[index]
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = (usize, usize, &'a T);
    type IntoIter = Cells<'a, T, Grid<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
