//! Read and write access shared by owned grids and zero-copy views.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::Grid;
use super::flipped::{FlipAxis, Flipped};
use super::transposed::Transposed;
use crate::error::GridError;
use crate::point::Point;
use crate::progression::{PointIter, PointProgression};
use crate::rectangle::Rectangle;

/// Read access to a `width x height` arrangement of cells addressed as `(x, y)`.
///
/// Implementors provide the shape and a bounds-checked [`get`](GridView::get);
/// every other query is built on those three methods, so it works the same on
/// a [`Grid`], a [`Transposed`] or a [`Flipped`] view.
///
/// # Example
///
/// ```rust
/// use aoc_common::{Grid, GridView};
///
/// let grid = Grid::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();
/// assert_eq!(grid.diagonal(0).unwrap(), vec![1, 5, 9]);
/// assert_eq!(grid.anti_diagonal(0).unwrap(), vec![3, 5, 7]);
/// assert_eq!(grid.transposed().row(0).unwrap(), vec![1, 4, 7]);
/// assert_eq!(grid.get(3, 0), None);
/// ```
pub trait GridView<T> {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// The cell at `(x, y)`, or `None` outside the grid.
    fn get(&self, x: usize, y: usize) -> Option<&T>;

    /// The cell at `point`, or `None` outside the grid (negative coordinates included).
    fn get_at(&self, point: Point) -> Option<&T> {
        let (x, y) = point.to_grid_index()?;
        self.get(x, y)
    }

    fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }

    fn contains(&self, point: Point) -> bool {
        point
            .to_grid_index()
            .is_some_and(|(x, y)| self.in_bounds(x, y))
    }

    /// The cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] outside the grid.
    fn try_at(&self, x: usize, y: usize) -> Result<&T, GridError> {
        let point = Point::saturating_from_grid_index(x, y);
        self.get(x, y).ok_or(GridError::OutOfBounds {
            x: point.x,
            y: point.y,
            width: self.width(),
            height: self.height(),
        })
    }

    /// The cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    fn at(&self, x: usize, y: usize) -> &T {
        match self.try_at(x, y) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }

    /// The row-major progression of every coordinate in the view.
    fn points(&self) -> PointProgression {
        PointProgression::new(self.width(), self.height())
    }

    fn bounds(&self) -> Rectangle {
        Rectangle::from_size(self.width(), self.height())
    }

    /// Iterates `(x, y, &cell)` in row-major order: `y` outer, `x` inner.
    fn iter(&self) -> Cells<'_, T, Self> {
        Cells {
            view: self,
            points: self.points().iter(),
            _marker: PhantomData,
        }
    }

    /// Copy of row `y`.
    fn row(&self, y: usize) -> Result<Vec<T>, GridError>
    where
        T: Clone,
    {
        if y >= self.height() {
            return Err(GridError::RowOutOfBounds {
                row: y,
                height: self.height(),
            });
        }
        Ok((0..self.width()).map(|x| self.at(x, y).clone()).collect())
    }

    /// Copy of column `x`.
    fn column(&self, x: usize) -> Result<Vec<T>, GridError>
    where
        T: Clone,
    {
        if x >= self.width() {
            return Err(GridError::ColumnOutOfBounds {
                column: x,
                width: self.width(),
            });
        }
        Ok((0..self.height()).map(|y| self.at(x, y).clone()).collect())
    }

    /// Borrowing iterator over the rows, each itself an iterator over cells.
    fn rows(&self) -> Lines<'_, T, Self> {
        Lines::new(self, Axis::Row)
    }

    /// Borrowing iterator over the columns, each itself an iterator over cells.
    fn columns(&self) -> Lines<'_, T, Self> {
        Lines::new(self, Axis::Column)
    }

    /// Copy of the `width x height` region whose top-left cell is `(x, y)`.
    fn sub_grid(&self, x: usize, y: usize, width: usize, height: usize) -> Result<Grid<T>, GridError>
    where
        T: Clone,
    {
        let fits_x = x.checked_add(width).is_some_and(|end| end <= self.width());
        let fits_y = y.checked_add(height).is_some_and(|end| end <= self.height());
        if !fits_x || !fits_y {
            return Err(GridError::RegionOutOfBounds {
                x,
                y,
                region_width: width,
                region_height: height,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(Grid::from_fn(width, height, |dx, dy| {
            self.at(x + dx, y + dy).clone()
        }))
    }

    /// Copy of a top-left to bottom-right diagonal.
    ///
    /// Offset `0` starts at `(0, 0)`. A positive offset `k` starts at `(k, 0)`
    /// (above the main diagonal), a negative one at `(0, -k)` (below it).
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DiagonalOutOfBounds`] unless `offset < width` and
    /// `-offset < height`.
    fn diagonal(&self, offset: i64) -> Result<Vec<T>, GridError>
    where
        T: Clone,
    {
        let (width, height) = (self.width(), self.height());
        let out_of_bounds = GridError::DiagonalOutOfBounds {
            offset,
            width,
            height,
        };
        let shift = usize::try_from(offset.unsigned_abs()).map_err(|_| out_of_bounds.clone())?;
        let (start, len) = if offset >= 0 {
            if shift >= width {
                return Err(out_of_bounds);
            }
            (shift, (width - shift).min(height))
        } else {
            if shift >= height {
                return Err(out_of_bounds);
            }
            (shift * width, width.min(height - shift))
        };

        Ok(self
            .points()
            .step(width + 1)
            .starting_at(start)
            .into_iter()
            .take(len)
            .map(|p| self.at(p.x as usize, p.y as usize).clone())
            .collect())
    }

    /// Copy of a top-right to bottom-left diagonal.
    ///
    /// Offsets are interpreted on the horizontally mirrored grid, so a
    /// positive offset moves the start leftwards along the top row.
    fn anti_diagonal(&self, offset: i64) -> Result<Vec<T>, GridError>
    where
        T: Clone,
    {
        self.flipped_horizontal().diagonal(offset)
    }

    /// Both corner-to-corner diagonals: `(top-left to bottom-right, top-right to bottom-left)`.
    fn primary_diagonals(&self) -> Result<(Vec<T>, Vec<T>), GridError>
    where
        T: Clone,
    {
        Ok((self.diagonal(0)?, self.anti_diagonal(0)?))
    }

    /// Zero-copy view with the axes swapped.
    fn transposed(&self) -> Transposed<&Self> {
        Transposed::new(self)
    }

    /// Zero-copy view with the column order reversed.
    fn flipped_horizontal(&self) -> Flipped<&Self> {
        Flipped::new(self, FlipAxis::Horizontal)
    }

    /// Zero-copy view with the row order reversed.
    fn flipped_vertical(&self) -> Flipped<&Self> {
        Flipped::new(self, FlipAxis::Vertical)
    }

    /// Materializes the view into an owned grid.
    fn to_grid(&self) -> Grid<T>
    where
        T: Clone,
    {
        Grid::from_fn(self.width(), self.height(), |x, y| self.at(x, y).clone())
    }

    /// Same shape and same cells in row-major order.
    fn content_eq<V>(&self, other: &V) -> bool
    where
        V: GridView<T> + ?Sized,
        T: PartialEq,
    {
        self.width() == other.width()
            && self.height() == other.height()
            && self
                .iter()
                .zip(other.iter())
                .all(|((_, _, a), (_, _, b))| a == b)
    }

    /// In-bounds orthogonal neighbours of `point`, in `UP, DOWN, LEFT, RIGHT` order.
    fn neighbours<'a>(&'a self, point: Point) -> impl Iterator<Item = (Point, &'a T)>
    where
        T: 'a,
    {
        point
            .neighbours()
            .into_iter()
            .filter_map(move |p| self.get_at(p).map(|value| (p, value)))
    }

    /// First point in row-major order whose cell satisfies `predicate`.
    fn position<P>(&self, predicate: P) -> Option<Point>
    where
        P: FnMut(&T) -> bool,
    {
        self.positions(predicate).next()
    }

    /// Every point whose cell satisfies `predicate`, in row-major order.
    fn positions<'a, P>(&'a self, mut predicate: P) -> impl Iterator<Item = Point>
    where
        T: 'a,
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .filter(move |&(_, _, value)| predicate(value))
            .map(|(x, y, _)| Point::saturating_from_grid_index(x, y))
    }
}

/// Write access on top of [`GridView`].
pub trait GridViewMut<T>: GridView<T> {
    /// The cell at `(x, y)`, or `None` outside the grid.
    fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T>;

    fn get_mut_at(&mut self, point: Point) -> Option<&mut T> {
        let (x, y) = point.to_grid_index()?;
        self.get_mut(x, y)
    }

    /// Replaces the cell at `(x, y)` and returns the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] outside the grid.
    fn set(&mut self, x: usize, y: usize, value: T) -> Result<T, GridError> {
        let (width, height) = (self.width(), self.height());
        let point = Point::saturating_from_grid_index(x, y);
        match self.get_mut(x, y) {
            Some(cell) => Ok(std::mem::replace(cell, value)),
            None => Err(GridError::OutOfBounds {
                x: point.x,
                y: point.y,
                width,
                height,
            }),
        }
    }

    /// Replaces the cell at `point` and returns the previous value.
    fn set_at(&mut self, point: Point, value: T) -> Result<T, GridError> {
        let (width, height) = (self.width(), self.height());
        match self.get_mut_at(point) {
            Some(cell) => Ok(std::mem::replace(cell, value)),
            None => Err(GridError::OutOfBounds {
                x: point.x,
                y: point.y,
                width,
                height,
            }),
        }
    }

    /// Exchanges the cells at `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] for the first point outside the
    /// grid; the grid is unchanged in that case.
    fn swap(&mut self, a: Point, b: Point) -> Result<(), GridError>
    where
        T: Clone,
    {
        let (width, height) = (self.width(), self.height());
        let outside = |p: Point| GridError::OutOfBounds {
            x: p.x,
            y: p.y,
            width,
            height,
        };
        let first = self.get_at(a).ok_or_else(|| outside(a))?.clone();
        if !self.contains(b) {
            return Err(outside(b));
        }
        let second = self.set_at(b, first)?;
        self.set_at(a, second)?;
        Ok(())
    }

    /// Overwrites every cell with a clone of `value`.
    fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for p in self.points() {
            if let Some(cell) = self.get_mut(p.x as usize, p.y as usize) {
                *cell = value.clone();
            }
        }
    }

    /// Zero-copy view with the axes swapped; writes land in `self`.
    fn transposed_mut(&mut self) -> Transposed<&mut Self> {
        Transposed::new(self)
    }

    fn flipped_horizontal_mut(&mut self) -> Flipped<&mut Self> {
        Flipped::new(self, FlipAxis::Horizontal)
    }

    fn flipped_vertical_mut(&mut self) -> Flipped<&mut Self> {
        Flipped::new(self, FlipAxis::Vertical)
    }
}

impl<T, V: GridView<T> + ?Sized> GridView<T> for &V {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn get(&self, x: usize, y: usize) -> Option<&T> {
        (**self).get(x, y)
    }
}

impl<T, V: GridView<T> + ?Sized> GridView<T> for &mut V {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn get(&self, x: usize, y: usize) -> Option<&T> {
        (**self).get(x, y)
    }
}

impl<T, V: GridViewMut<T> + ?Sized> GridViewMut<T> for &mut V {
    fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        (**self).get_mut(x, y)
    }
}

/// Row-major iterator over `(x, y, &cell)`, created by [`GridView::iter`].
pub struct Cells<'a, T, V: ?Sized> {
    view: &'a V,
    points: PointIter,
    _marker: PhantomData<&'a T>,
}

impl<'a, T: 'a, V: GridView<T> + ?Sized> Iterator for Cells<'a, T, V> {
    type Item = (usize, usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let p = self.points.next()?;
        let (x, y) = (p.x as usize, p.y as usize);
        self.view.get(x, y).map(|value| (x, y, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.points.size_hint()
    }
}

impl<'a, T: 'a, V: GridView<T> + ?Sized> FusedIterator for Cells<'a, T, V> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    Row,
    Column,
}

/// Iterator over the rows or columns of a view, created by
/// [`GridView::rows`] and [`GridView::columns`].
pub struct Lines<'a, T, V: ?Sized> {
    view: &'a V,
    axis: Axis,
    next: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T, V: GridView<T> + ?Sized> Lines<'a, T, V> {
    fn new(view: &'a V, axis: Axis) -> Self {
        Self {
            view,
            axis,
            next: 0,
            _marker: PhantomData,
        }
    }

    fn count_lines(&self) -> usize {
        match self.axis {
            Axis::Row => self.view.height(),
            Axis::Column => self.view.width(),
        }
    }
}

impl<'a, T: 'a, V: GridView<T> + ?Sized> Iterator for Lines<'a, T, V> {
    type Item = Line<'a, T, V>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count_lines() {
            return None;
        }
        let fixed = self.next;
        self.next += 1;
        let len = match self.axis {
            Axis::Row => self.view.width(),
            Axis::Column => self.view.height(),
        };
        Some(Line {
            view: self.view,
            axis: self.axis,
            fixed,
            next: 0,
            len,
            _marker: PhantomData,
        })
    }
}

/// The cells of a single row or column.
pub struct Line<'a, T, V: ?Sized> {
    view: &'a V,
    axis: Axis,
    fixed: usize,
    next: usize,
    len: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T: 'a, V: GridView<T> + ?Sized> Iterator for Line<'a, T, V> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.next >= self.len {
            return None;
        }
        let i = self.next;
        self.next += 1;
        match self.axis {
            Axis::Row => self.view.get(i, self.fixed),
            Axis::Column => self.view.get(self.fixed, i),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl<'a, T: 'a, V: GridView<T> + ?Sized> ExactSizeIterator for Line<'a, T, V> {}
