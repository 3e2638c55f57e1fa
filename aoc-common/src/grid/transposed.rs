//! Zero-copy transposition.

use super::view::{GridView, GridViewMut};

/// A view of `V` with the axes swapped: `(x, y)` reads and writes `(y, x)`.
///
/// Created by [`GridView::transposed`] and [`GridViewMut::transposed_mut`].
/// Construction is `O(1)`; the view borrows its backing grid and never copies
/// it, so writes through a mutable view are visible in the backing grid.
///
/// # Example
///
/// ```rust
/// use aoc_common::{Grid, GridView, GridViewMut};
///
/// let mut grid = Grid::from_rows([[1, 2, 3], [4, 5, 6]]).unwrap();
/// {
///     let mut view = grid.transposed_mut();
///     assert_eq!((view.width(), view.height()), (2, 3));
///     view.set(1, 0, 20).unwrap();
/// }
/// assert_eq!(grid.get(0, 1), Some(&20));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Transposed<V> {
    backing: V,
}

impl<V> Transposed<V> {
    pub(crate) fn new(backing: V) -> Self {
        Self { backing }
    }

    /// The view this transposition forwards to.
    pub fn backing(&self) -> &V {
        &self.backing
    }

    pub fn into_backing(self) -> V {
        self.backing
    }
}

impl<T, V: GridView<T>> GridView<T> for Transposed<V> {
    fn width(&self) -> usize {
        self.backing.height()
    }

    fn height(&self) -> usize {
        self.backing.width()
    }

    fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.backing.get(y, x)
    }
}

impl<T, V: GridViewMut<T>> GridViewMut<T> for Transposed<V> {
    fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        self.backing.get_mut(y, x)
    }
}
