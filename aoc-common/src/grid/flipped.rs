//! Zero-copy mirroring.

use super::view::{GridView, GridViewMut};

/// Which coordinate a [`Flipped`] view mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlipAxis {
    /// Reverses the column order: `x` reads `width - 1 - x`.
    Horizontal,
    /// Reverses the row order: `y` reads `height - 1 - y`.
    Vertical,
}

/// A mirrored view of `V`, created by [`GridView::flipped_horizontal`],
/// [`GridView::flipped_vertical`] and their `_mut` counterparts.
#[derive(Debug, Clone, Copy)]
pub struct Flipped<V> {
    backing: V,
    axis: FlipAxis,
}

impl<V> Flipped<V> {
    pub(crate) fn new(backing: V, axis: FlipAxis) -> Self {
        Self { backing, axis }
    }

    pub fn axis(&self) -> FlipAxis {
        self.axis
    }

    pub fn backing(&self) -> &V {
        &self.backing
    }

    pub fn into_backing(self) -> V {
        self.backing
    }

    fn source<T>(&self, x: usize, y: usize) -> Option<(usize, usize)>
    where
        V: GridView<T>,
    {
        if !self.backing.in_bounds(x, y) {
            return None;
        }
        Some(match self.axis {
            FlipAxis::Horizontal => (self.backing.width() - 1 - x, y),
            FlipAxis::Vertical => (x, self.backing.height() - 1 - y),
        })
    }
}

impl<T, V: GridView<T>> GridView<T> for Flipped<V> {
    fn width(&self) -> usize {
        self.backing.width()
    }

    fn height(&self) -> usize {
        self.backing.height()
    }

    fn get(&self, x: usize, y: usize) -> Option<&T> {
        let (x, y) = self.source::<T>(x, y)?;
        self.backing.get(x, y)
    }
}

impl<T, V: GridViewMut<T>> GridViewMut<T> for Flipped<V> {
    fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        let (x, y) = self.source::<T>(x, y)?;
        self.backing.get_mut(x, y)
    }
}
