//! Owned permutations of arbitrary elements.

use std::iter::FusedIterator;

use super::index::IndexPermutations;

/// Every ordering of a set of elements, as freshly allocated vectors.
///
/// Orderings follow the same adjacent-swap sequence as [`IndexPermutations`],
/// starting with the elements in their given order. Elements are compared by
/// position, so duplicates produce repeated orderings.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    elements: Vec<T>,
    order: IndexPermutations,
}

impl<T: Clone> Permutations<T> {
    pub fn new(elements: impl IntoIterator<Item = T>) -> Self {
        let elements: Vec<T> = elements.into_iter().collect();
        let order = IndexPermutations::new(elements.len());
        Self { elements, order }
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        let order = self.order.next_permutation()?;
        Some(order.iter().map(|&i| self.elements[i].clone()).collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.order.remaining() {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl<T: Clone> FusedIterator for Permutations<T> {}
