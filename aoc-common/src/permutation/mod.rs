//! Permutation enumeration
//!
//! - [`IndexPermutations`]: every permutation of `0..n` in Steinhaus-Johnson-Trotter
//!   order (Even's speedup), reusing one buffer
//! - [`Permutations`]: owned permutations of arbitrary elements, driven by
//!   `IndexPermutations`
//!
//! Consecutive permutations differ by a single swap of adjacent positions.
//!
//! # Example
//!
//! ```rust
//! use aoc_common::permutation::{IndexPermutations, Permutations};
//!
//! let mut orders = IndexPermutations::new(3);
//! let mut seen = Vec::new();
//! while let Some(order) = orders.next_permutation() {
//!     seen.push(order.to_vec());
//! }
//! assert_eq!(seen.len(), 6);
//! assert_eq!(seen[0], vec![0, 1, 2]);
//! assert_eq!(seen[1], vec![0, 2, 1]);
//!
//! let routes: Vec<String> = Permutations::new(vec!['a', 'b'])
//!     .map(|route| route.into_iter().collect())
//!     .collect();
//! assert_eq!(routes, vec!["ab", "ba"]);
//! ```

mod elements;
mod index;

pub use elements::Permutations;
pub use index::IndexPermutations;

#[cfg(test)]
mod tests;
