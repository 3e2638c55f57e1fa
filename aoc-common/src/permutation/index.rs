//! Steinhaus-Johnson-Trotter enumeration of index permutations.

/// Direction an element is currently drifting in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Drift {
    Left,
    Right,
    Stopped,
}

/// All permutations of `0..n`, one adjacent swap apart.
///
/// The enumeration starts from the identity. Each element carries a drift
/// direction; the first element starts stopped and every other one drifts
/// left. A step moves the largest drifting element one place, stops it at
/// the edge or in front of a larger element, and points every larger element
/// back towards it.
///
/// [`next_permutation`](Self::next_permutation) returns a view of the internal
/// buffer, which the next step overwrites. Copy it (`to_vec()`) to keep it.
/// Exactly `n!` permutations are produced; `n == 0` yields one empty permutation.
#[derive(Debug, Clone)]
pub struct IndexPermutations {
    indices: Vec<usize>,
    drifts: Vec<Drift>,
    started: bool,
    next_mobile: Option<usize>,
    emitted: usize,
}

impl IndexPermutations {
    pub fn new(n: usize) -> Self {
        let drifts = (0..n)
            .map(|i| if i == 0 { Drift::Stopped } else { Drift::Left })
            .collect();
        Self {
            indices: (0..n).collect(),
            drifts,
            started: false,
            next_mobile: None,
            emitted: 0,
        }
    }

    /// Number of indices being permuted.
    pub fn size(&self) -> usize {
        self.indices.len()
    }

    /// Total number of permutations, `None` if `n!` overflows `usize`.
    pub fn len(&self) -> Option<usize> {
        (1..=self.size()).try_fold(1usize, |total, k| total.checked_mul(k))
    }

    /// Permutations still to come, `None` if `n!` overflows `usize`.
    pub fn remaining(&self) -> Option<usize> {
        self.len().map(|total| total - self.emitted)
    }

    /// Whether another call to `next_permutation` yields a permutation. `O(1)`.
    pub fn has_next(&self) -> bool {
        !self.started || self.next_mobile.is_some()
    }

    /// Advances to the next permutation and returns it, or `None` once all
    /// `n!` permutations have been produced.
    pub fn next_permutation(&mut self) -> Option<&[usize]> {
        if self.started {
            let position = self.next_mobile?;
            self.advance(position);
        } else {
            self.started = true;
        }
        self.next_mobile = self.largest_mobile();
        self.emitted += 1;
        Some(self.indices.as_slice())
    }

    fn largest_mobile(&self) -> Option<usize> {
        self.drifts
            .iter()
            .enumerate()
            .filter(|(_, drift)| **drift != Drift::Stopped)
            .max_by_key(|(position, _)| self.indices[*position])
            .map(|(position, _)| position)
    }

    fn advance(&mut self, position: usize) {
        let value = self.indices[position];
        let drift = self.drifts[position];
        let target = match drift {
            Drift::Left => position - 1,
            Drift::Right => position + 1,
            Drift::Stopped => unreachable!("stopped elements are never selected"),
        };
        self.indices.swap(position, target);
        self.drifts.swap(position, target);

        let beyond = match drift {
            Drift::Left => target.checked_sub(1),
            _ => Some(target + 1).filter(|i| *i < self.indices.len()),
        };
        if beyond.is_none_or(|i| self.indices[i] > value) {
            self.drifts[target] = Drift::Stopped;
        }

        for (i, (larger, drift)) in self.indices.iter().zip(&mut self.drifts).enumerate() {
            if *larger > value {
                *drift = if i < target { Drift::Right } else { Drift::Left };
            }
        }
    }
}
