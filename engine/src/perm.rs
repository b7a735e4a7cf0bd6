//! Permutations of the 6-element ground set.

use std::fmt;

use serde::Serialize;

/// A bijection on {1..6}, stored as the image of (1, 2, 3, 4, 5, 6).
///
/// `Permutation([2, 1, 3, 4, 5, 6])` swaps 1 and 2 and fixes the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Permutation([u8; 6]);

impl Permutation {
    /// The identity permutation.
    #[must_use]
    pub fn identity() -> Permutation {
        Permutation([1, 2, 3, 4, 5, 6])
    }

    /// Builds a permutation from an image tuple, or `None` if the values are
    /// not a bijection on {1..6}.
    #[must_use]
    pub fn new(values: [u8; 6]) -> Option<Permutation> {
        let mut seen = [false; 7];
        for &v in &values {
            if !(1..=6).contains(&v) || seen[v as usize] {
                return None;
            }
            seen[v as usize] = true;
        }
        Some(Permutation(values))
    }

    /// Maps the element `e` (1..6) to its image.
    #[must_use]
    pub fn apply(self, e: u8) -> u8 {
        debug_assert!((1..=6).contains(&e));
        self.0[usize::from(e) - 1]
    }

    /// Returns the composition `self ∘ other`: first `other`, then `self`.
    #[must_use]
    pub fn compose(self, other: Permutation) -> Permutation {
        let mut v = [0u8; 6];
        for (i, slot) in v.iter_mut().enumerate() {
            *slot = self.apply(other.0[i]);
        }
        Permutation(v)
    }

    /// The image tuple.
    #[must_use]
    pub fn values(self) -> [u8; 6] {
        self.0
    }

    /// All 720 permutations in lexicographic order over their image tuples,
    /// starting at the identity and ending at (6, 5, 4, 3, 2, 1).
    ///
    /// The order is the enumeration contract: permutation index i must be
    /// identical across runs and across ports of this generator.
    #[must_use]
    pub fn all() -> Vec<Permutation> {
        let mut out = Vec::with_capacity(720);
        let mut v = [1u8, 2, 3, 4, 5, 6];
        loop {
            out.push(Permutation(v));
            // Standard next-permutation step: find the longest descending
            // suffix, swap its pivot with its successor, reverse the suffix.
            let mut i = v.len() - 1;
            while i > 0 && v[i - 1] >= v[i] {
                i -= 1;
            }
            if i == 0 {
                break;
            }
            let mut j = v.len() - 1;
            while v[j] <= v[i - 1] {
                j -= 1;
            }
            v.swap(i - 1, j);
            v[i..].reverse();
        }
        out
    }
}

impl fmt::Display for Permutation {
    /// Formats as a tuple, e.g. `(1, 2, 3, 4, 5, 6)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {}, {}, {})",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}
