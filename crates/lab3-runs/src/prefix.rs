use super::*;
use lab3_core::*;

/// Prefix sums over a [`Sequence`].
///
/// Holds `n + 1` accumulators with `P[0] = 0` and `P[i + 1] = P[i] + s[i]`,
/// so the sum of any run is a single subtraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix(Vec<Score>);

impl Prefix {
    /// Number of elements in the underlying sequence.
    pub fn n(&self) -> usize {
        self.0.len() - 1
    }
    /// Accumulated sum of the first `i` elements.
    pub fn at(&self, i: usize) -> Score {
        self.0[i]
    }
    /// Sum of the `k` elements taken from state `i`.
    pub fn sum(&self, i: usize, k: Length) -> Score {
        debug_assert!(i + k <= self.n());
        self.0[i + k] - self.0[i]
    }
}

impl From<&Sequence> for Prefix {
    fn from(sequence: &Sequence) -> Self {
        let mut sums = Vec::with_capacity(sequence.len() + 1);
        sums.push(0);
        sequence.values().iter().fold(0, |acc, &v| {
            let acc = acc + v as Score;
            sums.push(acc);
            acc
        });
        Self(sums)
    }
}
