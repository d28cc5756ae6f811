use super::*;
use lab3_core::*;

/// Backward DP table of optimal differentials.
///
/// Entry `i` is the best the player to move at state `i` can achieve,
/// measured as their future takings minus the opponent's. The terminal entry
/// `n` is zero. The buffer is sized once and filled from the back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advantage(Vec<Score>);

impl Advantage {
    /// Fills the table for runs of at most `m` elements.
    ///
    /// Taking `k` elements from state `i` earns `sum(i, k)` and hands the
    /// opponent state `i + k`, worth `D[i + k]` to them.
    pub fn solve(prefix: &Prefix, m: Length) -> Self {
        debug_assert!(m >= 1);
        let n = prefix.n();
        let mut table = vec![0; n + 1];
        for i in (0..n).rev() {
            table[i] = (1..=m.min(n - i))
                .map(|k| prefix.sum(i, k) - table[i + k])
                .fold(Score::MIN, Score::max);
        }
        Self(table)
    }
    /// Differential for the mover at state `i`.
    pub fn at(&self, i: usize) -> Score {
        self.0[i]
    }
    /// Differential for the first player from the opening state.
    pub fn root(&self) -> Score {
        self.0[0]
    }
    /// Number of non-terminal states.
    pub fn n(&self) -> usize {
        self.0.len() - 1
    }
}
