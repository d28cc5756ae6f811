//! Exact sums of `k^a / b^k` over `k >= 1`.
//!
//! For `b > 1` the series converges to a rational number given by the
//! Eulerian numbers of order `a`:
//!
//! ```text
//! Σ k^a / b^k = Σ_j A(a, j) · b^(a - j) / (b - 1)^(a + 1)
//! ```
//!
//! `a = 1` gives `b / (b - 1)^2` and `a = 2` gives `b (b + 1) / (b - 1)^3`.

mod eulerian;
mod fraction;
mod series;

pub use eulerian::*;
pub use fraction::*;
pub use series::*;
