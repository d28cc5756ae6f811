//! Run-taking game solver.
//!
//! Two players alternately take a run of 1..=m elements from the front of a
//! sequence. Each player scores the sum of what they take. The solver decides
//! whether the first player can finish strictly ahead under optimal play.
//!
//! # Module Structure
//!
//! - `sequence` — Immutable input sequence
//! - `prefix` — Prefix sums for O(1) run sums
//! - `advantage` — Backward DP table of optimal differentials
//! - `verdict` — Binary answer derived from the table
//! - `solver` — Owns the above and validates input
//! - `line` — Principal variation reconstructed from the table
//! - `game` — Explicit state machine (`RunGame`, `Turn`, `Run`)
//! - `minimax` — Exhaustive reference search over `RunGame`

mod advantage;
mod game;
mod line;
mod minimax;
mod prefix;
mod run;
mod sequence;
mod solver;
mod turn;
mod verdict;

pub use advantage::*;
pub use game::*;
pub use line::*;
pub use minimax::*;
pub use prefix::*;
pub use run::*;
pub use sequence::*;
pub use solver::*;
pub use turn::*;
pub use verdict::*;
