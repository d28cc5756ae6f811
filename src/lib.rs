//! Console exercises sharing one core crate.
//!
//! This facade crate re-exports the exercise crates for convenient access.
//!
//! - [`core`] — Type aliases, constants, input scanning, logging
//! - [`runs`] — Run-taking game solver
//! - [`piecewise`] — Piecewise function table
//! - [`series`] — Exact series sums
//! - `cli` — Command-line entry points (behind the `cli` feature)

pub use lab3_core       as core;
pub use lab3_piecewise  as piecewise;
pub use lab3_runs       as runs;
pub use lab3_series     as series;

#[cfg(feature = "cli")]
pub mod cli;
