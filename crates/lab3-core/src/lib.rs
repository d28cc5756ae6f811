//! Core type aliases, traits, and constants for lab3.
//!
//! This crate provides the foundational types and configuration parameters
//! shared by the three exercise crates and their binaries.
#![allow(dead_code)]

mod scan;

pub use scan::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// A single element of the game sequence as read from input.
pub type Value = i32;
/// Prefix sums and score differentials. Wide enough for any admissible sequence.
pub type Score = i64;
/// Number of elements taken in one turn.
pub type Length = usize;
/// Fixed-point abscissa, in tenths of a unit.
pub type Tenths = i32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUN-TAKING GAME LIMITS
// Values are i32 and sums are i64, so any sequence shorter than 2^32
// cannot overflow a differential. The length cap keeps allocations sane.
// ============================================================================
/// Longest sequence accepted from input.
pub const MAX_SEQUENCE_LENGTH: usize = 1 << 24;
/// Longest sequence the exhaustive minimax reference will search.
pub const MINIMAX_MAX_LENGTH: usize = 16;
/// Length of random sequences drawn by `Arbitrary`.
pub const ARBITRARY_MAX_LENGTH: usize = 8;
/// Largest run length drawn by `Arbitrary`.
pub const ARBITRARY_MAX_RUN: usize = 4;
/// Magnitude bound on random sequence values.
pub const ARBITRARY_MAX_VALUE: Value = 10;

// ============================================================================
// PIECEWISE TABLE
// Interval and step are fixed by the exercise; stored in tenths so the
// abscissa never drifts.
// ============================================================================
/// First abscissa of the table (-4.0).
pub const X_START: Tenths = -40;
/// Last abscissa of the table (8.0).
pub const X_END: Tenths = 80;
/// Distance between consecutive rows (0.5).
pub const X_STEP: Tenths = 5;
/// Cell text for abscissas outside every branch.
pub const UNDEFINED: &str = "не определено";

// ============================================================================
// SERIES
// ============================================================================
/// Largest exponent accepted for k^a / b^k.
pub const MAX_POWER: u32 = 24;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr.
/// Stdout carries each program's answer, so every record goes to stderr.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    if term.is_err() {
        log::warn!("logger already initialized");
    }
}
