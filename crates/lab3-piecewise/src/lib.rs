//! Piecewise function tabulated over a fixed interval.
//!
//! The interval, step and every branch are fixed. Abscissas are carried
//! as integer tenths so the grid lands exactly on each half unit.

mod abscissa;
mod piece;
mod table;

pub use abscissa::*;
pub use piece::*;
pub use table::*;

use lab3_core::Tenths;

/// Renders tenths with exactly one decimal place.
pub fn decimal(tenths: Tenths) -> String {
    let sign = if tenths < 0 { "-" } else { "" };
    format!("{}{}.{}", sign, tenths.abs() / 10, tenths.abs() % 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimals() {
        assert!(decimal(0) == "0.0");
        assert!(decimal(-5) == "-0.5");
        assert!(decimal(-40) == "-4.0");
        assert!(decimal(75) == "7.5");
    }
}
