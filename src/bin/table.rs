//! Piecewise Table Binary
//!
//! Prints the fixed piecewise function over [-4, 8] in steps of 0.5.

fn main() -> anyhow::Result<()> {
    lab3::cli::Table::run()
}
