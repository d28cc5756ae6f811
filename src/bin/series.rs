//! Series Binary
//!
//! Reads a and b; prints the exact sum of k^a / b^k as p/q, or infinity.

fn main() -> anyhow::Result<()> {
    lab3::cli::Series::run()
}
