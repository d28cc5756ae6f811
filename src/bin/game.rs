//! Run-Taking Game Binary
//!
//! Reads n, m, then n integers; prints 1 if the first player can finish
//! strictly ahead under optimal play, else 0.
//!
//! Options: --explain, --verify, --log

fn main() -> anyhow::Result<()> {
    lab3::cli::Game::run()
}
