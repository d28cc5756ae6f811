//! Command-line entry points for the three binaries.
use crate::core::Scanner;
use crate::piecewise::Table as PiecewiseTable;
use crate::runs::Solver;
use crate::series::Series as SeriesSum;
use anyhow::Context;
use clap::Parser;
use std::path::Path;
use std::path::PathBuf;

/// Log level shared by every binary.
#[derive(clap::Args, Debug)]
pub struct Logging {
    #[arg(
        long = "log",
        env = "LAB3_LOG",
        default_value = "warn",
        help = "Log level on stderr (off, error, warn, info, debug, trace)"
    )]
    level: log::LevelFilter,
}

/// Reads the whole of `path`, or stdin when absent.
fn scanner(path: Option<&Path>) -> anyhow::Result<Scanner> {
    match path {
        Some(path) => std::fs::File::open(path)
            .with_context(|| format!("opening {}", path.display()))
            .and_then(Scanner::read),
        None => Scanner::read(std::io::stdin().lock()),
    }
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Decide whether the first player wins the run-taking game",
    long_about = "Reads n, m, then n integers. Players alternately take 1..=m elements \
                  from the front. Prints 1 if the first player can finish strictly ahead \
                  under optimal play, else 0."
)]
pub struct Game {
    #[arg(help = "Input file (defaults to stdin)")]
    path: Option<PathBuf>,
    #[arg(long, help = "Print the optimal line of play on stderr")]
    explain: bool,
    #[arg(long, help = "Cross-check against exhaustive search (small inputs only)")]
    verify: bool,
    #[command(flatten)]
    logging: Logging,
}

impl Game {
    pub fn run() -> anyhow::Result<()> {
        let args = Self::parse();
        lab3_core::log(args.logging.level);
        let ref mut input = scanner(args.path.as_deref())?;
        let solver = Solver::scan(input)?;
        log::info!(
            "{} elements, runs up to {}",
            solver.sequence().len(),
            solver.limit()
        );
        if args.verify {
            solver.verify()?;
        }
        if args.explain {
            eprint!("{}", solver.line());
        }
        println!("{}", solver.verdict());
        Ok(())
    }
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Print the piecewise function table over [-4, 8] in steps of 0.5"
)]
pub struct Table {
    #[command(flatten)]
    logging: Logging,
}

impl Table {
    pub fn run() -> anyhow::Result<()> {
        let args = Self::parse();
        lab3_core::log(args.logging.level);
        let table = PiecewiseTable::default();
        log::info!("{} rows", table.rows().len());
        print!("{}", table);
        Ok(())
    }
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Sum k^a / b^k over k >= 1 exactly",
    long_about = "Reads a, then b. Prints the sum as a reduced fraction p/q, \
                  or `infinity` when b = 1."
)]
pub struct Series {
    #[arg(help = "Input file (defaults to stdin)")]
    path: Option<PathBuf>,
    #[command(flatten)]
    logging: Logging,
}

impl Series {
    pub fn run() -> anyhow::Result<()> {
        let args = Self::parse();
        lab3_core::log(args.logging.level);
        let ref mut input = scanner(args.path.as_deref())?;
        let series = SeriesSum::scan(input)?;
        println!("{}", series.sum()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn commands_are_well_formed() {
        Game::command().debug_assert();
        Table::command().debug_assert();
        Series::command().debug_assert();
    }

    #[test]
    fn game_flags() {
        let game = Game::try_parse_from(["game", "input.txt", "--explain", "--log", "debug"]).unwrap();
        assert!(game.explain);
        assert!(!game.verify);
        assert!(game.path == Some(PathBuf::from("input.txt")));
        assert!(game.logging.level == log::LevelFilter::Debug);
    }

    #[test]
    fn rejects_unknown_level() {
        assert!(Table::try_parse_from(["table", "--log", "loud"]).is_err());
    }

    #[test]
    fn missing_file() {
        assert!(scanner(Some(Path::new("/nonexistent/lab3/input"))).is_err());
    }
}
