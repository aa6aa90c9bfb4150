use std::{fmt, io::Read, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::dispatch::{solve_both, solver_for};
use crate::error::SolveError;

/// Solve day 1 or day 2 of the 2015 puzzles.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The day to solve
    #[arg(short, long, env = "AOC_DAY")]
    pub day: u8,

    /// The part to solve
    #[arg(short, long, env = "AOC_PART", required_unless_present = "both")]
    pub part: Option<u8>,

    /// Solve both parts and print them as `part1,part2`
    #[arg(short, long)]
    pub both: bool,

    /// Puzzle input passed inline instead of through a file
    #[arg(short, long, conflicts_with = "input")]
    pub text: Option<String>,

    /// Puzzle input file, stdin if omitted or `-`
    pub input: Option<PathBuf>,

    /// Print more log output, repeat for even more
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// What the binary prints on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Single(i64),
    Both(i64, i64),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Single(answer) => write!(f, "{answer}"),
            Answer::Both(part1, part2) => write!(f, "{part1},{part2}"),
        }
    }
}

impl Cli {
    /// Collects the puzzle text from `--text`, the input file, or `stdin`.
    pub fn read_input(&self, mut stdin: impl Read) -> anyhow::Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        match &self.input {
            Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read input file {}", path.display())),
            _ => {
                let mut input = String::new();
                stdin
                    .read_to_string(&mut input)
                    .context("failed to read input from stdin")?;
                Ok(input)
            }
        }
    }
}

pub fn run(cli: &Cli, stdin: impl Read) -> anyhow::Result<Answer> {
    let input = cli.read_input(stdin)?;
    if cli.both {
        let (part1, part2) = solve_both(cli.day, &input)?;
        info!(day = cli.day, part1, part2, "solved both parts");
        return Ok(Answer::Both(part1, part2));
    }
    // clap only lets `part` be missing together with `--both`
    let part = cli.part.context("choose the part you want a solution for")?;
    let solver = solver_for(cli.day, part)?;
    let answer = solver.solve(&input)?;
    info!(%solver, answer, "solved");
    Ok(Answer::Single(answer))
}

/// Extra guidance printed after the error for mistakes the user can fix.
pub fn hint(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<SolveError>() {
        Some(err) if err.is_selection() => Some("pass `--day` and `--part` as 1 or 2"),
        Some(SolveError::EmptyInput) => Some("pass a file, `--text`, or pipe the input on stdin"),
        _ => None,
    }
}
