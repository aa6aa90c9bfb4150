use std::fmt;

use tracing::{debug, warn};

use crate::error::SolveError;

/// Answer reported for day 1 part 2 when the basement is never reached.
pub const NO_BASEMENT: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Day {
    One,
    Two,
}

impl TryFrom<u8> for Day {
    type Error = SolveError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Day::One),
            2 => Ok(Day::Two),
            other => Err(SolveError::InvalidDay(other)),
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Day::One => write!(f, "day 1"),
            Day::Two => write!(f, "day 2"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    One,
    Two,
}

impl TryFrom<u8> for Part {
    type Error = SolveError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Part::One),
            2 => Ok(Part::Two),
            other => Err(SolveError::InvalidPart(other)),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::One => write!(f, "part 1"),
            Part::Two => write!(f, "part 2"),
        }
    }
}

/// One calculation per (day, part) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solver {
    /// Day 1 part 1: the floor the instructions end on.
    Floor,
    /// Day 1 part 2: position of the first step into the basement.
    Basement,
    /// Day 2 part 1: total wrapping paper.
    WrappingPaper,
    /// Day 2 part 2: total ribbon.
    Ribbon,
}

impl Solver {
    pub fn select(day: Day, part: Part) -> Self {
        match (day, part) {
            (Day::One, Part::One) => Solver::Floor,
            (Day::One, Part::Two) => Solver::Basement,
            (Day::Two, Part::One) => Solver::WrappingPaper,
            (Day::Two, Part::Two) => Solver::Ribbon,
        }
    }

    pub fn day(&self) -> Day {
        match self {
            Solver::Floor | Solver::Basement => Day::One,
            Solver::WrappingPaper | Solver::Ribbon => Day::Two,
        }
    }

    pub fn part(&self) -> Part {
        match self {
            Solver::Floor | Solver::WrappingPaper => Part::One,
            Solver::Basement | Solver::Ribbon => Part::Two,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Solver::Floor => "final floor",
            Solver::Basement => "first basement position",
            Solver::WrappingPaper => "wrapping paper",
            Solver::Ribbon => "ribbon",
        }
    }

    /// Runs the calculation on the raw puzzle text.
    ///
    /// Input that is empty or only whitespace is `EmptyInput`, for day 1 as
    /// well as day 2. Every call parses `input` from scratch, so repeated
    /// calls on the same input always give the same answer.
    pub fn solve(&self, input: &str) -> Result<i64, SolveError> {
        if input.trim().is_empty() {
            return Err(SolveError::EmptyInput);
        }
        debug!(solver = %self, bytes = input.len(), "solving");
        let answer = match self {
            Solver::Floor => {
                warn_on_ignored_characters(input);
                day1::solve_puzzle_part1(&day1::parse_input(input))
            }
            Solver::Basement => {
                warn_on_ignored_characters(input);
                day1::solve_puzzle_part2(&day1::parse_input(input))
                    .map_or(NO_BASEMENT, |pos| pos as i64)
            }
            Solver::WrappingPaper => {
                let boxes = day2::parse_input(input)?;
                self.to_signed(day2::solve_puzzle_part1(&boxes))?
            }
            Solver::Ribbon => {
                let boxes = day2::parse_input(input)?;
                self.to_signed(day2::solve_puzzle_part2(&boxes))?
            }
        };
        debug!(solver = %self, answer, "solved");
        Ok(answer)
    }

    /// `None` means the total already overflowed `u64`.
    fn to_signed(&self, total: Option<u64>) -> Result<i64, SolveError> {
        total
            .and_then(|total| i64::try_from(total).ok())
            .ok_or(SolveError::Overflow(*self))
    }
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.day(), self.part(), self.describe())
    }
}

fn warn_on_ignored_characters(input: &str) {
    let ignored = input
        .chars()
        .filter(|c| !c.is_whitespace() && day1::Step::from_char(*c).is_none())
        .count();
    if ignored > 0 {
        warn!(ignored, "input contains characters that are not steps");
    }
}

/// Validates raw day and part selectors and picks the matching solver.
pub fn solver_for(day: u8, part: u8) -> Result<Solver, SolveError> {
    let day = Day::try_from(day)?;
    let part = Part::try_from(part)?;
    Ok(Solver::select(day, part))
}

/// Selects and runs a solver in one go.
pub fn solve(day: u8, part: u8, input: &str) -> Result<i64, SolveError> {
    solver_for(day, part)?.solve(input)
}

/// Runs both parts of a day, part 1 first.
pub fn solve_both(day: u8, input: &str) -> Result<(i64, i64), SolveError> {
    let day = Day::try_from(day)?;
    let part1 = Solver::select(day, Part::One).solve(input)?;
    let part2 = Solver::select(day, Part::Two).solve(input)?;
    Ok((part1, part2))
}
