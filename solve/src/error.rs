use parse_dims::FormatError;

use crate::dispatch::Solver;

#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    #[error("unsupported day {0}, choose day 1 or 2")]
    InvalidDay(u8),
    #[error("unsupported part {0}, choose part 1 or 2")]
    InvalidPart(u8),
    #[error("no input, enter the puzzle input you want a solution for")]
    EmptyInput,
    #[error("malformed puzzle input")]
    Format(#[from] FormatError),
    #[error("answer for {0} does not fit in a signed 64-bit integer")]
    Overflow(Solver),
}

impl SolveError {
    /// Whether the error comes from picking a day or part that doesn't exist.
    pub fn is_selection(&self) -> bool {
        matches!(self, SolveError::InvalidDay(_) | SolveError::InvalidPart(_))
    }
}
