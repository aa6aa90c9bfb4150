/// A single instruction: go up one floor or down one floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Step {
    Up,
    Down,
}

impl Step {
    pub const UP: char = '(';
    pub const DOWN: char = ')';

    /// Any character other than the two step symbols is not a step.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            Self::UP => Some(Step::Up),
            Self::DOWN => Some(Step::Down),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Step::Up => Self::UP,
            Step::Down => Self::DOWN,
        }
    }

    pub fn delta(self) -> i64 {
        match self {
            Step::Up => 1,
            Step::Down => -1,
        }
    }
}

/// Turns every character of the puzzle into a floor change.
///
/// Unknown characters become `0` rather than being dropped so that
/// positions still line up with the input for part 2.
pub fn parse_input(puzzle: &str) -> Vec<i64> {
    puzzle
        .chars()
        .map(|c| Step::from_char(c).map_or(0, Step::delta))
        .collect()
}

/// The floor you end up on.
pub fn solve_puzzle_part1(deltas: &[i64]) -> i64 {
    deltas.iter().sum()
}

/// The 1-based position of the first step that takes you below floor zero,
/// or `None` if you never reach the basement.
pub fn solve_puzzle_part2(deltas: &[i64]) -> Option<usize> {
    let mut floor = 0;
    for (idx, delta) in deltas.iter().enumerate() {
        floor += delta;
        if floor < 0 {
            return Some(idx + 1);
        }
    }
    None
}
