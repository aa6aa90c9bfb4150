use std::{num::ParseIntError, str::FromStr};

/// Separates the three dimensions of a box, e.g. `2x3x4`.
pub const DIMENSIONS_SEPARATOR: char = 'x';

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid box sizes '{line}': expected 3 dimensions, found {found}")]
    Arity { line: String, found: usize },
    #[error("invalid box sizes '{line}': '{component}' is not a positive integer")]
    InvalidInteger {
        line: String,
        component: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid box sizes '{line}': dimensions must be greater than zero")]
    ZeroDimension { line: String },
    #[error("line {line_number}")]
    Line {
        line_number: usize,
        #[source]
        source: Box<FormatError>,
    },
}

impl FormatError {
    /// Attaches the 1-based line number the record was read from.
    pub fn at_line(self, line_number: usize) -> Self {
        FormatError::Line {
            line_number,
            source: Box::new(self),
        }
    }
}

/// The dimensions of a box, sorted so the shortest side always comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxDims {
    shortest: u32,
    middle: u32,
    longest: u32,
}

impl BoxDims {
    /// Builds a box from three sides given in any order.
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        let mut sides = [a, b, c];
        sides.sort_unstable();
        let [shortest, middle, longest] = sides;
        Self {
            shortest,
            middle,
            longest,
        }
    }

    pub fn shortest(&self) -> u32 {
        self.shortest
    }

    pub fn middle(&self) -> u32 {
        self.middle
    }

    pub fn longest(&self) -> u32 {
        self.longest
    }
}

impl FromStr for BoxDims {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_box(s)
    }
}

/// Parses a single `LxWxH` record.
///
/// Empty pieces between separators are dropped and each piece is trimmed
/// before parsing, so `" 2 x 3 x 4 "` is accepted while `"2x3"` is not.
pub fn parse_box(line: &str) -> Result<BoxDims, FormatError> {
    let components = line
        .split(DIMENSIONS_SEPARATOR)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>();
    if components.len() != 3 {
        return Err(FormatError::Arity {
            line: line.to_string(),
            found: components.len(),
        });
    }
    let mut sides = [0u32; 3];
    for (side, component) in sides.iter_mut().zip(components) {
        *side = component
            .parse::<u32>()
            .map_err(|source| FormatError::InvalidInteger {
                line: line.to_string(),
                component: component.to_string(),
                source,
            })?;
    }
    if sides.contains(&0) {
        return Err(FormatError::ZeroDimension {
            line: line.to_string(),
        });
    }
    let [a, b, c] = sides;
    Ok(BoxDims::new(a, b, c))
}
