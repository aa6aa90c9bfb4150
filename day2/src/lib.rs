use parse_dims::{parse_box, BoxDims, FormatError};
use tracing::trace;

/// How much material a box needs.
///
/// Sides go up to `u32::MAX`, so anything with more than two factors can
/// overflow `u64` and comes back as `None`.
pub trait Packaging {
    fn surface_area(&self) -> Option<u64>;
    /// Area of the smallest face, the slack added to the paper.
    fn smallest_face(&self) -> u64;
    fn smallest_perimeter(&self) -> u64;
    /// Cubic volume, the length of ribbon used for the bow.
    fn volume(&self) -> Option<u64>;

    fn wrapping_paper(&self) -> Option<u64> {
        self.surface_area()?.checked_add(self.smallest_face())
    }

    fn ribbon(&self) -> Option<u64> {
        self.volume()?.checked_add(self.smallest_perimeter())
    }
}

impl Packaging for BoxDims {
    fn surface_area(&self) -> Option<u64> {
        let (s, m, l) = sides(self);
        let faces = (s * m).checked_add(m * l)?.checked_add(s * l)?;
        faces.checked_mul(2)
    }

    // Products of two u32 values always fit in u64.
    fn smallest_face(&self) -> u64 {
        let (s, m, _) = sides(self);
        s * m
    }

    fn smallest_perimeter(&self) -> u64 {
        let (s, m, _) = sides(self);
        2 * s + 2 * m
    }

    fn volume(&self) -> Option<u64> {
        let (s, m, l) = sides(self);
        (s * m).checked_mul(l)
    }
}

fn sides(dims: &BoxDims) -> (u64, u64, u64) {
    (
        dims.shortest() as u64,
        dims.middle() as u64,
        dims.longest() as u64,
    )
}

/// Parses one box per line. Blank lines are skipped, and the first malformed
/// line fails the whole input.
pub fn parse_input(puzzle: &str) -> Result<Vec<BoxDims>, FormatError> {
    puzzle
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            let dims = parse_box(line).map_err(|err| err.at_line(idx + 1))?;
            trace!(line = idx + 1, ?dims, "parsed box");
            Ok(dims)
        })
        .collect()
}

fn checked_total(
    boxes: &[BoxDims],
    amount: impl Fn(&BoxDims) -> Option<u64>,
) -> Option<u64> {
    boxes
        .iter()
        .try_fold(0u64, |total, dims| total.checked_add(amount(dims)?))
}

/// Total square feet of wrapping paper, `None` if it overflows `u64`.
pub fn solve_puzzle_part1(boxes: &[BoxDims]) -> Option<u64> {
    checked_total(boxes, BoxDims::wrapping_paper)
}

/// Total feet of ribbon, `None` if it overflows `u64`.
pub fn solve_puzzle_part2(boxes: &[BoxDims]) -> Option<u64> {
    checked_total(boxes, BoxDims::ribbon)
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn totals_are_sums_of_single_boxes(sides in proptest::collection::vec((1u32..1000, 1u32..1000, 1u32..1000), 1..50)) {
            let puzzle = sides
                .iter()
                .map(|(a, b, c)| format!("{a}x{b}x{c}"))
                .collect::<Vec<_>>()
                .join("\n");
            let boxes = parse_input(&puzzle).unwrap();
            let paper: u64 = sides.iter().map(|(a, b, c)| BoxDims::new(*a, *b, *c).wrapping_paper().unwrap()).sum();
            let ribbon: u64 = sides.iter().map(|(a, b, c)| BoxDims::new(*a, *b, *c).ribbon().unwrap()).sum();
            prop_assert_eq!(solve_puzzle_part1(&boxes), Some(paper));
            prop_assert_eq!(solve_puzzle_part2(&boxes), Some(ribbon));
        }
    }

    #[test]
    fn single_box_paper() {
        let boxes = parse_input("2x3x4").unwrap();
        assert_eq!(boxes[0].surface_area(), Some(52));
        assert_eq!(boxes[0].smallest_face(), 6);
        assert_eq!(solve_puzzle_part1(&boxes), Some(58));
        assert_eq!(solve_puzzle_part1(&parse_input("1x1x10").unwrap()), Some(43));
    }

    #[test]
    fn single_box_ribbon() {
        let boxes = parse_input("2x3x4").unwrap();
        assert_eq!(boxes[0].smallest_perimeter(), 10);
        assert_eq!(boxes[0].volume(), Some(24));
        assert_eq!(solve_puzzle_part2(&boxes), Some(34));
        assert_eq!(solve_puzzle_part2(&parse_input("1x1x10").unwrap()), Some(14));
    }

    #[test]
    fn order_does_not_matter() {
        let sorted = parse_input("2x3x4").unwrap();
        let shuffled = parse_input("4x2x3").unwrap();
        assert_eq!(solve_puzzle_part1(&sorted), solve_puzzle_part1(&shuffled));
        assert_eq!(solve_puzzle_part2(&sorted), solve_puzzle_part2(&shuffled));
    }

    #[test]
    fn multiple_lines_accumulate() {
        let boxes = parse_input("2x3x4\n1x1x10\n").unwrap();
        assert_eq!(boxes.len(), 2);
        assert_eq!(solve_puzzle_part1(&boxes), Some(58 + 43));
        assert_eq!(solve_puzzle_part2(&boxes), Some(34 + 14));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let boxes = parse_input("\n2x3x4\r\n\r\n   \n1x1x10\n\n").unwrap();
        assert_eq!(boxes, vec![BoxDims::new(2, 3, 4), BoxDims::new(1, 1, 10)]);
    }

    #[test]
    fn malformed_line_fails_everything() {
        let err = parse_input("2x3x4\n2x3\n1x1x10").unwrap_err();
        match err {
            FormatError::Line {
                line_number,
                source,
            } => {
                assert_eq!(line_number, 2);
                assert!(matches!(*source, FormatError::Arity { found: 2, .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn no_boxes() {
        let boxes = parse_input("\n\n").unwrap();
        assert!(boxes.is_empty());
        assert_eq!(solve_puzzle_part1(&boxes), Some(0));
        assert_eq!(solve_puzzle_part2(&boxes), Some(0));
    }

    #[test]
    fn largest_box_overflows() {
        let dims = BoxDims::new(u32::MAX, u32::MAX, u32::MAX);
        assert_eq!(dims.surface_area(), None);
        assert_eq!(dims.wrapping_paper(), None);
        assert_eq!(dims.volume(), None);
        assert_eq!(dims.ribbon(), None);
        assert_eq!(dims.smallest_face(), u32::MAX as u64 * u32::MAX as u64);
        assert_eq!(dims.smallest_perimeter(), 4 * u32::MAX as u64);
        assert_eq!(solve_puzzle_part1(&[dims]), None);
        assert_eq!(solve_puzzle_part2(&[dims]), None);
    }

    #[test]
    fn volume_overflows_before_surface() {
        let dims = BoxDims::new(3_000_000, 3_000_000, 3_000_000);
        assert_eq!(dims.surface_area(), Some(54_000_000_000_000));
        assert_eq!(dims.volume(), None);
        assert_eq!(dims.ribbon(), None);
    }

    #[test]
    fn total_overflows_even_when_each_box_fits() {
        let dims = BoxDims::new(1_000_000_000, 1_000_000_000, 1_000_000_000);
        assert_eq!(dims.wrapping_paper(), Some(7_000_000_000_000_000_000));
        assert_eq!(solve_puzzle_part1(&[dims; 2]), Some(14_000_000_000_000_000_000));
        assert_eq!(solve_puzzle_part1(&[dims; 3]), None);
    }
}
