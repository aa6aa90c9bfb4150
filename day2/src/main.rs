use anyhow::Context;
use day2::{parse_input, solve_puzzle_part1, solve_puzzle_part2};

fn main() -> anyhow::Result<()> {
    let input = std::io::read_to_string(std::io::stdin())
        .context("failed to read puzzle from stdin")?;
    let boxes = parse_input(&input)?;
    let paper = solve_puzzle_part1(&boxes).context("wrapping paper total overflows u64")?;
    let ribbon = solve_puzzle_part2(&boxes).context("ribbon total overflows u64")?;
    println!("{paper},{ribbon}");
    Ok(())
}
