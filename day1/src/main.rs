use anyhow::Context;
use day1::{parse_input, solve_puzzle_part1, solve_puzzle_part2};

fn main() -> anyhow::Result<()> {
    let input = std::io::read_to_string(std::io::stdin())
        .context("failed to read puzzle from stdin")?;
    let deltas = parse_input(input.trim_end());
    let part1 = solve_puzzle_part1(&deltas);
    let part2 = solve_puzzle_part2(&deltas).map_or(-1, |pos| pos as i64);
    println!("{part1},{part2}");
    Ok(())
}
