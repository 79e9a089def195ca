//! Initial board construction.
//!
//! `create_neighborhood` converts population fractions into exact counts
//! (`floor(N² · fraction)` per occupant type, remainder empty), shuffles the
//! flat sequence with the injected [`Permuter`] and lays it out row-major.
//! `build_board` is the deterministic layout half, used directly by tests
//! for fixed fixtures.

use std::iter::repeat_n;

use seg_core::config::check_fractions;
use seg_core::{AgentType, Board, Cell, ConfigIssue, ModelConfig, Permuter, SegResult};

/// Build a randomly populated `side × side` board.
///
/// # Errors
///
/// `InvalidConfiguration` if either fraction is outside `[0, 1]`, they sum
/// above 1, or `side == 0`.  Nothing is drawn from `rng` in that case.
pub fn create_neighborhood<P: Permuter>(
    fraction_a: f64,
    fraction_b: f64,
    side:       usize,
    rng:        &mut P,
) -> SegResult<Board> {
    check_fractions(fraction_a, fraction_b)?;
    if side == 0 {
        return Err(ConfigIssue::ZeroSideLength.into());
    }

    let size = side * side;
    let count_a = population_count(size, fraction_a).min(size);
    // Float rounding may push floor(a) + floor(b) one past `size` when the
    // fractions sum to exactly 1; clamp so empties never go negative.
    let count_b = population_count(size, fraction_b).min(size - count_a);
    let count_empty = size - count_a - count_b;

    let mut kinds: Vec<AgentType> = Vec::with_capacity(size);
    kinds.extend(repeat_n(AgentType::TypeA, count_a));
    kinds.extend(repeat_n(AgentType::TypeB, count_b));
    kinds.extend(repeat_n(AgentType::Empty, count_empty));

    rng.shuffle(&mut kinds);
    build_board(&kinds, side)
}

/// [`create_neighborhood`] driven by a validated [`ModelConfig`].
pub fn create_from_config<P: Permuter>(config: &ModelConfig, rng: &mut P) -> SegResult<Board> {
    config.validate()?;
    create_neighborhood(
        config.type_a.population_fraction,
        config.type_b.population_fraction,
        config.side_length,
        rng,
    )
}

/// Lay `kinds` out row-major into a `side × side` board of `Unset` cells.
///
/// # Errors
///
/// `InvalidConfiguration` if `side == 0` or `kinds.len() != side²`.
pub fn build_board(kinds: &[AgentType], side: usize) -> SegResult<Board> {
    if side == 0 {
        return Err(ConfigIssue::ZeroSideLength.into());
    }
    let expected = side * side;
    if kinds.len() != expected {
        return Err(ConfigIssue::SequenceLength { expected, got: kinds.len() }.into());
    }
    Board::from_cells(side, kinds.iter().copied().map(Cell::new).collect())
}

/// Parse a fixture string of board symbols (`o`/`A`, `x`/`B`, `_`).
/// Whitespace is ignored so fixtures can be written one row per line.
pub fn parse_types(symbols: &str) -> SegResult<Vec<AgentType>> {
    symbols
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(AgentType::try_from)
        .collect()
}

#[inline]
fn population_count(size: usize, fraction: f64) -> usize {
    (size as f64 * fraction).floor() as usize
}
