//! Satisfaction evaluation.
//!
//! A cell's ratio counts only *occupied* neighbors:
//!
//!   ratio = same-type occupied neighbors / occupied neighbors
//!
//! and is exactly `0.0` when it has no occupied neighbors, so an isolated
//! agent is never satisfied by default.  Classification is inclusive: a
//! ratio equal to the threshold is `Satisfied`.
//!
//! Ratios depend only on agent types, which evaluation never changes, so the
//! in-place pass cannot observe its own writes.

use seg_core::{AgentType, Board, Cell, Coord, ModelConfig, SatisfactionState};

/// Share of `coord`'s occupied neighbors that match its type.
///
/// Returns `0.0` for an empty or out-of-bounds centre and for a centre with
/// no occupied neighbors.
pub fn similar_neighbor_ratio(board: &Board, coord: Coord) -> f64 {
    let Some(centre) = board.get(coord) else {
        return 0.0;
    };
    if !centre.is_occupied() {
        return 0.0;
    }

    let mut total = 0u32;
    let mut same = 0u32;
    for neighbor in board.neighbors(coord).filter(|n| n.is_occupied()) {
        total += 1;
        if neighbor.kind == centre.kind {
            same += 1;
        }
    }

    if total == 0 {
        0.0
    } else {
        f64::from(same) / f64::from(total)
    }
}

/// `Satisfied` iff `kind`'s threshold `<= ratio`.
///
/// `Empty` has no threshold and always classifies `NotSatisfied`; callers
/// skip empty cells, and relocation treats them as mobile regardless.
pub fn classify(ratio: f64, kind: AgentType, config: &ModelConfig) -> SatisfactionState {
    match config.threshold(kind) {
        Some(threshold) if threshold <= ratio => SatisfactionState::Satisfied,
        _ => SatisfactionState::NotSatisfied,
    }
}

/// Recompute `satisfaction` for every occupied cell of `board` in place.
/// Empty cells keep whatever state they hold.
pub fn update_satisfaction(board: &mut Board, config: &ModelConfig) {
    update_scored(board, config);
}

/// Pure form of [`update_satisfaction`]: returns an evaluated copy and
/// leaves `board` untouched.
pub fn evaluate(board: &Board, config: &ModelConfig) -> Board {
    let mut next = board.clone();
    update_satisfaction(&mut next, config);
    next
}

// ── Per-cell pass ─────────────────────────────────────────────────────────────

/// Ratio and new state of one occupied cell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Scored {
    pub ratio: f64,
    pub state: SatisfactionState,
}

/// Same-type ratios gathered by one evaluation pass.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub(crate) struct Similarity {
    pub occupied:  usize,
    pub ratio_sum: f64,
}

impl Similarity {
    /// Mean ratio over occupied cells, 0 if there are none.
    pub fn mean(&self) -> f64 {
        if self.occupied == 0 { 0.0 } else { self.ratio_sum / self.occupied as f64 }
    }
}

/// [`update_satisfaction`] that also hands back the ratios it computed, so
/// the step summary needs no second neighbor scan.  Ratios are summed
/// row-major whether or not the pass ran in parallel.
pub(crate) fn update_scored(board: &mut Board, config: &ModelConfig) -> Similarity {
    let scores = score_all(board, config);
    let mut similarity = Similarity::default();
    for (cell, score) in board.cells_mut().iter_mut().zip(scores) {
        if let Some(Scored { ratio, state }) = score {
            cell.satisfaction = state;
            similarity.occupied += 1;
            similarity.ratio_sum += ratio;
        }
    }
    similarity
}

/// Score for every cell, `None` for empties.  Row-major.
fn score_all(board: &Board, config: &ModelConfig) -> Vec<Option<Scored>> {
    #[cfg(not(feature = "parallel"))]
    {
        score_sequential(board, config)
    }

    #[cfg(feature = "parallel")]
    {
        score_parallel(board, config)
    }
}

#[cfg_attr(feature = "parallel", allow(dead_code))]
pub(crate) fn score_sequential(board: &Board, config: &ModelConfig) -> Vec<Option<Scored>> {
    board
        .cells()
        .iter()
        .enumerate()
        .map(|(i, cell)| score_cell(board, i, cell, config))
        .collect()
}

#[cfg(feature = "parallel")]
pub(crate) fn score_parallel(board: &Board, config: &ModelConfig) -> Vec<Option<Scored>> {
    use rayon::prelude::*;

    board
        .cells()
        .par_iter()
        .enumerate()
        .map(|(i, cell)| score_cell(board, i, cell, config))
        .collect()
}

#[inline]
fn score_cell(board: &Board, index: usize, cell: &Cell, config: &ModelConfig) -> Option<Scored> {
    if !cell.is_occupied() {
        return None;
    }
    let ratio = similar_neighbor_ratio(board, board.coord_of(index));
    Some(Scored { ratio, state: classify(ratio, cell.kind, config) })
}
