//! The fused `(Board) → Board` simulation step.

use seg_core::{Board, ModelConfig, Permuter, SatisfactionState};

use crate::satisfaction::update_scored;
use crate::{relocate_unsatisfied, similar_neighbor_ratio};

/// Counts taken from the evaluated board, before relocation.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct StepSummary {
    /// Occupied cells classified `Satisfied`.
    pub satisfied: usize,
    /// Occupied cells classified `NotSatisfied`.
    pub unsatisfied: usize,
    /// Size of the mobile set: `unsatisfied` plus every empty cell.
    pub mobile: usize,
    /// Mean same-type neighbor ratio over occupied cells (0 if none).
    /// Rises as the board segregates.
    pub mean_similarity: f64,
}

impl StepSummary {
    /// Summarise an evaluated board, rescanning neighborhoods for the mean
    /// similarity.  [`step`] reuses the ratios of its own evaluation pass
    /// instead.
    pub fn of(board: &Board) -> Self {
        let mut occupied = 0usize;
        let mut ratio_sum = 0.0f64;
        for (coord, cell) in board.iter() {
            if cell.is_occupied() {
                occupied += 1;
                ratio_sum += similar_neighbor_ratio(board, coord);
            }
        }
        let mean_similarity = if occupied == 0 { 0.0 } else { ratio_sum / occupied as f64 };
        Self::with_similarity(board, mean_similarity)
    }

    fn with_similarity(board: &Board, mean_similarity: f64) -> Self {
        let satisfied = board.count_state(SatisfactionState::Satisfied);
        let unsatisfied = board.count_state(SatisfactionState::NotSatisfied);
        let empty = board.type_counts().empty;
        Self { satisfied, unsatisfied, mobile: unsatisfied + empty, mean_similarity }
    }

    /// `true` once no occupied cell wants to move.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.unsatisfied == 0
    }
}

/// Output of [`step`].
#[derive(Clone, Debug)]
pub struct Step {
    /// The relocated board.  Cells carry the satisfaction state they were
    /// evaluated with.
    pub board: Board,
    pub summary: StepSummary,
}

/// Evaluate `board` and relocate its mobile set, returning a new board.
///
/// `board` is left untouched, so earlier snapshots stay valid.
pub fn step<P: Permuter>(board: &Board, config: &ModelConfig, rng: &mut P) -> Step {
    let mut evaluated = board.clone();
    let similarity = update_scored(&mut evaluated, config);
    let summary = StepSummary::with_similarity(&evaluated, similarity.mean());
    let board = relocate_unsatisfied(&evaluated, rng);
    Step { board, summary }
}
