//! Plain data row type written by the CSV backend.

use seg_core::{AgentType, Board, SatisfactionState};

/// One cell of a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRow {
    pub iteration:    u64,
    pub row:          usize,
    pub col:          usize,
    pub kind:         AgentType,
    pub satisfaction: SatisfactionState,
}

impl CellRow {
    /// Flatten `board` into rows, row-major.
    pub fn from_board(iteration: u64, board: &Board) -> Vec<CellRow> {
        board
            .iter()
            .map(|(coord, cell)| CellRow {
                iteration,
                row:          coord.row,
                col:          coord.col,
                kind:         cell.kind,
                satisfaction: cell.satisfaction,
            })
            .collect()
    }
}
