//! Human-readable board rendering.

use std::fmt;

use seg_core::{Board, Cell, SatisfactionState};

/// `Display` adapter for a board in the text format described in the crate
/// docs.  Rows are separated by `\n`; there is no trailing newline.
#[derive(Copy, Clone)]
pub struct BoardView<'a>(pub &'a Board);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.rows().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                write!(f, "{}{}", cell.kind.symbol(), marker(cell))?;
            }
        }
        Ok(())
    }
}

/// Render `board` to a `String`.
pub fn render_board(board: &Board) -> String {
    BoardView(board).to_string()
}

#[inline]
fn marker(cell: &Cell) -> char {
    if cell.satisfaction == SatisfactionState::NotSatisfied { '*' } else { ' ' }
}
