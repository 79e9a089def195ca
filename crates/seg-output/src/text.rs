//! Plain-text backend: the rendered board behind an iteration header.

use std::io::Write;

use seg_core::Board;

use crate::writer::SnapshotWriter;
use crate::{BoardView, OutputResult};

/// Writes each snapshot as
///
/// ```text
/// Iteration 3 board:
/// o o x*
/// ...
/// ```
pub struct TextWriter<W: Write> {
    out: W,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Unwrap the inner sink (e.g. a `Vec<u8>` in tests).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SnapshotWriter for TextWriter<W> {
    fn write_board(&mut self, iteration: u64, board: &Board) -> OutputResult<()> {
        writeln!(self.out, "Iteration {iteration} board:")?;
        writeln!(self.out, "{}", BoardView(board))?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
