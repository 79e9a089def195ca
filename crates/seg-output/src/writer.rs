//! The `SnapshotWriter` trait implemented by all backend writers.

use seg_core::Board;

use crate::OutputResult;

/// Trait implemented by the text and CSV writers.
///
/// Errors are stored by [`RenderObserver`][crate::RenderObserver] and
/// retrieved with `take_error`, since observer hooks cannot fail.
pub trait SnapshotWriter {
    /// Write the board as it stands after step `iteration`.
    fn write_board(&mut self, iteration: u64, board: &Board) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
