//! `RenderObserver<W>` — bridges `SimObserver` to a `SnapshotWriter`.

use seg_core::Board;
use seg_sim::SimObserver;

use crate::writer::SnapshotWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that hands every snapshot to a [`SnapshotWriter`]
/// backend (text, CSV, …).
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct RenderObserver<W: SnapshotWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: SnapshotWriter> RenderObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect output after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: SnapshotWriter> SimObserver for RenderObserver<W> {
    fn on_snapshot(&mut self, iteration: u64, board: &Board) {
        let result = self.writer.write_board(iteration, board);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _iterations: u64, _board: &Board) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
