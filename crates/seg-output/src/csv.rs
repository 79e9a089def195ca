//! CSV output backend.
//!
//! Keeps exactly one file, `board.csv`, in the configured directory.  Every
//! snapshot truncates and rewrites it, so the file always holds the latest
//! board and nothing older.

use std::path::{Path, PathBuf};

use csv::Writer;
use seg_core::Board;

use crate::writer::SnapshotWriter;
use crate::{CellRow, OutputResult};

const HEADER: [&str; 5] = ["iteration", "row", "col", "type", "satisfaction"];

/// Writes the most recent board snapshot to `board.csv`.
pub struct CsvSnapshotWriter {
    path:    PathBuf,
    written: usize,
}

impl CsvSnapshotWriter {
    /// Target `dir/board.csv`.  The directory must exist; the file is
    /// created (with just the header) immediately.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let path = dir.join("board.csv");
        let mut out = Writer::from_path(&path)?;
        out.write_record(HEADER)?;
        out.flush()?;
        Ok(Self { path, written: 0 })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of snapshots written so far (only the last survives on disk).
    pub fn snapshots_written(&self) -> usize {
        self.written
    }
}

impl SnapshotWriter for CsvSnapshotWriter {
    fn write_board(&mut self, iteration: u64, board: &Board) -> OutputResult<()> {
        let mut out = Writer::from_path(&self.path)?;
        out.write_record(HEADER)?;
        for row in CellRow::from_board(iteration, board) {
            out.write_record(&[
                row.iteration.to_string(),
                row.row.to_string(),
                row.col.to_string(),
                row.kind.as_str().to_string(),
                row.satisfaction.as_str().to_string(),
            ])?;
        }
        out.flush()?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        Ok(())
    }
}
