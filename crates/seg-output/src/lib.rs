//! `seg-output` — board rendering and snapshot writers.
//!
//! | Writer               | Output                                              |
//! |----------------------|-----------------------------------------------------|
//! | [`TextWriter`]       | `Iteration N board:` + rendered grid, any `io::Write` |
//! | [`CsvSnapshotWriter`]| `board.csv`, rewritten with the latest snapshot     |
//!
//! Both implement [`SnapshotWriter`] and are driven by [`RenderObserver`],
//! which implements `seg_sim::SimObserver`.
//!
//! # Text format
//!
//! One line per row; each cell is its type symbol (`o`, `x`, `_`) followed
//! by `*` if it was last classified not satisfied, or a space otherwise:
//!
//! ```text
//! o o o x*
//! x x*_ _
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use seg_output::{RenderObserver, TextWriter};
//!
//! let mut obs = RenderObserver::new(TextWriter::new(std::io::stdout()));
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod render;
pub mod row;
pub mod text;
pub mod writer;


pub use self::csv::CsvSnapshotWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RenderObserver;
pub use render::{BoardView, render_board};
pub use row::CellRow;
pub use text::TextWriter;
pub use writer::SnapshotWriter;
