//! schelling — terminal run of the Schelling segregation model.
//!
//! Builds a random board from the model configuration, then prints it after
//! every snapshot step, with `*` marking agents that want to move.  The
//! optional `--csv-dir` keeps `board.csv` in that directory up to date with
//! the latest snapshot.
//!
//! Log level comes from `RUST_LOG` (default `info`).

mod config;

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use seg_core::Board;
use seg_output::{CsvSnapshotWriter, RenderObserver, TextWriter};
use seg_sim::{SimBuilder, SimObserver};

use config::{FileConfig, Overrides};

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Schelling segregation model on a square board.
#[derive(Parser, Debug)]
#[command(name = "schelling")]
struct Args {
    /// JSON file with `model` and `run` sections
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board side length
    #[arg(long)]
    side: Option<usize>,

    /// Number of steps to run
    #[arg(long)]
    iterations: Option<u64>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between steps, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Print (and write CSV) every N steps; 0 disables snapshots
    #[arg(long)]
    snapshot_interval: Option<u64>,

    /// Directory to keep `board.csv` in
    #[arg(long)]
    csv_dir: Option<PathBuf>,

    /// Skip printing boards to stdout
    #[arg(long, short = 'q')]
    quiet: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            side:              self.side,
            iterations:        self.iterations,
            seed:              self.seed,
            delay_ms:          self.delay_ms,
            snapshot_interval: self.snapshot_interval,
        }
    }
}

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Forwards snapshots to whichever of the terminal and CSV observers are on.
struct Outputs {
    text: Option<RenderObserver<TextWriter<Stdout>>>,
    csv:  Option<RenderObserver<CsvSnapshotWriter>>,
}

impl Outputs {
    fn report_errors(&mut self) -> bool {
        let mut failed = false;
        if let Some(e) = self.text.as_mut().and_then(|o| o.take_error()) {
            tracing::error!(error = %e, "stdout output failed");
            failed = true;
        }
        if let Some(e) = self.csv.as_mut().and_then(|o| o.take_error()) {
            tracing::error!(error = %e, "csv output failed");
            failed = true;
        }
        failed
    }
}

impl SimObserver for Outputs {
    fn on_snapshot(&mut self, iteration: u64, board: &Board) {
        if let Some(o) = self.text.as_mut() {
            o.on_snapshot(iteration, board);
        }
        if let Some(o) = self.csv.as_mut() {
            o.on_snapshot(iteration, board);
        }
    }

    fn on_sim_end(&mut self, iterations: u64, board: &Board) {
        if let Some(o) = self.text.as_mut() {
            o.on_sim_end(iterations, board);
        }
        if let Some(o) = self.csv.as_mut() {
            o.on_sim_end(iterations, board);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    args.overrides().apply(&mut cfg);

    let csv = match &args.csv_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            Some(RenderObserver::new(CsvSnapshotWriter::new(dir)?))
        }
        None => None,
    };
    let text = (!args.quiet).then(|| RenderObserver::new(TextWriter::new(io::stdout())));
    let mut outputs = Outputs { text, csv };

    let mut sim = SimBuilder::new(cfg.model, cfg.run).build()?;

    let t0 = Instant::now();
    sim.run(&mut outputs);
    let elapsed = t0.elapsed();

    let counts = sim.board().type_counts();
    tracing::info!(
        elapsed_secs = elapsed.as_secs_f64(),
        type_a = counts.type_a,
        type_b = counts.type_b,
        empty = counts.empty,
        "run complete"
    );
    if let Some(s) = sim.last_summary() {
        tracing::info!(
            satisfied = s.satisfied,
            unsatisfied = s.unsatisfied,
            mean_similarity = s.mean_similarity,
            settled = s.is_settled(),
            "final step"
        );
    }

    if outputs.report_errors() {
        bail!("one or more outputs failed");
    }
    Ok(())
}
