//! The `Sim` struct and its step loop.

use std::thread;

use seg_core::{Board, ModelConfig, Permuter, RunConfig, SimRng};
use seg_engine::{Step, StepSummary, step};

use crate::SimObserver;

/// The main simulation runner.
///
/// `Sim<P>` owns the latest board and the permutation source, and replaces
/// the board once per step with the output of [`seg_engine::step`].  Older
/// boards are dropped unless an observer clones them.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: Permuter = SimRng> {
    /// Side length, population fractions and thresholds.
    pub model: ModelConfig,

    /// Iteration count, pacing and snapshot cadence.
    pub run: RunConfig,

    /// The current board.
    pub board: Board,

    /// Source of the relocation permutations.
    pub rng: P,

    /// Steps completed so far.
    pub iteration: u64,

    pub(crate) last_summary: Option<StepSummary>,
}

impl<P: Permuter> Sim<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current iteration to `run.iterations`, pausing
    /// `run.step_delay_ms` after each step.
    ///
    /// Calls observer hooks at every step boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        tracing::info!(from = self.iteration, to = self.run.iterations, "run started");

        let delay = self.run.step_delay();
        while self.iteration < self.run.iterations {
            self.advance(observer);
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }

        observer.on_sim_end(self.iteration, &self.board);
        tracing::info!(
            iterations = self.iteration,
            unsatisfied = self.last_summary.map_or(0, |s| s.unsatisfied),
            "run finished"
        );
    }

    /// Run exactly `n` steps from the current position, without pausing and
    /// without calling `on_sim_end` (ignores `run.iterations`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.advance(observer);
        }
    }

    /// The latest board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Counts from the most recent step, `None` before the first.
    #[inline]
    pub fn last_summary(&self) -> Option<StepSummary> {
        self.last_summary
    }

    // ── Core step processing ──────────────────────────────────────────────

    fn advance<O: SimObserver>(&mut self, observer: &mut O) {
        let iteration = self.iteration;
        observer.on_step_start(iteration);

        let Step { board, summary } = step(&self.board, &self.model, &mut self.rng);
        self.board = board;
        self.last_summary = Some(summary);

        tracing::debug!(
            iteration,
            satisfied = summary.satisfied,
            unsatisfied = summary.unsatisfied,
            mobile = summary.mobile,
            mean_similarity = summary.mean_similarity,
            "step complete"
        );

        observer.on_step_end(iteration, &summary);
        if self.run.is_snapshot(iteration) {
            observer.on_snapshot(iteration, &self.board);
        }

        self.iteration += 1;
    }
}
