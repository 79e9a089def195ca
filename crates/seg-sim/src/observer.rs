//! Simulation observer trait for progress reporting and rendering.

use seg_core::Board;
use seg_engine::StepSummary;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step_end(&mut self, iteration: u64, summary: &StepSummary) {
///         if iteration % self.interval == 0 {
///             println!("step {iteration}: {} unsatisfied", summary.unsatisfied);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each step, before any processing.
    fn on_step_start(&mut self, _iteration: u64) {}

    /// Called once the step's board has replaced the previous one.
    ///
    /// `summary` counts the board as evaluated, before relocation.
    fn on_step_end(&mut self, _iteration: u64, _summary: &StepSummary) {}

    /// Called at snapshot intervals (every `run.snapshot_interval` steps)
    /// with read-only access to the freshly relocated board.
    fn on_snapshot(&mut self, _iteration: u64, _board: &Board) {}

    /// Called once after the final step with the number of steps run.
    fn on_sim_end(&mut self, _iterations: u64, _board: &Board) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
