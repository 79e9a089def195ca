//! Fluent builder for constructing a [`Sim`].

use seg_core::{Board, ModelConfig, Permuter, RunConfig, SimRng};
use seg_engine::create_from_config;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`ModelConfig`] — side length, population fractions, thresholds
/// - [`RunConfig`] — iterations, step delay, seed, snapshot interval
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                                        |
/// |----------------------|------------------------------------------------|
/// | `.initial_board(b)`  | Random board from `ModelConfig`                |
/// | `.permuter(p)`       | `SimRng::new(run.seed)`                        |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(model, run)
///     .initial_board(fixture)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<P: Permuter = SimRng> {
    model: ModelConfig,
    run:   RunConfig,
    board: Option<Board>,
    rng:   P,
}

impl SimBuilder<SimRng> {
    /// Create a builder seeded from `run.seed`.
    pub fn new(model: ModelConfig, run: RunConfig) -> Self {
        let rng = SimRng::new(run.seed);
        Self { model, run, board: None, rng }
    }
}

impl<P: Permuter> SimBuilder<P> {
    /// Replace the seeded RNG with any other permutation source.
    pub fn permuter<Q: Permuter>(self, rng: Q) -> SimBuilder<Q> {
        SimBuilder {
            model: self.model,
            run:   self.run,
            board: self.board,
            rng,
        }
    }

    /// Start from `board` instead of a randomly populated one.
    ///
    /// Its side must equal `model.side_length`; population fractions are not
    /// checked against its contents.
    pub fn initial_board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Validate inputs, create the initial board if none was supplied, and
    /// return a ready-to-run [`Sim`].
    pub fn build(mut self) -> SimResult<Sim<P>> {
        self.model.validate()?;

        let board = match self.board {
            Some(b) => {
                if b.side() != self.model.side_length {
                    return Err(SimError::SideMismatch {
                        expected: self.model.side_length,
                        got:      b.side(),
                    });
                }
                b
            }
            None => create_from_config(&self.model, &mut self.rng)?,
        };

        tracing::info!(
            side = board.side(),
            iterations = self.run.iterations,
            seed = self.run.seed,
            "simulation ready"
        );

        Ok(Sim {
            model:        self.model,
            run:          self.run,
            board,
            rng:          self.rng,
            iteration:    0,
            last_summary: None,
        })
    }
}
