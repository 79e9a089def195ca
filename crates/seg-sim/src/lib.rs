//! `seg-sim` — iteration driver for the Schelling segregation model.
//!
//! # Step loop
//!
//! ```text
//! for iteration in 0..run.iterations:
//!   ① on_step_start
//!   ② step       — evaluate satisfaction, relocate the mobile set
//!                  (pure: the previous board is replaced, never mutated)
//!   ③ on_step_end with the step's counts
//!   ④ on_snapshot every `run.snapshot_interval` iterations
//!   ⑤ sleep `run.step_delay_ms` (skipped when 0)
//! on_sim_end
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Evaluation pass on Rayon (via `seg-engine/parallel`).  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use seg_core::{ModelConfig, RunConfig};
//! use seg_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(ModelConfig::default(), RunConfig::default()).build()?;
//! sim.run(&mut NoopObserver);
//! println!("{} cells still unhappy", sim.last_summary().map_or(0, |s| s.unsatisfied));
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
