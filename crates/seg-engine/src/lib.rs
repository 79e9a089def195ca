//! `seg-engine` — the simulation step for the Schelling segregation model.
//!
//! # One step
//!
//! ```text
//! ① Evaluate  — every occupied cell gets its same-type neighbor ratio and
//!               is classified Satisfied / NotSatisfied against its type's
//!               threshold (inclusive).
//! ② Relocate  — the mobile set (empty + NotSatisfied cells) is shuffled
//!               uniformly among its own coordinates into a new board.
//! ```
//!
//! Both phases are available separately ([`update_satisfaction`],
//! [`relocate_unsatisfied`]) or fused into the pure [`step`], which never
//! touches its input board.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the evaluation pass on Rayon's thread pool.       |
//!
//! # Quick-start
//!
//! ```rust
//! use seg_core::{ModelConfig, SimRng};
//! use seg_engine::{create_from_config, step};
//!
//! let config = ModelConfig { side_length: 10, ..ModelConfig::default() };
//! let mut rng = SimRng::new(42);
//! let mut board = create_from_config(&config, &mut rng).unwrap();
//! for _ in 0..5 {
//!     board = step(&board, &config, &mut rng).board;
//! }
//! assert_eq!(board.side(), 10);
//! ```

pub mod factory;
pub mod relocation;
pub mod satisfaction;
pub mod step;


pub use factory::{build_board, create_from_config, create_neighborhood, parse_types};
pub use relocation::{mobile_set, relocate_unsatisfied};
pub use satisfaction::{classify, evaluate, similar_neighbor_ratio, update_satisfaction};
pub use step::{Step, StepSummary, step};
