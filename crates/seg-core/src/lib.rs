//! `seg-core` — foundational types for the Schelling segregation model.
//!
//! This crate is a dependency of every other `seg-*` crate.  It has no
//! `seg-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`agent`]       | `AgentType`, `SatisfactionState`, `Cell`              |
//! | [`board`]       | `Board`, `Coord`, `TypeCounts`                        |
//! | [`neighbors`]   | Edge-clipped Moore neighborhood iterators             |
//! | [`config`]      | `AgentProfile`, `ModelConfig`, `RunConfig`            |
//! | [`rng`]         | `Permuter` seam, `SimRng` (seeded `SmallRng`)         |
//! | [`error`]       | `SegError`, `ConfigIssue`, `SegResult`                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod agent;
pub mod board;
pub mod config;
pub mod error;
pub mod neighbors;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::{AgentType, Cell, SatisfactionState};
pub use board::{Board, Coord, TypeCounts};
pub use config::{AgentProfile, ModelConfig, RunConfig};
pub use error::{ConfigIssue, SegError, SegResult};
pub use neighbors::{NeighborCoords, Neighbors, neighbors_of};
pub use rng::{Permuter, SimRng};
