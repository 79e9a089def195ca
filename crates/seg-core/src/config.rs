//! Per-run model and driver configuration.
//!
//! Both structs are plain values owned by whoever runs the simulation; there
//! is no process-wide state.  Typically built in code or loaded from a JSON
//! file by the application crate (with the `serde` feature) and passed down.

use std::time::Duration;

use crate::{AgentType, ConfigIssue, SegResult};

// ── AgentProfile ──────────────────────────────────────────────────────────────

/// Static configuration for one occupant type.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentProfile {
    /// Share of the board's cells this type occupies at creation, in `[0, 1]`.
    pub population_fraction: f64,

    /// Minimum same-type share of occupied neighbors needed to be
    /// satisfied, in `[0, 1]`.  Compared inclusively.
    pub satisfaction_threshold: f64,
}

impl AgentProfile {
    pub fn new(population_fraction: f64, satisfaction_threshold: f64) -> Self {
        Self { population_fraction, satisfaction_threshold }
    }
}

// ── ModelConfig ───────────────────────────────────────────────────────────────

/// Board size and the two occupant profiles.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModelConfig {
    /// Board side length `N` (the board has `N²` cells).
    pub side_length: usize,
    pub type_a: AgentProfile,
    pub type_b: AgentProfile,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            side_length: 40,
            type_a:      AgentProfile::new(0.5, 0.7),
            type_b:      AgentProfile::new(0.5, 0.66),
        }
    }
}

impl ModelConfig {
    /// Check every field.  Called by the grid factory and the sim builder
    /// before any board is created.
    pub fn validate(&self) -> SegResult<()> {
        if self.side_length == 0 {
            return Err(ConfigIssue::ZeroSideLength.into());
        }
        check_fractions(self.type_a.population_fraction, self.type_b.population_fraction)?;
        for profile in [&self.type_a, &self.type_b] {
            let t = profile.satisfaction_threshold;
            if !(0.0..=1.0).contains(&t) {
                return Err(ConfigIssue::ThresholdOutOfRange(t).into());
            }
        }
        Ok(())
    }

    /// Profile for an occupant type; `None` for `Empty`.
    pub fn profile(&self, kind: AgentType) -> Option<&AgentProfile> {
        match kind {
            AgentType::TypeA => Some(&self.type_a),
            AgentType::TypeB => Some(&self.type_b),
            AgentType::Empty => None,
        }
    }

    #[inline]
    pub fn threshold(&self, kind: AgentType) -> Option<f64> {
        self.profile(kind).map(|p| p.satisfaction_threshold)
    }
}

/// Reject fractions outside `[0, 1]` or summing above 1.
pub fn check_fractions(type_a: f64, type_b: f64) -> SegResult<()> {
    for f in [type_a, type_b] {
        if !(0.0..=1.0).contains(&f) {
            return Err(ConfigIssue::FractionOutOfRange(f).into());
        }
    }
    if type_a + type_b > 1.0 {
        return Err(ConfigIssue::FractionsExceedOne { type_a, type_b }.into());
    }
    Ok(())
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Iteration driver configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunConfig {
    /// Number of evaluate-then-relocate steps to run.
    pub iterations: u64,

    /// Wall-clock pause after each step, for watching the board evolve.
    /// 0 disables the pause.
    pub step_delay_ms: u64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Emit a board snapshot every N steps.  1 = every step; 0 = never.
    pub snapshot_interval: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            iterations:        400,
            step_delay_ms:     50,
            seed:              42,
            snapshot_interval: 1,
        }
    }
}

impl RunConfig {
    #[inline]
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    /// Whether step `iteration` (0-based) should produce a snapshot.
    #[inline]
    pub fn is_snapshot(&self, iteration: u64) -> bool {
        self.snapshot_interval > 0 && iteration % self.snapshot_interval == 0
    }
}
