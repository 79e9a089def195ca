//! JSON run file plus command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use seg_core::{ModelConfig, RunConfig};
use serde::Deserialize;

/// Shape of the optional `--config` file.  Either section (and any field
/// within it) may be omitted; missing values take the model defaults.
///
/// ```json
/// { "model": { "side_length": 20, "type_a": { "population_fraction": 0.45,
///              "satisfaction_threshold": 0.5 } },
///   "run":   { "iterations": 100, "step_delay_ms": 0 } }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub model: ModelConfig,
    pub run:   RunConfig,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))
    }
}

/// Per-field overrides from the command line; `None` keeps the file value.
#[derive(Debug, Default)]
pub struct Overrides {
    pub side:              Option<usize>,
    pub iterations:        Option<u64>,
    pub seed:              Option<u64>,
    pub delay_ms:          Option<u64>,
    pub snapshot_interval: Option<u64>,
}

impl Overrides {
    pub fn apply(&self, cfg: &mut FileConfig) {
        if let Some(side) = self.side {
            cfg.model.side_length = side;
        }
        if let Some(n) = self.iterations {
            cfg.run.iterations = n;
        }
        if let Some(seed) = self.seed {
            cfg.run.seed = seed;
        }
        if let Some(ms) = self.delay_ms {
            cfg.run.step_delay_ms = ms;
        }
        if let Some(k) = self.snapshot_interval {
            cfg.run.snapshot_interval = k;
        }
    }
}
