//! Simulation configuration

// standard library
use std::fs;
use std::path::Path;

// crate modules
use crate::error::Result;

// mcslab modules
use mcslab_physics::Slab;

// external crates
use serde::{Deserialize, Serialize};

/// Full configuration of a transport run
///
/// The defaults reproduce the baseline two-region problem: 1000 cycles of
/// 10000 histories through the [Slab::default] geometry, with entropy
/// seeding and last-cycle k-eff reporting.
///
/// Any subset of fields may be given in a JSON file, with the remainder
/// taken from the defaults:
///
/// ```json
/// {
///     "cycles": 100,
///     "histories_per_cycle": 5000,
///     "seed": 42
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of outer cycles
    pub cycles: usize,
    /// Initial neutron batch size for each cycle
    pub histories_per_cycle: usize,
    /// Maximum collisions per history before the walk is cut off
    ///
    /// Bounds worst-case work for pathological cross sections. The default
    /// is far above anything the baseline constants can reach, so it does
    /// not bias physical results.
    pub max_collisions: usize,
    /// Seed for the random number stream, entropy-seeded when `None`
    pub seed: Option<u64>,
    /// Report k-eff averaged over all cycles rather than the final cycle
    ///
    /// The cycle average is the physically meaningful estimator; the
    /// last-cycle value is the historical default.
    pub average_keff: bool,
    /// Slab geometry, an ordered list of regions tiling [0, 1)
    pub slab: Slab,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cycles: 1000,
            histories_per_cycle: 10_000,
            max_collisions: 1_000_000,
            seed: None,
            average_keff: false,
            slab: Slab::default(),
        }
    }
}

impl Config {
    /// Read a configuration from a JSON file
    ///
    /// Slab regions are validated on deserialisation, so a parsed
    /// configuration always carries usable geometry.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
