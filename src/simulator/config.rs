//! Simulation configuration.

use crate::core::constants::{DEFAULT_ITERATIONS, MAX_LEGS_PER_RACE};

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of races to play out
    pub iterations: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Spread races across the rayon thread pool
    pub parallel: bool,

    /// Legs a single race may take before it is treated as stuck
    pub max_legs: usize,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            seed: None,
            parallel: true,
            max_legs: MAX_LEGS_PER_RACE,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Default settings with a different iteration count
    pub fn with_iterations(iterations: u32) -> Self {
        Self {
            iterations,
            ..Default::default()
        }
    }

    /// Seeded single-threaded config for repeatable results
    pub fn reproducible(iterations: u32, seed: u64) -> Self {
        Self {
            iterations,
            seed: Some(seed),
            parallel: false,
            verbosity: 0,
            ..Default::default()
        }
    }
}
