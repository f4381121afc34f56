//! Monte Carlo race simulator.
//!
//! Plays thousands of races from a given board to estimate:
//! - which camel leads once the current leg is over (next turn)
//! - which camel wins the race (final turn)
//!
//! A race is resolved leg by leg in [`leg`]; all randomness comes through a
//! [`DiceSource`] so single races can be seeded or scripted.

mod config;
mod dice;
mod leg;
mod report;
mod runner;

pub use config::SimConfig;
pub use dice::{DiceSource, RandomDice, ScriptedDice};
pub use leg::{play_leg, play_race, LegOutcome};
pub use report::{format_percent, rounds_to_json, CamelStat, SimulatorOutput};
pub use runner::{rank, simulate, simulate_race, RaceOutcome, Tally};

use crate::board::GameState;
use crate::core::error::Result;

/// Simulate `iterations` races from `initial` and print the colored report.
pub fn run(initial: &GameState, iterations: u32) -> Result<()> {
    let config = SimConfig::with_iterations(iterations);
    let output = simulate(initial, &config)?;
    println!("{}", output.to_text(true));
    Ok(())
}
