//! Camel Odds - Monte Carlo predictor for camel race board games
//!
//! Given a board (camel stacks, desert tiles and the dice still to roll this
//! leg) the simulator estimates each camel's chance to lead after the current
//! leg and to win the race.

pub mod board;
pub mod build_info;
pub mod camel;
pub mod core;
pub mod simulator;

pub use board::{standard_opening, GameState};
pub use camel::CamelColor;
pub use crate::core::error::{Result, SimError};
pub use simulator::{run, simulate, SimConfig, SimulatorOutput};
