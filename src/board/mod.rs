//! Board model: spaces, camel stacks, desert tiles and the game state.

mod setup;
mod types;

pub use setup::{standard_opening, GameState};
pub use types::{Board, BoardSpace, CamelMove, CamelPosition, DesertTile, RoundResult};
