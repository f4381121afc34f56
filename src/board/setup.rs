//! Game state construction, validation and loading.

use super::types::{Board, BoardSpace, DesertTile};
use crate::camel::CamelColor;
use crate::core::constants::{LAST_TRACK_INDEX, MIN_BOARD_SPACES, NUM_CAMELS};
use crate::core::error::{Result, SimError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A board plus the dice still waiting to be rolled this leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateFile", into = "GameStateFile")]
pub struct GameState {
    board: Board,
    unrolled_dice: Vec<CamelColor>,
}

/// On-disk layout of a [`GameState`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GameStateFile {
    #[serde(default)]
    unrolled_dice: Vec<CamelColor>,
    board: Vec<BoardSpace>,
}

impl TryFrom<GameStateFile> for GameState {
    type Error = SimError;

    fn try_from(file: GameStateFile) -> Result<Self> {
        GameState::new(file.board, file.unrolled_dice)
    }
}

impl From<GameState> for GameStateFile {
    fn from(state: GameState) -> Self {
        Self {
            unrolled_dice: state.unrolled_dice,
            board: state.board.spaces().to_vec(),
        }
    }
}

impl GameState {
    /// Validates and builds a game state. Fails on anything the simulator
    /// cannot resolve: missing or duplicate camels, a short board, camels
    /// already past the finish, bad or misplaced desert tiles.
    pub fn new(spaces: Vec<BoardSpace>, unrolled_dice: Vec<CamelColor>) -> Result<Self> {
        let locations = validate_spaces(&spaces)?;
        validate_dice(&unrolled_dice)?;

        log::debug!(
            "board validated: {} spaces, {} desert tiles, {} dice unrolled",
            spaces.len(),
            spaces.iter().filter(|s| s.desert_tile.is_some()).count(),
            unrolled_dice.len()
        );

        Ok(Self {
            board: Board::from_validated(spaces, locations),
            unrolled_dice,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn unrolled_dice(&self) -> &[CamelColor] {
        &self.unrolled_dice
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Empties the pool, handing back the dice for this leg.
    pub(crate) fn take_unrolled_dice(&mut self) -> Vec<CamelColor> {
        std::mem::take(&mut self.unrolled_dice)
    }

    /// Puts every die back in the pool for a new leg.
    pub(crate) fn refill_dice(&mut self) {
        self.unrolled_dice = CamelColor::all().to_vec();
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

fn validate_spaces(spaces: &[BoardSpace]) -> Result<[usize; NUM_CAMELS]> {
    if spaces.len() < MIN_BOARD_SPACES {
        return Err(SimError::BoardTooShort {
            found: spaces.len(),
            required: MIN_BOARD_SPACES,
        });
    }

    let mut locations: [Option<usize>; NUM_CAMELS] = [None; NUM_CAMELS];
    let mut last_tile: Option<usize> = None;

    for (idx, space) in spaces.iter().enumerate() {
        for &camel in &space.camels {
            if locations[camel.index()].is_some() {
                return Err(SimError::DuplicateCamel(camel));
            }
            if idx > LAST_TRACK_INDEX {
                return Err(SimError::CamelPastFinish { camel, space: idx });
            }
            locations[camel.index()] = Some(idx);
        }

        if let Some(tile) = space.desert_tile {
            validate_tile(idx, tile)?;
            // Adjacent tiles would let one move chain through two modifiers.
            if let Some(prev) = last_tile.filter(|&prev| prev + 1 == idx) {
                return Err(SimError::AdjacentDesertTiles(prev, idx));
            }
            last_tile = Some(idx);
        }
    }

    let mut resolved = [0; NUM_CAMELS];
    for camel in CamelColor::all() {
        resolved[camel.index()] = locations[camel.index()].ok_or(SimError::MissingCamel(camel))?;
    }
    Ok(resolved)
}

fn validate_tile(idx: usize, tile: DesertTile) -> Result<()> {
    if !tile.is_valid() {
        return Err(SimError::InvalidDesertTile {
            space: idx,
            value: tile.value,
        });
    }
    if idx > LAST_TRACK_INDEX {
        return Err(SimError::DesertTileOffTrack(idx));
    }
    Ok(())
}

fn validate_dice(dice: &[CamelColor]) -> Result<()> {
    let mut seen = [false; NUM_CAMELS];
    for &camel in dice {
        if seen[camel.index()] {
            return Err(SimError::DuplicateDie(camel));
        }
        seen[camel.index()] = true;
    }
    Ok(())
}

/// The opening layout: all five camels on the first three spaces, an oasis on
/// space 3, every die unrolled.
pub fn standard_opening() -> GameState {
    use CamelColor::*;

    let mut spaces = vec![BoardSpace::empty(); MIN_BOARD_SPACES];
    spaces[0] = BoardSpace::with_camels(&[Blue, Orange]);
    spaces[1] = BoardSpace::with_camels(&[Green, White]);
    spaces[2] = BoardSpace::with_camels(&[Yellow]);
    spaces[3] = BoardSpace::with_tile(DesertTile::oasis());

    let locations = [0, 2, 1, 0, 1];
    GameState {
        board: Board::from_validated(spaces, locations),
        unrolled_dice: vec![Blue, Green, Orange, White, Yellow],
    }
}
