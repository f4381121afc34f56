//! Board, spaces, desert tiles and round snapshots.

use crate::camel::CamelColor;
use crate::core::constants::NUM_CAMELS;
use crate::core::error::{Result, SimError};
use serde::{Deserialize, Serialize};

/// A +1 (oasis) or -1 (mirage) modifier on a track space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DesertTile {
    pub value: i8,
}

impl DesertTile {
    pub fn oasis() -> Self {
        Self { value: 1 }
    }

    pub fn mirage() -> Self {
        Self { value: -1 }
    }

    pub fn is_valid(&self) -> bool {
        self.value == 1 || self.value == -1
    }
}

/// One space on the track. `camels` is bottom-to-top: the last entry is the
/// camel on top of the stack.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardSpace {
    #[serde(default)]
    pub camels: Vec<CamelColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desert_tile: Option<DesertTile>,
}

impl BoardSpace {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_camels(camels: &[CamelColor]) -> Self {
        Self {
            camels: camels.to_vec(),
            desert_tile: None,
        }
    }

    pub fn with_tile(tile: DesertTile) -> Self {
        Self {
            camels: Vec::new(),
            desert_tile: Some(tile),
        }
    }
}

/// Where a camel sits in a [`RoundResult`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CamelPosition {
    pub camel: CamelColor,
    pub space: usize,
}

/// Standings after one leg, furthest-advanced camel first. Camels sharing a
/// space are listed top of the stack first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundResult {
    positions: Vec<CamelPosition>,
}

impl RoundResult {
    pub fn positions(&self) -> &[CamelPosition] {
        &self.positions
    }

    /// Camel in front. A round result always lists all five camels.
    pub fn leader(&self) -> CamelColor {
        self.positions[0].camel
    }

    pub fn space_of(&self, camel: CamelColor) -> Option<usize> {
        self.positions
            .iter()
            .find(|p| p.camel == camel)
            .map(|p| p.space)
    }
}

/// Result of moving one camel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CamelMove {
    pub from: usize,
    pub to: usize,
    /// The moving camel followed by everything that rode on top of it.
    pub carried: Vec<CamelColor>,
}

/// The track plus a camel -> space index kept in step with the stacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    spaces: Vec<BoardSpace>,
    locations: [usize; NUM_CAMELS],
}

impl Board {
    /// Builds the location index. Callers must have validated `spaces`
    /// (see `board::setup`): every camel present exactly once.
    pub(crate) fn from_validated(
        spaces: Vec<BoardSpace>,
        locations: [usize; NUM_CAMELS],
    ) -> Self {
        Self { spaces, locations }
    }

    pub fn spaces(&self) -> &[BoardSpace] {
        &self.spaces
    }

    pub fn space_of(&self, camel: CamelColor) -> usize {
        self.locations[camel.index()]
    }

    /// Moves `camel` forward `steps` spaces, carrying every camel stacked on
    /// top of it, and applies the desert tile on the landing space (once).
    /// The carried group lands on top of whatever already occupies the
    /// destination.
    pub fn move_camel(&mut self, camel: CamelColor, steps: u8) -> Result<CamelMove> {
        let from = self.space_of(camel);
        let out_of_range = |to: Option<usize>| SimError::DestinationOutOfRange {
            camel,
            from,
            steps: steps as i32,
            to,
        };

        let mut to = from + steps as usize;
        let tile = self.spaces.get(to).ok_or_else(|| out_of_range(Some(to)))?.desert_tile;
        if let Some(tile) = tile {
            let shifted = to as i64 + tile.value as i64;
            if shifted < 0 || shifted as usize >= self.spaces.len() {
                return Err(out_of_range(usize::try_from(shifted).ok()));
            }
            to = shifted as usize;
        }

        let stack = &mut self.spaces[from].camels;
        let height = stack
            .iter()
            .position(|&c| c == camel)
            .ok_or(SimError::MissingCamel(camel))?;
        let carried = stack.split_off(height);

        for &rider in &carried {
            self.locations[rider.index()] = to;
        }
        self.spaces[to].camels.extend_from_slice(&carried);

        log::trace!("{camel} rolled {steps}: {from} -> {to} carrying {carried:?}");

        Ok(CamelMove { from, to, carried })
    }

    /// Snapshot of the current standings, highest space first and top of
    /// each stack first.
    pub fn standings(&self) -> RoundResult {
        let positions = self
            .spaces
            .iter()
            .enumerate()
            .rev()
            .flat_map(|(space, s)| {
                s.camels
                    .iter()
                    .rev()
                    .map(move |&camel| CamelPosition { camel, space })
            })
            .collect();

        RoundResult { positions }
    }

    /// Checks that the stacks and the location index agree.
    pub fn is_consistent(&self) -> bool {
        let on_board: usize = self.spaces.iter().map(|s| s.camels.len()).sum();
        on_board == NUM_CAMELS
            && CamelColor::all().iter().all(|&camel| {
                self.spaces
                    .get(self.space_of(camel))
                    .is_some_and(|s| s.camels.contains(&camel))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GameState;
    use crate::core::constants::MIN_BOARD_SPACES;
    use CamelColor::*;

    fn board_with(
        placements: &[(usize, &[CamelColor])],
        tiles: &[(usize, DesertTile)],
    ) -> Board {
        let mut spaces = vec![BoardSpace::empty(); MIN_BOARD_SPACES];
        for &(idx, camels) in placements {
            spaces[idx].camels = camels.to_vec();
        }
        for &(idx, tile) in tiles {
            spaces[idx].desert_tile = Some(tile);
        }
        GameState::new(spaces, Vec::new()).unwrap().board().clone()
    }

    #[test]
    fn test_lone_camel_moves_by_die() {
        let mut board = board_with(
            &[(0, &[Orange, Yellow, Green, Blue]), (2, &[White])],
            &[],
        );
        let mv = board.move_camel(White, 3).unwrap();
        assert_eq!(mv.from, 2);
        assert_eq!(mv.to, 5);
        assert_eq!(board.space_of(White), 5);
        assert_eq!(board.spaces()[5].camels, vec![White]);
        assert!(board.spaces()[2].camels.is_empty());
        assert!(board.is_consistent());
    }

    #[test]
    fn test_camel_carries_stack_above_it() {
        let mut board = board_with(
            &[(1, &[Orange, Yellow, Green]), (3, &[Blue, White])],
            &[],
        );
        let mv = board.move_camel(Yellow, 2).unwrap();

        assert_eq!(mv.carried, vec![Yellow, Green]);
        assert_eq!(board.spaces()[1].camels, vec![Orange]);
        assert_eq!(board.spaces()[3].camels, vec![Blue, White, Yellow, Green]);
        assert_eq!(board.space_of(Green), 3);
        assert!(board.is_consistent());
    }

    #[test]
    fn test_oasis_pushes_forward() {
        let mut board = board_with(
            &[(0, &[Orange, Yellow, Green, Blue, White])],
            &[(2, DesertTile::oasis())],
        );
        let mv = board.move_camel(White, 2).unwrap();
        assert_eq!(mv.to, 3);
    }

    #[test]
    fn test_mirage_pulls_back() {
        let mut board = board_with(
            &[(0, &[Orange, Yellow, Green, Blue, White])],
            &[(2, DesertTile::mirage())],
        );
        let mv = board.move_camel(White, 2).unwrap();
        assert_eq!(mv.to, 1);
        assert_eq!(board.space_of(White), 1);
    }

    #[test]
    fn test_mirage_back_onto_own_space_keeps_stack() {
        let mut board = board_with(
            &[(4, &[Orange, Yellow, Green, Blue, White])],
            &[(5, DesertTile::mirage())],
        );
        board.move_camel(Green, 1).unwrap();
        assert_eq!(board.spaces()[4].camels, vec![Orange, Yellow, Green, Blue, White]);
        assert!(board.is_consistent());
    }

    #[test]
    fn test_standings_order_top_of_stack_first() {
        let board = board_with(
            &[(2, &[Orange, Yellow]), (5, &[Green]), (0, &[Blue, White])],
            &[],
        );
        let order: Vec<CamelColor> = board
            .standings()
            .positions()
            .iter()
            .map(|p| p.camel)
            .collect();
        assert_eq!(order, vec![Green, Yellow, Orange, White, Blue]);
        assert_eq!(board.standings().leader(), Green);
    }

    #[test]
    fn test_move_past_board_is_error() {
        let mut spaces = vec![BoardSpace::empty(); MIN_BOARD_SPACES];
        spaces[0].camels = vec![Orange, Yellow, Green, Blue, White];
        let mut board = Board::from_validated(spaces, [0; NUM_CAMELS]);
        let err = board.move_camel(White, 30).unwrap_err();
        assert!(matches!(err, SimError::DestinationOutOfRange { .. }));
    }
}
