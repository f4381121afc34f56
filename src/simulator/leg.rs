//! Leg-by-leg resolution of a single race.

use super::dice::DiceSource;
use crate::board::{GameState, RoundResult};
use crate::core::constants::LAST_TRACK_INDEX;
use crate::core::error::{Result, SimError};

/// What happened in one leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegOutcome {
    pub result: RoundResult,
    /// A camel crossed the finish line during this leg.
    pub race_over: bool,
    /// Dice actually rolled; camels after the finishing move are skipped.
    pub dice_rolled: usize,
}

/// Plays one leg on `state` in place.
///
/// Every camel in the pool is processed once in the order the dice source
/// picks. After a camel crosses the finish line the remaining camels of the
/// leg stay where they are and no further dice are drawn. When the race goes
/// on, the pool is refilled for the next leg.
pub fn play_leg<D: DiceSource>(state: &mut GameState, dice: &mut D) -> Result<LegOutcome> {
    let mut order = state.take_unrolled_dice();
    dice.order_pool(&mut order);

    let mut race_over = false;
    let mut dice_rolled = 0;

    for camel in order {
        if race_over {
            log::trace!("{camel} holds on space {} (race over)", state.board().space_of(camel));
            continue;
        }

        let face = dice.roll(camel);
        dice_rolled += 1;

        let mv = state.board_mut().move_camel(camel, face)?;
        if mv.to > LAST_TRACK_INDEX {
            log::trace!("{camel} crossed the finish line on space {}", mv.to);
            race_over = true;
        }
    }

    let result = state.board().standings();
    if !race_over {
        state.refill_dice();
    }

    Ok(LegOutcome {
        result,
        race_over,
        dice_rolled,
    })
}

/// Plays a full race from `initial` and returns one [`RoundResult`] per leg,
/// the last one being the finishing leg. `initial` is cloned, never touched.
pub fn play_race<D: DiceSource>(
    initial: &GameState,
    dice: &mut D,
    max_legs: usize,
) -> Result<Vec<RoundResult>> {
    let mut state = initial.clone();
    let mut rounds = Vec::new();

    for _ in 0..max_legs {
        let leg = play_leg(&mut state, dice)?;
        rounds.push(leg.result);

        if leg.race_over {
            return Ok(rounds);
        }
    }

    Err(SimError::LegLimitExceeded(max_legs))
}
