//! Sources of dice outcomes: roll order within a leg and die faces.

use crate::camel::CamelColor;
use crate::core::constants::{DIE_MAX, DIE_MIN};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;

/// Supplies the randomness the leg simulator consumes.
pub trait DiceSource {
    /// Puts this leg's pool into roll order.
    fn order_pool(&mut self, pool: &mut [CamelColor]);

    /// Rolls the die belonging to `camel`.
    fn roll(&mut self, camel: CamelColor) -> u8;
}

/// Fair dice backed by any RNG: uniform shuffle, faces uniform in 1..=3.
pub struct RandomDice<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomDice<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DiceSource for RandomDice<R> {
    fn order_pool(&mut self, pool: &mut [CamelColor]) {
        pool.shuffle(&mut self.rng);
    }

    fn roll(&mut self, _camel: CamelColor) -> u8 {
        self.rng.gen_range(DIE_MIN..=DIE_MAX)
    }
}

/// Replays a fixed script of leg orders and die faces.
///
/// Orders are consumed one per leg; once they run out the pool is rolled in
/// the order it is held. Faces are consumed one per roll and cycle back to
/// the start when exhausted (an empty script always rolls the minimum face).
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    orders: VecDeque<Vec<CamelColor>>,
    faces: Vec<u8>,
    next_face: usize,
}

impl ScriptedDice {
    pub fn new(orders: Vec<Vec<CamelColor>>, faces: Vec<u8>) -> Self {
        Self {
            orders: orders.into(),
            faces,
            next_face: 0,
        }
    }

    /// Faces only; pools keep their given order.
    pub fn faces(faces: Vec<u8>) -> Self {
        Self::new(Vec::new(), faces)
    }

    pub fn rolls_made(&self) -> usize {
        self.next_face
    }
}

impl DiceSource for ScriptedDice {
    fn order_pool(&mut self, pool: &mut [CamelColor]) {
        let Some(order) = self.orders.pop_front() else {
            return;
        };
        if is_permutation(&order, pool) {
            pool.copy_from_slice(&order);
        } else {
            log::warn!("scripted order {order:?} is not a permutation of pool {pool:?}, ignoring");
        }
    }

    fn roll(&mut self, _camel: CamelColor) -> u8 {
        if self.faces.is_empty() {
            return DIE_MIN;
        }
        let face = self.faces[self.next_face % self.faces.len()];
        self.next_face += 1;
        face
    }
}

/// Same camels, each exactly once, in any order.
fn is_permutation(order: &[CamelColor], pool: &[CamelColor]) -> bool {
    let mut lhs = order.to_vec();
    let mut rhs = pool.to_vec();
    lhs.sort();
    rhs.sort();
    lhs == rhs && lhs.windows(2).all(|w| w[0] != w[1])
}
