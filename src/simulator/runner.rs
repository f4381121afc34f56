//! Monte Carlo runner: plays many races and tallies who leads and who wins.

use super::config::SimConfig;
use super::dice::RandomDice;
use super::leg::play_race;
use super::report::{CamelStat, SimulatorOutput};
use crate::board::GameState;
use crate::camel::CamelColor;
use crate::core::constants::NUM_CAMELS;
use crate::core::error::{Result, SimError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::time::Instant;

/// Leaders of one finished race.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaceOutcome {
    /// Front camel after the first leg.
    pub next_turn_leader: CamelColor,
    /// Front camel when the race ended.
    pub winner: CamelColor,
    pub legs: usize,
}

/// Per-camel counters. Independent tallies merge without locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub next_turn: [u64; NUM_CAMELS],
    pub final_turn: [u64; NUM_CAMELS],
    pub total_legs: u64,
    pub races: u64,
}

impl Tally {
    pub fn record(&mut self, outcome: &RaceOutcome) {
        self.next_turn[outcome.next_turn_leader.index()] += 1;
        self.final_turn[outcome.winner.index()] += 1;
        self.total_legs += outcome.legs as u64;
        self.races += 1;
    }

    pub fn merge(mut self, other: Tally) -> Tally {
        for i in 0..NUM_CAMELS {
            self.next_turn[i] += other.next_turn[i];
            self.final_turn[i] += other.final_turn[i];
        }
        self.total_legs += other.total_legs;
        self.races += other.races;
        self
    }
}

/// RNG for race `run_idx`: `seed + run_idx` when seeded, fresh entropy otherwise.
fn race_rng(seed: Option<u64>, run_idx: u32) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Plays one race on its own copy of `initial`.
pub fn simulate_race(initial: &GameState, config: &SimConfig, run_idx: u32) -> Result<RaceOutcome> {
    let mut dice = RandomDice::new(race_rng(config.seed, run_idx));
    let rounds = play_race(initial, &mut dice, config.max_legs)?;

    // play_race only returns Ok with at least one round
    let first = &rounds[0];
    let last = &rounds[rounds.len() - 1];

    Ok(RaceOutcome {
        next_turn_leader: first.leader(),
        winner: last.leader(),
        legs: rounds.len(),
    })
}

/// Run the full simulation and return ranked probabilities.
pub fn simulate(initial: &GameState, config: &SimConfig) -> Result<SimulatorOutput> {
    if config.iterations == 0 {
        return Err(SimError::NoIterations);
    }

    if config.verbosity >= 1 {
        log::info!(
            "simulating {} races ({}, seed {:?})",
            config.iterations,
            if config.parallel { "parallel" } else { "sequential" },
            config.seed
        );
    }

    let start = Instant::now();

    let tally = if config.parallel {
        (0..config.iterations)
            .into_par_iter()
            .map(|run_idx| simulate_race(initial, config, run_idx))
            .try_fold(Tally::default, |mut tally, outcome| -> Result<Tally> {
                tally.record(&outcome?);
                Ok(tally)
            })
            .try_reduce(Tally::default, |a, b| Ok(a.merge(b)))?
    } else {
        let mut tally = Tally::default();
        for run_idx in 0..config.iterations {
            let outcome = simulate_race(initial, config, run_idx)?;
            if config.verbosity >= 2 {
                log::debug!(
                    "race {}/{}: {} led after leg 1, {} won after {} legs",
                    run_idx + 1,
                    config.iterations,
                    outcome.next_turn_leader,
                    outcome.winner,
                    outcome.legs
                );
            }
            tally.record(&outcome);
        }
        tally
    };

    let duration = start.elapsed();
    if config.verbosity >= 1 {
        log::info!("finished {} races in {:?}", tally.races, duration);
    }

    Ok(SimulatorOutput::from_tally(&tally, config.iterations, duration))
}

/// Turns counts into probabilities, highest first. Ties keep camel order.
pub fn rank(counts: &[u64; NUM_CAMELS], iterations: u32) -> Vec<CamelStat> {
    let mut stats: Vec<CamelStat> = CamelColor::all()
        .iter()
        .map(|&camel| CamelStat {
            camel,
            win_probability: counts[camel.index()] as f64 / iterations as f64,
        })
        .collect();

    stats.sort_by(|a, b| b.win_probability.total_cmp(&a.win_probability));
    stats
}
