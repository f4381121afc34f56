//! Integration test: outcome probabilities
//!
//! Runs the full Monte Carlo simulation and checks the shape of the output.

use camel_odds::board::{BoardSpace, GameState};
use camel_odds::core::constants::{MIN_BOARD_SPACES, NUM_CAMELS, PROBABILITY_EPSILON};
use camel_odds::simulator::{simulate, SimConfig, SimulatorOutput};
use camel_odds::{standard_opening, CamelColor, SimError};

fn assert_distribution(output: &SimulatorOutput) {
    for stats in [&output.next_turn_stats, &output.final_turn_stats] {
        assert_eq!(stats.len(), NUM_CAMELS);

        let total: f64 = stats.iter().map(|s| s.win_probability).sum();
        assert!((total - 1.0).abs() < PROBABILITY_EPSILON, "sum was {total}");

        for pair in stats.windows(2) {
            assert!(pair[0].win_probability >= pair[1].win_probability);
        }
        for camel in CamelColor::all() {
            assert!(stats.iter().any(|s| s.camel == camel));
        }
    }
}

#[test]
fn test_probabilities_sum_to_one() {
    let output = simulate(&standard_opening(), &SimConfig::reproducible(2_000, 7)).unwrap();
    assert_eq!(output.iteration_count, 2_000);
    assert_distribution(&output);
}

#[test]
fn test_parallel_run_sums_to_one() {
    let config = SimConfig {
        iterations: 2_000,
        seed: None,
        parallel: true,
        ..Default::default()
    };
    let output = simulate(&standard_opening(), &config).unwrap();
    assert_distribution(&output);
}

#[test]
fn test_same_seed_same_output() {
    let config = SimConfig::reproducible(1_000, 2024);
    let a = simulate(&standard_opening(), &config).unwrap();
    let b = simulate(&standard_opening(), &config).unwrap();
    assert_eq!(a.next_turn_stats, b.next_turn_stats);
    assert_eq!(a.final_turn_stats, b.final_turn_stats);
}

/// One camel sits on the last track space and only its die is left: it
/// crosses the line on its only roll, whatever the face.
#[test]
fn test_certain_winner() {
    let mut spaces = vec![BoardSpace::empty(); MIN_BOARD_SPACES];
    spaces[15].camels.push(CamelColor::Green);
    spaces[3].camels.extend([CamelColor::Orange, CamelColor::Yellow]);
    spaces[5].camels.extend([CamelColor::Blue, CamelColor::White]);
    let state = GameState::new(spaces, vec![CamelColor::Green]).unwrap();

    let output = simulate(&state, &SimConfig::reproducible(200, 3)).unwrap();

    assert_eq!(output.next_turn_stats[0].camel, CamelColor::Green);
    assert_eq!(output.final_turn_stats[0].camel, CamelColor::Green);
    assert!((output.next_turn_probability(CamelColor::Green) - 1.0).abs() < PROBABILITY_EPSILON);
    assert!((output.final_turn_probability(CamelColor::Green) - 1.0).abs() < PROBABILITY_EPSILON);
    assert!((output.avg_legs - 1.0).abs() < PROBABILITY_EPSILON);
    assert_distribution(&output);
}

/// With an empty pool the first snapshot is the board as given, so the
/// current leader is the certain next-turn leader.
#[test]
fn test_empty_pool_next_turn_is_current_leader() {
    let mut spaces = vec![BoardSpace::empty(); MIN_BOARD_SPACES];
    spaces[0].camels.extend([CamelColor::Orange, CamelColor::Yellow, CamelColor::Green]);
    spaces[2].camels.extend([CamelColor::White, CamelColor::Blue]);
    let state = GameState::new(spaces, Vec::new()).unwrap();

    let output = simulate(&state, &SimConfig::reproducible(300, 11)).unwrap();

    assert!((output.next_turn_probability(CamelColor::Blue) - 1.0).abs() < PROBABILITY_EPSILON);
    assert!(output.avg_legs >= 2.0);
    assert_distribution(&output);
}

#[test]
fn test_initial_state_not_mutated() {
    let initial = standard_opening();
    let before = initial.clone();
    simulate(&initial, &SimConfig::reproducible(100, 5)).unwrap();
    assert_eq!(initial, before);
}

#[test]
fn test_zero_iterations_is_an_error() {
    let err = simulate(&standard_opening(), &SimConfig::reproducible(0, 1)).unwrap_err();
    assert!(matches!(err, SimError::NoIterations));
}

#[test]
fn test_leg_guard_surfaces_as_error() {
    let config = SimConfig {
        max_legs: 1,
        ..SimConfig::reproducible(10, 1)
    };
    let err = simulate(&standard_opening(), &config).unwrap_err();
    assert!(matches!(err, SimError::LegLimitExceeded(1)));
}

#[test]
fn test_run_prints_report() {
    camel_odds::run(&standard_opening(), 200).unwrap();
}
