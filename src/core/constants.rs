// Board geometry
pub const NUM_TRACK_SPACES: usize = 16;
pub const LAST_TRACK_INDEX: usize = NUM_TRACK_SPACES - 1;
pub const OVERFLOW_SPACES: usize = 3; // max die face past the finish line
pub const MIN_BOARD_SPACES: usize = NUM_TRACK_SPACES + OVERFLOW_SPACES;

// Camels and dice
pub const NUM_CAMELS: usize = 5;
pub const DIE_MIN: u8 = 1;
pub const DIE_MAX: u8 = 3;

// Simulation
pub const DEFAULT_ITERATIONS: u32 = 10_000;
pub const MAX_LEGS_PER_RACE: usize = 100;
pub const PROBABILITY_EPSILON: f64 = 1e-9;
