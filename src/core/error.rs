//! Error type for board setup and simulation.

use crate::camel::CamelColor;
use thiserror::Error;

/// Everything that can go wrong. All variants are contract violations in the
/// input or configuration; none are retried.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("board has {found} spaces, need at least {required} (16 track + 3 overflow)")]
    BoardTooShort { found: usize, required: usize },

    #[error("camel {0} appears more than once on the board")]
    DuplicateCamel(CamelColor),

    #[error("camel {0} is missing from the board")]
    MissingCamel(CamelColor),

    #[error("camel {camel} starts on space {space}, past the finish line")]
    CamelPastFinish { camel: CamelColor, space: usize },

    #[error("die for {0} is listed more than once in the unrolled pool")]
    DuplicateDie(CamelColor),

    #[error("desert tile on space {space} has value {value}, expected +1 or -1")]
    InvalidDesertTile { space: usize, value: i8 },

    #[error("desert tile on space {0} is not on a playable track space")]
    DesertTileOffTrack(usize),

    #[error("desert tiles on spaces {0} and {1} are adjacent")]
    AdjacentDesertTiles(usize, usize),

    #[error("{camel} on space {from} moving {steps} lands off the board (index {to:?})")]
    DestinationOutOfRange {
        camel: CamelColor,
        from: usize,
        steps: i32,
        to: Option<usize>,
    },

    #[error("race did not finish within {0} legs")]
    LegLimitExceeded(usize),

    #[error("iteration count must be at least 1")]
    NoIterations,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid board JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_camel() {
        let err = SimError::DuplicateCamel(CamelColor::Blue);
        assert_eq!(err.to_string(), "camel Blue appears more than once on the board");
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("not json");
        let err: SimError = parse.unwrap_err().into();
        assert!(matches!(err, SimError::Json(_)));
    }
}
