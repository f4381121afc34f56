use crate::core::constants::NUM_CAMELS;
use crossterm::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five racing camels. Declaration order is the canonical order used for
/// tallies and tie-breaks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CamelColor {
    Orange,
    Yellow,
    Green,
    Blue,
    White,
}

impl CamelColor {
    pub const ALL: [CamelColor; NUM_CAMELS] = [
        CamelColor::Orange,
        CamelColor::Yellow,
        CamelColor::Green,
        CamelColor::Blue,
        CamelColor::White,
    ];

    pub fn all() -> [CamelColor; NUM_CAMELS] {
        Self::ALL
    }

    pub fn index(&self) -> usize {
        match self {
            CamelColor::Orange => 0,
            CamelColor::Yellow => 1,
            CamelColor::Green => 2,
            CamelColor::Blue => 3,
            CamelColor::White => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CamelColor::Orange => "Orange",
            CamelColor::Yellow => "Yellow",
            CamelColor::Green => "Green",
            CamelColor::Blue => "Blue",
            CamelColor::White => "White",
        }
    }

    /// Terminal color for report output. The orange piece renders red.
    pub fn terminal_color(&self) -> Color {
        match self {
            CamelColor::Orange => Color::Red,
            CamelColor::Yellow => Color::Yellow,
            CamelColor::Green => Color::Green,
            CamelColor::Blue => Color::Blue,
            CamelColor::White => Color::White,
        }
    }
}

impl fmt::Display for CamelColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
