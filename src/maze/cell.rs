use crossterm::style::{Color, Stylize};

use std::fmt;

/// Occupancy state of a single grid unit.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Wall material, the initial state of every unit.
    #[default]
    Filled,
    /// Carved open space.
    Empty,
}

impl Unit {
    pub const FILLED: Unit = Unit::Filled;
    pub const EMPTY: Unit = Unit::Empty;
    /// The width of each unit when rendered, in character widths.
    pub const UNIT_WIDTH: u16 = 2;

    pub fn is_filled(self) -> bool {
        self == Unit::Filled
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Unit::Filled => "██".with(Color::DarkGrey),
            Unit::Empty => "  ".with(Color::Reset),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Unit::UNIT_WIDTH as usize,
                "Each unit must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}
