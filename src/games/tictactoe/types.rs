//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 9;

/// One of the two sides at the table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Side {
    /// The search-driven opponent (maximizing player).
    Computer,
    /// The human side (minimizing player).
    User,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Computer => Side::User,
            Side::User => Side::Computer,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    Empty,
    /// Occupied by the computer.
    Computer,
    /// Occupied by the user.
    User,
}

impl Cell {
    /// Returns the side occupying this cell, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Computer => Some(Side::Computer),
            Cell::User => Some(Side::User),
        }
    }

    /// Returns true for an unoccupied cell.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Computer => Cell::Computer,
            Side::User => Cell::User,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain `Copy` values: every move produces a new board and
/// the original is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if a cell is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns a copy of this board with one cell replaced.
    ///
    /// Callers are expected to have validated `index`; see
    /// [`apply_move`](super::apply_move) for the checked version.
    pub(crate) fn with_cell(mut self, index: usize, cell: Cell) -> Self {
        self.cells[index] = cell;
        self
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Indices of the empty cells, ascending.
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
    }

    /// Number of cells held by `side`.
    pub fn count(&self, side: Side) -> usize {
        let target = Cell::from(side);
        self.cells.iter().filter(|&&cell| cell == target).count()
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Renders the board with the given glyphs.
    ///
    /// Empty squares show their index so a player can type it back.
    pub fn render(&self, symbols: &Symbols) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let glyph = match self.cells[index].side() {
                    Some(side) => symbols.glyph(side),
                    None => char::from(b'0' + index as u8),
                };
                result.push(glyph);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in &self.cells {
            let c = match cell {
                Cell::Empty => '.',
                Cell::Computer => 'C',
                Cell::User => 'U',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct BoardParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells: `C`/`O` computer, `U`/`X` user, `.`/`_`/`-` empty.
    ///
    /// Whitespace and `|` separators are ignored, so `"CC.|UU.|..."` works.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; BOARD_SIZE];
        let mut count = 0;

        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let cell = match ch.to_ascii_uppercase() {
                'C' | 'O' => Cell::Computer,
                'U' | 'X' => Cell::User,
                '.' | '_' | '-' => Cell::Empty,
                other => {
                    return Err(BoardParseError::new(format!(
                        "Unexpected character '{}' in board '{}'",
                        other, s
                    )));
                }
            };
            if count == BOARD_SIZE {
                return Err(BoardParseError::new(format!(
                    "Board '{}' has more than {} cells",
                    s, BOARD_SIZE
                )));
            }
            cells[count] = cell;
            count += 1;
        }

        if count != BOARD_SIZE {
            return Err(BoardParseError::new(format!(
                "Board '{}' has {} cells, expected {}",
                s, count, BOARD_SIZE
            )));
        }

        Ok(Self { cells })
    }
}

/// Glyphs used to draw each side.
///
/// Purely presentational: nothing in the rules or the search reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbols {
    /// Glyph for the user's cells.
    pub user: char,
    /// Glyph for the computer's cells.
    pub computer: char,
}

impl Symbols {
    /// Creates a symbol map.
    pub fn new(user: char, computer: char) -> Self {
        Self { user, computer }
    }

    /// Glyph for a side.
    pub fn glyph(&self, side: Side) -> char {
        match side {
            Side::User => self.user,
            Side::Computer => self.computer,
        }
    }

    /// Returns the map with the two glyphs exchanged.
    pub fn swapped(self) -> Self {
        Self {
            user: self.computer,
            computer: self.user,
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::new('X', 'O')
    }
}
