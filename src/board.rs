//! Board grid and chip value types.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Visual color of a chip.
///
/// `Transparent` is reserved for the "no chip" sentinel returned by
/// speculative queries; the other colors are available to players.
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
    strum::EnumIter,
)]
pub enum ChipColor {
    /// No visible color, used by the sentinel chip.
    Transparent,
    /// Red.
    Red,
    /// Blue.
    Blue,
    /// Yellow.
    Yellow,
    /// Green.
    Green,
    /// Orange.
    Orange,
    /// Purple.
    Purple,
    /// Pink.
    Pink,
    /// Teal.
    Teal,
    /// Brown.
    Brown,
    /// Black.
    Black,
}

impl ChipColor {
    /// Returns true for the sentinel color.
    pub fn is_transparent(self) -> bool {
        matches!(self, ChipColor::Transparent)
    }
}

/// A colored token occupying a board cell once dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chip {
    color: ChipColor,
}

impl Chip {
    /// Creates a chip of the given color.
    pub fn new(color: ChipColor) -> Self {
        Self { color }
    }

    /// The transparent sentinel chip returned for empty or out-of-range cells.
    pub fn no_chip() -> Self {
        Self {
            color: ChipColor::Transparent,
        }
    }

    /// Returns the chip's color.
    pub fn color(&self) -> ChipColor {
        self.color
    }
}

/// A cell coordinate on the board. Row 0 is the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index, counted from the bottom.
    pub row: usize,
    /// Column index, counted from the left.
    pub column: usize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Error that can occur when dropping a chip on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The column index is outside the board.
    #[display("Column {} is out of range", _0)]
    ColumnOutOfRange(usize),

    /// Every cell of the column is occupied.
    #[display("Column {} is full", _0)]
    ColumnFull(usize),
}

impl std::error::Error for BoardError {}

/// A `rows x columns` grid of cells, each holding at most one chip.
///
/// Dimensions are fixed at construction. Chips enter the grid through
/// [`Board::drop_chip`] only, which fills the lowest empty row of a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    columns: usize,
    /// Cells in row-major order, bottom row first.
    cells: Vec<Option<Chip>>,
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![None; rows * columns],
        }
    }

    fn index(&self, position: Position) -> usize {
        position.row * self.columns + position.column
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    pub fn position_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Returns the chip at `position`.
    ///
    /// Empty and out-of-range cells both yield the transparent sentinel,
    /// so callers can probe speculatively without bounds checks.
    pub fn chip_at(&self, position: Position) -> Chip {
        if position.row >= self.rows || position.column >= self.columns {
            return Chip::no_chip();
        }
        self.cells[self.index(position)].unwrap_or_else(Chip::no_chip)
    }

    /// A column is full when its topmost row is occupied.
    pub fn is_column_full(&self, column: usize) -> bool {
        if self.rows == 0 || column >= self.columns {
            return true;
        }
        self.cells[self.index(Position {
            row: self.rows - 1,
            column,
        })]
        .is_some()
    }

    /// Places `chip` in the lowest empty row of `column` and returns the
    /// landing position. Exactly one cell goes from empty to occupied.
    #[instrument(skip(self))]
    pub fn drop_chip(&mut self, chip: Chip, column: usize) -> Result<Position, BoardError> {
        if column >= self.columns {
            return Err(BoardError::ColumnOutOfRange(column));
        }

        for row in 0..self.rows {
            let position = Position { row, column };
            let index = self.index(position);
            if self.cells[index].is_none() {
                self.cells[index] = Some(chip);
                return Ok(position);
            }
        }

        Err(BoardError::ColumnFull(column))
    }

    /// Clears one cell. Undo support for [`Board::drop_chip`].
    pub(crate) fn remove_chip(&mut self, position: Position) {
        if position.row < self.rows && position.column < self.columns {
            let index = self.index(position);
            self.cells[index] = None;
        }
    }
}
