//! Errors for board construction and parsing
#[cfg(doc)]
use crate::Board;

/// Error for the [`Board`] constructors.
///
/// All input validation happens eagerly while the board is built; a corrupt
/// grid is rejected here and never reaches the solver.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum InputError {
    /// Input does not contain exactly 81 cells.
    #[error("expected 81 cells, found {0}")]
    WrongLength(usize),
    /// A cell contains a value outside of `0..=9`.
    #[error("cell {cell} contains {value}, allowed values are 0..=9")]
    ValueOutOfRange {
        /// Cell number from 0..=80 in row-major order.
        cell: u8,
        /// The offending value.
        value: u8,
    },
    /// A digit occurs twice within a row, column or block.
    #[error("the clue {digit} in cell {cell} repeats a clue in its row, column or block")]
    ConflictingClues {
        /// Cell number of the later of the two clashing clues, row-major.
        cell: u8,
        /// The duplicated digit.
        digit: u8,
    },
}

/// Error for [`Board::from_str_line`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseError {
    /// Accepted cell values are the digits `1`-`9` and `'0'`, `'.'` or `'_'`
    /// for empty cells.
    #[error("cell {cell} contains invalid character '{ch}'")]
    InvalidEntry {
        /// Cell number from 0..=80, 0..=8 for the first row, 9..=17 for the second and so on.
        cell: u8,
        /// The parsed invalid char.
        ch: char,
    },
    /// Input ended after fewer than 81 cells.
    #[error("line contains {0} cells instead of required 81")]
    NotEnoughCells(u8),
    /// More than 81 cells supplied, or the trailing comment is missing its
    /// whitespace delimiter.
    #[error("line contains more than 81 cells or is missing the comment delimiter")]
    TooManyCells,
    /// The cells parsed, but the clues clash.
    #[error(transparent)]
    Invalid(#[from] InputError),
}
