use crate::bitset::DigitSet;
use crate::board::{Cell, Digit};
use crate::errors::{InputError, ParseError};
use crate::solver::{self, Outcome};
use std::fmt;
use std::time::{Duration, Instant};

/// A 9×9 sudoku board.
///
/// Besides the cell contents, the board carries one candidate mask per row,
/// column and block: the set of digits not yet placed in that house.
/// [`is_placeable`](Self::is_placeable) is three bit tests against these
/// masks and [`place`](Self::place)/[`clear`](Self::clear) keep them current,
/// so the solver never rescans a house.
///
/// Every constructor validates its input. A `Board` therefore always
/// satisfies the sudoku constraint: no digit occurs twice within a row,
/// column or block, at any point of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [u8; 81],
    row_free: [DigitSet; 9],
    col_free: [DigitSet; 9],
    block_free: [DigitSet; 9],
}

impl Board {
    fn empty() -> Board {
        Board {
            cells: [0; 81],
            row_free: [DigitSet::ALL; 9],
            col_free: [DigitSet::ALL; 9],
            block_free: [DigitSet::ALL; 9],
        }
    }

    /// Creates a new board from a 9×9 grid of cell values, `0` marking an
    /// empty cell.
    ///
    /// This is the shape the front-ends decode from their JSON bodies and
    /// form fields. Values above `9` and clues that clash within a row,
    /// column or block are rejected here, before any search can run.
    pub fn from_grid(grid: [[u8; 9]; 9]) -> Result<Board, InputError> {
        let mut bytes = [0; 81];
        for (row, line) in grid.iter().enumerate() {
            bytes[row * 9..row * 9 + 9].copy_from_slice(line);
        }
        Board::from_bytes(bytes)
    }

    /// Creates a new board from 81 cell values in row-major order, `0`
    /// marking an empty cell.
    pub fn from_bytes(bytes: [u8; 81]) -> Result<Board, InputError> {
        let mut board = Board::empty();
        for (cell, &value) in Cell::all().zip(bytes.iter()) {
            if value == 0 {
                continue;
            }
            let digit = Digit::new_checked(value).ok_or(InputError::ValueOutOfRange {
                cell: cell.get(),
                value,
            })?;
            if !board.is_placeable(cell, digit) {
                return Err(InputError::ConflictingClues {
                    cell: cell.get(),
                    digit: value,
                });
            }
            board.place(cell, digit);
        }
        Ok(board)
    }

    /// Creates a new board from a slice of cell values in row-major order.
    ///
    /// Fails with [`InputError::WrongLength`] unless the slice contains
    /// exactly 81 values, then validates like [`from_bytes`](Self::from_bytes).
    pub fn from_bytes_slice(bytes: &[u8]) -> Result<Board, InputError> {
        if bytes.len() != 81 {
            return Err(InputError::WrongLength(bytes.len()));
        }
        let mut array = [0; 81];
        array.copy_from_slice(bytes);
        Board::from_bytes(array)
    }

    /// Parses a board from the line format: 81 cells from left to right, top
    /// to bottom, with `'0'`, `'.'` or `'_'` for empty cells. Anything after
    /// the 81st cell is treated as a comment if separated by whitespace.
    pub fn from_str_line(s: &str) -> Result<Board, ParseError> {
        let mut bytes = [0; 81];
        let mut n_cells: u8 = 0;
        for ch in s.chars() {
            if n_cells == 81 {
                if ch.is_whitespace() {
                    break;
                }
                return Err(ParseError::TooManyCells);
            }
            bytes[n_cells as usize] = match ch {
                '1'..='9' => ch as u8 - b'0',
                '0' | '.' | '_' => 0,
                _ => return Err(ParseError::InvalidEntry { cell: n_cells, ch }),
            };
            n_cells += 1;
        }
        if n_cells < 81 {
            return Err(ParseError::NotEnoughCells(n_cells));
        }
        Ok(Board::from_bytes(bytes)?)
    }

    /// Returns the digit in `cell`, `None` if the cell is empty.
    pub fn get(&self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.cells[cell.as_index()])
    }

    /// Checks whether `digit` can be entered into `cell` without clashing
    /// with another occurrence of the digit in the cell's row, column or
    /// block. Pure query, nothing is mutated.
    pub fn is_placeable(&self, cell: Cell, digit: Digit) -> bool {
        self.free_digits(cell).contains(digit)
    }

    // digits not yet used in any of the cell's three houses
    pub(crate) fn free_digits(&self, cell: Cell) -> DigitSet {
        self.row_free[cell.row().as_index()]
            & self.col_free[cell.col().as_index()]
            & self.block_free[cell.block().as_index()]
    }

    /// Enters `digit` into the empty cell `cell` and removes it from the
    /// candidate masks of the cell's row, column and block.
    ///
    /// The cell must be empty and the digit placeable there. Clue cells hold
    /// their digit from construction onwards and are never valid targets.
    pub fn place(&mut self, cell: Cell, digit: Digit) {
        debug_assert!(self.cells[cell.as_index()] == 0);
        debug_assert!(self.is_placeable(cell, digit));
        self.cells[cell.as_index()] = digit.get();
        self.row_free[cell.row().as_index()].remove(digit);
        self.col_free[cell.col().as_index()].remove(digit);
        self.block_free[cell.block().as_index()].remove(digit);
    }

    /// Empties `cell` and returns its digit to the candidate masks of the
    /// cell's row, column and block. Inverse of [`place`](Self::place).
    pub fn clear(&mut self, cell: Cell) {
        debug_assert!(self.cells[cell.as_index()] != 0);
        if let Some(digit) = self.get(cell) {
            self.cells[cell.as_index()] = 0;
            self.row_free[cell.row().as_index()].insert(digit);
            self.col_free[cell.col().as_index()].insert(digit);
            self.block_free[cell.block().as_index()].insert(digit);
        }
    }

    /// Returns an independent copy of the grid as 9 rows of cell values.
    ///
    /// Front-ends use this to echo the original puzzle back alongside the
    /// solution without aliasing the working board.
    pub fn to_grid(&self) -> [[u8; 9]; 9] {
        let mut grid = [[0; 9]; 9];
        for (row, line) in grid.iter_mut().enumerate() {
            line.copy_from_slice(&self.cells[row * 9..row * 9 + 9]);
        }
        grid
    }

    /// Returns an independent copy of the grid as 81 cell values in
    /// row-major order.
    pub fn to_bytes(&self) -> [u8; 81] {
        self.cells
    }

    /// Checks whether every cell is filled.
    ///
    /// The constraint invariant holds at all times, so a full board is a
    /// valid solution.
    pub fn is_solved(&self) -> bool {
        self.row_free.iter().all(|free| free.is_empty())
    }

    /// Number of filled cells.
    pub fn n_clues(&self) -> u8 {
        self.cells.iter().filter(|&&value| value != 0).count() as u8
    }

    /// Searches for a completion of this board.
    ///
    /// Returns the first solution found in row-major, ascending-digit search
    /// order, which makes the result deterministic: the same input always
    /// yields the same solution. Puzzles with several completions are
    /// accepted silently and yield whichever the search order reaches first.
    /// `self` is left untouched; the search runs on a working copy.
    pub fn solve(&self) -> Outcome {
        solver::solve(self, None)
    }

    /// Like [`solve`](Self::solve), but gives up once `deadline` has passed.
    ///
    /// The clock is polled every few thousand search nodes. On expiry the
    /// search unwinds with [`Outcome::Timeout`], which leaves satisfiability
    /// undetermined.
    pub fn solve_with_deadline(&self, deadline: Instant) -> Outcome {
        solver::solve(self, Some(deadline))
    }

    /// Like [`solve`](Self::solve), but bounds the search to roughly
    /// `timeout` from now.
    pub fn solve_with_timeout(&self, timeout: Duration) -> Outcome {
        self.solve_with_deadline(Instant::now() + timeout)
    }

    /// Returns a type that formats the board as a human readable block.
    pub fn display_block(&self) -> BlockDisplay<'_> {
        BlockDisplay(self)
    }
}

/// Prints the board in line format with `'.'` for empty cells.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &value in self.cells.iter() {
            match value {
                0 => f.write_str(".")?,
                _ => write!(f, "{}", value)?,
            }
        }
        Ok(())
    }
}

/// Formats a [`Board`] as 9 rows with gaps between the 3×3 blocks and `'_'`
/// for empty cells.
pub struct BlockDisplay<'a>(&'a Board);

impl fmt::Display for BlockDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (cell, &value) in self.0.cells.iter().enumerate() {
            match (cell / 9, cell % 9) {
                (_, 3) | (_, 6) => f.write_str(" ")?,    // separate blocks in columns
                (3, 0) | (6, 0) => f.write_str("\n\n")?, // separate blocks in rows
                (_, 0) if cell != 0 => f.write_str("\n")?,
                _ => {}
            }
            match value {
                0 => f.write_str("_")?,
                _ => write!(f, "{}", value)?,
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Board;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    // The wire form is the 9×9 grid of cell values the front-ends exchange.
    // Deserialization funnels through the validating constructor, so a
    // corrupt payload is a deserialization error, not an invalid board.
    impl Serialize for Board {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.to_grid().serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Board {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let grid = <[[u8; 9]; 9]>::deserialize(deserializer)?;
            Board::from_grid(grid).map_err(D::Error::custom)
        }
    }
}
