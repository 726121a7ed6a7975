//! Backtracking search over the empty cells of a board
//!
//! The search visits empty cells in row-major order and tries the candidate
//! digits of each cell in ascending order, undoing a placement whenever the
//! rest of the board can't be completed from it. That fixed order makes the
//! solver deterministic: the same input always produces the same solution,
//! which also pins down *which* solution a puzzle with several completions
//! yields.
//!
//! The search is a plain depth-first recursion, one frame per empty cell,
//! at most 81 deep. Each invocation works on its own copy of the board, so
//! concurrent solves never share mutable state.

use crate::board::{Board, Cell};
use std::time::Instant;

/// Result of a solve call.
///
/// `Unsatisfiable` and `Timeout` are expected outcomes, not failures: the
/// solver reports everything through its return value and leaves it to the
/// front-end to decide what the user sees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The first completion found in search order.
    Solved(Board),
    /// Exhaustive search finished without finding a completion.
    Unsatisfiable,
    /// The deadline expired before the search finished.
    ///
    /// Unlike [`Unsatisfiable`](Outcome::Unsatisfiable) this leaves the
    /// satisfiability of the puzzle unknown.
    Timeout,
}

impl Outcome {
    /// Returns the solved board, if one was found.
    pub fn solution(self) -> Option<Board> {
        match self {
            Outcome::Solved(board) => Some(board),
            Outcome::Unsatisfiable | Outcome::Timeout => None,
        }
    }

    /// Checks whether a solution was found.
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }
}

// Poll the clock only once in a while, a syscall per node would dominate
// the search.
const DEADLINE_POLL_INTERVAL: u32 = 1 << 12;

pub(crate) fn solve(board: &Board, deadline: Option<Instant>) -> Outcome {
    // The caller keeps the original board, all placements go into a working
    // copy. Cells filled at this point are the clues and are never touched.
    let mut work = board.clone();
    let empty_cells: Vec<Cell> = Cell::all().filter(|&cell| work.get(cell).is_none()).collect();

    let mut search = Search {
        board: &mut work,
        empty_cells: &empty_cells,
        deadline,
        nodes: 0,
    };
    match search.fill(0) {
        Status::Solved => Outcome::Solved(work),
        Status::Exhausted => Outcome::Unsatisfiable,
        Status::Expired => Outcome::Timeout,
    }
}

enum Status {
    Solved,
    Exhausted,
    Expired,
}

struct Search<'a> {
    board: &'a mut Board,
    empty_cells: &'a [Cell],
    deadline: Option<Instant>,
    nodes: u32,
}

impl Search<'_> {
    // Tries to fill `empty_cells[depth..]`. On `Exhausted` every placement
    // made below this frame has been undone; on `Solved` the board is
    // complete; on `Expired` it is abandoned mid-search.
    fn fill(&mut self, depth: usize) -> Status {
        let cell = match self.empty_cells.get(depth) {
            Some(&cell) => cell,
            None => return Status::Solved,
        };

        if self.expired() {
            return Status::Expired;
        }

        // lowest-bit iteration tries the digits in ascending order
        for digit in self.board.free_digits(cell) {
            self.board.place(cell, digit);
            match self.fill(depth + 1) {
                Status::Exhausted => self.board.clear(cell),
                done => return done,
            }
        }
        Status::Exhausted
    }

    fn expired(&mut self) -> bool {
        let deadline = match self.deadline {
            Some(deadline) => deadline,
            None => return false,
        };
        let poll = self.nodes % DEADLINE_POLL_INTERVAL == 0;
        self.nodes = self.nodes.wrapping_add(1);
        poll && Instant::now() >= deadline
    }
}
