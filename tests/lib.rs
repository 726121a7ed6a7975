use sudoku_engine::{Board, Cell, Col, Digit, InputError, Outcome, Row};

// The classic sample puzzle every front-end ships as its default, with its
// unique completion.
static SAMPLE_PUZZLE: &str =
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
static SAMPLE_SOLUTION: &str =
    "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

static SOLVABLE_PUZZLES: &[&str] = &[
    SAMPLE_PUZZLE,
    "...2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...",
    "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..",
    "020000600008020050500060020060000093003905100790000080050090004010070300006000010",
];

fn assert_valid_solution(puzzle: &Board, solution: &Board) {
    assert!(solution.is_solved());
    assert_eq!(solution.n_clues(), 81);

    let puzzle = puzzle.to_grid();
    let solved = solution.to_grid();

    // clues are never overwritten
    for row in 0..9 {
        for col in 0..9 {
            if puzzle[row][col] != 0 {
                assert_eq!(puzzle[row][col], solved[row][col]);
            }
        }
    }

    // every row, column and block is a permutation of 1..=9
    for i in 0..9 {
        let mut row_seen = [false; 10];
        let mut col_seen = [false; 10];
        let mut block_seen = [false; 10];
        for j in 0..9 {
            row_seen[solved[i][j] as usize] = true;
            col_seen[solved[j][i] as usize] = true;
            block_seen[solved[i / 3 * 3 + j / 3][i % 3 * 3 + j % 3] as usize] = true;
        }
        assert_eq!(row_seen[1..], [true; 9]);
        assert_eq!(col_seen[1..], [true; 9]);
        assert_eq!(block_seen[1..], [true; 9]);
    }
}

#[test]
fn solves_the_sample_puzzle() {
    let board = Board::from_str_line(SAMPLE_PUZZLE).unwrap();
    let solution = board.solve().solution().unwrap();

    assert_eq!(solution.to_string(), SAMPLE_SOLUTION);
    assert_eq!(solution.to_grid()[0], [5, 3, 4, 6, 7, 8, 9, 1, 2]);
}

#[test]
fn solutions_are_valid_and_preserve_clues() {
    for line in SOLVABLE_PUZZLES {
        let board = Board::from_str_line(line).unwrap();
        let solution = board
            .solve()
            .solution()
            .unwrap_or_else(|| panic!("no solution found for {}", line));
        assert_valid_solution(&board, &solution);
    }
}

#[test]
fn solving_leaves_the_input_untouched() {
    let board = Board::from_str_line(SAMPLE_PUZZLE).unwrap();
    let before = board.clone();

    board.solve().solution().unwrap();
    assert_eq!(board, before);
}

#[test]
fn repeated_solves_return_the_same_solution() {
    for line in SOLVABLE_PUZZLES {
        let board = Board::from_str_line(line).unwrap();
        assert_eq!(board.solve(), board.solve());
    }
}

#[test]
fn already_solved_board_is_returned_unchanged() {
    let solved = Board::from_str_line(SAMPLE_SOLUTION).unwrap();
    assert_eq!(solved.solve(), Outcome::Solved(solved.clone()));
}

#[test]
fn empty_board_has_a_solution() {
    let board = Board::from_bytes([0; 81]).unwrap();
    let solution = board.solve().solution().unwrap();
    assert_valid_solution(&board, &solution);
}

#[test]
fn duplicate_clues_never_reach_the_search() {
    // two 5s in the first row
    let mut grid = [[0; 9]; 9];
    grid[0][0] = 5;
    grid[0][4] = 5;

    assert_eq!(
        Board::from_grid(grid),
        Err(InputError::ConflictingClues { cell: 4, digit: 5 })
    );
}

#[test]
fn unsatisfiable_puzzles_are_reported_not_solved() {
    // valid clues, but one empty cell is left without any candidate:
    // its row needs a digit its column already has
    let lines = [
        // (0,0) needs the 1 that sits right below it
        String::from(".234567891") + &".".repeat(71),
        // (0,8) needs the 9 at the bottom of its block
        String::from("12345678.........9") + &".".repeat(63),
    ];
    for line in &lines {
        let board = Board::from_str_line(line).unwrap();
        let before = board.to_bytes();

        assert_eq!(board.solve(), Outcome::Unsatisfiable);
        assert_eq!(board.to_bytes(), before);
    }
}

#[test]
fn clue_cells_refuse_their_own_digit_twice() {
    let board = Board::from_str_line(SAMPLE_PUZZLE).unwrap();

    // 5 sits in the top-left corner; nothing else in its row may take it
    for col in 1..9 {
        let cell = Cell::from_row_col(Row::new(0), Col::new(col));
        assert!(!board.is_placeable(cell, Digit::new(5)));
    }
}
