use sudoku_engine::{Board, Outcome};

fn main() {
    // the sample puzzle the front-ends preload
    let line = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

    let board = Board::from_str_line(line).unwrap();
    println!("{}\n", board.display_block());

    match board.solve() {
        Outcome::Solved(solution) => println!("{}", solution.display_block()),
        Outcome::Unsatisfiable => println!("no solution exists"),
        Outcome::Timeout => unreachable!("no deadline was set"),
    }
}
