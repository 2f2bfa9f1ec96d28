//! This module contains the logic for solving Sudoku boards.
//!
//! The engine never solves puzzles on behalf of the player; the
//! [BacktrackingSolver] exists so that callers can optionally verify that a
//! masked puzzle has a unique solution (see
//! [SudokuPuzzle::has_unique_solution](crate::generator::SudokuPuzzle::has_unique_solution)).

use crate::Board;

/// An enumeration of the different ways a Sudoku board can be solveable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that the board is not solveable at all.
    Impossible,

    /// Indicates that the board has a unique solution, which is wrapped in
    /// this instance.
    Unique(Board),

    /// Indicates that the board has multiple solutions.
    Ambiguous
}

impl Solution {

    /// Computes the union of two solutions. This is defined as follows:
    ///
    /// * If one solution is `Solution::Impossible`, the other one is
    /// returned.
    /// * If one solution is `Solution::Ambiguous` then the result is also
    /// ambiguous
    /// * If both solutions are `Solution::Unique` with solution boards `g1`
    /// and `g2`, then the result is `Solution::Unique(g1)` if `g1 == g2` and
    /// `Solution::Ambiguous` otherwise.
    pub fn union(self, other: Solution) -> Solution {
        match self {
            Solution::Impossible => other,
            Solution::Unique(g) =>
                match other {
                    Solution::Impossible => Solution::Unique(g),
                    Solution::Unique(other_g) =>
                        if g == other_g {
                            Solution::Unique(g)
                        }
                        else {
                            Solution::Ambiguous
                        }
                    Solution::Ambiguous => Solution::Ambiguous
                }
            Solution::Ambiguous => Solution::Ambiguous
        }
    }
}

/// A perfect solver for standard Sudoku rules which works by recursively
/// testing all valid numbers for each cell. Its worst-case runtime is
/// exponential, i.e. it may be very slow if the board has many missing
/// digits, but for the small board sizes this engine targets that is not a
/// concern.
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    fn solve_rec(board: &mut Board, column: usize, row: usize) -> Solution {
        let size = board.size();
        let last_cell = row == size;

        if last_cell {
            return Solution::Unique(board.clone());
        }

        let next_column = (column + 1) % size;
        let next_row = if next_column == 0 { row + 1 } else { row };

        if board.get_cell(column, row).unwrap().is_some() {
            BacktrackingSolver::solve_rec(board, next_column, next_row)
        }
        else {
            let mut solution = Solution::Impossible;

            for number in 1..=size {
                if board.is_valid_number(column, row, number).unwrap() {
                    board.set_cell(column, row, number).unwrap();
                    let next_solution =
                        BacktrackingSolver::solve_rec(board, next_column,
                            next_row);
                    board.clear_cell(column, row).unwrap();
                    solution = solution.union(next_solution);

                    if solution == Solution::Ambiguous {
                        break;
                    }
                }
            }

            solution
        }
    }

    /// Solves the provided board according to standard Sudoku rules. The
    /// board itself is not changed. If the board has no valid completion,
    /// `Solution::Impossible` is returned, if it has more than one,
    /// `Solution::Ambiguous` is returned.
    pub fn solve(&self, board: &Board) -> Solution {
        let mut clone = board.clone();
        BacktrackingSolver::solve_rec(&mut clone, 0, 0)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn solves_unique_puzzle() {
        let board = Board::parse("2x2; , , ,4, ,4,3, , ,3, , , , ,1, ")
            .unwrap();
        let expected = Board::parse("2x2;\
            3,1,2,4,\
            2,4,3,1,\
            1,3,4,2,\
            4,2,1,3").unwrap();

        assert_eq!(Solution::Unique(expected),
            BacktrackingSolver.solve(&board));
    }

    #[test]
    fn detects_impossible_puzzle() {
        // The last cell of the first row has no candidate left: 1, 2 and 3
        // appear in its row and 4 in its column.
        let board = Board::parse("2x2;1,2,3, , , , ,4, , , , , , , , ")
            .unwrap();

        assert_eq!(Solution::Impossible, BacktrackingSolver.solve(&board));
    }

    #[test]
    fn detects_ambiguous_puzzle() {
        let board = Board::parse("2x2;,,,,,,,,,,,,,,,").unwrap();

        assert_eq!(Solution::Ambiguous, BacktrackingSolver.solve(&board));
    }

    #[test]
    fn full_board_solves_to_itself() {
        let board = Board::parse("2x2;2,3,4,1,1,4,3,2,3,1,2,4,4,2,1,3")
            .unwrap();

        assert_eq!(Solution::Unique(board.clone()),
            BacktrackingSolver.solve(&board));
    }

    #[test]
    fn solve_does_not_change_input() {
        let board = Board::parse("2x2; , , ,4, ,4,3, , ,3, , , , ,1, ")
            .unwrap();
        let before = board.clone();
        BacktrackingSolver.solve(&board);

        assert_eq!(before, board);
    }

    #[test]
    fn union_prefers_certainty() {
        let grid = Board::parse("2x2;2,3,4,1,1,4,3,2,3,1,2,4,4,2,1,3")
            .unwrap();
        let unique = Solution::Unique(grid.clone());

        assert_eq!(unique.clone(),
            Solution::Impossible.union(unique.clone()));
        assert_eq!(Solution::Ambiguous,
            unique.clone().union(Solution::Ambiguous));
        assert_eq!(unique.clone(), unique.clone().union(unique));
    }

    #[test]
    fn union_of_different_uniques_is_ambiguous() {
        let g1 = Board::parse("2x2;2,3,4,1,1,4,3,2,3,1,2,4,4,2,1,3")
            .unwrap();
        let g2 = Board::parse("2x2;1,2,3,4,3,4,1,2,2,1,4,3,4,3,2,1")
            .unwrap();

        assert_eq!(Solution::Ambiguous,
            Solution::Unique(g1).union(Solution::Unique(g2)));
    }
}
