//! This module contains logic for generating random Sudoku puzzles.
//!
//! Generation is done in three steps, all bundled in the [Generator]: a
//! canonical solved board is constructed from a closed-form pattern, then
//! randomized with validity-preserving transformations, and finally masked
//! by clearing a number of cells, yielding a [SudokuPuzzle].

use crate::Board;
use crate::error::PuzzleResult;
use crate::solver::{BacktrackingSolver, Solution};
use crate::util::shuffle;

use rand::Rng;
use rand::rngs::ThreadRng;

use serde::{Deserialize, Serialize};

/// A playable Sudoku puzzle as emitted by a [Generator]. It bundles the
/// masked puzzle board, the solved board it was derived from, and the mask
/// of given cells.
///
/// The following invariants hold for every generated instance: each
/// non-empty puzzle cell equals the corresponding solution cell, and a cell
/// is given if and only if it is non-empty in the puzzle board.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SudokuPuzzle {
    puzzle: Board,
    solution: Board,
    givens: Vec<bool>
}

impl SudokuPuzzle {

    /// Gets a reference to the puzzle board, i.e. the solution with the
    /// masked cells empty.
    pub fn puzzle(&self) -> &Board {
        &self.puzzle
    }

    /// Gets a reference to the fully solved board.
    pub fn solution(&self) -> &Board {
        &self.solution
    }

    /// Gets the mask of given cells in left-to-right, top-to-bottom order,
    /// where rows are together. Given cells are pre-filled and must not be
    /// edited by the player.
    pub fn givens(&self) -> &Vec<bool> {
        &self.givens
    }

    /// Indicates whether the cell at the specified position is a given, that
    /// is, pre-filled and immutable for the player.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are greater than or equal to the board
    /// size. In that case, `PuzzleError::OutOfBounds` is returned.
    pub fn is_given(&self, column: usize, row: usize) -> PuzzleResult<bool> {
        // get_cell does the bounds check
        self.puzzle.get_cell(column, row)?;
        Ok(self.givens[crate::index(column, row, self.puzzle.size())])
    }

    /// Indicates whether this puzzle has exactly one solution. The masking
    /// step does not guarantee this (see [Generator::generate]), so callers
    /// that require uniqueness can verify it here at the cost of running a
    /// backtracking solver.
    pub fn has_unique_solution(&self) -> bool {
        matches!(BacktrackingSolver.solve(&self.puzzle), Solution::Unique(_))
    }
}

/// The number of cells cleared by [Generator::generate] for a board of the
/// given size: 8 on a 4x4 board, 20 on a 6x6 board, and half the cells
/// (rounded down) for any other size.
pub fn default_empties(size: usize) -> usize {
    match size {
        4 => 8,
        6 => 20,
        s => s * s / 2
    }
}

/// A generator randomly generates [SudokuPuzzle]s. It uses a random number
/// generator to decide the transformations applied to the canonical board
/// and the cells hidden from the player. For most cases, sensible defaults
/// are provided by [Generator::new_default].
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] for randomization.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

/// Constructs the canonical solved board for the given block dimensions.
/// Each cell holds `((row · block_width + row / block_height + column) mod
/// size) + 1`, which makes every row a cyclic shift of `1..=size` with
/// shifts chosen so that rows within the same band stay consistent across
/// the blocks. The result is the same for every call; randomness is only
/// introduced afterwards (see [Generator::solved_grid]).
///
/// # Errors
///
/// If `block_width` or `block_height` is invalid (zero). In that case,
/// `PuzzleError::InvalidDimensions` is returned.
pub fn canonical_board(block_width: usize, block_height: usize)
        -> PuzzleResult<Board> {
    let mut board = Board::new(block_width, block_height)?;
    let size = board.size();

    for row in 0..size {
        for column in 0..size {
            let number =
                (row * block_width + row / block_height + column) % size + 1;
            board.set_cell(column, row, number)?;
        }
    }

    Ok(board)
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// for randomization.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    /// Computes a reordering of the indices `0..size` which moves groups of
    /// `group_len` consecutive indices as whole units and shuffles the
    /// indices within each group. Used for rows (groups are bands) and
    /// columns (groups are stacks) alike.
    fn group_order(&mut self, size: usize, group_len: usize) -> Vec<usize> {
        let group_count = size / group_len;
        let mut within = Vec::with_capacity(size);

        for group in 0..group_count {
            let offsets = shuffle(&mut self.rng, 0..group_len);
            within.extend(offsets.into_iter()
                .map(|i| group * group_len + i));
        }

        shuffle(&mut self.rng, 0..group_count)
            .into_iter()
            .flat_map(|group|
                within[(group * group_len)..((group + 1) * group_len)]
                    .to_vec())
            .collect()
    }

    fn randomize(&mut self, board: &Board) -> PuzzleResult<Board> {
        let block_width = board.block_width();
        let block_height = board.block_height();
        let size = board.size();
        let row_order = self.group_order(size, block_height);
        let column_order = self.group_order(size, block_width);
        let symbols = shuffle(&mut self.rng, 1..=size);
        let mut result = Board::new(block_width, block_height)?;

        for row in 0..size {
            for column in 0..size {
                let number = board
                    .get_cell(column_order[column], row_order[row])?
                    .unwrap();
                result.set_cell(column, row, symbols[number - 1])?;
            }
        }

        Ok(result)
    }

    /// Generates a random solved board with the given block dimensions. The
    /// canonical board is transformed by permuting rows within each band,
    /// the order of the bands, columns within each stack, the order of the
    /// stacks, and finally relabeling all numbers through a random
    /// bijection. Each transformation preserves validity, so the result is
    /// guaranteed to satisfy [Board::is_solved]. Note that the outputs are
    /// not uniformly distributed over all valid boards, only over the
    /// symmetry orbit of the canonical one.
    ///
    /// # Errors
    ///
    /// If `block_width` or `block_height` is invalid (zero). In that case,
    /// `PuzzleError::InvalidDimensions` is returned.
    pub fn solved_grid(&mut self, block_width: usize, block_height: usize)
            -> PuzzleResult<Board> {
        let canonical = canonical_board(block_width, block_height)?;
        self.randomize(&canonical)
    }

    /// Generates a new random [SudokuPuzzle] with the given block dimensions
    /// and the default number of empty cells (see [default_empties]).
    ///
    /// Note that the generated puzzle is *not* checked to have a unique
    /// solution. For the sizes the mini game offers (2x2 and 3x2 blocks)
    /// the masked puzzles are in practice solvable by elimination, but
    /// callers that require a formal guarantee must check with
    /// [SudokuPuzzle::has_unique_solution].
    ///
    /// # Errors
    ///
    /// If `block_width` or `block_height` is invalid (zero). In that case,
    /// `PuzzleError::InvalidDimensions` is returned.
    pub fn generate(&mut self, block_width: usize, block_height: usize)
            -> PuzzleResult<SudokuPuzzle> {
        let size = block_width * block_height;
        self.generate_with_empties(block_width, block_height,
            default_empties(size))
    }

    /// Generates a new random [SudokuPuzzle] with the given block dimensions
    /// where `empties` cells are cleared. If `empties` exceeds the number of
    /// cells on the board, every cell is cleared.
    ///
    /// # Errors
    ///
    /// If `block_width` or `block_height` is invalid (zero). In that case,
    /// `PuzzleError::InvalidDimensions` is returned.
    pub fn generate_with_empties(&mut self, block_width: usize,
            block_height: usize, empties: usize)
            -> PuzzleResult<SudokuPuzzle> {
        let solution = self.solved_grid(block_width, block_height)?;
        let size = solution.size();
        let cell_count = size * size;
        let mut puzzle = solution.clone();
        let positions = shuffle(&mut self.rng, 0..cell_count);

        for &position in positions.iter().take(empties.min(cell_count)) {
            puzzle.clear_cell(position % size, position / size)?;
        }

        let givens = puzzle.cells().iter()
            .map(|cell| cell.is_some())
            .collect();

        Ok(SudokuPuzzle {
            puzzle,
            solution,
            givens
        })
    }
}
