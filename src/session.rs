//! This module contains the play session for Sudoku puzzles.
//!
//! A [SudokuSession] consumes a [SudokuPuzzle](crate::generator::SudokuPuzzle)
//! and applies the player's cell edits until the board matches the solution.
//! The hosting UI renders the session's board snapshot after every edit and
//! reacts to the returned [EditOutcome].

use crate::Board;
use crate::generator::SudokuPuzzle;

/// The state of a [SudokuSession].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionState {

    /// The puzzle is incomplete or incorrect and accepts edits.
    Editing,

    /// The board matches the solution. This state is terminal; it is only
    /// left when a new puzzle is installed with [SudokuSession::replace].
    Solved
}

/// The result of a [SudokuSession::set_cell] call, to which the hosting UI
/// reacts (typically by re-rendering, and on [EditOutcome::Solved] by
/// scheduling a celebration and requesting a new puzzle).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EditOutcome {

    /// The edit was ignored. This happens for given cells, coordinates or
    /// values outside the board's range, and edits after the puzzle has been
    /// solved. None of these are errors; the session simply remains
    /// unchanged.
    Rejected,

    /// The edit was written to the board, which does not (yet) match the
    /// solution.
    Applied,

    /// The edit was written to the board and completed the puzzle. The
    /// session is now in [SessionState::Solved].
    Solved
}

/// A play session holding the state of one Sudoku puzzle. Edits are applied
/// with [SudokuSession::set_cell]; once the board matches the solution, the
/// session locks until a fresh puzzle is installed with
/// [SudokuSession::replace].
pub struct SudokuSession {
    puzzle: SudokuPuzzle,
    board: Board,
    state: SessionState
}

impl SudokuSession {

    /// Creates a new session playing the given puzzle, in state
    /// [SessionState::Editing] with the puzzle's masked board as the initial
    /// board.
    pub fn new(puzzle: SudokuPuzzle) -> SudokuSession {
        let board = puzzle.puzzle().clone();

        SudokuSession {
            puzzle,
            board,
            state: SessionState::Editing
        }
    }

    /// Gets a reference to the current board, i.e. the puzzle with all edits
    /// the player has made so far.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Gets a reference to the puzzle this session is playing.
    pub fn puzzle(&self) -> &SudokuPuzzle {
        &self.puzzle
    }

    /// Gets the current state of this session.
    pub fn state(&self) -> SessionState {
        self.state
    }

    fn is_completed(&self) -> bool {
        self.board.is_full() && &self.board == self.puzzle.solution()
    }

    /// Applies a player edit to the cell at the specified position. A number
    /// writes that number into the cell, `None` clears it. Edits to given
    /// cells, out-of-range coordinates or numbers, and edits after the
    /// puzzle has been solved are rejected without changing any state.
    ///
    /// After a successful write the board is compared to the solution; if
    /// every cell matches, the session transitions to [SessionState::Solved]
    /// and [EditOutcome::Solved] is returned.
    pub fn set_cell(&mut self, column: usize, row: usize,
            number: Option<usize>) -> EditOutcome {
        if self.state == SessionState::Solved {
            return EditOutcome::Rejected;
        }

        match self.puzzle.is_given(column, row) {
            Ok(false) => { },
            _ => return EditOutcome::Rejected
        }

        let written = match number {
            Some(number) => self.board.set_cell(column, row, number),
            None => self.board.clear_cell(column, row)
        };

        if written.is_err() {
            return EditOutcome::Rejected;
        }

        if self.is_completed() {
            self.state = SessionState::Solved;
            EditOutcome::Solved
        }
        else {
            EditOutcome::Applied
        }
    }

    /// Installs a fresh puzzle, discarding the current board, all edits, and
    /// the solved state. The session returns to [SessionState::Editing].
    /// This is how the hosting UI serves a reset request, whether triggered
    /// explicitly by the player or scheduled after a completed puzzle.
    pub fn replace(&mut self, puzzle: SudokuPuzzle) {
        self.board = puzzle.puzzle().clone();
        self.puzzle = puzzle;
        self.state = SessionState::Editing;
    }
}
