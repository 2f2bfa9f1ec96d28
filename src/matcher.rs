//! This module contains the selection logic for word search puzzles.
//!
//! A [SelectionMatcher] consumes a
//! [WordSearchPuzzle](crate::wordsearch::WordSearchPuzzle) and converts the
//! player's drag gestures, fed in as pointer-down, pointer-move and
//! pointer-up coordinates, into straight-line cell paths. On pointer-up the
//! letters along the path are matched against the puzzle's words, both
//! forwards and backwards.

use crate::Coord;
use crate::wordsearch::WordSearchPuzzle;

use std::collections::HashSet;

/// The result of a completed drag gesture, returned by
/// [SelectionMatcher::pointer_up].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SelectionOutcome {

    /// The selection did not spell any unfound word, or was not a straight
    /// line. Nothing changed.
    Miss,

    /// The selection spelled the contained word, which is now marked as
    /// found. More words remain.
    Found(String),

    /// The selection spelled the contained word and it was the last one.
    /// Every placed word is now found and the hosting UI should celebrate
    /// and schedule a fresh puzzle.
    Completed(String)
}

/// Tracks the selection state of one word search puzzle: which words have
/// been found, which cells belong to found words, and the path of the drag
/// gesture currently in progress, if any.
pub struct SelectionMatcher {
    puzzle: WordSearchPuzzle,
    found: Vec<String>,
    found_cells: HashSet<Coord>,
    anchor: Option<Coord>,
    active_path: Vec<Coord>
}

impl SelectionMatcher {

    /// Creates a new matcher for the given puzzle with no words found and no
    /// drag in progress.
    pub fn new(puzzle: WordSearchPuzzle) -> SelectionMatcher {
        SelectionMatcher {
            puzzle,
            found: Vec::new(),
            found_cells: HashSet::new(),
            anchor: None,
            active_path: Vec::new()
        }
    }

    /// Gets a reference to the puzzle this matcher operates on.
    pub fn puzzle(&self) -> &WordSearchPuzzle {
        &self.puzzle
    }

    /// Gets the words found so far, in the order they were found.
    pub fn found_words(&self) -> &[String] {
        &self.found
    }

    /// Gets the cells of all found words, for highlighting.
    pub fn found_cells(&self) -> &HashSet<Coord> {
        &self.found_cells
    }

    /// Gets the path of the drag currently in progress, from the anchor cell
    /// to the last collinear pointer position, inclusive. Empty if no drag is
    /// in progress.
    pub fn active_path(&self) -> &[Coord] {
        &self.active_path
    }

    /// Indicates whether every placed word has been found. Dropped words
    /// cannot be selected and therefore do not count towards completion.
    pub fn is_complete(&self) -> bool {
        self.puzzle.placed().iter()
            .all(|placed| self.found.iter().any(|f| f == placed.word()))
    }

    fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.puzzle.size() && coord.col < self.puzzle.size()
    }

    /// Computes the inclusive cell path from `from` to `to`, or `None` if the
    /// two cells are not collinear along one of the eight compass directions.
    fn path_between(from: Coord, to: Coord) -> Option<Vec<Coord>> {
        let delta_row = to.row as isize - from.row as isize;
        let delta_col = to.col as isize - from.col as isize;
        let collinear = delta_row.abs() == delta_col.abs() ||
            delta_row == 0 || delta_col == 0;

        if !collinear {
            return None;
        }

        let len = delta_row.abs().max(delta_col.abs());
        let step_row = delta_row.signum();
        let step_col = delta_col.signum();
        let mut path = Vec::with_capacity(len as usize + 1);
        let mut row = from.row as isize;
        let mut col = from.col as isize;

        for _ in 0..=len {
            path.push(Coord::new(row as usize, col as usize));
            row += step_row;
            col += step_col;
        }

        Some(path)
    }

    fn letters_at(&self, path: &[Coord]) -> String {
        path.iter()
            .map(|&coord| self.puzzle.letter(coord).unwrap())
            .collect()
    }

    /// Starts a drag gesture at the given cell. Coordinates outside the grid
    /// are ignored.
    pub fn pointer_down(&mut self, coord: Coord) {
        if !self.in_bounds(coord) {
            return;
        }

        self.anchor = Some(coord);
        self.active_path = vec![coord];
    }

    /// Extends the drag in progress to the given cell. If the cell is not
    /// collinear with the anchor, or outside the grid, or no drag is in
    /// progress, the active path is left unchanged.
    pub fn pointer_move(&mut self, coord: Coord) {
        let anchor = match self.anchor {
            Some(anchor) => anchor,
            None => return
        };

        if !self.in_bounds(coord) {
            return;
        }

        if let Some(path) = SelectionMatcher::path_between(anchor, coord) {
            self.active_path = path;
        }
    }

    /// Ends the drag in progress at the given cell and matches the selected
    /// letters against the puzzle's words. The selection runs from the
    /// anchor cell to the given cell; it matches a word if its letters spell
    /// that word forwards or backwards and the word has not been found
    /// before. The drag state is cleared in every case.
    pub fn pointer_up(&mut self, coord: Coord) -> SelectionOutcome {
        let anchor = match self.anchor.take() {
            Some(anchor) => anchor,
            None => return SelectionOutcome::Miss
        };

        self.active_path.clear();

        if !self.in_bounds(coord) {
            return SelectionOutcome::Miss;
        }

        let path = match SelectionMatcher::path_between(anchor, coord) {
            Some(path) => path,
            None => return SelectionOutcome::Miss
        };

        let letters = self.letters_at(&path);
        let reversed: String = letters.chars().rev().collect();
        let target = self.puzzle.words().iter()
            .find(|word|
                (word.as_str() == letters || word.as_str() == reversed) &&
                !self.found.contains(*word));
        let target = match target {
            Some(target) => target.clone(),
            None => return SelectionOutcome::Miss
        };

        self.found.push(target.clone());
        self.found_cells.extend(path);

        if self.is_complete() {
            SelectionOutcome::Completed(target)
        }
        else {
            SelectionOutcome::Found(target)
        }
    }

    /// Installs a fresh puzzle, discarding all found words, highlights and
    /// any drag in progress.
    pub fn replace(&mut self, puzzle: WordSearchPuzzle) {
        self.puzzle = puzzle;
        self.found.clear();
        self.found_cells.clear();
        self.anchor = None;
        self.active_path.clear();
    }
}
