// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements the procedural puzzle engine behind two grid-based
//! mini games: a variable-size Sudoku and a word search. It supports the
//! following key features:
//!
//! * Parsing and printing Sudoku boards
//! * Generating solved Sudoku boards of any block dimensions by randomizing a
//! canonical pattern with validity-preserving transformations
//! * Masking solved boards into playable puzzles with a configurable number
//! of empty cells
//! * A Sudoku play session which applies edits and detects completion
//! * Embedding word lists into a letter grid via randomized directional
//! placement
//! * Matching drag gestures against the placed words
//!
//! Note in this introduction we will mostly be using 4x4 Sudoku due to their
//! simpler nature. These are divided in 4 2x2 blocks, each with the digits 1
//! to 4, just like each row and column.
//!
//! # Generating and playing Sudoku
//!
//! A [Generator](generator::Generator) creates a
//! [SudokuPuzzle](generator::SudokuPuzzle) consisting of a solved board, a
//! masked puzzle board, and a mask marking the given cells. A
//! [SudokuSession](session::SudokuSession) consumes the puzzle and applies
//! the player's edits.
//!
//! ```
//! use grid_puzzles::generator::Generator;
//! use grid_puzzles::session::{SessionState, SudokuSession};
//!
//! let mut generator = Generator::new_default();
//!
//! // A 4x4 board composed of 2x2 blocks, with the default 8 empty cells.
//! let puzzle = generator.generate(2, 2).unwrap();
//! let solution = puzzle.solution().clone();
//! let mut session = SudokuSession::new(puzzle);
//!
//! // Copying the solution into every editable cell completes the game.
//! for row in 0..4 {
//!     for column in 0..4 {
//!         let number = solution.get_cell(column, row).unwrap().unwrap();
//!         session.set_cell(column, row, Some(number));
//!     }
//! }
//!
//! assert_eq!(SessionState::Solved, session.state());
//! ```
//!
//! # Word searches
//!
//! A [WordPlacer](wordsearch::WordPlacer) embeds a word list into a square
//! letter grid and a [SelectionMatcher](matcher::SelectionMatcher) converts
//! drag gestures into matched words.
//!
//! ```
//! use grid_puzzles::matcher::SelectionMatcher;
//! use grid_puzzles::wordsearch::{WordPlacer, WORD_SETS};
//!
//! let mut placer = WordPlacer::new_default();
//! let puzzle = placer.place(&WORD_SETS[0], 12);
//!
//! // Words that did not fit are reported instead of silently lost.
//! assert_eq!(puzzle.placed().len() + puzzle.dropped().len(),
//!     puzzle.words().len());
//!
//! let matcher = SelectionMatcher::new(puzzle);
//! assert!(matcher.found_words().is_empty());
//! ```

pub mod error;
pub mod generator;
pub mod matcher;
pub mod session;
pub mod solver;
pub mod util;
pub mod wordsearch;

use error::{GridParseError, GridParseResult, PuzzleError, PuzzleResult};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Error, Formatter};

/// A cell coordinate on a square grid, in the form of a 0-indexed row and
/// column pair. This type is shared by both puzzle pipelines: the Sudoku
/// components address cells with it indirectly and the word search components
/// use it to record word positions and drag paths.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Coord {

    /// The 0-indexed row (y-coordinate) of the cell.
    pub row: usize,

    /// The 0-indexed column (x-coordinate) of the cell.
    pub col: usize
}

impl Coord {

    /// Creates a new coordinate from the given row and column.
    pub fn new(row: usize, col: usize) -> Coord {
        Coord {
            row,
            col
        }
    }
}

/// A Sudoku board is composed of cells that are organized into blocks of a
/// given width and height in a way that makes the entire grid a square.
/// Consequently, the number of blocks in a row is equal to the block height
/// and vice versa. Each cell may or may not be occupied by a number.
///
/// In ordinary Sudoku, the block width and height are both 3. Here, however,
/// other dimensions are permitted, for example the 3x2 blocks of a 6x6 board,
/// which would result in a grid like this:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╗
/// ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║
/// ╚═══╧═══╧═══╩═══╧═══╧═══╝
/// ```
///
/// `Board` implements `Display`, but only boards with a size (that is, width
/// or height) of less than or equal to 9 can be displayed with digits 1 to 9.
/// Boards of all other sizes will raise an error.
///
/// In serialized form, a board is represented by its parseable code (see
/// [Board::parse]).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct Board {
    block_width: usize,
    block_height: usize,
    size: usize,
    cells: Vec<Option<usize>>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        (b'0' + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(board: &Board, start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool) -> String {
    let size = board.size();
    let mut result = String::new();

    for x in 0..size {
        if x == 0 {
            result.push(start);
        }
        else if x % board.block_width == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row(board: &Board) -> String {
    line(board, '╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line(board: &Board) -> String {
    line(board, '╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line(board: &Board) -> String {
    line(board, '╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row(board: &Board) -> String {
    line(board, '╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(board: &Board, y: usize) -> String {
    line(board, '║', '║', '│', |x| to_char(board.get_cell(x, y).unwrap()), ' ',
        '║', true)
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.size();

        if size > 9 {
            return Err(Error::default());
        }

        let top_row = top_row(self);
        let thin_separator_line = thin_separator_line(self);
        let thick_separator_line = thick_separator_line(self);
        let bottom_row = bottom_row(self);

        for y in 0..size {
            if y == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if y % self.block_height == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

fn to_string(cell: &Option<usize>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

pub(crate) fn index(column: usize, row: usize, size: usize) -> usize {
    row * size + column
}

fn parse_dimensions(code: &str) -> Result<(usize, usize), GridParseError> {
    let parts: Vec<&str> = code.split('x').collect();

    if parts.len() != 2 {
        return Err(GridParseError::MalformedDimensions);
    }

    Ok((parts[0].parse()?, parts[1].parse()?))
}

impl Board {

    /// Creates a new, empty board where the blocks have the given dimensions.
    /// The total width and height of the grid will be equal to the product of
    /// `block_width` and `block_height`.
    ///
    /// # Arguments
    ///
    /// * `block_width`: The horizontal dimension of one sub-block of the
    /// grid. To ensure a square grid, this is also the number of blocks that
    /// compose the grid vertically. Must be greater than 0.
    /// * `block_height`: The vertical dimension of one sub-block of the grid.
    /// To ensure a square grid, this is also the number of blocks that
    /// compose the grid horizontally. Must be greater than 0.
    ///
    /// # Errors
    ///
    /// If `block_width` or `block_height` is invalid (zero).
    pub fn new(block_width: usize, block_height: usize)
            -> PuzzleResult<Board> {
        if block_width == 0 || block_height == 0 {
            return Err(PuzzleError::InvalidDimensions);
        }

        let size = block_width * block_height;
        let cells = vec![None; size * size];

        Ok(Board {
            block_width,
            block_height,
            size,
            cells
        })
    }

    /// Parses a code encoding a board. The code has to be of the format
    /// `<block_width>x<block_height>;<cells>` where `<cells>` is a
    /// comma-separated list of entries, which are either empty or a number.
    /// The entries are assigned left-to-right, top-to-bottom, where each row
    /// is completed before the next one is started. Whitespace in the entries
    /// is ignored to allow for more intuitive formatting. The number of
    /// entries must match the amount of cells in a grid with the given
    /// dimensions, i.e. it must be `(block_width · block_height)²`.
    ///
    /// As an example, the code `2x2;1, ,2, , ,3, ,4, , , ,3, ,1, ,2` will
    /// parse to the following board:
    ///
    /// ```text
    /// ╔═══╤═══╦═══╤═══╗
    /// ║ 1 │   ║ 2 │   ║
    /// ╟───┼───╫───┼───╢
    /// ║   │ 3 ║   │ 4 ║
    /// ╠═══╪═══╬═══╪═══╣
    /// ║   │   ║ 3 │   ║
    /// ╟───┼───╫───┼───╢
    /// ║   │ 1 ║   │ 2 ║
    /// ╚═══╧═══╩═══╧═══╝
    /// ```
    ///
    /// # Errors
    ///
    /// Any specialization of `GridParseError` (see that documentation).
    pub fn parse(code: &str) -> GridParseResult<Board> {
        let parts: Vec<&str> = code.split(';').collect();

        if parts.len() != 2 {
            return Err(GridParseError::WrongNumberOfParts);
        }

        let (block_width, block_height) = parse_dimensions(parts[0])?;

        if let Ok(mut board) = Board::new(block_width, block_height) {
            let size = board.size();
            let numbers: Vec<&str> = parts[1].split(',').collect();

            if numbers.len() != size * size {
                return Err(GridParseError::WrongNumberOfCells);
            }

            for (i, number_str) in numbers.iter().enumerate() {
                let number_str = number_str.trim();

                if number_str.is_empty() {
                    continue;
                }

                let number = number_str.parse::<usize>()?;

                if number == 0 || number > size {
                    return Err(GridParseError::InvalidNumber);
                }

                board.cells[i] = Some(number);
            }

            Ok(board)
        }
        else {
            Err(GridParseError::InvalidDimensions)
        }
    }

    /// Converts the board into a `String` in a way that is consistent with
    /// [Board::parse](#method.parse). That is, a board that is converted to a
    /// string and parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use grid_puzzles::Board;
    ///
    /// let mut board = Board::new(3, 2).unwrap();
    ///
    /// // Just some arbitrary changes to create some content.
    /// board.set_cell(1, 1, 4).unwrap();
    /// board.set_cell(1, 2, 5).unwrap();
    ///
    /// let board_str = board.to_parseable_string();
    /// let board_parsed = Board::parse(board_str.as_str()).unwrap();
    /// assert_eq!(board, board_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        let mut s = format!("{}x{};", self.block_width, self.block_height);
        let cells = self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",");
        s.push_str(cells.as_str());
        s
    }

    /// Gets the width (number of columns) of one sub-block of the grid. To
    /// ensure a square grid, this is also the number of blocks that compose
    /// the grid vertically.
    pub fn block_width(&self) -> usize {
        self.block_width
    }

    /// Gets the height (number of rows) of one sub-block of the grid. To
    /// ensure a square grid, this is also the number of blocks that compose
    /// the grid horizontally.
    pub fn block_height(&self) -> usize {
        self.block_height
    }

    /// Gets the total size of the grid on one axis (horizontally or
    /// vertically). Since a square grid is enforced at construction time,
    /// this is guaranteed to be valid for both axes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `PuzzleError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> PuzzleResult<Option<usize>> {
        let size = self.size();

        if column >= size || row >= size {
            Err(PuzzleError::OutOfBounds)
        }
        else {
            let index = index(column, row, size);
            Ok(self.cells[index])
        }
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, size[`.
    /// * `number`: The number to check whether it is in the specified cell.
    /// If it is *not* in the range `[1, size]`, `false` will always be
    /// returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `PuzzleError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: usize)
            -> PuzzleResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, size[`.
    /// * `number`: The number to assign to the specified cell. Must be in the
    /// range `[1, size]`.
    ///
    /// # Errors
    ///
    /// * `PuzzleError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `PuzzleError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> PuzzleResult<()> {
        let size = self.size();

        if column >= size || row >= size {
            return Err(PuzzleError::OutOfBounds);
        }

        if number == 0 || number > size {
            return Err(PuzzleError::InvalidNumber);
        }

        let index = index(column, row, size);
        self.cells[index] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `PuzzleError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> PuzzleResult<()> {
        let size = self.size();

        if column >= size || row >= size {
            return Err(PuzzleError::OutOfBounds);
        }

        let index = index(column, row, size);
        self.cells[index] = None;
        Ok(())
    }

    /// Counts the number of clues given by this board. This is the number of
    /// non-empty cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter()
            .filter(|c| c.is_some())
            .count()
    }

    /// Indicates whether this board is full, i.e. every cell is filled with a
    /// number. In this case, [Board::count_clues] returns the square of
    /// [Board::size].
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this board is empty, i.e. no cell is filled with a
    /// number. In this case, [Board::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Gets a reference to the vector which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &Vec<Option<usize>> {
        &self.cells
    }

    fn row_values(&self, row: usize)
            -> impl Iterator<Item = usize> + '_ {
        let size = self.size();
        (0..size).filter_map(move |column|
            self.cells[index(column, row, size)])
    }

    fn column_values(&self, column: usize)
            -> impl Iterator<Item = usize> + '_ {
        let size = self.size();
        (0..size).filter_map(move |row|
            self.cells[index(column, row, size)])
    }

    fn block_values(&self, block_column: usize, block_row: usize)
            -> impl Iterator<Item = usize> + '_ {
        let size = self.size();
        let start_column = block_column * self.block_width;
        let start_row = block_row * self.block_height;
        (0..size).filter_map(move |i| {
            let column = start_column + i % self.block_width;
            let row = start_row + i / self.block_width;
            self.cells[index(column, row, size)]
        })
    }

    /// Indicates whether the given number would be valid in the cell at the
    /// given location according to standard Sudoku rules, that is, the number
    /// does not already appear in the same row, column, or block. The content
    /// of the checked cell itself is ignored.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, size[`.
    /// * `number`: The number to check whether it is valid in the given cell.
    ///
    /// # Errors
    ///
    /// * `PuzzleError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `PuzzleError::InvalidNumber` If `number` is not in the range
    /// `[1, size]`.
    pub fn is_valid_number(&self, column: usize, row: usize, number: usize)
            -> PuzzleResult<bool> {
        let size = self.size();

        if column >= size || row >= size {
            return Err(PuzzleError::OutOfBounds);
        }

        if number == 0 || number > size {
            return Err(PuzzleError::InvalidNumber);
        }

        for other_column in 0..size {
            if other_column != column &&
                    self.has_number(other_column, row, number)? {
                return Ok(false);
            }
        }

        for other_row in 0..size {
            if other_row != row &&
                    self.has_number(column, other_row, number)? {
                return Ok(false);
            }
        }

        let block_start_column = (column / self.block_width) * self.block_width;
        let block_start_row = (row / self.block_height) * self.block_height;

        for other_row in block_start_row..(block_start_row + self.block_height) {
            for other_column in
                    block_start_column..(block_start_column + self.block_width) {
                if (other_column, other_row) != (column, row) &&
                        self.has_number(other_column, other_row, number)? {
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }

    /// Indicates whether this board is a valid Sudoku solution, that is, it
    /// is full and every row, every column, and every block contains each
    /// number from 1 to the size exactly once.
    pub fn is_solved(&self) -> bool {
        if !self.is_full() {
            return false;
        }

        let size = self.size();

        for row in 0..size {
            if util::contains_duplicate(self.row_values(row)) {
                return false;
            }
        }

        for column in 0..size {
            if util::contains_duplicate(self.column_values(column)) {
                return false;
            }
        }

        for block_row in 0..self.block_width {
            for block_column in 0..self.block_height {
                if util::contains_duplicate(
                        self.block_values(block_column, block_row)) {
                    return false;
                }
            }
        }

        true
    }
}

impl From<Board> for String {
    fn from(board: Board) -> String {
        board.to_parseable_string()
    }
}

impl TryFrom<String> for Board {
    type Error = GridParseError;

    fn try_from(code: String) -> GridParseResult<Board> {
        Board::parse(code.as_str())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn parse_ok() {
        let board_res = Board::parse("2x2; 1,,,2, ,3,,4, ,2,,, 3,,,");

        if let Ok(board) = board_res {
            assert_eq!(2, board.block_width());
            assert_eq!(2, board.block_height());
            assert_eq!(Some(1), board.get_cell(0, 0).unwrap());
            assert_eq!(None, board.get_cell(1, 0).unwrap());
            assert_eq!(None, board.get_cell(2, 0).unwrap());
            assert_eq!(Some(2), board.get_cell(3, 0).unwrap());
            assert_eq!(None, board.get_cell(0, 1).unwrap());
            assert_eq!(Some(3), board.get_cell(1, 1).unwrap());
            assert_eq!(None, board.get_cell(2, 1).unwrap());
            assert_eq!(Some(4), board.get_cell(3, 1).unwrap());
            assert_eq!(None, board.get_cell(0, 2).unwrap());
            assert_eq!(Some(2), board.get_cell(1, 2).unwrap());
            assert_eq!(None, board.get_cell(2, 2).unwrap());
            assert_eq!(None, board.get_cell(3, 2).unwrap());
            assert_eq!(Some(3), board.get_cell(0, 3).unwrap());
            assert_eq!(None, board.get_cell(1, 3).unwrap());
            assert_eq!(None, board.get_cell(2, 3).unwrap());
            assert_eq!(None, board.get_cell(3, 3).unwrap());
        }
        else {
            panic!("Parsing valid board failed.");
        }
    }

    #[test]
    fn parse_malformed_dimensions() {
        assert_eq!(Err(GridParseError::MalformedDimensions),
            Board::parse("2x2x2;,,,,,,,,,,,,,,,"));
    }

    #[test]
    fn parse_invalid_dimensions() {
        assert_eq!(Err(GridParseError::InvalidDimensions),
            Board::parse("2x0;,"));
    }

    #[test]
    fn parse_wrong_number_of_parts() {
        assert_eq!(Err(GridParseError::WrongNumberOfParts),
            Board::parse("2x2;,,,,,,,,,,,,,,,;whatever"));
    }

    #[test]
    fn parse_number_format_error() {
        assert_eq!(Err(GridParseError::NumberFormatError),
            Board::parse("2x#;,"));
    }

    #[test]
    fn parse_invalid_number() {
        assert_eq!(Err(GridParseError::InvalidNumber),
            Board::parse("2x2;,,,4,,,5,,,,,,,,,"));
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        assert_eq!(Err(GridParseError::WrongNumberOfCells),
            Board::parse("2x2;1,2,3,4,1,2,3,4,1,2,3,4,1,2,3"));
        assert_eq!(Err(GridParseError::WrongNumberOfCells),
            Board::parse("2x2;1,2,3,4,1,2,3,4,1,2,3,4,1,2,3,4,1"));
    }

    #[test]
    fn to_parseable_string() {
        let mut board = Board::new(2, 2).unwrap();

        assert_eq!("2x2;,,,,,,,,,,,,,,,",
            board.to_parseable_string().as_str());

        board.set_cell(0, 0, 1).unwrap();
        board.set_cell(1, 1, 2).unwrap();
        board.set_cell(2, 2, 3).unwrap();
        board.set_cell(3, 3, 4).unwrap();

        assert_eq!("2x2;1,,,,,2,,,,,3,,,,,4",
            board.to_parseable_string().as_str());
    }

    #[test]
    fn size() {
        let board1x1 = Board::new(1, 1).unwrap();
        let board3x2 = Board::new(3, 2).unwrap();
        let board3x4 = Board::new(3, 4).unwrap();
        assert_eq!(1, board1x1.size());
        assert_eq!(6, board3x2.size());
        assert_eq!(12, board3x4.size());
    }

    #[test]
    fn count_clues_and_empty_and_full() {
        let empty = Board::parse("2x2;,,,,,,,,,,,,,,,").unwrap();
        let partial = Board::parse("2x2;1,,3,2,4,,,,,,,,,,1,").unwrap();
        let full = Board::parse("2x2;2,3,4,1,1,4,2,3,4,1,3,2,3,2,1,4")
            .unwrap();

        assert_eq!(0, empty.count_clues());
        assert_eq!(5, partial.count_clues());
        assert_eq!(16, full.count_clues());

        assert!(empty.is_empty());
        assert!(!partial.is_empty());
        assert!(!full.is_empty());

        assert!(!empty.is_full());
        assert!(!partial.is_full());
        assert!(full.is_full());
    }

    #[test]
    fn valid_number_accepted() {
        let board = Board::parse("2x2;2, ,3, , ,1, , ,1, , ,4, ,2, ,3")
            .unwrap();
        assert!(board.is_valid_number(1, 0, 4).unwrap());
        assert!(board.is_valid_number(3, 2, 4).unwrap());
    }

    #[test]
    fn duplicate_in_row_rejected() {
        let board = Board::parse("2x2;2, ,3, , ,1, , ,1, , ,4, ,2, ,3")
            .unwrap();
        assert!(!board.is_valid_number(1, 0, 2).unwrap());
    }

    #[test]
    fn duplicate_in_column_rejected() {
        let board = Board::parse("2x2;2, ,3, , ,1, , ,1, , ,4, ,2, ,3")
            .unwrap();
        assert!(!board.is_valid_number(0, 1, 1).unwrap());
    }

    #[test]
    fn duplicate_in_block_rejected() {
        let board = Board::parse("2x2;2, ,3, , ,1, , ,1, , ,4, ,2, ,3")
            .unwrap();
        assert!(!board.is_valid_number(1, 0, 1).unwrap());
    }

    #[test]
    fn is_valid_number_bounds_errors() {
        let board = Board::new(2, 2).unwrap();
        assert_eq!(Err(PuzzleError::OutOfBounds),
            board.is_valid_number(4, 0, 1));
        assert_eq!(Err(PuzzleError::InvalidNumber),
            board.is_valid_number(0, 0, 5));
        assert_eq!(Err(PuzzleError::InvalidNumber),
            board.is_valid_number(0, 0, 0));
    }

    #[test]
    fn full_valid_board_is_solved() {
        let board = Board::parse("2x2;2,3,4,1,1,4,2,3,4,1,3,2,3,2,1,4")
            .unwrap();
        assert!(board.is_solved());
    }

    #[test]
    fn partial_board_not_solved() {
        let board = Board::parse("2x2;2,3,4,1,1,4,2,3,4,1,3,2,3,2,1,")
            .unwrap();
        assert!(!board.is_solved());
    }

    #[test]
    fn full_board_with_block_duplicate_not_solved() {
        // Rows and columns are permutations, but the blocks are not.
        let board = Board::parse("2x2;1,2,3,4,2,3,4,1,3,4,1,2,4,1,2,3")
            .unwrap();
        assert!(!board.is_solved());
    }

    #[test]
    fn non_square_blocks_solved_check() {
        let board = Board::parse("3x2;\
            1,2,3,4,5,6,\
            4,5,6,1,2,3,\
            2,3,1,5,6,4,\
            5,6,4,2,3,1,\
            3,1,2,6,4,5,\
            6,4,5,3,1,2").unwrap();
        assert!(board.is_solved());
    }

    #[test]
    fn serde_round_trip() {
        let board = Board::parse("2x2;2, ,3, , ,1, , ,1, , ,4, ,2, ,3")
            .unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }

    #[test]
    fn serde_rejects_invalid_code() {
        let result = serde_json::from_str::<Board>("\"2x2;1,2\"");
        assert!(result.is_err());
    }
}
