//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not exclude errors that occur when
/// parsing boards, see [GridParseError](enum.GridParseError.html) for that.
#[derive(Debug, Eq, PartialEq)]
pub enum PuzzleError {

    /// Indicates that the block dimensions specified for a created board are
    /// invalid. This is the case if they are less than 1.
    InvalidDimensions,

    /// Indicates that some number is invalid for the size of the board in
    /// question. This is the case if it is less than 1 or greater than the
    /// size.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the board in question. This is the case if they are greater than or
    /// equal to the size.
    OutOfBounds
}

/// Syntactic sugar for `Result<V, PuzzleError>`.
pub type PuzzleResult<V> = Result<V, PuzzleError>;

/// An enumeration of the errors that may occur when parsing a [Board].
///
/// [Board]: ../struct.Board.html
#[derive(Debug, Eq, PartialEq)]
pub enum GridParseError {

    /// Indicates that the code has the wrong number of parts, which are
    /// separated by semicolons. The code should have two parts: dimensions and
    /// cells (separated by ';'), so if the code does not contain exactly one
    /// semicolon, this error will be returned.
    WrongNumberOfParts,

    /// Indicates that the number of cells (which are separated by commas) does
    /// not equal the number deduced from the dimensions.
    WrongNumberOfCells,

    /// Indicates that the dimensions have the wrong format. They should be of
    /// the form `<block_width>x<block_height>`, so if the amount of 'x's in
    /// the dimension string is not exactly one, this error will be raised.
    MalformedDimensions,

    /// Indicates that the provided dimensions are invalid (i.e. at least one
    /// is zero).
    InvalidDimensions,

    /// Indicates that one of the numbers (dimension or cell content) could not
    /// be parsed.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more than
    /// the grid size).
    InvalidNumber
}

/// Syntactic sugar for `Result<V, GridParseError>`.
pub type GridParseResult<V> = Result<V, GridParseError>;

impl From<ParseIntError> for GridParseError {
    fn from(_: ParseIntError) -> Self {
        GridParseError::NumberFormatError
    }
}

impl Display for GridParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GridParseError::WrongNumberOfParts =>
                write!(f, "wrong number of parts"),
            GridParseError::WrongNumberOfCells =>
                write!(f, "wrong number of cells"),
            GridParseError::MalformedDimensions =>
                write!(f, "malformed dimensions"),
            GridParseError::InvalidDimensions =>
                write!(f, "invalid dimensions"),
            GridParseError::NumberFormatError =>
                write!(f, "number format error"),
            GridParseError::InvalidNumber =>
                write!(f, "invalid number")
        }
    }
}
