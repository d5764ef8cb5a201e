//! This module defines general error types used throughout the crate.

use thiserror::Error;

/// Error type for converting integers to (C like) enums using TryFrom
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TryFromIntToEnumError {
    /// attempted to convert integer into enum value, but integer was out of bounds
    #[error("attempted to convert integer into enum value, but integer was out of bounds")]
    OutOfBounds,
}

/// Error produced when move notation cannot be interpreted. Every variant carries the byte
/// offset into the input at which the problem was found.
///
/// Unrecognised move tokens are *not* errors: they are kept as opaque tokens. Only structural
/// problems (grouping, separators, repeat counts) and characters outside the token alphabet are
/// rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A group was opened but never closed.
    #[error("`{open}` opened at position {position} is never closed")]
    UnclosedGroup {
        /// The opening delimiter.
        open: char,
        /// Where the group was opened.
        position: usize,
    },
    /// A closing delimiter appeared with no group open.
    #[error("unexpected `{found}` at position {position} with no open group")]
    UnmatchedClose {
        /// The closing delimiter found.
        found: char,
        /// Where it was found.
        position: usize,
    },
    /// A group was closed with the wrong kind of delimiter, e.g. `(R U]`.
    #[error("expected `{expected}` at position {position} but found `{found}`")]
    MismatchedClose {
        /// The delimiter that would close the open group.
        expected: char,
        /// The delimiter actually found.
        found: char,
        /// Where it was found.
        position: usize,
    },
    /// A `,` or `:` appeared outside of square brackets, or more than once in one bracket.
    #[error("`{found}` at position {position} is only allowed once inside `[...]`")]
    MisplacedSeparator {
        /// The separator found.
        found: char,
        /// Where it was found.
        position: usize,
    },
    /// One side of a commutator or conjugate is empty, e.g. `[R, ]`.
    #[error("commutator or conjugate at position {position} has an empty side")]
    EmptyOperand {
        /// Where the separator was found.
        position: usize,
    },
    /// A repeat count that does not fit in a `u32`.
    #[error("repeat count at position {position} is too large")]
    RepeatOverflow {
        /// Where the count starts.
        position: usize,
    },
    /// Expanding groups and repeats would produce more moves than allowed.
    #[error("expansion at position {position} exceeds {limit} moves")]
    TooManyMoves {
        /// The move limit.
        limit: usize,
        /// Where the limit was crossed.
        position: usize,
    },
    /// Groups are nested deeper than allowed.
    #[error("group at position {position} is nested deeper than {limit} levels")]
    TooDeep {
        /// The nesting limit.
        limit: usize,
        /// Where the group that crossed the limit opens.
        position: usize,
    },
    /// A character that can't appear in move notation.
    #[error("unexpected character `{found}` at position {position}")]
    UnexpectedCharacter {
        /// The character found.
        found: char,
        /// Where it was found.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset into the parsed text where the error was detected.
    pub fn position(&self) -> usize {
        match *self {
            ParseError::UnclosedGroup { position, .. }
            | ParseError::UnmatchedClose { position, .. }
            | ParseError::MismatchedClose { position, .. }
            | ParseError::MisplacedSeparator { position, .. }
            | ParseError::EmptyOperand { position }
            | ParseError::RepeatOverflow { position }
            | ParseError::TooManyMoves { position, .. }
            | ParseError::TooDeep { position, .. }
            | ParseError::UnexpectedCharacter { position, .. } => position,
        }
    }
}

/// Error for importing exported solve records.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The input was not valid JSON, or the records inside it were malformed.
    #[error("invalid solve data: {0}")]
    Json(#[from] serde_json::Error),
    /// The JSON was neither an export payload nor a bare list of solves.
    #[error("JSON is neither an export payload nor a list of solves")]
    UnrecognisedShape,
}
