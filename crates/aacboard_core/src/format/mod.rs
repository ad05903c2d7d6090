//! Line-oriented board text format.
//!
//! # Responsibility
//! - Parse and emit the persisted board layout: one category header per
//!   top-level entry, `>`-prefixed item lines beneath it.
//! - Keep split rules in one place: fields divide on the first space,
//!   the remainder is the complete name/text field.
//!
//! # Invariants
//! - A malformed line ends a load early; everything parsed before it is
//!   kept.
//! - Emission is the exact inverse of parsing: loading a save's output
//!   reproduces an equivalent board.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod read;
mod write;

pub(crate) use read::{read_board, LoadOutcome};
pub(crate) use write::write_board;

/// A malformed line encountered during load.
///
/// Never surfaced to callers of the board API; loads recover by keeping
/// the partially populated board and reporting through logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FormatError {
    /// A category header without both a symbol and a display name.
    MalformedHeader { line: usize },
    /// An item line without both a symbol and a spoken text.
    MalformedItem { line: usize },
    /// An item line before any category header.
    OrphanItem { line: usize },
}

impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedHeader { line } => {
                write!(f, "line {line}: category header must be `<symbol> <name>`")
            }
            Self::MalformedItem { line } => {
                write!(f, "line {line}: item line must be `><symbol> <text>`")
            }
            Self::OrphanItem { line } => {
                write!(f, "line {line}: item line before any category header")
            }
        }
    }
}

impl Error for FormatError {}
