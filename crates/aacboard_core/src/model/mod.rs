//! Board domain model.
//!
//! # Responsibility
//! - Define the two-level symbol hierarchy (board of categories, category
//!   of spoken items) used by every caller.
//! - Own the navigation state machine and its transition rules.
//!
//! # Invariants
//! - The category map is the single source of truth; a category's display
//!   name lives inside the `Category` it belongs to.
//! - The navigation cursor only ever points at the root page or at a key
//!   present in the category map.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod board;
pub mod category;

pub type BoardResult<T> = Result<T, BoardError>;

/// The one error surfaced by the public `select` APIs: the symbol is not
/// present in the scope the board is currently looking at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    NotFound(String),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(symbol) => write!(f, "symbol not found in current scope: {symbol}"),
        }
    }
}

impl Error for BoardError {}
