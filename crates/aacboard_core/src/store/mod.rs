//! Ordered key-value storage primitive.
//!
//! # Responsibility
//! - Provide the insertion-ordered, string-keyed container both board
//!   levels are built on.
//! - Keep key validity rules in one place.
//!
//! # Invariants
//! - Keys are unique and never empty.
//! - Enumeration order is first-insertion order, stable across overwrites.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod ordered_map;

pub use ordered_map::OrderedMap;

pub type StoreResult<T> = Result<T, StoreError>;

/// Container-level error for key validity and lookup failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    EmptyKey,
    KeyNotFound(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyKey => write!(f, "cannot store a value under an empty key"),
            Self::KeyNotFound(key) => write!(f, "key not found: {key}"),
        }
    }
}

impl Error for StoreError {}
