//! One page of selectable symbols.
//!
//! # Responsibility
//! - Map item symbols (image locations) to the text spoken on selection.
//! - Carry the page's human-readable display name.
//!
//! # Invariants
//! - Every stored symbol is non-empty; empty symbols are logged and
//!   dropped rather than aborting a bulk load.
//! - Item enumeration order is first-insertion order.

use crate::model::{BoardError, BoardResult};
use crate::store::OrderedMap;
use log::warn;
use serde::{Deserialize, Serialize};

/// A named second-level page mapping symbol -> spoken text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    name: String,
    items: OrderedMap<String>,
}

impl Category {
    /// Creates an empty category with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: OrderedMap::new(),
        }
    }

    /// Adds or overwrites a symbol/text pairing.
    ///
    /// An empty symbol is logged and skipped so that one bad line cannot
    /// abort a whole load.
    pub fn add_item(&mut self, symbol: &str, text: &str) {
        if self.items.set(symbol, text.to_string()).is_err() {
            warn!(
                "event=item_skipped module=category status=warn reason=empty_symbol category={}",
                self.name
            );
        }
    }

    /// Returns all item symbols in insertion order.
    pub fn image_locs(&self) -> Vec<&str> {
        self.items.keys()
    }

    /// Returns the category's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the spoken text for `symbol`.
    ///
    /// # Errors
    /// - Returns `BoardError::NotFound` when the symbol is not on this page.
    pub fn select(&self, symbol: &str) -> BoardResult<&str> {
        self.items
            .get(symbol)
            .map(String::as_str)
            .map_err(|_| BoardError::NotFound(symbol.to_string()))
    }

    /// Returns whether `symbol` is on this page. Never fails.
    pub fn has_image(&self, symbol: &str) -> bool {
        self.items.has_key(symbol)
    }

    /// Iterates `(symbol, text)` pairs in insertion order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter().map(|(symbol, text)| (symbol, text.as_str()))
    }

    /// Replaces the display name, keeping items.
    ///
    /// Used by the board when a top-level registration overwrites an
    /// existing category symbol.
    pub(crate) fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
