//! Two-level board and its navigation state machine.
//!
//! # Responsibility
//! - Orchestrate load, select, reset, query and persist operations over
//!   the category map.
//! - Translate container-level lookup failures into the public
//!   `NotFound` contract.
//!
//! # Invariants
//! - `Cursor::InCategory(c)` is only ever set with `c` a key of the
//!   category map; a dangling cursor degrades to empty query results,
//!   never a panic.
//! - Only `select` may return an error to the caller; load and save
//!   recover locally and report through logging.

use crate::format;
use crate::model::category::Category;
use crate::model::{BoardError, BoardResult};
use crate::store::OrderedMap;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;

/// Current position on the board: the root page of category symbols, or
/// one open category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cursor {
    Root,
    InCategory(String),
}

/// The full two-level symbol board.
///
/// Categories and their display names live in one map, so the directory
/// of names can never drift out of step with the category pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    categories: OrderedMap<Category>,
    cursor: Cursor,
}

impl Board {
    /// Creates an empty board positioned at the root page.
    pub fn new() -> Self {
        Self {
            categories: OrderedMap::new(),
            cursor: Cursor::Root,
        }
    }

    /// Loads a board from the line-oriented text format at `path`.
    ///
    /// Construction never fails: an unreadable source yields an empty
    /// board and a malformed line ends the load early with whatever was
    /// parsed up to that point. Both conditions are logged.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                error!(
                    "event=board_load module=board status=error error_code=open_failed path={} error={}",
                    path.display(),
                    err
                );
                return Self::new();
            }
        };
        let board = Self::from_reader(BufReader::new(file));
        info!(
            "event=board_load module=board status=ok path={} categories={}",
            path.display(),
            board.categories.len()
        );
        board
    }

    /// Loads a board from any buffered reader of the text format.
    ///
    /// Same recovery behavior as [`Board::from_file`].
    pub fn from_reader(reader: impl BufRead) -> Self {
        let outcome = format::read_board(reader);
        if let Some(err) = &outcome.error {
            warn!(
                "event=board_load module=board status=partial categories={} error={}",
                outcome.categories.len(),
                err
            );
        }
        Self {
            categories: outcome.categories,
            cursor: Cursor::Root,
        }
    }

    /// Acts on the selection of `symbol`.
    ///
    /// A known category symbol opens that category and returns the empty
    /// utterance, regardless of where the cursor currently is; there is
    /// no nesting beyond one open category. Otherwise, inside an open
    /// category the symbol is looked up on that page and its spoken text
    /// returned.
    ///
    /// # Errors
    /// - Returns `BoardError::NotFound` when the symbol is neither a
    ///   category symbol nor an item of the open category.
    pub fn select(&mut self, symbol: &str) -> BoardResult<String> {
        if self.categories.has_key(symbol) {
            self.cursor = Cursor::InCategory(symbol.to_string());
            return Ok(String::new());
        }
        match &self.cursor {
            Cursor::InCategory(open) => match self.categories.get(open) {
                Ok(category) => category.select(symbol).map(str::to_string),
                // Dangling cursor: treat the symbol as absent.
                Err(_) => Err(BoardError::NotFound(symbol.to_string())),
            },
            Cursor::Root => Err(BoardError::NotFound(symbol.to_string())),
        }
    }

    /// Returns the cursor to the root page. Always succeeds.
    pub fn reset(&mut self) {
        self.cursor = Cursor::Root;
    }

    /// Returns the symbols of the current page: category symbols at the
    /// root, item symbols inside an open category.
    pub fn image_locs(&self) -> Vec<&str> {
        match &self.cursor {
            Cursor::Root => self.categories.keys(),
            Cursor::InCategory(open) => match self.categories.get(open) {
                Ok(category) => category.image_locs(),
                Err(_) => Vec::new(),
            },
        }
    }

    /// Returns the display name of the open category, or `""` at the
    /// root page.
    pub fn category_name(&self) -> &str {
        match &self.cursor {
            Cursor::Root => "",
            Cursor::InCategory(open) => self
                .categories
                .get(open)
                .map(Category::name)
                .unwrap_or(""),
        }
    }

    /// Registers a top-level category under `symbol` with display name
    /// `name`.
    ///
    /// This always targets the root page; items inside a category enter
    /// only through the load routine. Registering an existing symbol
    /// updates its display name and keeps its items. An empty symbol is
    /// logged and skipped.
    pub fn add_item(&mut self, symbol: &str, name: &str) {
        if symbol.is_empty() {
            warn!("event=category_skipped module=board status=warn reason=empty_symbol");
            return;
        }
        if let Ok(existing) = self.categories.get_mut(symbol) {
            existing.rename(name);
            return;
        }
        // Cannot fail: symbol was checked non-empty above.
        let _ = self.categories.set(symbol, Category::new(name));
    }

    /// Returns whether `symbol` is a top-level category symbol. This is
    /// not a full-tree containment check.
    pub fn has_image(&self, symbol: &str) -> bool {
        self.categories.has_key(symbol)
    }

    /// Writes the board to `path` in the line-oriented text format.
    ///
    /// Loading the written file reproduces an equivalent board. Failures
    /// are logged and recovered; per the board's error policy no
    /// operation other than `select` fails to the caller.
    pub fn write_to_file(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let file = match File::create(path) {
            Ok(file) => file,
            Err(err) => {
                error!(
                    "event=board_save module=board status=error error_code=create_failed path={} error={}",
                    path.display(),
                    err
                );
                return;
            }
        };
        let mut writer = BufWriter::new(file);
        match format::write_board(&self.categories, &mut writer) {
            Ok(()) => info!(
                "event=board_save module=board status=ok path={} categories={}",
                path.display(),
                self.categories.len()
            ),
            Err(err) => error!(
                "event=board_save module=board status=error error_code=write_failed path={} error={}",
                path.display(),
                err
            ),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
