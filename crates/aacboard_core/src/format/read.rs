//! Board text format parser.
//!
//! # Responsibility
//! - Build the category map line by line from any buffered reader.
//! - Stop early on a malformed line, keeping the categories parsed so
//!   far.
//!
//! # Invariants
//! - Item lines attach to the most recently seen category header.
//! - An empty item symbol is skipped by the category, never fatal.

use super::FormatError;
use crate::model::category::Category;
use crate::store::OrderedMap;
use log::{error, warn};
use std::io::BufRead;

/// Result of one load pass: whatever parsed cleanly, plus the malformed
/// line that stopped the pass, if any.
pub(crate) struct LoadOutcome {
    pub categories: OrderedMap<Category>,
    pub error: Option<FormatError>,
}

/// Parses the line-oriented board format.
///
/// Never fails: read errors and malformed lines end the pass early and
/// are reported through the returned outcome and logging.
pub(crate) fn read_board(reader: impl BufRead) -> LoadOutcome {
    let mut categories: OrderedMap<Category> = OrderedMap::new();
    let mut current: Option<String> = None;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!(
                    "event=board_parse module=format status=error error_code=read_failed line={line_no} error={err}"
                );
                break;
            }
        };
        if line.is_empty() {
            continue;
        }

        match line.strip_prefix('>') {
            None => match parse_fields(&line) {
                Some((symbol, name)) => {
                    // Cannot fail: parse_fields guarantees a non-empty symbol.
                    let _ = categories.set(symbol, Category::new(name));
                    current = Some(symbol.to_string());
                }
                None => {
                    let err = FormatError::MalformedHeader { line: line_no };
                    warn!("event=board_parse module=format status=partial error={err}");
                    return LoadOutcome {
                        categories,
                        error: Some(err),
                    };
                }
            },
            Some(item_line) => {
                let open = match &current {
                    Some(open) => open,
                    None => {
                        let err = FormatError::OrphanItem { line: line_no };
                        warn!("event=board_parse module=format status=partial error={err}");
                        return LoadOutcome {
                            categories,
                            error: Some(err),
                        };
                    }
                };
                match item_line.split_once(' ') {
                    Some((symbol, text)) => {
                        if let Ok(category) = categories.get_mut(open) {
                            // Empty item symbols are logged and skipped here.
                            category.add_item(symbol, text);
                        }
                    }
                    None => {
                        let err = FormatError::MalformedItem { line: line_no };
                        warn!("event=board_parse module=format status=partial error={err}");
                        return LoadOutcome {
                            categories,
                            error: Some(err),
                        };
                    }
                }
            }
        }
    }

    LoadOutcome {
        categories,
        error: None,
    }
}

/// Splits a header on the first space. The remainder after the split is
/// the complete display-name field, embedded spaces included. Returns
/// `None` for a missing space or an empty symbol.
fn parse_fields(line: &str) -> Option<(&str, &str)> {
    match line.split_once(' ') {
        Some((symbol, rest)) if !symbol.is_empty() => Some((symbol, rest)),
        _ => None,
    }
}
