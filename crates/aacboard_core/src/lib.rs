//! Core domain logic for the AAC picture board.
//! This crate is the single source of truth for board invariants.

mod format;
pub mod logging;
pub mod model;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::board::{Board, Cursor};
pub use model::category::Category;
pub use model::{BoardError, BoardResult};
pub use store::{OrderedMap, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
