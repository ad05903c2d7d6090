//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `aacboard_core` linkage.
//! - Load a board file and print its root page for quick local checks.

use aacboard_core::Board;

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "board.txt".to_string());

    let mut board = Board::from_file(&path);
    println!("aacboard_core version={}", aacboard_core::core_version());
    println!("board={path} categories={}", board.image_locs().len());

    let symbols: Vec<String> = board
        .image_locs()
        .into_iter()
        .map(str::to_string)
        .collect();
    for symbol in symbols {
        if board.select(&symbol).is_ok() {
            println!("  {symbol} -> {}", board.category_name());
        }
        board.reset();
    }
}
