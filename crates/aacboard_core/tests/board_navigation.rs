use aacboard_core::{Board, BoardError};
use std::io::Cursor;

const SAMPLE: &str = "img/food/plate.png food\n\
    >img/food/fries.png french fries\n\
    >img/food/watermelon.png watermelon\n\
    img/clothing/hanger.png clothing\n\
    >img/clothing/shirt.png collared shirt\n";

fn sample_board() -> Board {
    Board::from_reader(Cursor::new(SAMPLE))
}

#[test]
fn root_lists_category_symbols_in_file_order() {
    let board = sample_board();
    assert_eq!(
        board.image_locs(),
        vec!["img/food/plate.png", "img/clothing/hanger.png"]
    );
    assert_eq!(board.category_name(), "");
}

#[test]
fn every_loaded_category_is_visible_exactly_once() {
    let board = sample_board();
    for symbol in ["img/food/plate.png", "img/clothing/hanger.png"] {
        assert!(board.has_image(symbol));
        let count = board
            .image_locs()
            .iter()
            .filter(|loc| ***loc == *symbol)
            .count();
        assert_eq!(count, 1);
    }
}

#[test]
fn selecting_category_returns_empty_utterance_and_opens_it() {
    let mut board = sample_board();
    assert_eq!(board.select("img/food/plate.png").unwrap(), "");
    assert_eq!(board.category_name(), "food");
    assert_eq!(
        board.image_locs(),
        vec!["img/food/fries.png", "img/food/watermelon.png"]
    );
}

#[test]
fn selecting_same_category_twice_stays_in_it() {
    let mut board = sample_board();
    board.select("img/food/plate.png").unwrap();
    assert_eq!(board.select("img/food/plate.png").unwrap(), "");
    assert_eq!(board.category_name(), "food");
}

#[test]
fn selecting_category_from_inside_another_switches_without_nesting() {
    let mut board = sample_board();
    board.select("img/food/plate.png").unwrap();
    assert_eq!(board.select("img/clothing/hanger.png").unwrap(), "");
    assert_eq!(board.category_name(), "clothing");
    assert_eq!(board.image_locs(), vec!["img/clothing/shirt.png"]);
}

#[test]
fn selecting_item_inside_category_returns_spoken_text() {
    let mut board = sample_board();
    board.select("img/food/plate.png").unwrap();
    assert_eq!(
        board.select("img/food/fries.png").unwrap(),
        "french fries"
    );
    // Speaking an item does not move the cursor.
    assert_eq!(board.category_name(), "food");
}

#[test]
fn reset_returns_to_root() {
    let mut board = sample_board();
    board.select("img/food/plate.png").unwrap();
    board.reset();
    assert_eq!(board.category_name(), "");
    assert_eq!(
        board.image_locs(),
        vec!["img/food/plate.png", "img/clothing/hanger.png"]
    );
}

#[test]
fn item_symbol_is_out_of_scope_at_root() {
    let mut board = sample_board();
    board.select("img/food/plate.png").unwrap();
    assert_eq!(
        board.select("img/food/fries.png").unwrap(),
        "french fries"
    );
    board.reset();
    assert_eq!(
        board.select("img/food/fries.png"),
        Err(BoardError::NotFound("img/food/fries.png".to_string()))
    );
}

#[test]
fn unknown_symbol_at_root_is_not_found() {
    let mut board = sample_board();
    assert_eq!(
        board.select("img/unknown.png"),
        Err(BoardError::NotFound("img/unknown.png".to_string()))
    );
}

#[test]
fn unknown_symbol_inside_category_is_not_found() {
    let mut board = sample_board();
    board.select("img/food/plate.png").unwrap();
    assert_eq!(
        board.select("img/clothing/shirt.png"),
        Err(BoardError::NotFound("img/clothing/shirt.png".to_string()))
    );
}

#[test]
fn failed_select_leaves_cursor_where_it_was() {
    let mut board = sample_board();
    board.select("img/food/plate.png").unwrap();
    let _ = board.select("img/unknown.png");
    assert_eq!(board.category_name(), "food");
}

#[test]
fn has_image_covers_category_symbols_only() {
    let board = sample_board();
    assert!(board.has_image("img/food/plate.png"));
    assert!(!board.has_image("img/food/fries.png"));
    assert!(!board.has_image(""));
}

#[test]
fn add_item_registers_category_navigable_from_anywhere() {
    let mut board = sample_board();
    board.select("img/food/plate.png").unwrap();
    board.add_item("img/animals/paw.png", "animals");

    assert!(board.has_image("img/animals/paw.png"));
    assert_eq!(board.select("img/animals/paw.png").unwrap(), "");
    assert_eq!(board.category_name(), "animals");
    assert!(board.image_locs().is_empty());
}
