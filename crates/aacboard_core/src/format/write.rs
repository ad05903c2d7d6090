//! Board text format emitter.

use crate::model::category::Category;
use crate::store::OrderedMap;
use std::io::{self, Write};

/// Emits the category map in the line-oriented board format, one header
/// per category followed by its `>`-prefixed item lines, everything in
/// insertion order.
pub(crate) fn write_board(
    categories: &OrderedMap<Category>,
    writer: &mut impl Write,
) -> io::Result<()> {
    for (symbol, category) in categories.iter() {
        writeln!(writer, "{symbol} {}", category.name())?;
        for (item_symbol, text) in category.items() {
            writeln!(writer, ">{item_symbol} {text}")?;
        }
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::write_board;
    use crate::format::read_board;
    use crate::model::category::Category;
    use crate::store::OrderedMap;
    use std::io::Cursor;

    fn sample_categories() -> OrderedMap<Category> {
        let mut food = Category::new("food");
        food.add_item("fries.png", "french fries");
        food.add_item("watermelon.png", "watermelon");
        let mut clothing = Category::new("clothing");
        clothing.add_item("shirt.png", "collared shirt");

        let mut categories = OrderedMap::new();
        categories.set("plate.png", food).unwrap();
        categories.set("hanger.png", clothing).unwrap();
        categories
    }

    #[test]
    fn emits_headers_and_prefixed_items() {
        let mut out = Vec::new();
        write_board(&sample_categories(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "plate.png food\n\
             >fries.png french fries\n\
             >watermelon.png watermelon\n\
             hanger.png clothing\n\
             >shirt.png collared shirt\n"
        );
    }

    #[test]
    fn emitted_text_parses_back_to_the_same_map() {
        let categories = sample_categories();
        let mut out = Vec::new();
        write_board(&categories, &mut out).unwrap();

        let outcome = read_board(Cursor::new(out));
        assert!(outcome.error.is_none());
        assert_eq!(outcome.categories, categories);
    }
}
