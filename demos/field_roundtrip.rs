//! Declaring array fields and converting values at the persistence boundary.
//!
//! Run with: cargo run --example field_roundtrip

use pg_textarray::{ArrayField, ArrayValue, ElementType, Result};

fn main() -> Result<()> {
    // A tag column: one-dimensional text array.
    let tags = ArrayField::text();
    println!("tags column type:   {}", tags.db_type());

    // A score matrix: two-dimensional int array.
    let scores = ArrayField::new()
        .with_element_type(ElementType::Int)
        .with_dimension(2);
    println!("scores column type: {}\n", scores.db_type());

    // Write side: encode validates the dimension and passes through.
    let value = ArrayValue::from(vec!["one", "two", "three"]);
    let stored = tags.encode(value)?;
    println!("stored:  {:?}", stored);

    // Read side: text columns coerce any scalar leaves to text.
    let raw = ArrayValue::Array(vec![
        ArrayValue::Text("one".to_string()),
        ArrayValue::Int(2),
        ArrayValue::Bool(true),
    ]);
    let loaded = tags.decode(raw);
    println!("loaded:  {:?}\n", loaded);

    // A value nested deeper than the declared dimension is rejected.
    let matrix = ArrayValue::Array(vec![ArrayValue::Array(vec![ArrayValue::Int(1)])]);
    match tags.encode(matrix) {
        Err(err) => println!("rejected: {}", err),
        Ok(_) => unreachable!(),
    }

    Ok(())
}
