//! The tag-string round trip: form input to tokens and back.
//!
//! Run with: cargo run --example tag_editing

use pg_textarray::{edit_string_for_array, parse_array};

fn main() {
    // What a user might type into a tag input.
    let submitted = r#"rust, "systems programming", database, cli"#;
    let tokens = parse_array(submitted);
    println!("Submitted: {}", submitted);
    println!("Tokens:    {:?}\n", tokens);

    // What the form shows when the value comes back for editing.
    let displayed = edit_string_for_array(&tokens);
    println!("Displayed: {}", displayed);

    // Resubmitting the displayed string recovers the same token set.
    let mut reparsed = parse_array(&displayed);
    let mut original = tokens;
    reparsed.sort_unstable();
    original.sort_unstable();
    assert_eq!(reparsed, original);
    println!("✓ Round-trip successful");
}
