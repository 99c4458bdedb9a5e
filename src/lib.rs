//! # pg_textarray
//!
//! A PostgreSQL array field type with a tag-string edit representation for
//! form input.
//!
//! ## What does it do?
//!
//! PostgreSQL can store native array columns (`text[]`, `int[]`, ...), but
//! users edit those values as a single line of text: a comma- or
//! space-delimited tag list where double-quoted spans may contain the
//! delimiters verbatim. This crate provides both halves of that story:
//!
//! - **Tokenizer** ([`parse_array`]): turns the edit string back into a
//!   list of trimmed, non-empty tokens, with quote-aware delimiter
//!   handling.
//! - **Serializer** ([`edit_string_for_array`]): turns a token list into a
//!   normalized (sorted, quoted where needed) edit string that parses back
//!   to the same token set.
//! - **Field adapter** ([`ArrayField`]): a column declaration (element
//!   type + dimension) with explicit [`encode`](ArrayField::encode) /
//!   [`decode`](ArrayField::decode) conversions at the persistence
//!   boundary and [`clean`](ArrayField::clean) /
//!   [`display_value`](ArrayField::display_value) at the form boundary.
//! - **Value model** ([`ArrayValue`]): a dynamic, serde-enabled
//!   representation of what a driver hands back for an array column.
//!
//! ## Quick Start
//!
//! ```rust
//! use pg_textarray::{parse_array, edit_string_for_array};
//!
//! // Form input to tokens. Quotes protect delimiters.
//! let tokens = parse_array(r#"rust, "systems programming", db"#);
//! assert_eq!(tokens, vec!["systems programming", "rust", "db"]);
//!
//! // Tokens back to a normalized edit string.
//! let edited = edit_string_for_array(&tokens);
//! assert_eq!(edited, r#""systems programming", db, rust"#);
//! ```
//!
//! ## Delimiter rules
//!
//! - With no commas or quotes in the input, tokens split on spaces and the
//!   result is deduplicated and sorted.
//! - A double-quoted span is one atomic token, commas and all.
//! - Once any comma appears outside quotes, unquoted chunks split on
//!   commas; otherwise they split on spaces.
//! - On output, tokens containing a comma or space are quoted, and the
//!   whole list is sorted and joined with `", "`.
//!
//! ## Declaring a column
//!
//! ```rust
//! use pg_textarray::{ArrayField, ArrayValue, ElementType};
//!
//! let tags = ArrayField::text();
//! assert_eq!(tags.db_type(), "text[]");
//!
//! let value = ArrayValue::from(vec!["one", "two"]);
//! let stored = tags.encode(value).unwrap();
//! let loaded = tags.decode(stored);
//! assert_eq!(loaded, ArrayValue::from(vec!["one", "two"]));
//! ```
//!
//! ## Scope
//!
//! This is a narrowly scoped single-level tag-list tokenizer, not a
//! general CSV dialect and not a parser for nested array literals. The
//! native wire encoding of array values is the database driver's job;
//! [`ArrayField::encode`] only validates dimension and passes the value
//! through.
//!
//! ## Examples
//!
//! See the `demos/` directory for runnable examples:
//!
//! - **`tag_editing.rs`** - the string/token round trip
//! - **`field_roundtrip.rs`** - declaring fields and converting values
//!
//! Run any example with: `cargo run --example <name>`

pub mod edit;
pub mod error;
pub mod field;
pub mod parse;
pub mod value;

pub use edit::edit_string_for_array;
pub use error::{Error, Result};
pub use field::{ArrayField, ElementType};
pub use parse::parse_array;
pub use value::ArrayValue;
