//! Tag-string serializer.
//!
//! Produces the edit representation of a token list: a single string
//! suitable for editing in a form, such that submitting it back unchanged
//! parses to the same token set.
//!
//! Tokens containing a comma or a space are double quoted; the joined
//! output is always comma-delimited and sorted, so this is a normalization
//! rather than an order-preserving round trip.

/// Builds a comma-joined, sorted edit string from a list of tokens.
///
/// Tokens which contain commas or spaces are double quoted so that
/// [`parse_array`](crate::parse_array) recovers them atomically.
///
/// # Examples
///
/// ```rust
/// use pg_textarray::edit_string_for_array;
///
/// assert_eq!(edit_string_for_array(["b", "a c"]), r#""a c", b"#);
/// assert_eq!(edit_string_for_array(["one", "two"]), "one, two");
/// assert_eq!(edit_string_for_array(Vec::<String>::new()), "");
/// ```
#[must_use]
pub fn edit_string_for_array<I, S>(tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names: Vec<String> = tokens
        .into_iter()
        .map(|token| {
            let token = token.as_ref();
            if token.contains(',') || token.contains(' ') {
                format!("\"{}\"", token)
            } else {
                token.to_string()
            }
        })
        .collect();
    names.sort_unstable();
    names.join(", ")
}
