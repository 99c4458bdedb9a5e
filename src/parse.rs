//! Tag-string tokenizer.
//!
//! This module parses the edit representation of an array column: a single
//! string where tokens are delimited by commas or spaces, and double-quoted
//! spans are taken literally so they may contain either delimiter.
//!
//! ## Delimiter selection
//!
//! Quotes take precedence over everything else. For the unquoted remainder,
//! the delimiter is decided lazily: if any comma appears outside a quoted
//! span (a "loose" comma), all unquoted chunks split on commas; otherwise
//! they split on spaces. Splitting is therefore deferred until the whole
//! input has been scanned.
//!
//! ## Examples
//!
//! ```rust
//! use pg_textarray::parse_array;
//!
//! assert_eq!(parse_array("a b c"), vec!["a", "b", "c"]);
//! assert_eq!(parse_array("tag1,tag2"), vec!["tag1", "tag2"]);
//!
//! // Quoted spans are atomic and keep their commas.
//! assert_eq!(parse_array(r#"a, "b, c", d"#), vec!["b, c", "a", "d"]);
//! ```

/// Parses tag input into a list of trimmed, non-empty tokens.
///
/// When the input contains neither a comma nor a double quote, it is split
/// on spaces and the result is deduplicated and sorted. Otherwise tokens
/// are returned in scan order: quoted spans first as they are encountered,
/// then the unquoted chunks split on the selected delimiter.
///
/// An unterminated quote at end of input is demoted to an ordinary
/// unquoted chunk rather than rejected.
///
/// # Examples
///
/// ```rust
/// use pg_textarray::parse_array;
///
/// assert_eq!(parse_array(""), Vec::<String>::new());
/// assert_eq!(parse_array("c a b a"), vec!["a", "b", "c"]);
/// assert_eq!(parse_array(r#""big apple", banana"#), vec!["big apple", "banana"]);
/// ```
#[must_use]
pub fn parse_array(input: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }

    // Special case: with no commas or double quotes there is nothing to
    // defer, so split on spaces right away.
    if !input.contains(',') && !input.contains('"') {
        let mut words = split_strip(input, ' ');
        words.sort_unstable();
        words.dedup();
        return words;
    }

    let mut words: Vec<String> = Vec::new();
    let mut buffer = String::new();
    // Splitting of non-quoted sections is deferred until we know whether
    // any unquoted commas exist.
    let mut to_be_split: Vec<String> = Vec::new();
    let mut saw_loose_comma = false;
    let mut open_quote = false;

    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c == '"' {
            if !buffer.is_empty() {
                to_be_split.push(std::mem::take(&mut buffer));
            }
            // Scan to the matching quote.
            open_quote = true;
            for q in chars.by_ref() {
                if q == '"' {
                    open_quote = false;
                    break;
                }
                buffer.push(q);
            }
            if open_quote {
                // Ran out of input inside the quoted span; the buffer is
                // handled as unquoted below.
                break;
            }
            let word = buffer.trim();
            if !word.is_empty() {
                words.push(word.to_string());
            }
            buffer.clear();
        } else {
            if !saw_loose_comma && c == ',' {
                saw_loose_comma = true;
            }
            buffer.push(c);
        }
    }

    if !buffer.is_empty() {
        if open_quote && buffer.contains(',') {
            saw_loose_comma = true;
        }
        to_be_split.push(buffer);
    }

    if !to_be_split.is_empty() {
        let delimiter = if saw_loose_comma { ',' } else { ' ' };
        for chunk in &to_be_split {
            words.extend(split_strip(chunk, delimiter));
        }
    }
    words
}

/// Splits `s` on `delimiter`, trimming each piece and dropping empties.
fn split_strip(s: &str, delimiter: char) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    s.split(delimiter)
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}
