//! Dynamic value representation for array column data.
//!
//! This module provides the [`ArrayValue`] enum which represents what a
//! database driver hands back (or expects) for an array-typed column: a
//! scalar leaf, or an arbitrarily nested array of leaves. It is the value
//! that crosses the persistence boundary in
//! [`ArrayField::encode`](crate::ArrayField::encode) and
//! [`ArrayField::decode`](crate::ArrayField::decode).
//!
//! ## Examples
//!
//! ```rust
//! use pg_textarray::ArrayValue;
//!
//! let tags = ArrayValue::from(vec!["rust".to_string(), "db".to_string()]);
//! assert!(tags.is_array());
//! assert_eq!(tags.depth(), 1);
//!
//! // Scalar leaves coerce to their text form.
//! let mixed = ArrayValue::Array(vec![ArrayValue::Int(1), ArrayValue::Bool(true)]);
//! let text = mixed.coerce_to_text();
//! assert_eq!(
//!     text,
//!     ArrayValue::Array(vec![
//!         ArrayValue::Text("1".to_string()),
//!         ArrayValue::Text("true".to_string()),
//!     ])
//! );
//! ```

use serde::{Deserialize, Serialize};

/// A dynamically-typed array column value.
///
/// Scalar variants model the element types PostgreSQL arrays commonly
/// carry; `Array` nests for multidimensional columns. The serde
/// representation is untagged, so `["a", "b"]` round-trips through JSON
/// as a plain array.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArrayValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Array(Vec<ArrayValue>),
}

impl ArrayValue {
    /// Returns `true` if this is `Null`.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, ArrayValue::Null)
    }

    /// Returns `true` if this is a text leaf.
    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, ArrayValue::Text(_))
    }

    /// Returns `true` if this is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, ArrayValue::Array(_))
    }

    /// Returns the text content if this is a text leaf.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArrayValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is an array.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[ArrayValue]> {
        match self {
            ArrayValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the nesting depth: scalars are 0, a flat array is 1, an
    /// array of arrays is 2, and so on. For ragged nesting the deepest
    /// branch wins. An empty array has depth 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pg_textarray::ArrayValue;
    ///
    /// assert_eq!(ArrayValue::Int(3).depth(), 0);
    /// assert_eq!(ArrayValue::Array(vec![]).depth(), 1);
    ///
    /// let matrix = ArrayValue::Array(vec![
    ///     ArrayValue::Array(vec![ArrayValue::Int(1)]),
    ///     ArrayValue::Array(vec![ArrayValue::Int(2)]),
    /// ]);
    /// assert_eq!(matrix.depth(), 2);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            ArrayValue::Array(items) => {
                1 + items.iter().map(ArrayValue::depth).max().unwrap_or(0)
            }
            _ => 0,
        }
    }

    /// Recursively coerces every scalar leaf to its text form.
    ///
    /// `Null` stays `Null`; arrays recurse. This is the read-side coercion
    /// applied by text-typed fields when a driver hands back untyped or
    /// mixed leaves.
    #[must_use]
    pub fn coerce_to_text(self) -> ArrayValue {
        match self {
            ArrayValue::Null => ArrayValue::Null,
            ArrayValue::Bool(b) => ArrayValue::Text(b.to_string()),
            ArrayValue::Int(n) => ArrayValue::Text(n.to_string()),
            ArrayValue::Float(f) => ArrayValue::Text(f.to_string()),
            ArrayValue::Text(s) => ArrayValue::Text(s),
            ArrayValue::Array(items) => {
                ArrayValue::Array(items.into_iter().map(ArrayValue::coerce_to_text).collect())
            }
        }
    }
}

impl From<bool> for ArrayValue {
    fn from(b: bool) -> Self {
        ArrayValue::Bool(b)
    }
}

impl From<i64> for ArrayValue {
    fn from(n: i64) -> Self {
        ArrayValue::Int(n)
    }
}

impl From<i32> for ArrayValue {
    fn from(n: i32) -> Self {
        ArrayValue::Int(n as i64)
    }
}

impl From<f64> for ArrayValue {
    fn from(f: f64) -> Self {
        ArrayValue::Float(f)
    }
}

impl From<&str> for ArrayValue {
    fn from(s: &str) -> Self {
        ArrayValue::Text(s.to_string())
    }
}

impl From<String> for ArrayValue {
    fn from(s: String) -> Self {
        ArrayValue::Text(s)
    }
}

impl<T: Into<ArrayValue>> From<Vec<T>> for ArrayValue {
    fn from(items: Vec<T>) -> Self {
        ArrayValue::Array(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth() {
        assert_eq!(ArrayValue::Null.depth(), 0);
        assert_eq!(ArrayValue::Text("x".to_string()).depth(), 0);
        assert_eq!(ArrayValue::from(vec!["a", "b"]).depth(), 1);

        let nested = ArrayValue::Array(vec![ArrayValue::Array(vec![ArrayValue::Int(1)])]);
        assert_eq!(nested.depth(), 2);
    }

    #[test]
    fn test_coerce_to_text_recurses() {
        let raw = ArrayValue::Array(vec![
            ArrayValue::Array(vec![ArrayValue::Int(1), ArrayValue::Float(2.5)]),
            ArrayValue::Array(vec![ArrayValue::Null, ArrayValue::Text("x".to_string())]),
        ]);
        let coerced = raw.coerce_to_text();
        assert_eq!(
            coerced,
            ArrayValue::Array(vec![
                ArrayValue::Array(vec![
                    ArrayValue::Text("1".to_string()),
                    ArrayValue::Text("2.5".to_string()),
                ]),
                ArrayValue::Array(vec![ArrayValue::Null, ArrayValue::Text("x".to_string())]),
            ])
        );
    }

    #[test]
    fn test_untagged_serde_representation() {
        let tags = ArrayValue::from(vec!["a", "b c"]);
        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(json, r#"["a","b c"]"#);

        let back: ArrayValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tags);
    }

    #[test]
    fn test_accessors() {
        let v = ArrayValue::from("tag");
        assert!(v.is_text());
        assert_eq!(v.as_str(), Some("tag"));
        assert_eq!(v.as_array(), None);
        assert!(ArrayValue::Null.is_null());
    }
}
