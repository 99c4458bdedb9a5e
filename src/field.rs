//! Array field adapter.
//!
//! This module binds the tokenizer/serializer pair and the value model to
//! a declared column: element type, dimension, and the explicit
//! conversion functions invoked at the persistence and form boundaries.
//!
//! There is no implicit coercion hook; callers invoke [`ArrayField::encode`]
//! before handing a value to the driver and [`ArrayField::decode`] on what
//! the driver hands back.
//!
//! ## Examples
//!
//! ```rust
//! use pg_textarray::{ArrayField, ArrayValue, ElementType};
//!
//! let field = ArrayField::new()
//!     .with_element_type(ElementType::Text)
//!     .with_dimension(1);
//! assert_eq!(field.db_type(), "text[]");
//!
//! // Form submission -> token list.
//! let tokens = field.clean(Some(r#"a, "b, c""#)).unwrap();
//! assert_eq!(tokens, vec!["b, c", "a"]);
//!
//! // Token list -> form display.
//! assert_eq!(field.display_value(&tokens), r#""b, c", a"#);
//! ```

use crate::{edit_string_for_array, parse_array, ArrayValue, Error, Result};
use serde::{Deserialize, Serialize};

/// SQL element type of an array column.
///
/// Mirrors the element types PostgreSQL arrays are commonly declared
/// over. The default is `Int`.
///
/// # Examples
///
/// ```rust
/// use pg_textarray::ElementType;
///
/// assert_eq!(ElementType::Int.as_str(), "int");
/// assert_eq!(ElementType::Double.as_str(), "double precision");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    #[default]
    Int,
    SmallInt,
    BigInt,
    Real,
    Double,
    Text,
    Bool,
}

impl ElementType {
    /// Returns the SQL name of this element type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ElementType::Int => "int",
            ElementType::SmallInt => "smallint",
            ElementType::BigInt => "bigint",
            ElementType::Real => "real",
            ElementType::Double => "double precision",
            ElementType::Text => "text",
            ElementType::Bool => "boolean",
        }
    }
}

/// An array-typed column declaration with explicit value conversion.
///
/// Built in builder style; both knobs have defaults matching the most
/// common declaration (`int`, one-dimensional).
///
/// # Examples
///
/// ```rust
/// use pg_textarray::{ArrayField, ElementType};
///
/// let scores = ArrayField::new().with_dimension(2);
/// assert_eq!(scores.db_type(), "int[][]");
///
/// let tags = ArrayField::text();
/// assert_eq!(tags.db_type(), "text[]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayField {
    element_type: ElementType,
    dimension: usize,
}

impl Default for ArrayField {
    fn default() -> Self {
        ArrayField {
            element_type: ElementType::default(),
            dimension: 1,
        }
    }
}

impl ArrayField {
    /// Creates a one-dimensional `int` array field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a one-dimensional `text` array field, the usual choice for
    /// tag lists.
    #[must_use]
    pub fn text() -> Self {
        ArrayField {
            element_type: ElementType::Text,
            ..Default::default()
        }
    }

    /// Sets the SQL element type.
    #[must_use]
    pub fn with_element_type(mut self, element_type: ElementType) -> Self {
        self.element_type = element_type;
        self
    }

    /// Sets the array dimension (number of nesting levels). Default is 1.
    #[must_use]
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Returns the declared element type.
    #[must_use]
    pub const fn element_type(&self) -> ElementType {
        self.element_type
    }

    /// Returns the declared dimension.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the SQL column type, e.g. `int[]` or `text[][]`.
    #[must_use]
    pub fn db_type(&self) -> String {
        format!("{}{}", self.element_type.as_str(), "[]".repeat(self.dimension))
    }

    /// Prepares a value for the driver on the write side.
    ///
    /// The driver owns the native array encoding, so this is a
    /// pass-through apart from validating that the value's nesting depth
    /// matches the declared dimension. `Null` is always accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] when the value nests deeper or
    /// shallower than the declared dimension.
    pub fn encode(&self, value: ArrayValue) -> Result<ArrayValue> {
        if value.is_null() {
            return Ok(value);
        }
        let found = value.depth();
        if found != self.dimension {
            return Err(Error::dimension_mismatch(self.dimension, found));
        }
        Ok(value)
    }

    /// Converts a raw driver value on the read side.
    ///
    /// Text-typed fields recursively coerce scalar leaves to text, since
    /// drivers may hand back untyped or mixed leaves for text columns.
    /// Other element types pass through unchanged.
    #[must_use]
    pub fn decode(&self, raw: ArrayValue) -> ArrayValue {
        match self.element_type {
            ElementType::Text => raw.coerce_to_text(),
            _ => raw,
        }
    }

    /// Renders a token list for display in a form input.
    #[must_use]
    pub fn display_value(&self, tokens: &[String]) -> String {
        edit_string_for_array(tokens)
    }

    /// Parses a form submission back into a token list.
    ///
    /// `None` (an empty submission) yields an empty list. The tokenizer
    /// accepts any string, so in practice this does not fail; the error
    /// path exists for symmetry with stricter typed fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInput`] when the input cannot be parsed
    /// into a token list.
    pub fn clean(&self, input: Option<&str>) -> Result<Vec<String>> {
        match input {
            None => Ok(Vec::new()),
            Some(s) => Ok(parse_array(s)),
        }
    }
}
