//! Error types for DataString parsing, generation and the typed codec.
//!
//! ## Error Categories
//!
//! - **Syntax errors**: definite malformed input found after a partial match
//!   (an opened function call missing its `)`, an unterminated string literal,
//!   an exponent with no digits). These carry the offending character offset
//!   and what the parser expected there. Note that most "this alternative did
//!   not match" situations are *not* errors; parser alternatives report those
//!   as `Ok(None)` so the caller can try the next alternative.
//! - **Metadata errors**: a type or field in a [`Schema`](crate::Schema)
//!   declares no kind, or more than one. These indicate a programming mistake,
//!   not bad input data, and are never retried.
//! - **Decode errors**: a parsed item does not fit the schema it is decoded
//!   against (wrong function name, missing parameter, value of the wrong
//!   literal kind). In lenient mode most of these are skipped instead.
//!
//! ## Examples
//!
//! ```rust
//! use datastring::{parse, Error};
//!
//! let result = parse("foo(1;2");
//! assert!(matches!(result, Err(Error::Syntax { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// All errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed input found after a partial match.
    #[error("syntax error at offset {offset}: expected {expected}, found {found}")]
    Syntax {
        offset: usize,
        expected: String,
        found: String,
    },

    /// A string literal was opened with `'` but never closed.
    #[error("unterminated string literal starting at offset {offset}")]
    UnterminatedString { offset: usize },

    /// A digit outside the charset of the literal's base.
    #[error("invalid digit `{digit}` for base-{base} literal")]
    InvalidDigit { digit: char, base: u32 },

    /// A type or field was used with the codec but declares no kind.
    #[error("attribute expected on {entity}: declare one of {expected}")]
    AttributeExpected { entity: String, expected: String },

    /// Mutually exclusive kinds were declared on the same type or field,
    /// or a kind was declared where it cannot apply.
    #[error("invalid attribute context on {entity}: {detail}")]
    InvalidAttributeContext { entity: String, detail: String },

    /// No registered type matches an observed function name.
    #[error("no registered type matches function `{name}`")]
    UnknownFunction { name: String },

    /// A parsed item does not have the shape the schema expects.
    #[error("type mismatch decoding {context}: expected {expected}, found {found}")]
    TypeMismatch {
        context: String,
        expected: String,
        found: String,
    },

    /// Strict decoding found no child at a field's parameter index.
    #[error("missing parameter {index} for field `{field}` of {entity}")]
    MissingParameter {
        entity: String,
        field: String,
        index: usize,
    },

    /// Strict encoding/decoding could not convert a field value.
    #[error("conversion failed for field `{field}` of {entity}")]
    ConversionFailed { entity: String, field: String },

    /// Generic message.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a syntax error at a character offset.
    ///
    /// `found` is the character at the offset, or `None` at end of input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use datastring::Error;
    ///
    /// let err = Error::syntax(4, "closing `)` of parameter list", None);
    /// assert!(err.to_string().contains("offset 4"));
    /// ```
    pub fn syntax(offset: usize, expected: &str, found: Option<char>) -> Self {
        Error::Syntax {
            offset,
            expected: expected.to_string(),
            found: match found {
                Some(ch) => format!("`{ch}`"),
                None => "end of input".to_string(),
            },
        }
    }

    /// Creates an "attribute expected" metadata error.
    pub fn attribute_expected(entity: impl Into<String>, expected: &str) -> Self {
        Error::AttributeExpected {
            entity: entity.into(),
            expected: expected.to_string(),
        }
    }

    /// Creates an "invalid attribute context" metadata error.
    pub fn invalid_attribute_context(entity: impl Into<String>, detail: &str) -> Self {
        Error::InvalidAttributeContext {
            entity: entity.into(),
            detail: detail.to_string(),
        }
    }

    /// Creates a decode type-mismatch error.
    pub fn type_mismatch(context: impl Into<String>, expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            context: context.into(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use datastring::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
