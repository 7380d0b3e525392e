//! # datastring
//!
//! A parser, generator and typed codec for the DataString notation.
//!
//! ## What is DataString?
//!
//! DataString is a compact textual notation for tree-shaped data: a sequence
//! of items (function calls, symbols and literals) separated by `;`, where
//! function calls nest arbitrarily. It was designed to serialize drawing
//! instructions in a form that is short, diff-friendly and hand-editable:
//!
//! ```text
//! move(0; 0); line(100; 50); stroke(rgb(255; 0; 0); 2.5); close()
//! ```
//!
//! ## Key Features
//!
//! - **Backtracking parser**: ordered-choice recursive descent with cheap
//!   checkpoints, so `foo` (a symbol) and `foo()` (a function) disambiguate
//!   without lookahead
//! - **Exact numbers**: arbitrary-precision integers and decimal-exact
//!   floats (`0.1` is exactly one tenth, not the nearest double)
//! - **Faithful binary literals**: `0b0011`, `017` and `0xff` remember both
//!   their base and their digit count across a round trip
//! - **Round-tripping generator**: generated text re-parses to a value-equal
//!   tree, and re-generating reproduces the text exactly
//! - **Typed codec**: types declare a [`Schema`] mapping themselves onto
//!   functions and parameters, with a [`Registry`] dispatching parsed
//!   functions back to Rust types by name
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! datastring = "0.1"
//! ```
//!
//! ### Parsing and Generating
//!
//! ```rust
//! use datastring::{parse, generate};
//!
//! let document = parse("move(0; 0); line(100; 50); close()").unwrap();
//! assert_eq!(document.children().len(), 3);
//! assert_eq!(generate(&document), "move(0; 0); line(100; 50); close()");
//! ```
//!
//! ### Building Trees with Macros
//!
//! ```rust
//! use datastring::{function, main_context};
//!
//! let document = main_context![
//!     function!("move", 0, 0),
//!     function!("stroke", function!("rgb", 255, 0, 0)),
//! ];
//! assert_eq!(document.to_string(), "move(0; 0); stroke(rgb(255; 0; 0))");
//! ```
//!
//! ### The Typed Codec
//!
//! ```rust
//! use datastring::{to_string, from_str, DataStringEncodable, Schema};
//! use num_bigint::BigInt;
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Rgb { r: u8, g: u8, b: u8 }
//!
//! impl DataStringEncodable for Rgb {
//!     fn schema() -> Schema<Self> {
//!         Schema::<Self>::function("rgb")
//!             .integer("r", |c| Some(BigInt::from(c.r)), |c, v| set_u8(&mut c.r, v))
//!             .integer("g", |c| Some(BigInt::from(c.g)), |c, v| set_u8(&mut c.g, v))
//!             .integer("b", |c| Some(BigInt::from(c.b)), |c, v| set_u8(&mut c.b, v))
//!     }
//! }
//!
//! fn set_u8(slot: &mut u8, value: &BigInt) -> bool {
//!     u8::try_from(value).map(|v| *slot = v).is_ok()
//! }
//!
//! let text = to_string(&Rgb { r: 255, g: 0, b: 0 }).unwrap();
//! assert_eq!(text, "rgb(255; 0; 0)");
//!
//! let color: Rgb = from_str(&text).unwrap();
//! assert_eq!(color, Rgb { r: 255, g: 0, b: 0 });
//! ```
//!
//! ## Notation Reference
//!
//! See the [`notation`] module for the full syntax: literal forms, the
//! separator rules, and what the parser treats as a hard error versus a
//! fallback to the next alternative.

pub mod bits;
pub mod codec;
pub mod cursor;
pub mod error;
pub mod float;
pub mod generator;
pub mod lexer;
pub mod macros;
pub mod notation;
pub mod options;
pub mod parser;
pub mod registry;
pub mod value;

pub use bits::{BinaryBase, BitString};
pub use codec::{DataStringEncodable, Schema, TypeKind};
pub use cursor::{Checkpoint, Cursor};
pub use error::{Error, Result};
pub use float::BigFloat;
pub use options::{CodecOptions, Strictness};
pub use parser::Parser;
pub use registry::Registry;
pub use value::{Item, Literal};

pub use codec::{decode, decode_with_options, encode, encode_with_options};
pub use generator::generate;
pub use parser::parse;

/// Encode a value and render it to DataString text.
///
/// # Examples
///
/// ```rust
/// use datastring::{to_string, DataStringEncodable, Schema};
/// use num_bigint::BigInt;
///
/// #[derive(Default)]
/// struct Point { x: i64, y: i64 }
///
/// impl DataStringEncodable for Point {
///     fn schema() -> Schema<Self> {
///         Schema::<Self>::function("point")
///             .integer("x", |p| Some(BigInt::from(p.x)), |p, v| i64::try_from(v).map(|x| p.x = x).is_ok())
///             .integer("y", |p| Some(BigInt::from(p.y)), |p, v| i64::try_from(v).map(|y| p.y = y).is_ok())
///     }
/// }
///
/// let text = to_string(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(text, "point(1; 2)");
/// ```
///
/// # Errors
///
/// Returns an error if the type's schema is misdeclared; see
/// [`codec`](crate::codec) for the taxonomy.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: DataStringEncodable,
{
    to_string_with_options(value, &CodecOptions::default())
}

/// Encode a value and render it to DataString text with custom options.
///
/// # Errors
///
/// Returns an error if encoding fails; in strict mode that includes any
/// field whose runtime value has no representation in its declared kind.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &CodecOptions) -> Result<String>
where
    T: DataStringEncodable,
{
    let item = encode_with_options(value, options)?;
    Ok(generate(&item))
}

/// Parse DataString text and decode an instance of `T` from it.
///
/// A main-context type decodes the whole document; a function type requires
/// the document to contain exactly one top-level item.
///
/// # Examples
///
/// ```rust
/// use datastring::{from_str, DataStringEncodable, Schema};
/// use num_bigint::BigInt;
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Point { x: i64, y: i64 }
///
/// impl DataStringEncodable for Point {
///     fn schema() -> Schema<Self> {
///         Schema::<Self>::function("point")
///             .integer("x", |p| Some(BigInt::from(p.x)), |p, v| i64::try_from(v).map(|x| p.x = x).is_ok())
///             .integer("y", |p| Some(BigInt::from(p.y)), |p, v| i64::try_from(v).map(|y| p.y = y).is_ok())
///     }
/// }
///
/// let point: Point = from_str("point(3; 4)").unwrap();
/// assert_eq!(point, Point { x: 3, y: 4 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid DataString notation or does
/// not fit the type's schema.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DataStringEncodable + Default,
{
    from_str_with_options(s, &CodecOptions::default())
}

/// Parse DataString text and decode an instance of `T` with custom options.
///
/// # Errors
///
/// Returns an error if the input is not valid DataString notation or does
/// not fit the type's schema; strict mode additionally rejects missing
/// parameters and unconvertible values.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<T>(s: &str, options: &CodecOptions) -> Result<T>
where
    T: DataStringEncodable + Default,
{
    codec::decode_document(s, options)
}
