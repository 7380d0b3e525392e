//! The DataString item model.
//!
//! [`Item`] is the tree the parser produces and the generator consumes: a
//! main context (the root grouping of top-level items), functions with
//! ordered parameter children, bare symbols, and literals. Children are
//! plainly owned: an item belongs to exactly one parent list, and the tree
//! is not mutated after construction.
//!
//! ## Creating Items
//!
//! ```rust
//! use datastring::{function, Item};
//!
//! let color = function!("rgb", 255, 0, 0);
//! assert_eq!(color.to_string(), "rgb(255; 0; 0)");
//!
//! let sym = Item::symbol("auto");
//! assert!(sym.is_symbol());
//! ```
//!
//! ## Inspecting Items
//!
//! ```rust
//! use datastring::parse;
//! use num_bigint::BigInt;
//!
//! let root = parse("rgb(255; 0; 0)").unwrap();
//! let color = &root.children()[0];
//! assert_eq!(color.name(), Some("rgb"));
//! let first = color.children()[0].as_literal().unwrap();
//! assert_eq!(first.as_integer(), Some(&BigInt::from(255)));
//! ```

use crate::bits::{BinaryBase, BitString};
use crate::float::BigFloat;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One parsed syntactic unit of a DataString.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Item {
    /// The root grouping of top-level items.
    MainContext(Vec<Item>),
    /// A named node whose children are its ordered parameters.
    Function { name: String, args: Vec<Item> },
    /// A bare identifier with no children.
    Symbol(String),
    /// A literal value.
    Literal(Literal),
}

/// A literal value inside a DataString.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Literal {
    /// `'...'`, the text between the quotes, not re-escaped.
    String(String),
    /// `0b…`/`0…`/`0x…`, a bit pattern plus the base it was written in.
    Binary { bits: BitString, base: BinaryBase },
    /// An arbitrary-precision integer.
    Integer(BigInt),
    /// An arbitrary-precision decimal.
    Float(BigFloat),
}

impl Item {
    /// Builds a function item from a name and its parameters.
    #[must_use]
    pub fn function(name: impl Into<String>, args: Vec<Item>) -> Self {
        Item::Function {
            name: name.into(),
            args,
        }
    }

    /// Builds a symbol item.
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Item::Symbol(name.into())
    }

    /// Builds a string literal item.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Item::Literal(Literal::String(value.into()))
    }

    /// Builds an integer literal item.
    #[must_use]
    pub fn integer(value: impl Into<BigInt>) -> Self {
        Item::Literal(Literal::Integer(value.into()))
    }

    /// Builds a floating-point literal item.
    #[must_use]
    pub fn float(value: impl Into<BigFloat>) -> Self {
        Item::Literal(Literal::Float(value.into()))
    }

    /// Builds a binary literal item with its original base.
    #[must_use]
    pub fn binary(bits: BitString, base: BinaryBase) -> Self {
        Item::Literal(Literal::Binary { bits, base })
    }

    /// Returns `true` for the root main context.
    #[inline]
    #[must_use]
    pub const fn is_main_context(&self) -> bool {
        matches!(self, Item::MainContext(_))
    }

    /// Returns `true` for a function item.
    #[inline]
    #[must_use]
    pub const fn is_function(&self) -> bool {
        matches!(self, Item::Function { .. })
    }

    /// Returns `true` for a symbol item.
    #[inline]
    #[must_use]
    pub const fn is_symbol(&self) -> bool {
        matches!(self, Item::Symbol(_))
    }

    /// Returns `true` for a literal item.
    #[inline]
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Item::Literal(_))
    }

    /// The name of a function or symbol item.
    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Item::Function { name, .. } | Item::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// The ordered children: top-level items of a main context, parameters of
    /// a function, empty for symbols and literals.
    #[must_use]
    pub fn children(&self) -> &[Item] {
        match self {
            Item::MainContext(items) | Item::Function { args: items, .. } => items,
            _ => &[],
        }
    }

    /// If the item is a literal, returns it.
    #[inline]
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Item::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    /// A short name for the item's variant, used in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Item::MainContext(_) => "main context",
            Item::Function { .. } => "function",
            Item::Symbol(_) => "symbol",
            Item::Literal(literal) => literal.kind_name(),
        }
    }
}

impl Literal {
    /// If the literal is a string, returns its text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(text) => Some(text),
            _ => None,
        }
    }

    /// If the literal is an integer, returns it.
    #[inline]
    #[must_use]
    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Literal::Integer(value) => Some(value),
            _ => None,
        }
    }

    /// If the literal is a float, returns it.
    #[inline]
    #[must_use]
    pub fn as_float(&self) -> Option<&BigFloat> {
        match self {
            Literal::Float(value) => Some(value),
            _ => None,
        }
    }

    /// If the literal is binary, returns its bit pattern and recorded base.
    #[inline]
    #[must_use]
    pub fn as_binary(&self) -> Option<(&BitString, BinaryBase)> {
        match self {
            Literal::Binary { bits, base } => Some((bits, *base)),
            _ => None,
        }
    }

    /// A short name for the literal's variant, used in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Literal::String(_) => "string literal",
            Literal::Binary { .. } => "binary literal",
            Literal::Integer(_) => "integer literal",
            Literal::Float(_) => "floating-point literal",
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::generator::generate(self))
    }
}

impl From<Literal> for Item {
    fn from(literal: Literal) -> Self {
        Item::Literal(literal)
    }
}

impl From<i32> for Item {
    fn from(value: i32) -> Self {
        Item::integer(value)
    }
}

impl From<i64> for Item {
    fn from(value: i64) -> Self {
        Item::integer(value)
    }
}

impl From<u32> for Item {
    fn from(value: u32) -> Self {
        Item::integer(value)
    }
}

impl From<u64> for Item {
    fn from(value: u64) -> Self {
        Item::integer(value)
    }
}

impl From<BigInt> for Item {
    fn from(value: BigInt) -> Self {
        Item::integer(value)
    }
}

impl From<BigFloat> for Item {
    fn from(value: BigFloat) -> Self {
        Item::float(value)
    }
}

impl From<&str> for Item {
    fn from(value: &str) -> Self {
        Item::string(value)
    }
}

impl From<String> for Item {
    fn from(value: String) -> Self {
        Item::string(value)
    }
}
