//! DataString Notation Reference
//!
//! This module documents the DataString notation as implemented by this
//! library.
//!
//! # Overview
//!
//! DataString is a compact textual notation for tree-shaped data: a flat
//! sequence of items at the top level, where each item is a function call,
//! a bare symbol, or a literal, and function calls nest arbitrarily. It was
//! designed to serialize drawing instructions (paths, colors, strokes) in a
//! form that is short, diff-friendly and hand-editable.
//!
//! ```text
//! move(0; 0); line(100; 50); stroke(rgb(255; 0; 0); 2.5); close()
//! ```
//!
//! # Core Syntax
//!
//! ## Documents
//!
//! A document is a sequence of items separated by `;`:
//!
//! ```text
//! Document  := Item (Separator Item)*
//! Separator := ';' Whitespace*
//! ```
//!
//! Whitespace between items is discarded. A separator is allowed but not
//! required between adjacent items; `1 2` and `1; 2` both parse to two
//! items. An empty document parses to an empty main context.
//!
//! ## Functions
//!
//! A function is an identifier followed by a parenthesized, `;`-separated
//! argument list. Arguments are themselves items, so calls nest:
//!
//! ```text
//! rgb(255; 0; 0)
//! stroke(rgb(255; 0; 0); 2.5)
//! close()
//! ```
//!
//! Identifiers start with an ASCII letter and continue with letters, digits
//! and underscores. An identifier **not** followed by `(` is a symbol, not
//! a function; `foo` and `foo()` are distinct items.
//!
//! A `(` after an identifier commits the parser to a function: from that
//! point a missing `)` is a syntax error, not a fallback to another
//! interpretation.
//!
//! ## Literals
//!
//! | Kind | Syntax | Example |
//! |------|--------|---------|
//! | String | `'...'` | `'hello world'` |
//! | Binary | `0b` + bits | `0b1010` |
//! | Octal | `0` + digits `0`-`7` | `0755` |
//! | Hexadecimal | `0x` + hex digits | `0xff` |
//! | Integer | Decimal digits, optional sign | `-42` |
//! | Float | Digits with `.` and/or exponent | `1.5`, `2e10`, `-0.5e-3` |
//!
//! ### Strings
//!
//! Strings are enclosed in single quotes and contain any character except
//! the quote itself; there are no escape sequences. The empty string `''`
//! is valid. An opened string that reaches end of input without its closing
//! quote is a syntax error.
//!
//! ### Binary Literals
//!
//! A binary literal records both its **bit pattern** and its **base**, so
//! leading zeros and the chosen radix survive a round trip:
//!
//! ```text
//! 0b0011   # four bits, rendered back in binary
//! 0017     # octal, two digits
//! 0xff     # hexadecimal, rendered back lowercase
//! ```
//!
//! Hexadecimal digits are accepted in either case and always rendered
//! lowercase. A bare `0`, or a `0` followed by `.` or `8`/`9`, is not a
//! binary literal and falls through to number parsing.
//!
//! ### Numbers
//!
//! Integers are arbitrary precision. Floats are decimal-exact: a float is
//! stored as an integer mantissa and a power-of-ten exponent, so `0.1` is
//! exactly one tenth. The stored exponent combines the fraction and the
//! explicit exponent: `1.5e3` has mantissa `15` and exponent `2`.
//!
//! A number is a float when it has a fraction part, an explicit exponent,
//! or both; otherwise it is an integer. A `.` not followed by a digit is
//! not a fraction (`1.` is the integer `1` followed by a stray `.`, which
//! then fails as trailing input). An `e` not followed by digits is not an
//! exponent, except that a sign after the `e` commits it: `1e+` is a
//! syntax error.
//!
//! # Canonical Output
//!
//! The generator renders any item tree back to notation text:
//!
//! - Items and arguments are joined with `"; "` (separator plus one space).
//! - Binary literals render in their recorded base with their recorded
//!   digit count.
//! - Floats always include a decimal point (`150.0`, never `150`), so a
//!   float re-parses as a float.
//! - Strings render with their quotes; no escaping is applied.
//!
//! Generated text always re-parses to a value-equal tree, and generating
//! that re-parsed tree reproduces the text exactly.
//!
//! # Parsing Model
//!
//! The parser is recursive descent with **ordered choice**: at each
//! position it tries function, then symbol, then literal (string, then
//! binary, then number), committing to the first alternative that matches.
//! An alternative that does not match restores the cursor and reports "no
//! match" rather than an error; hard errors are reserved for definite
//! malformation:
//!
//! - a function's parameter list missing its `)`
//! - an unterminated string literal
//! - a signed exponent with no digits
//! - input left over after the top-level item sequence (for example a
//!   stray `)`)
//!
//! # Limitations
//!
//! - Strings cannot contain the `'` character (no escape sequences).
//! - Comments are not supported in the notation.
//! - Symbols and function names are ASCII-identifier shaped; arbitrary
//!   text must use string literals.

// This module contains only documentation; no implementation code
