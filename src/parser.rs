//! The DataString parser.
//!
//! A recursive-descent parser over a [`Cursor`]. At each item position it
//! tries, in this fixed order: function, symbol, literal (string, then
//! binary, then number). The first alternative that consumes at least one
//! character wins: ordered choice with backtracking, not longest match. An
//! identifier not followed by `(` makes the function alternative fail
//! entirely (restoring the cursor) and the symbol alternative re-consume the
//! identifier.
//!
//! Each alternative returns `Ok(None)` when it does not apply; `Err` is
//! reserved for definite malformed input found after a partial match: an
//! opened function call missing its `)`, an unterminated string literal, an
//! exponent sign with no digits, or unconsumed input left after the top-level
//! item loop.
//!
//! ## Examples
//!
//! ```rust
//! use datastring::parse;
//!
//! let root = parse("move(0;0);line(1;1);close()").unwrap();
//! let names: Vec<_> = root.children().iter().filter_map(|i| i.name()).collect();
//! assert_eq!(names, ["move", "line", "close"]);
//!
//! assert!(parse("foo(1;2").is_err());
//! ```

use crate::bits::{BinaryBase, BitString};
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::float::BigFloat;
use crate::lexer;
use crate::value::{Item, Literal};
use num_bigint::BigInt;
use std::str::FromStr;

/// The separator between sibling items.
pub(crate) const SEPARATOR: char = ';';
/// Opens a function's parameter list.
pub(crate) const PARAMS_OPENING: char = '(';
/// Closes a function's parameter list.
pub(crate) const PARAMS_CLOSING: char = ')';
/// Encloses string literals on both sides.
pub(crate) const STRING_ENCLOSING: char = '\'';

/// Parses a complete DataString into an [`Item::MainContext`].
///
/// # Errors
///
/// Returns a syntax error when the input is definitely malformed; see the
/// module docs for which conditions are hard errors.
pub fn parse(input: &str) -> Result<Item> {
    Parser::new(input).parse()
}

/// A single-use recursive-descent parser.
///
/// One parser owns one [`Cursor`] for the duration of one parse operation;
/// it is not shared and not reusable.
#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Parser {
            cursor: Cursor::new(input),
        }
    }

    /// Runs the parse to completion.
    ///
    /// # Errors
    ///
    /// Any input left over after the top-level item loop is a hard error, so
    /// a stray `)` fails the whole parse instead of truncating the tree.
    pub fn parse(mut self) -> Result<Item> {
        let items = self.read_all_items()?;
        if !self.cursor.at_end() {
            return Err(Error::syntax(
                self.cursor.offset(),
                "end of input",
                self.cursor.current_char(),
            ));
        }
        Ok(Item::MainContext(items))
    }

    /// The item/separator/whitespace loop shared by the main context and
    /// function parameter lists. Terminates when no alternative can advance.
    fn read_all_items(&mut self) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        loop {
            if let Some(item) = self.read_item()? {
                items.push(item);
                continue;
            }
            if self.read_separator() || self.read_whitespace() {
                continue;
            }
            break;
        }
        Ok(items)
    }

    fn read_item(&mut self) -> Result<Option<Item>> {
        if let Some(item) = self.read_function()? {
            return Ok(Some(item));
        }
        if let Some(item) = self.read_symbol() {
            return Ok(Some(item));
        }
        self.read_literal()
    }

    fn read_function(&mut self) -> Result<Option<Item>> {
        let cp = self.cursor.checkpoint();
        let name = match lexer::scan_identifier(&mut self.cursor) {
            Some(name) if self.cursor.current_char() == Some(PARAMS_OPENING) => name,
            _ => {
                self.cursor.restore(&cp);
                self.cursor.release(cp);
                return Ok(None);
            }
        };
        self.cursor.release(cp);
        self.cursor.advance();
        let args = self.read_all_items()?;
        if self.cursor.current_char() != Some(PARAMS_CLOSING) {
            return Err(Error::syntax(
                self.cursor.offset(),
                "closing `)` of parameter list",
                self.cursor.current_char(),
            ));
        }
        self.cursor.advance();
        Ok(Some(Item::Function { name, args }))
    }

    fn read_symbol(&mut self) -> Option<Item> {
        lexer::scan_identifier(&mut self.cursor).map(Item::Symbol)
    }

    fn read_literal(&mut self) -> Result<Option<Item>> {
        if let Some(item) = self.read_string_literal()? {
            return Ok(Some(item));
        }
        if let Some(item) = self.read_binary_literal()? {
            return Ok(Some(item));
        }
        self.read_number_literal()
    }

    fn read_string_literal(&mut self) -> Result<Option<Item>> {
        if self.cursor.current_char() != Some(STRING_ENCLOSING) {
            return Ok(None);
        }
        let start = self.cursor.offset();
        self.cursor.advance();
        let cp = self.cursor.checkpoint();
        loop {
            match self.cursor.current_char() {
                Some(ch) if ch == STRING_ENCLOSING => break,
                Some(_) => self.cursor.advance(),
                None => {
                    self.cursor.release(cp);
                    return Err(Error::UnterminatedString { offset: start });
                }
            }
        }
        let value = self.cursor.text_since(&cp).to_string();
        self.cursor.release(cp);
        self.cursor.advance();
        Ok(Some(Item::Literal(Literal::String(value))))
    }

    fn read_binary_literal(&mut self) -> Result<Option<Item>> {
        let cp = self.cursor.checkpoint();
        if self.cursor.current_char() != Some('0') {
            self.cursor.release(cp);
            return Ok(None);
        }
        self.cursor.advance();
        let base = match self.cursor.current_char() {
            Some('b') => {
                self.cursor.advance();
                BinaryBase::Binary
            }
            Some('x') => {
                self.cursor.advance();
                BinaryBase::Hexadecimal
            }
            _ => BinaryBase::Octal,
        };
        let digits_cp = self.cursor.checkpoint();
        while let Some(ch) = self.cursor.current_char() {
            if ch.to_digit(base.radix()).is_none() {
                break;
            }
            self.cursor.advance();
        }
        let digits = self.cursor.text_since(&digits_cp).to_string();
        self.cursor.release(digits_cp);
        if digits.is_empty() {
            // `0`, `0.5` or a bare `0b` fall through to the number alternative.
            self.cursor.restore(&cp);
            self.cursor.release(cp);
            return Ok(None);
        }
        self.cursor.release(cp);
        let bits = BitString::from_digits(&digits, base)?;
        Ok(Some(Item::Literal(Literal::Binary { bits, base })))
    }

    fn read_number_literal(&mut self) -> Result<Option<Item>> {
        let Some(scan) = lexer::scan_decimal(&mut self.cursor)? else {
            return Ok(None);
        };
        let literal = if scan.is_float {
            Literal::Float(BigFloat::from_scan(&scan)?)
        } else {
            let value = BigInt::from_str(&scan.mantissa)
                .map_err(|_| Error::custom(format!("invalid integer `{}`", scan.mantissa)))?;
            Literal::Integer(value)
        };
        Ok(Some(Item::Literal(literal)))
    }

    fn read_separator(&mut self) -> bool {
        if self.cursor.current_char() == Some(SEPARATOR) {
            self.cursor.advance();
            let _ = self.read_whitespace();
            return true;
        }
        false
    }

    fn read_whitespace(&mut self) -> bool {
        let mut consumed = false;
        while self.cursor.current_char().is_some_and(char::is_whitespace) {
            self.cursor.advance();
            consumed = true;
        }
        consumed
    }
}
