//! Character classes and greedy scanning routines.
//!
//! These are the lexical helpers the parser builds on: predicates over the
//! DataString charsets and routines that consume an identifier or a decimal
//! literal from a [`Cursor`], restoring it when nothing matches.
//!
//! Decimal scanning implements the two-source exponent composition of the
//! notation: the stored power-of-ten exponent is the explicit `e` exponent
//! minus the number of digits behind the decimal point, so `1.5e3` scans to
//! mantissa `15` with exponent `2`.

use crate::cursor::Cursor;
use crate::error::{Error, Result};

/// Returns `true` for ASCII letters (identifier start).
#[inline]
#[must_use]
pub fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Returns `true` for ASCII decimal digits.
#[inline]
#[must_use]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Returns `true` for identifier continuation characters (letter, digit, `_`).
#[inline]
#[must_use]
pub fn is_word_char(ch: char) -> bool {
    is_letter(ch) || is_digit(ch) || ch == '_'
}

/// Greedily consumes an identifier (`Letter (Letter|Digit|"_")*`).
///
/// Returns `None` without moving the cursor when the current character cannot
/// start an identifier.
///
/// # Examples
///
/// ```rust
/// use datastring::{lexer, Cursor};
///
/// let mut cursor = Cursor::new("line_2(");
/// assert_eq!(lexer::scan_identifier(&mut cursor).as_deref(), Some("line_2"));
/// assert_eq!(cursor.current_char(), Some('('));
/// ```
#[must_use]
pub fn scan_identifier(cursor: &mut Cursor<'_>) -> Option<String> {
    match cursor.current_char() {
        Some(ch) if is_letter(ch) => {
            let cp = cursor.checkpoint();
            cursor.advance();
            while cursor.current_char().is_some_and(is_word_char) {
                cursor.advance();
            }
            let identifier = cursor.text_since(&cp).to_string();
            cursor.release(cp);
            Some(identifier)
        }
        _ => None,
    }
}

/// The result of scanning a decimal literal substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalScan {
    /// Sign and digits with the decimal point removed, e.g. `-15` for `-1.5`.
    pub mantissa: String,
    /// Power-of-ten exponent combining the explicit exponent and the decimal
    /// point position. Always `0` when `is_float` is `false`.
    pub exponent: i64,
    /// `true` when the literal had a decimal point or an exponent marker.
    pub is_float: bool,
}

/// Greedily consumes a decimal literal (`["+"|"-"] Digit+ ("." Digit+)?`
/// with an optional `e`/`E` exponent).
///
/// Soft failure (`Ok(None)`, cursor restored) when no digits are present.
/// A decimal point is only consumed when digits follow it, and a bare
/// exponent marker with no digits is left unconsumed; an exponent *sign*
/// with no digits after it is a hard error.
pub fn scan_decimal(cursor: &mut Cursor<'_>) -> Result<Option<DecimalScan>> {
    let cp = cursor.checkpoint();
    let mut mantissa = String::new();

    if let Some(sign @ ('+' | '-')) = cursor.current_char() {
        mantissa.push(sign);
        cursor.advance();
    }

    let mut integer_digits = 0usize;
    while let Some(ch) = cursor.current_char() {
        if !is_digit(ch) {
            break;
        }
        mantissa.push(ch);
        cursor.advance();
        integer_digits += 1;
    }
    if integer_digits == 0 {
        cursor.restore(&cp);
        cursor.release(cp);
        return Ok(None);
    }
    cursor.release(cp);

    let mut fraction_digits = 0i64;
    let mut is_float = false;
    if cursor.current_char() == Some('.') {
        let point = cursor.checkpoint();
        cursor.advance();
        if cursor.current_char().is_some_and(is_digit) {
            while let Some(ch) = cursor.current_char() {
                if !is_digit(ch) {
                    break;
                }
                mantissa.push(ch);
                cursor.advance();
                fraction_digits += 1;
            }
            is_float = true;
            cursor.release(point);
        } else {
            // A trailing `.` with no digits is not part of the number.
            cursor.restore(&point);
            cursor.release(point);
        }
    }

    let mut explicit_exponent = 0i64;
    if matches!(cursor.current_char(), Some('e' | 'E')) {
        let marker = cursor.checkpoint();
        cursor.advance();
        let mut signed = false;
        let mut exponent_text = String::new();
        if let Some(sign @ ('+' | '-')) = cursor.current_char() {
            exponent_text.push(sign);
            cursor.advance();
            signed = true;
        }
        if cursor.current_char().is_some_and(is_digit) {
            while let Some(ch) = cursor.current_char() {
                if !is_digit(ch) {
                    break;
                }
                exponent_text.push(ch);
                cursor.advance();
            }
            explicit_exponent = exponent_text.parse::<i64>().map_err(|_| {
                Error::syntax(cursor.offset(), "exponent in range", cursor.current_char())
            })?;
            is_float = true;
            cursor.release(marker);
        } else if signed {
            let err = Error::syntax(
                cursor.offset(),
                "exponent digits",
                cursor.current_char(),
            );
            cursor.release(marker);
            return Err(err);
        } else {
            // A bare `e` with no digit starts a following symbol instead.
            cursor.restore(&marker);
            cursor.release(marker);
        }
    }

    Ok(Some(DecimalScan {
        mantissa,
        exponent: explicit_exponent - fraction_digits,
        is_float,
    }))
}
