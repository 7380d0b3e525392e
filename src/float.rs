//! Arbitrary-precision decimal floating-point values.
//!
//! [`BigFloat`] is a `mantissa * 10^exponent` pair with a [`BigInt`] mantissa,
//! so literal values like measurement amounts are never subject to binary
//! rounding. Equality is value equality: `15e1` and `150e0` compare equal.
//!
//! The canonical text of a `BigFloat` always contains a decimal point
//! (`150.0`, `1.5`, `0.025`), so a generated float literal parses back as a
//! float rather than collapsing into an integer.
//!
//! ## Examples
//!
//! ```rust
//! use datastring::BigFloat;
//! use num_bigint::BigInt;
//!
//! let value: BigFloat = "1.5e2".parse().unwrap();
//! assert_eq!(value, BigFloat::new(BigInt::from(150), 0));
//! assert_eq!(value.to_string(), "150.0");
//! ```

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::lexer;
use num_bigint::{BigInt, Sign};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An arbitrary-precision decimal: `mantissa * 10^exponent`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BigFloat {
    mantissa: BigInt,
    exponent: i64,
}

impl BigFloat {
    /// Builds a value from a mantissa and a power-of-ten exponent.
    #[must_use]
    pub fn new(mantissa: impl Into<BigInt>, exponent: i64) -> Self {
        BigFloat {
            mantissa: mantissa.into(),
            exponent,
        }
    }

    /// The raw mantissa as constructed or parsed.
    #[must_use]
    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    /// The raw power-of-ten exponent as constructed or parsed.
    #[must_use]
    pub const fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Returns `true` for a zero value, regardless of exponent.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.mantissa.sign() == Sign::NoSign
    }

    /// Mantissa and exponent with all factors of ten moved into the exponent.
    ///
    /// Zero normalizes to `(0, 0)`.
    #[must_use]
    pub fn normalized(&self) -> (BigInt, i64) {
        if self.is_zero() {
            return (BigInt::from(0), 0);
        }
        let ten = BigInt::from(10);
        let mut mantissa = self.mantissa.clone();
        let mut exponent = self.exponent;
        while (&mantissa % &ten).sign() == Sign::NoSign {
            mantissa /= &ten;
            exponent += 1;
        }
        (mantissa, exponent)
    }

    /// Converts an `f64` to its exact short decimal representation.
    ///
    /// Returns `None` for NaN and infinities, which have no decimal form.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        format!("{value}").parse().ok()
    }

    /// Nearest `f64`, or `None` when the value does not fit.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.to_string().parse().ok().filter(|f: &f64| f.is_finite())
    }

    pub(crate) fn from_scan(scan: &lexer::DecimalScan) -> Result<Self> {
        let mantissa = BigInt::from_str(&scan.mantissa)
            .map_err(|_| Error::custom(format!("invalid mantissa `{}`", scan.mantissa)))?;
        Ok(BigFloat {
            mantissa,
            exponent: scan.exponent,
        })
    }
}

impl Default for BigFloat {
    /// Zero, with a zero exponent, matching the normalized form of zero.
    fn default() -> Self {
        BigFloat::new(0, 0)
    }
}

impl PartialEq for BigFloat {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for BigFloat {}

impl From<BigInt> for BigFloat {
    fn from(value: BigInt) -> Self {
        BigFloat {
            mantissa: value,
            exponent: 0,
        }
    }
}

impl From<i64> for BigFloat {
    fn from(value: i64) -> Self {
        BigFloat::new(value, 0)
    }
}

impl fmt::Display for BigFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (mantissa, exponent) = self.normalized();
        if mantissa.sign() == Sign::Minus {
            write!(f, "-")?;
        }
        let digits = mantissa.magnitude().to_string();
        if exponent >= 0 {
            write!(f, "{digits}")?;
            for _ in 0..exponent {
                write!(f, "0")?;
            }
            write!(f, ".0")
        } else {
            let fraction = exponent.unsigned_abs() as usize;
            if digits.len() > fraction {
                let (whole, frac) = digits.split_at(digits.len() - fraction);
                write!(f, "{whole}.{frac}")
            } else {
                write!(f, "0.")?;
                for _ in 0..fraction - digits.len() {
                    write!(f, "0")?;
                }
                write!(f, "{digits}")
            }
        }
    }
}

impl FromStr for BigFloat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut cursor = Cursor::new(s);
        let scan = lexer::scan_decimal(&mut cursor)?
            .ok_or_else(|| Error::syntax(0, "decimal literal", cursor.current_char()))?;
        if !cursor.at_end() {
            return Err(Error::syntax(
                cursor.offset(),
                "end of decimal literal",
                cursor.current_char(),
            ));
        }
        BigFloat::from_scan(&scan)
    }
}
