//! Bit patterns for binary literals.
//!
//! A binary literal such as `0xff`, `0b1010` or `017` denotes a raw bit
//! pattern. [`BitString`] stores that pattern most-significant bit first, and
//! the literal separately records the [`BinaryBase`] it was written in so the
//! generator can reproduce the same representation: round-trip fidelity by
//! base and digit count, not by value only (`0x0f` keeps its leading zero).
//!
//! ## Examples
//!
//! ```rust
//! use datastring::{BinaryBase, BitString};
//! use num_bigint::BigInt;
//!
//! let bits = BitString::from_digits("ff", BinaryBase::Hexadecimal).unwrap();
//! assert_eq!(bits.len(), 8);
//! assert_eq!(bits.to_bigint(), BigInt::from(255));
//! assert_eq!(bits.to_digits(BinaryBase::Binary), "11111111");
//! ```

use crate::error::{Error, Result};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// The numeral base a binary literal was written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryBase {
    /// `0b` prefix, digits `0-1`.
    Binary,
    /// Bare `0` prefix, digits `0-7`.
    Octal,
    /// `0x` prefix, digits `0-9a-f` (either case accepted).
    Hexadecimal,
}

impl BinaryBase {
    /// The radix value (2, 8 or 16).
    #[must_use]
    pub const fn radix(self) -> u32 {
        match self {
            BinaryBase::Binary => 2,
            BinaryBase::Octal => 8,
            BinaryBase::Hexadecimal => 16,
        }
    }

    /// Number of bits encoded by one digit in this base.
    #[must_use]
    pub const fn bits_per_digit(self) -> usize {
        match self {
            BinaryBase::Binary => 1,
            BinaryBase::Octal => 3,
            BinaryBase::Hexadecimal => 4,
        }
    }

    /// The literal prefix that selects this base.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            BinaryBase::Binary => "0b",
            BinaryBase::Octal => "0",
            BinaryBase::Hexadecimal => "0x",
        }
    }
}

/// A bit pattern, most-significant bit first.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    /// Wraps a bit sequence (most-significant bit first).
    #[must_use]
    pub fn new(bits: Vec<bool>) -> Self {
        BitString { bits }
    }

    /// Parses a digit string in the given base into a bit pattern.
    ///
    /// Each digit contributes exactly [`BinaryBase::bits_per_digit`] bits, so
    /// leading zero digits are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDigit`] when a character is outside the base's
    /// charset.
    pub fn from_digits(digits: &str, base: BinaryBase) -> Result<Self> {
        let per_digit = base.bits_per_digit();
        let mut bits = Vec::with_capacity(digits.len() * per_digit);
        for ch in digits.chars() {
            let value = ch.to_digit(base.radix()).ok_or(Error::InvalidDigit {
                digit: ch,
                base: base.radix(),
            })?;
            for shift in (0..per_digit).rev() {
                bits.push(value >> shift & 1 == 1);
            }
        }
        Ok(BitString { bits })
    }

    /// Renders the pattern as digits in the given base, left-padding with
    /// zero bits when the length is not a whole number of digits.
    #[must_use]
    pub fn to_digits(&self, base: BinaryBase) -> String {
        let per_digit = base.bits_per_digit();
        let padding = (per_digit - self.bits.len() % per_digit) % per_digit;
        let mut digits = String::with_capacity(self.bits.len() / per_digit + 1);
        let mut value = 0u32;
        let mut filled = padding;
        for &bit in &self.bits {
            value = value << 1 | u32::from(bit);
            filled += 1;
            if filled == per_digit {
                // Digits are filtered to the radix, so from_digit cannot fail.
                digits.push(char::from_digit(value, base.radix()).unwrap_or('0'));
                value = 0;
                filled = 0;
            }
        }
        if digits.is_empty() {
            digits.push('0');
        }
        digits
    }

    /// The unsigned integer value of the pattern.
    #[must_use]
    pub fn to_bigint(&self) -> BigInt {
        let mut value = BigInt::from(0u8);
        for &bit in &self.bits {
            value = (value << 1) + u8::from(bit);
        }
        value
    }

    /// Builds the minimal pattern encoding a non-negative integer.
    ///
    /// Returns `None` for negative values, which have no bit-pattern form.
    #[must_use]
    pub fn from_bigint(value: &BigInt) -> Option<Self> {
        if value.sign() == num_bigint::Sign::Minus {
            return None;
        }
        let (_, bytes) = value.to_bytes_be();
        let mut bits: Vec<bool> = bytes
            .iter()
            .flat_map(|byte| (0..8).rev().map(move |shift| byte >> shift & 1 == 1))
            .skip_while(|&bit| !bit)
            .collect();
        if bits.is_empty() {
            bits.push(false);
        }
        Some(BitString { bits })
    }

    /// Number of bits in the pattern.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` when the pattern has no bits at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bits, most-significant first.
    #[must_use]
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let bits = BitString::from_digits("ff", BinaryBase::Hexadecimal).unwrap();
        assert_eq!(bits.to_bigint(), BigInt::from(255));
        assert_eq!(bits.to_digits(BinaryBase::Hexadecimal), "ff");
    }

    #[test]
    fn test_uppercase_hex_digits() {
        let bits = BitString::from_digits("FF", BinaryBase::Hexadecimal).unwrap();
        assert_eq!(bits.to_bigint(), BigInt::from(255));
        assert_eq!(bits.to_digits(BinaryBase::Hexadecimal), "ff");
    }

    #[test]
    fn test_leading_zero_digits_survive() {
        let bits = BitString::from_digits("0f", BinaryBase::Hexadecimal).unwrap();
        assert_eq!(bits.len(), 8);
        assert_eq!(bits.to_digits(BinaryBase::Hexadecimal), "0f");
    }

    #[test]
    fn test_octal_digits() {
        let bits = BitString::from_digits("17", BinaryBase::Octal).unwrap();
        assert_eq!(bits.to_bigint(), BigInt::from(0o17));
        assert_eq!(bits.to_digits(BinaryBase::Octal), "17");
    }

    #[test]
    fn test_binary_digits() {
        let bits = BitString::from_digits("1010", BinaryBase::Binary).unwrap();
        assert_eq!(bits.to_bigint(), BigInt::from(10));
        assert_eq!(bits.to_digits(BinaryBase::Binary), "1010");
    }

    #[test]
    fn test_invalid_digit() {
        let err = BitString::from_digits("12", BinaryBase::Binary).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidDigit {
                digit: '2',
                base: 2
            }
        );
    }

    #[test]
    fn test_cross_base_rendering_pads() {
        // Five bits render as two octal digits with a padded leading zero bit.
        let bits = BitString::new(vec![true, false, true, false, true]);
        assert_eq!(bits.to_digits(BinaryBase::Octal), "25");
    }

    #[test]
    fn test_from_bigint() {
        let bits = BitString::from_bigint(&BigInt::from(10)).unwrap();
        assert_eq!(bits.bits(), &[true, false, true, false]);
        assert!(BitString::from_bigint(&BigInt::from(-1)).is_none());
        let zero = BitString::from_bigint(&BigInt::from(0)).unwrap();
        assert_eq!(zero.len(), 1);
        assert_eq!(zero.to_bigint(), BigInt::from(0));
    }
}
