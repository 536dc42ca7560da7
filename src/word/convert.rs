/*
    Conversions out of `WordArray<N>`
*/

use num_bigint::BigUint;

use crate::error::ArithError;
use crate::word::{raw, WordArray};

/// Renders `width` bits of a word slice in base `2^bits_per_digit`,
/// most significant digit first. Digits group from the LSB, so the top
/// digit may cover fewer than `bits_per_digit` bits.
pub(crate) fn digits_base_2n(words: &[u64], width: usize, bits_per_digit: usize) -> String {
    assert!(
        (1..=5).contains(&bits_per_digit),
        "unsupported digit width: {}",
        bits_per_digit
    );

    let digit_count = (width + bits_per_digit - 1) / bits_per_digit;
    let mut out = String::with_capacity(digit_count);
    for d in (0..digit_count).rev() {
        let mut digit = 0u32;
        for b in (0..bits_per_digit).rev() {
            let idx = d * bits_per_digit + b;
            digit <<= 1;
            if idx < width && raw::bit(words, idx) {
                digit |= 1;
            }
        }
        out.push(char::from_digit(digit, 32).unwrap());
    }
    out
}

pub(crate) fn to_biguint(words: &[u64]) -> BigUint {
    let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
    BigUint::from_bytes_le(&bytes)
}

impl<const N: usize> WordArray<N> {
    /// Returns the value as a `u64`, failing with `DomainError` when a
    /// significant bit lies at position 64 or above.
    pub fn to_u64(&self) -> Result<u64, ArithError> {
        if self.words().iter().skip(1).any(|w| *w != 0) {
            return Err(ArithError::DomainError(format!(
                "{}-bit value does not fit into 64 bits",
                N
            )));
        }
        Ok(self.word(0))
    }

    /// Returns the value as a `u32`, failing when it does not fit.
    pub fn to_u32(&self) -> Result<u32, ArithError> {
        let v = self.to_u64()?;
        u32::try_from(v).map_err(|_| {
            ArithError::DomainError(format!("value {} does not fit into 32 bits", v))
        })
    }

    /// Returns the value as a `u16`, failing when it does not fit.
    pub fn to_u16(&self) -> Result<u16, ArithError> {
        let v = self.to_u64()?;
        u16::try_from(v).map_err(|_| {
            ArithError::DomainError(format!("value {} does not fit into 16 bits", v))
        })
    }

    /// Returns the value as a `u8`, failing when it does not fit.
    pub fn to_u8(&self) -> Result<u8, ArithError> {
        let v = self.to_u64()?;
        u8::try_from(v).map_err(|_| {
            ArithError::DomainError(format!("value {} does not fit into 8 bits", v))
        })
    }

    /// Renders the bits in base `2^bits_per_digit`, MSB first.
    pub fn to_base_2n(&self, bits_per_digit: usize) -> String {
        digits_base_2n(self.words(), N, bits_per_digit)
    }

    /// Renders the bits as a binary string, MSB first.
    pub fn to_binary(&self) -> String {
        self.to_base_2n(1)
    }

    /// Renders the bits as an octal string (groups of three from the LSB).
    pub fn to_octal(&self) -> String {
        self.to_base_2n(3)
    }

    /// Renders the bits as a hexadecimal string.
    pub fn to_hex(&self) -> String {
        self.to_base_2n(4)
    }

    /// Renders the bits as an unsigned decimal string.
    pub fn to_decimal(&self) -> String {
        to_biguint(self.words()).to_str_radix(10)
    }
}
