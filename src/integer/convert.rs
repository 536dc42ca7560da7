/*
    Integer casts and string conversions
*/

use crate::error::ArithError;
use crate::integer::{SInteger, UInteger};
use crate::word::{raw, WordArray};

impl<const N: usize> UInteger<N> {
    /// Creates an unsigned integer from the low bits of `value`; bits
    /// beyond the width are discarded.
    pub fn from_u64(value: u64) -> Self {
        Self::from_bits(WordArray::from_u64(value))
    }

    /// Zero-extends to a wider integer or truncates to a narrower one.
    pub fn width_cast<const M: usize>(&self) -> UInteger<M> {
        UInteger::from_bits(self.bits.width_cast())
    }

    /// Returns the value as a `u64`, failing when it does not fit.
    pub fn to_u64(&self) -> Result<u64, ArithError> {
        self.bits.to_u64()
    }

    /// Returns the value as a `u32`, failing when it does not fit.
    pub fn to_u32(&self) -> Result<u32, ArithError> {
        self.bits.to_u32()
    }

    /// Returns the value as a `u16`, failing when it does not fit.
    pub fn to_u16(&self) -> Result<u16, ArithError> {
        self.bits.to_u16()
    }

    /// Returns the value as a `u8`, failing when it does not fit.
    pub fn to_u8(&self) -> Result<u8, ArithError> {
        self.bits.to_u8()
    }

    /// Renders the value as a decimal string.
    pub fn to_decimal(&self) -> String {
        self.bits.to_decimal()
    }
}

impl<const N: usize> SInteger<N> {
    /// Creates a signed integer from `value`, truncating in two's
    /// complement when the width is narrower than 64 bits.
    pub fn from_i64(value: i64) -> Self {
        let words = raw::sign_extend(&[value as u64], 64, N.max(64));
        Self::from_bits(WordArray::from_words(&words))
    }

    /// Sign-extends to a wider integer or truncates to a narrower one.
    pub fn width_cast<const M: usize>(&self) -> SInteger<M> {
        let words = raw::sign_extend(self.bits.words(), N, M);
        SInteger::from_bits(WordArray::from_words(&words))
    }

    /// Returns the value as an `i64`, failing when it does not fit.
    pub fn to_i64(&self) -> Result<i64, ArithError> {
        // extend to whole words so the excess compares against the mask
        let target = raw::words_for(N.max(64)) * WordArray::<N>::word_width();
        let extended = raw::sign_extend(self.bits.words(), N, target);
        let low = extended[0];
        let value = low as i64;

        // every bit above position 63 must agree with the sign
        let sign_word = if value < 0 { u64::MAX } else { 0 };
        if extended.iter().skip(1).any(|w| *w != sign_word) {
            return Err(ArithError::DomainError(format!(
                "{}-bit value does not fit into 64 bits",
                N
            )));
        }
        Ok(value)
    }

    /// Renders the value as a decimal string with a leading `-` when
    /// negative.
    pub fn to_decimal(&self) -> String {
        if self.is_negative() {
            format!("-{}", self.expanding_abs().to_decimal())
        } else {
            self.bits.to_decimal()
        }
    }
}
