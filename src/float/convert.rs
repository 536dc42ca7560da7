/*
    Conversions to and from `NormFloat<E, M>`
*/

use crate::float::NormFloat;
use crate::integer::UInteger;
use crate::word::convert::digits_base_2n;
use crate::word::{raw, WordArray};

// Field widths of the native formats.
const F64_EXP: i64 = 1023;
const F64_FRAC: usize = 52;
const F32_EXP: i64 = 127;
const F32_FRAC: usize = 23;

impl<const E: usize, const M: usize> NormFloat<E, M> {
    // Decodes native fields into this format. `c` is the significand
    // with the hidden bit applied where present, `exp_lsb` the exponent
    // of its LSB. Truncation of low fraction bits discards information;
    // decoding never rounds.
    fn from_native_fields(sign: bool, c: u64, exp_lsb: i64) -> Self {
        if c == 0 {
            return Self::zero(sign);
        }

        let top = 63 - c.leading_zeros() as usize;
        let unbiased = exp_lsb + top as i64;

        if unbiased > Self::emax() {
            return Self::infinity(sign);
        }
        if unbiased < Self::emin() {
            return Self::zero(sign);
        }

        let frac_native = c & !(1u64 << top);
        let fraction: UInteger<M> = if M >= top {
            UInteger::from_u64(frac_native) << (M - top)
        } else {
            UInteger::from_u64(frac_native >> (top - M))
        };

        let biased = (unbiased + Self::bias()) as u64;
        Self::new(sign, UInteger::from_u64(biased), fraction)
    }

    /// Decodes a native double into this format; low fraction bits that
    /// do not fit are truncated, not rounded.
    pub fn from_f64(value: f64) -> Self {
        let bits = value.to_bits();
        let sign = bits >> 63 == 1;
        let e = ((bits >> F64_FRAC) & 0x7FF) as i64;
        let f = bits & ((1u64 << F64_FRAC) - 1);

        if e == 0x7FF {
            return if f == 0 { Self::infinity(sign) } else { Self::nan() };
        }
        if e == 0 {
            // native zero or subnormal
            return Self::from_native_fields(sign, f, 1 - F64_EXP - F64_FRAC as i64);
        }
        Self::from_native_fields(sign, f | (1u64 << F64_FRAC), e - F64_EXP - F64_FRAC as i64)
    }

    /// Decodes a native single into this format; low fraction bits that
    /// do not fit are truncated, not rounded.
    pub fn from_f32(value: f32) -> Self {
        let bits = value.to_bits() as u64;
        let sign = bits >> 31 == 1;
        let e = ((bits >> F32_FRAC) & 0xFF) as i64;
        let f = bits & ((1u64 << F32_FRAC) - 1);

        if e == 0xFF {
            return if f == 0 { Self::infinity(sign) } else { Self::nan() };
        }
        if e == 0 {
            return Self::from_native_fields(sign, f, 1 - F32_EXP - F32_FRAC as i64);
        }
        Self::from_native_fields(sign, f | (1u64 << F32_FRAC), e - F32_EXP - F32_FRAC as i64)
    }

    // Encodes into native fields of `frac` fraction bits biased by
    // `bias`, assuming the native format is at least as wide as this one.
    fn to_native_bits(&self, frac: usize, bias: i64) -> (u64, u64) {
        // significand as an integer with the hidden bit where present;
        // M <= frac, so it fits a u64
        let mut c = 0u64;
        for i in 0..M.min(64) {
            if self.fraction().bit(i) {
                c |= 1 << i;
            }
        }
        if self.is_normalized() {
            c |= 1 << M;
        }

        if c == 0 {
            return (0, 0);
        }

        let top = 63 - c.leading_zeros() as usize;
        let unbiased = self.unbiased_exponent() - M as i64 + top as i64;

        // align the top bit to the native hidden position
        let c_native = c << (frac - top);
        let native_e = unbiased + bias;
        if native_e > 0 {
            (native_e as u64, c_native & ((1u64 << frac) - 1))
        } else {
            // lands in the native subnormal range
            (0, c_native >> (1 - native_e))
        }
    }

    /// Encodes into a native double. Only target-or-wider natives are
    /// supported: requires `E <= 11` and `M <= 52`.
    pub fn to_f64(&self) -> f64 {
        assert!(
            E <= 11 && M <= F64_FRAC,
            "format NormFloat<{}, {}> is wider than a native double",
            E,
            M
        );

        let sign_bit = (self.sign() as u64) << 63;
        if self.is_nan() {
            return f64::NAN;
        }
        if self.is_inf() {
            return f64::from_bits(sign_bit | (0x7FFu64 << F64_FRAC));
        }

        let (e, f) = self.to_native_bits(F64_FRAC, F64_EXP);
        f64::from_bits(sign_bit | (e << F64_FRAC) | f)
    }

    /// Encodes into a native single. Only target-or-wider natives are
    /// supported: requires `E <= 8` and `M <= 23`.
    pub fn to_f32(&self) -> f32 {
        assert!(
            E <= 8 && M <= F32_FRAC,
            "format NormFloat<{}, {}> is wider than a native single",
            E,
            M
        );

        let sign_bit = (self.sign() as u32) << 31;
        if self.is_nan() {
            return f32::NAN;
        }
        if self.is_inf() {
            return f32::from_bits(sign_bit | (0xFFu32 << F32_FRAC));
        }

        let (e, f) = self.to_native_bits(F32_FRAC, F32_EXP);
        f32::from_bits(sign_bit | ((e as u32) << F32_FRAC) | f as u32)
    }
}

// Packed bit pattern
impl<const E: usize, const M: usize> NormFloat<E, M> {
    /// Reassembles a float from its packed `1 + E + M`-bit pattern;
    /// `W` must equal that width.
    pub fn from_bits<const W: usize>(bits: &WordArray<W>) -> Self {
        assert_eq!(W, 1 + E + M, "packed float width mismatch");

        let sign = bits.bit(W - 1);
        let exponent: WordArray<E> = bits.bit_range(M + E - 1, M);
        let fraction: WordArray<M> = bits.bit_range(M - 1, 0);
        Self::new(sign, UInteger::from_bits(exponent), UInteger::from_bits(fraction))
    }

    /// Packs the float into its `1 + E + M`-bit pattern, fraction in the
    /// low bits; `W` must equal that width.
    pub fn to_bits<const W: usize>(&self) -> WordArray<W> {
        assert_eq!(W, 1 + E + M, "packed float width mismatch");

        let mut bits = WordArray::<W>::zero();
        for i in 0..M {
            bits.set_bit(i, self.fraction.bit(i));
        }
        for i in 0..E {
            bits.set_bit(M + i, self.exponent.bit(i));
        }
        bits.set_bit(W - 1, self.sign);
        bits
    }
}

// String conversions
impl<const E: usize, const M: usize> NormFloat<E, M> {
    // the full mantissa (hidden bit plus fraction) as raw words
    fn full_mantissa_words(&self) -> Vec<u64> {
        let mut words = vec![0u64; raw::words_for(M + 1)];
        let take = self.fraction.bits().words().len().min(words.len());
        words[..take].copy_from_slice(&self.fraction.bits().words()[..take]);
        if self.is_normalized() {
            raw::set_bit(&mut words, M, true);
        }
        words
    }

    /// Renders as `"s e f"` in base `2^bits_per_digit`: the sign bit,
    /// the exponent field and the full mantissa including the hidden bit.
    pub fn to_base_2n(&self, bits_per_digit: usize) -> String {
        format!(
            "{} {} {}",
            self.sign as u8,
            self.exponent.to_base_2n(bits_per_digit),
            digits_base_2n(&self.full_mantissa_words(), M + 1, bits_per_digit)
        )
    }

    /// Renders the grouped fields in binary.
    pub fn to_binary(&self) -> String {
        self.to_base_2n(1)
    }

    /// Renders the grouped fields in octal.
    pub fn to_octal(&self) -> String {
        self.to_base_2n(3)
    }

    /// Renders the grouped fields in hexadecimal.
    pub fn to_hex(&self) -> String {
        self.to_base_2n(4)
    }

    /// Renders as a scientific string of shape `"[-]m.mmmE[-]eee"` using
    /// the unbiased exponent, e.g. `1.5E-3`.
    pub fn to_sci_string(&self) -> String {
        if self.is_nan() {
            return String::from("NaN");
        }

        let sign = if self.sign { "-" } else { "" };
        if self.is_inf() {
            return format!("{}Inf", sign);
        }
        if self.is_zero() {
            return format!("{}0", sign);
        }

        // mantissa in [1, 2): splice the top fraction bits into a native
        // double's fraction field under a fixed exponent of zero
        let frac_high = if M <= F64_FRAC {
            match self.fraction.to_u64() {
                Ok(f) => f << (F64_FRAC - M),
                Err(_) => 0,
            }
        } else {
            match (self.fraction.clone() >> (M - F64_FRAC)).to_u64() {
                Ok(f) => f,
                Err(_) => 0,
            }
        };
        let mantissa = f64::from_bits((0x3FFu64 << F64_FRAC) | frac_high);

        let exponent = self.unbiased_exponent();
        format!("{}{}E{}", sign, mantissa, exponent)
    }
}
