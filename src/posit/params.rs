/*
    The posit parameter form

    Arithmetic never works on the packed posit pattern directly: a posit
    decodes into `(sign, scale, fraction)` parameters, the operation runs
    on those, and encoding packs the result back with tie-break rounding.
*/

use crate::posit::{Fractional, Posit};
use crate::word::convert::to_biguint;
use crate::word::{raw, WordArray};

/// The decoded form of a posit: classification flags, the sign, the
/// total power-of-two `scale` combining regime and exponent, and the
/// fractional significand.
///
/// Exactly one of NaR, zero, or finite holds; for finite values the
/// significand is normalized with its hidden bit set, except transiently
/// inside the renormalization loops of arithmetic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositParams<const N: usize, const ES: usize> {
    is_nar: bool,
    is_zero: bool,
    sign_bit: bool,
    scale: i64,
    fraction: Fractional<N>,
}

impl<const N: usize, const ES: usize> PositParams<N, ES> {
    /// The parameters of posit zero.
    pub fn zero() -> Self {
        Self {
            is_nar: false,
            is_zero: true,
            sign_bit: false,
            scale: 0,
            fraction: Fractional::zero(),
        }
    }

    /// The parameters of NaR; every other field is don't-care.
    pub fn nar() -> Self {
        Self {
            is_nar: true,
            is_zero: false,
            sign_bit: false,
            scale: 0,
            fraction: Fractional::zero(),
        }
    }

    pub fn is_nar(&self) -> bool {
        self.is_nar
    }

    pub fn is_zero(&self) -> bool {
        self.is_zero
    }

    /// The sign bit of the encoded posit.
    pub fn sign(&self) -> bool {
        self.sign_bit
    }

    /// The total power of two: `regime * 2^ES + exponent`.
    pub fn scale(&self) -> i64 {
        self.scale
    }

    /// The fractional significand.
    pub fn fraction(&self) -> &Fractional<N> {
        &self.fraction
    }
}

// Decoding
impl<const N: usize, const ES: usize> From<&Posit<N, ES>> for PositParams<N, ES> {
    fn from(p: &Posit<N, ES>) -> Self {
        if p.is_nar() {
            return Self::nar();
        }
        if p.is_zero() {
            return Self::zero();
        }

        let sign_bit = p.is_negative();

        // decode the magnitude; negative posits store the two's
        // complement of their absolute value's encoding
        let magnitude = p.abs();
        let bits = magnitude.bits();

        // the regime is the run of identical bits below the sign
        let first_regime_bit = bits.bit(N - 2);
        let run = if first_regime_bit {
            bits.count_leading_ones(1)
        } else {
            bits.count_leading_zeroes(1)
        };
        let regime = if first_regime_bit {
            run as i64 - 1
        } else {
            -(run as i64)
        };

        // up to ES exponent bits follow the regime terminator; a short
        // read is zero-padded on the right
        let remaining = N.saturating_sub(2 + run);
        let es_avail = ES.min(remaining);
        let mut exponent = 0i64;
        for j in 0..es_avail {
            exponent = (exponent << 1) | bits.bit(remaining - 1 - j) as i64;
        }
        exponent <<= ES - es_avail;

        let fraction = Fractional::from_posit_fraction(bits, remaining - es_avail);

        Self {
            is_nar: false,
            is_zero: false,
            sign_bit,
            scale: (regime << ES) + exponent,
            fraction,
        }
    }
}

// Encoding
impl<const N: usize, const ES: usize> PositParams<N, ES> {
    /// Packs the parameters back into a posit, rounding to nearest with
    /// ties broken toward the even bit pattern.
    pub fn encode(&self) -> Posit<N, ES> {
        if self.is_nar {
            return Posit::nar();
        }
        if self.is_zero {
            return Posit::zero();
        }

        let powes = 1i64 << ES;
        let regime = self.scale.div_euclid(powes);
        let exponent = self.scale.rem_euclid(powes);

        // a working bitstring with ES + 3 bits below the posit keeps the
        // rounding information that falls off the encoding
        let total = N + ES + 3;
        let mut bits = vec![0u64; raw::words_for(total)];
        let mut i = total as i64 - 1;

        // the sign slot stays zero: this encodes the magnitude, the
        // two's complement for negative values is applied at the end
        i -= 1;

        // unary regime: k >= 0 is k+1 ones then a zero, k < 0 is |k|
        // zeros then a one
        let (nregime, first_regime_bit) = if self.scale < 0 {
            (regime.unsigned_abs() + 1, false)
        } else {
            (regime as u64 + 2, true)
        };

        let mut ridx = 0u64;
        while ridx < nregime && i >= 0 {
            let last_regime_bit = ridx == nregime - 1;
            raw::set_bit(
                &mut bits,
                i as usize,
                if last_regime_bit { !first_regime_bit } else { first_regime_bit },
            );
            ridx += 1;
            i -= 1;
        }

        // exponent bits, MSB first
        let mut eprinted = 0;
        while eprinted < ES && i >= 0 {
            let bit = (exponent >> (ES - 1 - eprinted)) & 1 == 1;
            raw::set_bit(&mut bits, i as usize, bit);
            eprinted += 1;
            i -= 1;
        }

        // fraction bits, MSB first, hidden bit dropped
        let mut fidx = Fractional::<N>::FRACTION_BITS as i64 - 1;
        while fidx >= 0 && i >= 0 {
            raw::set_bit(&mut bits, i as usize, self.fraction.fraction_bit(fidx as usize));
            fidx -= 1;
            i -= 1;
        }

        // the top N bits are the candidate posit, the low ES + 3 bits
        // the rounding residue
        let mut posit_words = vec![0u64; WordArray::<N>::word_count()];
        raw::shr_into(&mut posit_words, &bits, ES + 3);
        let posit_bits = WordArray::<N>::from_words(&posit_words);

        let mut x = Posit::from_bits(posit_bits.clone());

        let last = posit_bits.bit(0);
        let after = raw::bit(&bits, ES + 2);
        let tail = (0..ES + 2).any(|j| raw::bit(&bits, j));

        if (last && after) || (after && tail) {
            x = x.incremented_real();
        }

        if self.sign_bit {
            x = -x;
        }

        x
    }
}

// Arithmetic
impl<const N: usize, const ES: usize> PositParams<N, ES> {
    /// Flips the sign of a finite value; zero and NaR are unchanged.
    pub fn neg(&self) -> Self {
        let mut out = self.clone();
        if !out.is_nar && !out.is_zero {
            out.sign_bit = !out.sign_bit;
        }
        out
    }

    /// Adds two parameter values. NaR is absorbing, zero is the
    /// identity.
    pub fn add(&self, other: &Self) -> Self {
        if self.is_nar || other.is_nar {
            return Self::nar();
        }
        if self.is_zero {
            return other.clone();
        }
        if other.is_zero {
            return self.clone();
        }

        let mut lhs = self.clone();
        let mut rhs = other.clone();
        Self::match_scale(&mut lhs, &mut rhs);
        Self::sum_fractions(&lhs, &rhs)
    }

    /// Subtracts two parameter values as `a + (-b)`.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two parameter values: scales add, significands
    /// multiply, the product renormalizes.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_nar || other.is_nar {
            return Self::nar();
        }
        if self.is_zero || other.is_zero {
            return Self::zero();
        }

        let f = Fractional::<N>::FRACTION_BITS;
        let product = (to_biguint(self.fraction.words()) * to_biguint(other.fraction.words())) >> f;

        let mut out = Self {
            is_nar: false,
            is_zero: false,
            sign_bit: self.sign_bit != other.sign_bit,
            scale: self.scale + other.scale,
            fraction: Fractional::from_words(&product.to_u64_digits()),
        };

        while out.fraction.carry_bit() {
            out.fraction = out.fraction.clone() >> 1;
            out.scale += 1;
        }

        out
    }

    /// Divides two parameter values: scales subtract, significands
    /// long-divide. Division by zero yields NaR, posits having no
    /// infinity to overflow into.
    pub fn div(&self, other: &Self) -> Self {
        if self.is_nar || other.is_nar || other.is_zero {
            return Self::nar();
        }
        if self.is_zero {
            return Self::zero();
        }

        let f = Fractional::<N>::FRACTION_BITS;
        let quotient =
            (to_biguint(self.fraction.words()) << f) / to_biguint(other.fraction.words());

        let mut out = Self {
            is_nar: false,
            is_zero: false,
            sign_bit: self.sign_bit != other.sign_bit,
            scale: self.scale - other.scale,
            fraction: Fractional::from_words(&quotient.to_u64_digits()),
        };

        // a quotient below one shifts back up into the hidden position
        if !out.fraction.hidden_bit() {
            out.fraction = out.fraction.clone() << 1;
            out.scale -= 1;
        }

        out
    }

    // Aligns the smaller-scale operand to the larger by shifting its
    // fraction right.
    fn match_scale(p: &mut Self, q: &mut Self) {
        let (bigger, smaller) = if p.scale > q.scale { (p, q) } else { (q, p) };
        let scale_diff = (bigger.scale - smaller.scale) as usize;
        smaller.fraction = smaller.fraction.clone() >> scale_diff;
        smaller.scale = bigger.scale;
    }

    // Combines two scale-matched operands according to their signs.
    fn sum_fractions(lhs: &Self, rhs: &Self) -> Self {
        debug_assert_eq!(lhs.scale, rhs.scale);

        let mut dest = Self {
            is_nar: false,
            is_zero: false,
            sign_bit: false,
            scale: lhs.scale,
            fraction: Fractional::zero(),
        };

        match (lhs.sign_bit, rhs.sign_bit) {
            (true, true) => {
                // (-p) + (-q) == -(p + q)
                Self::add_fractions(&mut dest, &lhs.fraction, &rhs.fraction);
                dest.sign_bit = true;
            }
            (false, false) => {
                Self::add_fractions(&mut dest, &lhs.fraction, &rhs.fraction);
            }
            (false, true) => {
                // (+p) + (-q)
                match lhs.fraction.cmp(&rhs.fraction) {
                    std::cmp::Ordering::Greater => {
                        Self::sub_fractions(&mut dest, &lhs.fraction, &rhs.fraction);
                    }
                    std::cmp::Ordering::Equal => {
                        dest.is_zero = true;
                    }
                    std::cmp::Ordering::Less => {
                        Self::sub_fractions(&mut dest, &rhs.fraction, &lhs.fraction);
                        dest.sign_bit = true;
                    }
                }
            }
            (true, false) => {
                // (-p) + (+q)
                match lhs.fraction.cmp(&rhs.fraction) {
                    std::cmp::Ordering::Less => {
                        Self::sub_fractions(&mut dest, &rhs.fraction, &lhs.fraction);
                    }
                    std::cmp::Ordering::Equal => {
                        dest.is_zero = true;
                    }
                    std::cmp::Ordering::Greater => {
                        Self::sub_fractions(&mut dest, &lhs.fraction, &rhs.fraction);
                        dest.sign_bit = true;
                    }
                }
            }
        }

        dest
    }

    // dest = l + r, renormalized: an integer-part carry shifts back
    // down, bumping the scale.
    fn add_fractions(dest: &mut Self, l: &Fractional<N>, r: &Fractional<N>) {
        dest.fraction = l.add(r);

        while dest.fraction.integer_bits().bit(1) {
            dest.fraction = dest.fraction.clone() >> 1;
            dest.scale += 1;
        }
    }

    // dest = l - r (requires l > r), renormalized: cancellation shifts
    // the hidden bit back up, lowering the scale.
    fn sub_fractions(dest: &mut Self, l: &Fractional<N>, r: &Fractional<N>) {
        dest.fraction = l.sub(r);

        if dest.fraction.fraction_bits().any() {
            while !dest.fraction.integer_bits().bit(0) {
                dest.fraction = dest.fraction.clone() << 1;
                dest.scale -= 1;
            }
        }
    }
}
