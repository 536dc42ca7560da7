/*
    Signed integer arithmetic
*/

use std::ops::{Add, Mul, Neg, Shl, Shr, Sub};

use crate::error::ArithError;
use crate::integer::{SInteger, UInteger};
use crate::word::{raw, WordArray};

// Negation and absolute value
impl<const N: usize> SInteger<N> {
    /// Computes the absolute value at the declared width.
    ///
    /// `abs(min)` wraps back to `min`, as `|min| > max`; use
    /// [`expanding_abs`](Self::expanding_abs) to avoid the overflow.
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -self.clone()
        } else {
            self.clone()
        }
    }

    /// Computes the absolute value as an unsigned integer of the same
    /// width, which always fits.
    pub fn expanding_abs(&self) -> UInteger<N> {
        UInteger::from_bits(self.abs().into_bits())
    }
}

impl<const N: usize> Neg for SInteger<N> {
    type Output = Self;

    /// `-n` is `~n + 1` at the declared width.
    fn neg(mut self) -> Self {
        raw::negate(self.bits.words_mut());
        self.bits.mask_top();
        self
    }
}

// Addition and subtraction
impl<const N: usize> SInteger<N> {
    /// Adds two signed integers of possibly different widths into a
    /// result one bit wider than the wider operand.
    ///
    /// `R` must equal `max(N, V) + 1`. Both operands are sign-extended to
    /// `R` bits and rippled word-wise exactly like the unsigned variant.
    pub fn expanding_add<const V: usize, const R: usize>(
        &self,
        rhs: &SInteger<V>,
        initial_carry: bool,
    ) -> SInteger<R> {
        assert_eq!(R, N.max(V) + 1, "expanding_add output width mismatch");

        let a: SInteger<R> = self.width_cast();
        let b: SInteger<R> = rhs.width_cast();

        let mut carry = initial_carry as u64;
        let sum = a.bits.zip_with_state(&b.bits, |word_a, word_b| {
            let mut partial = word_a.wrapping_add(word_b);
            let new_carry = partial < word_a || partial < word_b;
            partial = partial.wrapping_add(carry);
            carry = (new_carry || partial < word_a || partial < word_b) as u64;
            partial
        });

        SInteger::from_bits(sum)
    }

    /// Adds two same-width signed integers, wrapping in two's complement.
    pub fn add(&self, rhs: &Self) -> Self {
        let mut bits = self.bits.clone();
        raw::add_into(bits.words_mut(), rhs.bits.words(), false);
        bits.mask_top();
        Self::from_bits(bits)
    }

    /// Subtracts two signed integers of possibly different widths at
    /// width `R = max(N, V)`.
    pub fn expanding_sub<const V: usize, const R: usize>(&self, rhs: &SInteger<V>) -> SInteger<R> {
        assert_eq!(R, N.max(V), "expanding_sub output width mismatch");
        let a: SInteger<R> = self.width_cast();
        let b: SInteger<R> = rhs.width_cast();
        a.sub(b)
    }

    /// Subtracts two same-width signed integers as `a + (~b + 1)`.
    pub fn sub(&self, rhs: &Self) -> Self {
        let mut bits = self.bits.clone();
        raw::sub_into(bits.words_mut(), rhs.bits.words());
        bits.mask_top();
        Self::from_bits(bits)
    }
}

// Booth multiplication kernel. Multiplies an `m_width`-bit by an
// `r_width`-bit two's-complement register inside a working register of
// `m_width + r_width + 2` bits, which is wide enough to keep the most
// negative value exact. Returns the product register; the caller keeps
// the low `m_width + r_width` bits.
fn booth(m: &[u64], m_width: usize, r: &[u64], r_width: usize) -> Vec<u64> {
    let k = m_width + r_width + 2;

    let mut a = vec![0u64; raw::words_for(k)];
    raw::shl_into(&mut a, &raw::sign_extend(m, m_width, k), r_width + 1);
    raw::mask_top(&mut a, k);

    let mut s = raw::sign_extend(m, m_width, k);
    raw::negate(&mut s);
    raw::mask_top(&mut s, k);
    let mut s_shifted = vec![0u64; raw::words_for(k)];
    raw::shl_into(&mut s_shifted, &s, r_width + 1);
    raw::mask_top(&mut s_shifted, k);

    let mut p = raw::sign_extend(r, r_width, k);
    raw::shl1_in(&mut p, false);
    raw::mask_top(&mut p, k);

    for _ in 0..r_width {
        let last_bit = raw::bit(&p, 0);
        let snd_last_bit = raw::bit(&p, 1);

        if snd_last_bit && !last_bit {
            raw::add_into(&mut p, &s_shifted, false);
            raw::mask_top(&mut p, k);
        }
        if !snd_last_bit && last_bit {
            raw::add_into(&mut p, &a, false);
            raw::mask_top(&mut p, k);
        }

        raw::asr1_in(&mut p, k);
    }

    raw::asr1_in(&mut p, k);
    p
}

// Multiplication
impl<const N: usize> SInteger<N> {
    /// Booth multiplication into the full `R = N + V`-bit product.
    ///
    /// The working register carries two extra bits so that the most
    /// negative value multiplies correctly.
    pub fn expanding_mul<const V: usize, const R: usize>(&self, rhs: &SInteger<V>) -> SInteger<R> {
        assert_eq!(R, N + V, "expanding_mul output width mismatch");
        let p = booth(self.bits.words(), N, rhs.bits.words(), V);
        SInteger::from_bits(WordArray::from_words(&p))
    }

    /// Multiplies two same-width signed integers, keeping the low `N`
    /// product bits (two's-complement wrap on overflow).
    pub fn mul(&self, rhs: &Self) -> Self {
        let p = booth(self.bits.words(), N, rhs.bits.words(), N);
        Self::from_bits(WordArray::from_words(&p))
    }
}

// Division
impl<const N: usize> SInteger<N> {
    /// Restoring division, returning `(quotient, remainder)` at the
    /// numerator's width.
    ///
    /// Dispatches to unsigned division on the absolute values; the
    /// quotient is negated when the signs differ and the remainder
    /// inherits the numerator's sign. `min / -1` wraps back to `min`.
    pub fn restoring_division<const V: usize>(
        &self,
        divisor: &SInteger<V>,
    ) -> Result<(Self, Self), ArithError> {
        if divisor.is_zero() {
            return Err(ArithError::DivideByZero);
        }
        if self.is_zero() {
            return Ok((Self::zero(), Self::zero()));
        }
        if *divisor == SInteger::<V>::one() {
            return Ok((self.clone(), Self::zero()));
        }
        if *self == *divisor {
            return Ok((Self::one(), Self::zero()));
        }

        let negate = self.is_negative() != divisor.is_negative();

        let numerator = self.expanding_abs();
        let denominator = divisor.expanding_abs();

        if numerator < denominator {
            return Ok((Self::zero(), self.clone()));
        }

        let (q, r) = numerator.restoring_division(&denominator)?;

        let mut quotient = Self::from_bits(q.into_bits());
        if negate {
            quotient = -quotient;
        }

        let mut remainder = Self::from_bits(r.into_bits());
        if self.is_negative() {
            remainder = -remainder;
        }

        Ok((quotient, remainder))
    }

    /// The quotient of restoring division.
    pub fn div<const V: usize>(&self, divisor: &SInteger<V>) -> Result<Self, ArithError> {
        Ok(self.restoring_division(divisor)?.0)
    }

    /// The remainder of restoring division; it takes the numerator's
    /// sign and is strictly smaller than the divisor in magnitude.
    pub fn rem<const V: usize>(&self, divisor: &SInteger<V>) -> Result<Self, ArithError> {
        Ok(self.restoring_division(divisor)?.1)
    }
}

impl<const N: usize> Add for SInteger<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        SInteger::add(&self, &rhs)
    }
}

impl<const N: usize> Sub for SInteger<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        SInteger::sub(&self, &rhs)
    }
}

impl<const N: usize> Mul for SInteger<N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        SInteger::mul(&self, &rhs)
    }
}

impl<const N: usize> Shl<usize> for SInteger<N> {
    type Output = Self;

    /// Logical left shift.
    fn shl(self, rhs: usize) -> Self {
        Self::from_bits(self.bits << rhs)
    }
}

impl<const N: usize> Shr<usize> for SInteger<N> {
    type Output = Self;

    /// Arithmetic right shift: vacated high bits refill from the sign.
    fn shr(self, rhs: usize) -> Self {
        if rhs >= N {
            return if self.is_negative() {
                Self::all_ones()
            } else {
                Self::zero()
            };
        }
        if rhs == 0 {
            return self;
        }

        let negative = self.is_negative();
        let mut bits = self.bits >> rhs;
        if negative {
            for i in (N - rhs)..N {
                bits.set_bit(i, true);
            }
        }
        Self::from_bits(bits)
    }
}

impl<const N: usize> num_traits::Zero for SInteger<N> {
    fn zero() -> Self {
        SInteger::zero()
    }

    fn is_zero(&self) -> bool {
        SInteger::is_zero(self)
    }
}

impl<const N: usize> num_traits::One for SInteger<N> {
    fn one() -> Self {
        SInteger::one()
    }
}
