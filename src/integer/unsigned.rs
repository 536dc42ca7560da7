/*
    Unsigned integer arithmetic
*/

use std::cmp::Ordering;
use std::ops::{Add, Mul, Shl, Shr, Sub};

use crate::error::ArithError;
use crate::integer::UInteger;
use crate::word::{raw, WordArray};

// Addition and subtraction
impl<const N: usize> UInteger<N> {
    /// Adds two unsigned integers of possibly different widths into a
    /// result wide enough to hold the final carry.
    ///
    /// `R` must equal `max(N, V) + 1`; the extra high bit of the result
    /// holds the carry out of the addition.
    pub fn expanding_add<const V: usize, const R: usize>(
        &self,
        rhs: &UInteger<V>,
        initial_carry: bool,
    ) -> UInteger<R> {
        assert_eq!(R, N.max(V) + 1, "expanding_add output width mismatch");

        let a = self.bits.width_cast::<R>();
        let b = rhs.bits.width_cast::<R>();

        let mut carry = initial_carry as u64;
        let sum = a.zip_with_state(&b, |word_a, word_b| {
            let mut partial = word_a.wrapping_add(word_b);
            let new_carry = partial < word_a || partial < word_b;
            partial = partial.wrapping_add(carry);
            carry = (new_carry || partial < word_a || partial < word_b) as u64;
            partial
        });

        UInteger::from_bits(sum)
    }

    /// Adds two same-width unsigned integers, wrapping modulo `2^N`.
    pub fn add(&self, rhs: &Self) -> Self {
        let mut bits = self.bits.clone();
        raw::add_into(bits.words_mut(), rhs.bits.words(), false);
        bits.mask_top();
        Self::from_bits(bits)
    }

    /// Subtracts two unsigned integers of possibly different widths at
    /// width `R = max(N, V)`.
    pub fn expanding_sub<const V: usize, const R: usize>(&self, rhs: &UInteger<V>) -> UInteger<R> {
        assert_eq!(R, N.max(V), "expanding_sub output width mismatch");
        let a: UInteger<R> = self.width_cast();
        let b: UInteger<R> = rhs.width_cast();
        a.sub(b)
    }

    /// Subtracts two same-width unsigned integers as `a + (~b + 1)`,
    /// wrapping modulo `2^N`.
    pub fn sub(&self, rhs: &Self) -> Self {
        let mut bits = self.bits.clone();
        raw::sub_into(bits.words_mut(), rhs.bits.words());
        bits.mask_top();
        Self::from_bits(bits)
    }
}

// Multiplication
impl<const N: usize> UInteger<N> {
    /// Schoolbook multiplication into the full `R = N + V`-bit product:
    /// the shifted multiplicand is accumulated wherever the corresponding
    /// multiplier bit is one.
    pub fn expanding_mul<const V: usize, const R: usize>(&self, rhs: &UInteger<V>) -> UInteger<R> {
        assert_eq!(R, N + V, "expanding_mul output width mismatch");

        let words = raw::words_for(R);
        let mut acc = vec![0u64; words];
        let mut shifted = vec![0u64; words];
        shifted[..Self::word_count()].copy_from_slice(self.bits.words());

        for i in 0..V {
            if rhs.bit(i) {
                raw::add_into(&mut acc, &shifted, false);
            }
            raw::shl1_in(&mut shifted, false);
        }

        raw::mask_top(&mut acc, R);
        UInteger::from_bits(WordArray::from_words(&acc))
    }

    /// Multiplies two same-width unsigned integers, keeping the low `N`
    /// product bits.
    pub fn mul(&self, rhs: &Self) -> Self {
        let mut acc = vec![0u64; Self::word_count()];
        let mut shifted = self.bits.words().to_vec();

        for i in 0..N {
            if rhs.bit(i) {
                raw::add_into(&mut acc, &shifted, false);
            }
            raw::shl1_in(&mut shifted, false);
        }

        Self::from_bits(WordArray::from_words(&acc))
    }

    /// Karatsuba multiplication into the full `R = N + V`-bit product.
    ///
    /// Bit-exact with [`expanding_mul`](Self::expanding_mul) on all
    /// inputs; worthwhile for wide operands.
    pub fn expanding_karatsuba_mul<const V: usize, const R: usize>(
        &self,
        rhs: &UInteger<V>,
    ) -> UInteger<R> {
        assert_eq!(R, N + V, "expanding_karatsuba_mul output width mismatch");
        let product = karatsuba(self.bits.words(), rhs.bits.words());
        UInteger::from_bits(WordArray::from_words(&product))
    }
}

// Karatsuba kernel over base-2^64 limbs. Operands are unsigned
// little-endian limb vectors; the product vector has `a.len() + b.len()`
// limbs.
fn karatsuba(a: &[u64], b: &[u64]) -> Vec<u64> {
    let mut out = vec![0u64; a.len() + b.len()];

    if a.len() <= 1 || b.len() <= 1 {
        // long multiplication one limb at a time
        for (i, &wa) in a.iter().enumerate() {
            let mut carry = 0u64;
            for (j, &wb) in b.iter().enumerate() {
                let t = wa as u128 * wb as u128 + out[i + j] as u128 + carry as u128;
                out[i + j] = t as u64;
                carry = (t >> 64) as u64;
            }
            out[i + b.len()] = carry;
        }
        return out;
    }

    let m = a.len().max(b.len()) / 2;
    let (a_lo, a_hi) = a.split_at(a.len().min(m));
    let (b_lo, b_hi) = b.split_at(b.len().min(m));

    let z0 = karatsuba(a_lo, b_lo);
    let z2 = karatsuba(a_hi, b_hi);

    let a_sum = limb_add(a_lo, a_hi);
    let b_sum = limb_add(b_lo, b_hi);
    let mut z1 = karatsuba(&a_sum, &b_sum);
    limb_sub_in_place(&mut z1, &z0);
    limb_sub_in_place(&mut z1, &z2);

    limb_add_shifted(&mut out, &z0, 0);
    limb_add_shifted(&mut out, &z1, m);
    limb_add_shifted(&mut out, &z2, 2 * m);
    out
}

fn limb_add(a: &[u64], b: &[u64]) -> Vec<u64> {
    let mut sum = vec![0u64; a.len().max(b.len()) + 1];
    sum[..a.len()].copy_from_slice(a);
    raw::add_into(&mut sum, b, false);
    sum
}

// dst -= rhs; requires dst >= rhs
fn limb_sub_in_place(dst: &mut [u64], rhs: &[u64]) {
    raw::sub_into(dst, rhs);
}

// dst += src << (64 * limbs); the product vector is wide enough that the
// carry out is always zero
fn limb_add_shifted(dst: &mut [u64], src: &[u64], limbs: usize) {
    let upper = &mut dst[limbs..];
    let take = src.len().min(upper.len());
    raw::add_into(upper, &src[..take], false);
}

// Division
impl<const N: usize> UInteger<N> {
    /// Restoring division, returning `(quotient, remainder)` at the
    /// numerator's width.
    ///
    /// Fails with `DivideByZero` on a zero divisor. The remainder is
    /// always strictly smaller than the divisor.
    pub fn restoring_division<const V: usize>(
        &self,
        divisor: &UInteger<V>,
    ) -> Result<(Self, Self), ArithError> {
        if divisor.is_zero() {
            return Err(ArithError::DivideByZero);
        }
        if self.is_zero() {
            return Ok((Self::zero(), Self::zero()));
        }
        if *divisor == UInteger::<V>::one() {
            return Ok((self.clone(), Self::zero()));
        }
        if *self == *divisor {
            return Ok((Self::one(), Self::zero()));
        }
        if raw::cmp(self.bits.words(), divisor.bits.words()) == Ordering::Less {
            return Ok((Self::zero(), self.clone()));
        }

        // shift the numerator in MSB first, subtracting the divisor from
        // the partial remainder wherever it fits
        let mut remainder = vec![0u64; raw::words_for(N + 1)];
        let mut quotient = Self::zero();

        for i in (0..N).rev() {
            raw::shl1_in(&mut remainder, self.bit(i));
            if raw::cmp(&remainder, divisor.bits.words()) != Ordering::Less {
                raw::sub_into(&mut remainder, divisor.bits.words());
                quotient.set_bit(i, true);
            }
        }

        Ok((quotient, Self::from_bits(WordArray::from_words(&remainder))))
    }

    /// The quotient of restoring division.
    pub fn div<const V: usize>(&self, divisor: &UInteger<V>) -> Result<Self, ArithError> {
        Ok(self.restoring_division(divisor)?.0)
    }

    /// The remainder of restoring division.
    pub fn rem<const V: usize>(&self, divisor: &UInteger<V>) -> Result<Self, ArithError> {
        Ok(self.restoring_division(divisor)?.1)
    }
}

impl<const N: usize> Add for UInteger<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        UInteger::add(&self, &rhs)
    }
}

impl<const N: usize> Sub for UInteger<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        UInteger::sub(&self, &rhs)
    }
}

impl<const N: usize> Mul for UInteger<N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        UInteger::mul(&self, &rhs)
    }
}

impl<const N: usize> Shl<usize> for UInteger<N> {
    type Output = Self;

    fn shl(self, rhs: usize) -> Self {
        Self::from_bits(self.bits << rhs)
    }
}

impl<const N: usize> Shr<usize> for UInteger<N> {
    type Output = Self;

    fn shr(self, rhs: usize) -> Self {
        Self::from_bits(self.bits >> rhs)
    }
}

impl<const N: usize> num_traits::Zero for UInteger<N> {
    fn zero() -> Self {
        UInteger::zero()
    }

    fn is_zero(&self) -> bool {
        UInteger::is_zero(self)
    }
}

impl<const N: usize> num_traits::One for UInteger<N> {
    fn one() -> Self {
        UInteger::one()
    }
}
