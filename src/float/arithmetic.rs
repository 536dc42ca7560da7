/*
    Arithmetic
*/

use std::cmp::Ordering;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::float::NormFloat;

// Shifts `c` right by `delta`, folding every shifted-off one into the
// sticky position (bit zero) of the result.
fn shift_right_sticky(c: BigUint, delta: u64) -> BigUint {
    if delta == 0 {
        return c;
    }
    let mask = (BigUint::one() << delta) - BigUint::one();
    let sticky = !(&c & mask).is_zero();
    let mut shifted = c >> delta;
    if sticky {
        shifted |= BigUint::one();
    }
    shifted
}

impl<const E: usize, const M: usize> NormFloat<E, M> {
    /// Adds two floats, rounding to nearest-even.
    pub fn add(&self, rhs: &Self) -> Self {
        if self.is_nan() || rhs.is_nan() {
            return Self::nan();
        }
        if self.is_inf() {
            if rhs.is_inf() && self.sign() != rhs.sign() {
                // inf - inf
                return Self::nan();
            }
            return Self::infinity(self.sign());
        }
        if rhs.is_inf() {
            return Self::infinity(rhs.sign());
        }
        if self.is_zero() {
            if rhs.is_zero() {
                // the result is negative only if both summands are
                return Self::zero(self.sign() && rhs.sign());
            }
            return rhs.clone();
        }
        if rhs.is_zero() {
            return self.clone();
        }

        // order by magnitude so alignment always shifts the smaller one
        if self.magnitude_cmp(rhs) == Ordering::Less {
            return rhs.add(self);
        }

        // opposite signs are a subtraction in disguise
        if self.sign() != rhs.sign() {
            return self.sub(&rhs.neg());
        }

        let (sign, exp_a, c_a) = self.unpack();
        let (_, exp_b, c_b) = rhs.unpack();

        // three guard bits below the larger operand's LSB
        let w_a = c_a << 3u32;
        let w_b = shift_right_sticky(c_b << 3u32, (exp_a - exp_b) as u64);

        Self::round_finite(sign, exp_a - 3, w_a + w_b)
    }

    /// Subtracts two floats, rounding to nearest-even.
    pub fn sub(&self, rhs: &Self) -> Self {
        if self.is_nan() || rhs.is_nan() {
            return Self::nan();
        }
        if self.is_inf() {
            if rhs.is_inf() && self.sign() == rhs.sign() {
                // inf - inf
                return Self::nan();
            }
            return Self::infinity(self.sign());
        }
        if rhs.is_inf() {
            return Self::infinity(!rhs.sign());
        }
        if rhs.is_zero() {
            if self.is_zero() {
                return Self::zero(self.sign() && !rhs.sign());
            }
            return self.clone();
        }
        if self.is_zero() {
            return rhs.neg();
        }

        // keep the larger magnitude on the left, flipping the result
        if self.magnitude_cmp(rhs) == Ordering::Less {
            return rhs.sub(self).neg();
        }

        // opposite signs are an addition in disguise
        if self.sign() != rhs.sign() {
            return self.add(&rhs.neg());
        }

        let (sign, exp_a, c_a) = self.unpack();
        let (_, exp_b, c_b) = rhs.unpack();

        let w_a = c_a << 3u32;
        let w_b = shift_right_sticky(c_b << 3u32, (exp_a - exp_b) as u64);

        let diff = w_a - w_b;
        if diff.is_zero() {
            // exact cancellation yields positive zero
            return Self::zero(false);
        }
        Self::round_finite(sign, exp_a - 3, diff)
    }

    /// Multiplies two floats, rounding to nearest-even.
    pub fn mul(&self, rhs: &Self) -> Self {
        if self.is_nan() || rhs.is_nan() {
            return Self::nan();
        }
        let sign = self.sign() != rhs.sign();
        if self.is_inf() {
            if rhs.is_zero() {
                // 0 * inf
                return Self::nan();
            }
            return Self::infinity(sign);
        }
        if rhs.is_inf() {
            if self.is_zero() {
                return Self::nan();
            }
            return Self::infinity(sign);
        }
        if self.is_zero() || rhs.is_zero() {
            return Self::zero(sign);
        }

        let (_, exp_a, c_a) = self.unpack();
        let (_, exp_b, c_b) = rhs.unpack();

        Self::round_finite(sign, exp_a + exp_b, c_a * c_b)
    }

    /// Divides two floats, rounding to nearest-even. Division of a
    /// non-zero value by zero yields an infinity carrying the XOR sign.
    pub fn div(&self, rhs: &Self) -> Self {
        if self.is_nan() || rhs.is_nan() {
            return Self::nan();
        }
        let sign = self.sign() != rhs.sign();
        if self.is_inf() {
            if rhs.is_inf() {
                return Self::nan();
            }
            return Self::infinity(sign);
        }
        if rhs.is_inf() {
            return Self::zero(sign);
        }
        if rhs.is_zero() {
            if self.is_zero() {
                // 0 / 0
                return Self::nan();
            }
            return Self::infinity(sign);
        }
        if self.is_zero() {
            return Self::zero(sign);
        }

        let (_, exp_a, c_a) = self.unpack();
        let (_, exp_b, c_b) = rhs.unpack();

        // widen the dividend so the quotient keeps M + 3 fraction bits,
        // then fold the remainder into the sticky position
        let widen = M as i64 + 3;
        let dividend = c_a << (widen as u32);
        let quotient = &dividend / &c_b;
        let remainder = dividend - &quotient * &c_b;

        let mut q = quotient;
        if !remainder.is_zero() {
            q |= BigUint::one();
        }

        Self::round_finite(sign, exp_a - exp_b - widen, q)
    }
}
