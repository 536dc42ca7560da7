/*
    Rounding

    Arithmetic produces an intermediate significand of unbounded width;
    `round_finite` fits it back into the format, rounding to nearest with
    ties to even. The significand travels as a `BigUint` — the extended
    form's guard, round and sticky bits are just its low bits once the
    target precision is split off.
*/

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::float::NormFloat;
use crate::integer::UInteger;
use crate::word::convert::to_biguint;
use crate::word::WordArray;

pub(crate) fn biguint_to_uint<const K: usize>(value: &BigUint) -> UInteger<K> {
    UInteger::from_bits(WordArray::from_words(&value.to_u64_digits()))
}

impl<const E: usize, const M: usize> NormFloat<E, M> {
    // Splits a finite non-zero float into (sign, exponent of the
    // significand's LSB, integer significand with the hidden bit applied).
    pub(crate) fn unpack(&self) -> (bool, i64, BigUint) {
        let mut c = to_biguint(self.fraction.bits().words());
        if self.is_normalized() {
            c.set_bit(M as u64, true);
        }
        (self.sign, self.unbiased_exponent() - M as i64, c)
    }

    /// Rounds the exact value `(-1)^sign · c · 2^exp` into this format,
    /// nearest-even on ties. Overflow becomes infinity, underflow below
    /// the normal range flushes to zero.
    pub(crate) fn round_finite(sign: bool, mut exp: i64, c: BigUint) -> Self {
        if c.is_zero() {
            return Self::zero(sign);
        }

        let prec = M as u64 + 1;
        let bits = c.bits();

        // line the significand up to `prec` bits, collecting the three
        // rounding bits from whatever falls off the bottom
        let mut half_bit = false;
        let mut quarter_bit = false;
        let mut sticky_bit = false;

        let mut c_new = if bits > prec {
            let diff = bits - prec;
            half_bit = c.bit(diff - 1);
            if diff >= 2 {
                quarter_bit = c.bit(diff - 2);
            }
            if diff >= 3 {
                let mask = (BigUint::one() << (diff - 2)) - BigUint::one();
                sticky_bit = !(&c & mask).is_zero();
            }
            exp += diff as i64;
            c >> diff
        } else {
            let diff = prec - bits;
            exp -= diff as i64;
            c << diff
        };

        // round to nearest, ties to even:
        // no half bit => truncate; half bit and any lower bit => increment;
        // tie => increment exactly when the lsb is odd
        let lsb = c_new.bit(0);
        let increment = half_bit && (quarter_bit || sticky_bit || lsb);
        if increment {
            c_new += BigUint::one();
            if c_new.bits() > prec {
                // carried into a fresh hidden bit
                c_new >>= 1u32;
                exp += 1;
            }
        }

        // `exp` addresses the LSB; the hidden bit sits `M` above it
        let hidden_exp = exp + M as i64;
        if hidden_exp > Self::emax() {
            return Self::infinity(sign);
        }
        if hidden_exp < Self::emin() {
            // below the normal range; gradual underflow is out of scope
            return Self::zero(sign);
        }

        let biased = (hidden_exp + Self::bias()) as u64;
        let fraction = &c_new - (BigUint::one() << M);
        Self::new(sign, UInteger::from_u64(biased), biguint_to_uint(&fraction))
    }
}
