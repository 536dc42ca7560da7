/*
    Bit operations on `WordArray<N>`
*/

use std::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

use crate::error::ArithError;
use crate::word::{raw, WordArray};

// Structural queries
impl<const N: usize> WordArray<N> {
    /// Counts the zero bits from the MSB down to the first one bit,
    /// skipping the `offset` most significant bits first.
    ///
    /// An offset at or beyond the width skips everything and counts
    /// nothing. With no one bit below the offset, all `N - offset`
    /// remaining bits are counted.
    pub fn count_leading_zeroes(&self, offset: usize) -> usize {
        if offset >= N {
            return 0;
        }

        let start = N - offset;
        for i in (1..=start).rev() {
            if self.bit(i - 1) {
                return N - i - offset;
            }
        }

        N - offset
    }

    /// Counts the one bits from the MSB down to the first zero bit,
    /// skipping the `offset` most significant bits first.
    pub fn count_leading_ones(&self, offset: usize) -> usize {
        (!self.clone()).count_leading_zeroes(offset)
    }

    /// Returns the index of the first set bit scanning MSB to LSB, or
    /// `None` if the array is all zeros.
    pub fn first_set_bit(&self) -> Option<usize> {
        let leading_zeroes = self.count_leading_zeroes(0);
        if leading_zeroes == N {
            None
        } else {
            Some(N - (leading_zeroes + 1))
        }
    }

    /// Returns the index of the first unset bit scanning MSB to LSB, or
    /// `None` if the array is all ones.
    pub fn first_unset_bit(&self) -> Option<usize> {
        let leading_ones = self.count_leading_ones(0);
        if leading_ones == N {
            None
        } else {
            Some(N - (leading_ones + 1))
        }
    }

    /// Returns a word array whose `min(n, N)` least significant bits are
    /// one and all other bits zero.
    pub fn get_low_mask(n: usize) -> Self {
        let mut w = Self::zero();
        for idx in 0..n.min(N) {
            w.set_bit(idx, true);
        }
        w
    }
}

// Structural transforms
impl<const N: usize> WordArray<N> {
    /// Zero-extends to a wider array or truncates to a narrower one.
    pub fn width_cast<const M: usize>(&self) -> WordArray<M> {
        WordArray::from_words(self.words())
    }

    /// Extracts the inclusive bit range `[end, start]` as a word array of
    /// width `R`.
    ///
    /// `R` must equal `start - end + 1` and the range must lie within the
    /// width; this is `width_cast::<R>(self >> end)`.
    pub fn bit_range<const R: usize>(&self, start: usize, end: usize) -> WordArray<R> {
        assert!(end <= start && start < N, "range [{}, {}] must lie within the word", end, start);
        assert_eq!(R, start - end + 1, "bit_range output width mismatch");
        (self.clone() >> end).width_cast::<R>()
    }

    /// Keeps the bits of `[start, end)` in place and clears the rest.
    ///
    /// Fails with `DomainError` when the range is reversed or leaves the
    /// width.
    pub fn dynamic_bit_range(&self, start: usize, end_exclusive: usize) -> Result<Self, ArithError> {
        if end_exclusive < start {
            return Err(ArithError::DomainError(format!(
                "end index {} precedes start index {}",
                end_exclusive, start
            )));
        }
        if start >= N {
            return Err(ArithError::DomainError(format!(
                "start index {} is not a valid index of a {}-bit word array",
                start, N
            )));
        }
        if end_exclusive > N {
            return Err(ArithError::DomainError(format!(
                "end index {} is not a valid index of a {}-bit word array",
                end_exclusive, N
            )));
        }

        let mut result = Self::zero();
        for i in start..end_exclusive {
            result.set_bit(i, self.bit(i));
        }
        Ok(result)
    }

    /// Concatenates `self` (high bits) with `low` into a `R`-bit array;
    /// `R` must equal `N + V`.
    pub fn concat<const V: usize, const R: usize>(&self, low: &WordArray<V>) -> WordArray<R> {
        assert_eq!(R, N + V, "concat output width mismatch");
        (self.width_cast::<R>() << V) | low.width_cast::<R>()
    }

    /// Splits into `(high, low)` halves of widths `HI` and `LO`;
    /// `HI + LO` must equal `N`.
    pub fn split<const HI: usize, const LO: usize>(&self) -> (WordArray<HI>, WordArray<LO>) {
        assert_eq!(HI + LO, N, "split output widths mismatch");
        let high = (self.clone() >> LO).width_cast::<HI>();
        let low = self.width_cast::<LO>();
        (high, low)
    }

    /// Reverses the bit order, MSB becoming LSB.
    pub fn flip(&self) -> Self {
        let mut copy = Self::zero();
        for idx in 0..N {
            copy.set_bit(N - 1 - idx, self.bit(idx));
        }
        copy
    }
}

impl<const N: usize> Not for WordArray<N> {
    type Output = Self;

    fn not(mut self) -> Self {
        raw::complement(self.words_mut());
        self.mask_top();
        self
    }
}

impl<const N: usize> BitAnd for WordArray<N> {
    type Output = Self;

    fn bitand(mut self, rhs: Self) -> Self {
        for (a, b) in self.words_mut().iter_mut().zip(rhs.words()) {
            *a &= *b;
        }
        self
    }
}

impl<const N: usize> BitOr for WordArray<N> {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self {
        for (a, b) in self.words_mut().iter_mut().zip(rhs.words()) {
            *a |= *b;
        }
        self
    }
}

impl<const N: usize> BitXor for WordArray<N> {
    type Output = Self;

    fn bitxor(mut self, rhs: Self) -> Self {
        for (a, b) in self.words_mut().iter_mut().zip(rhs.words()) {
            *a ^= *b;
        }
        self
    }
}

impl<const N: usize> Shl<usize> for WordArray<N> {
    type Output = Self;

    /// Logical left shift; shifting by the width or more yields zero.
    fn shl(self, rhs: usize) -> Self {
        let mut out = Self::zero();
        if rhs < N {
            raw::shl_into(out.words_mut(), self.words(), rhs);
            out.mask_top();
        }
        out
    }
}

impl<const N: usize> Shr<usize> for WordArray<N> {
    type Output = Self;

    /// Logical right shift; shifting by the width or more yields zero.
    fn shr(self, rhs: usize) -> Self {
        let mut out = Self::zero();
        if rhs < N {
            raw::shr_into(out.words_mut(), self.words(), rhs);
        }
        out
    }
}
