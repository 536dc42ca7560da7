/*
    Integer comparisons

    Comparisons are defined across widths within a family: an 8-bit and a
    150-bit unsigned integer holding the same value compare equal. Mixed
    signedness never compares; there is deliberately no impl for it.
*/

use std::cmp::Ordering;

use crate::integer::{SInteger, UInteger};
use crate::word::raw;

impl<const W: usize, const V: usize> PartialEq<UInteger<V>> for UInteger<W> {
    /// Two unsigned integers are equal when every word of the wider one
    /// beyond the common prefix is zero and the common words agree.
    fn eq(&self, other: &UInteger<V>) -> bool {
        raw::cmp(self.bits.words(), other.bits.words()) == Ordering::Equal
    }
}

impl<const W: usize> Eq for UInteger<W> {}

impl<const W: usize, const V: usize> PartialOrd<UInteger<V>> for UInteger<W> {
    /// Big-endian word comparison on the common width-cast.
    fn partial_cmp(&self, other: &UInteger<V>) -> Option<Ordering> {
        Some(raw::cmp(self.bits.words(), other.bits.words()))
    }
}

impl<const W: usize> Ord for UInteger<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        raw::cmp(self.bits.words(), other.bits.words())
    }
}

impl<const W: usize, const V: usize> PartialEq<SInteger<V>> for SInteger<W> {
    /// Two signed integers are equal when their sign-extensions to the
    /// common width agree; the excess words of the wider operand are
    /// checked against the sign-extension mask.
    fn eq(&self, other: &SInteger<V>) -> bool {
        if self.is_negative() != other.is_negative() {
            return false;
        }

        let common = W.max(V);
        let a = raw::sign_extend(self.bits.words(), W, common);
        let b = raw::sign_extend(other.bits.words(), V, common);
        raw::cmp(&a, &b) == Ordering::Equal
    }
}

impl<const W: usize> Eq for SInteger<W> {}

impl<const W: usize, const V: usize> PartialOrd<SInteger<V>> for SInteger<W> {
    /// When the signs differ the negative operand is smaller; otherwise
    /// both are sign-extended to the common width and compared big-endian
    /// word-wise, which orders correctly for either shared sign.
    fn partial_cmp(&self, other: &SInteger<V>) -> Option<Ordering> {
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            _ => {
                let common = W.max(V);
                let a = raw::sign_extend(self.bits.words(), W, common);
                let b = raw::sign_extend(other.bits.words(), V, common);
                Some(raw::cmp(&a, &b))
            }
        }
    }
}

impl<const W: usize> Ord for SInteger<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => raw::cmp(self.bits.words(), other.bits.words()),
        }
    }
}
