/*
    Tiles and valids

    A valid is an interval between two tiles; the interval arithmetic
    itself is an extension point and deliberately unimplemented, only the
    representation and its order queries exist.
*/

use std::fmt;

use crate::error::ArithError;
use crate::posit::Posit;

/// A posit endpoint with an uncertainty flag; an uncertain tile denotes
/// the open interval up to the next representable posit.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Tile<const N: usize, const ES: usize> {
    value: Posit<N, ES>,
    uncertain: bool,
}

impl<const N: usize, const ES: usize> Tile<N, ES> {
    /// Creates a tile from a posit and an uncertainty flag.
    pub fn from(value: Posit<N, ES>, uncertain: bool) -> Self {
        Self { value, uncertain }
    }

    /// The certain tile at zero.
    pub fn zero() -> Self {
        Self::from(Posit::zero(), false)
    }

    /// The certain tile at one.
    pub fn one() -> Self {
        Self::from(Posit::one(), false)
    }

    /// The NaR tile.
    pub fn nar() -> Self {
        Self::from(Posit::nar(), false)
    }

    /// The posit this tile sits on.
    pub fn value(&self) -> &Posit<N, ES> {
        &self.value
    }

    /// Returns true for an open-endpoint tile.
    pub fn is_uncertain(&self) -> bool {
        self.uncertain
    }

    pub fn is_nar(&self) -> bool {
        self.value.is_nar()
    }

    pub fn is_negative(&self) -> bool {
        self.value.is_negative()
    }
}

/// A valid: an ordered pair of tiles bounding a set of reals.
///
/// The canonical empty set is the open-open pair at zero; the NaR valid
/// has both endpoints at NaR.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Valid<const N: usize, const ES: usize> {
    start: Tile<N, ES>,
    end: Tile<N, ES>,
}

impl<const N: usize, const ES: usize> Valid<N, ES> {
    /// Creates a valid from its endpoint tiles, canonicalizing any empty
    /// form to the canonical empty set.
    pub fn from(start: Tile<N, ES>, end: Tile<N, ES>) -> Self {
        let mut v = Self { start, end };
        if v.is_empty() {
            v = Self::empty();
        }
        v
    }

    /// The exact zero valid.
    pub fn zero() -> Self {
        Self::from(Tile::zero(), Tile::zero())
    }

    /// The exact one valid.
    pub fn one() -> Self {
        Self::from(Tile::one(), Tile::one())
    }

    /// The canonical empty set: both endpoints uncertain at zero. Any
    /// posit would do as the anchor; zero is the arbitrary pick.
    pub fn empty() -> Self {
        let open = Tile::from(Posit::zero(), true);
        Self {
            start: open.clone(),
            end: open,
        }
    }

    /// The NaR valid.
    pub fn nar() -> Self {
        Self {
            start: Tile::nar(),
            end: Tile::nar(),
        }
    }

    /// The left endpoint.
    pub fn start(&self) -> &Tile<N, ES> {
        &self.start
    }

    /// The right endpoint.
    pub fn end(&self) -> &Tile<N, ES> {
        &self.end
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Returns true for any empty-set form: both endpoints uncertain on
    /// the same posit.
    pub fn is_empty(&self) -> bool {
        self.start.is_uncertain()
            && self.end.is_uncertain()
            && self.start.value() == self.end.value()
    }

    pub fn is_nar(&self) -> bool {
        *self == Self::nar()
    }

    /// Interval order: compares this valid's right end against the
    /// other's left start. Endpoints straddling zero are decided by the
    /// negative side; NaR compares below nothing. The same-sign case is
    /// left undecided, as in the source formulation.
    pub fn lt(&self, other: &Self) -> bool {
        if self == other {
            return false;
        }
        if self.is_nar() || other.is_nar() {
            return false;
        }

        let right = &self.end;
        let left = &other.start;

        if right.is_negative() != left.is_negative() {
            return right.is_negative();
        }

        false
    }

    /// Interval addition; an extension point, currently unimplemented.
    pub fn add(&self, _other: &Self) -> Result<Self, ArithError> {
        Err(ArithError::NotImplemented("valid addition"))
    }

    /// Interval subtraction; an extension point, currently unimplemented.
    pub fn sub(&self, _other: &Self) -> Result<Self, ArithError> {
        Err(ArithError::NotImplemented("valid subtraction"))
    }

    /// Interval multiplication; an extension point, currently unimplemented.
    pub fn mul(&self, _other: &Self) -> Result<Self, ArithError> {
        Err(ArithError::NotImplemented("valid multiplication"))
    }

    /// Interval division; an extension point, currently unimplemented.
    pub fn div(&self, _other: &Self) -> Result<Self, ArithError> {
        Err(ArithError::NotImplemented("valid division"))
    }
}

impl<const N: usize, const ES: usize> fmt::Display for Valid<N, ES> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = |t: &Tile<N, ES>| if t.is_uncertain() { "(" } else { "[" };
        let close = |t: &Tile<N, ES>| if t.is_uncertain() { ")" } else { "]" };
        write!(
            f,
            "{}{}, {}{}",
            open(&self.start),
            self.start.value().to_binary(),
            self.end.value().to_binary(),
            close(&self.end)
        )
    }
}
