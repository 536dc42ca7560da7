use arith_sim::posit::{Fractional, Posit, PositParams, Tile, Valid};
use arith_sim::word::WordArray;
use arith_sim::ArithError;

type P8 = Posit<8, 0>;
type P8E1 = Posit<8, 1>;
type P8E2 = Posit<8, 2>;
type P16 = Posit<16, 1>;

fn p8(bits: u64) -> P8 {
    P8::from_bits(WordArray::from_u64(bits))
}

fn p16(bits: u64) -> P16 {
    P16::from_bits(WordArray::from_u64(bits))
}

#[test]
fn distinguished_patterns() {
    assert!(P8::zero().is_zero());
    assert!(P8::nar().is_nar());
    assert_eq!(P8::nar().bits().word(0), 0x80);
    assert_eq!(P8::one().bits().word(0), 0x40);
    assert_eq!(P8::minus_one().bits().word(0), 0xC0);
    assert_eq!(P8::max().bits().word(0), 0x7F);
    assert_eq!(P8::min().bits().word(0), 0x81);
    assert_eq!(P8::min_pos().bits().word(0), 0x01);

    // zero and NaR negate to themselves
    assert_eq!(-P8::zero(), P8::zero());
    assert_eq!(-P8::nar(), P8::nar());
    assert_eq!(-P8::one(), P8::minus_one());
}

#[test]
fn one_decodes_exactly() {
    let params = p8(0b0100_0000).decode();
    assert!(!params.is_nar());
    assert!(!params.is_zero());
    assert!(!params.sign());
    assert_eq!(params.scale(), 0);
    assert!(params.fraction().hidden_bit());
    assert!(!params.fraction().fraction_bits().any());

    // re-encoding the parameters yields the original bits
    assert_eq!(params.encode(), p8(0b0100_0000));
}

#[test]
fn decoded_scales() {
    // 0b00100000 is 2^-1 for ES = 0
    assert_eq!(p8(0b0010_0000).decode().scale(), -1);
    // 0b01100000 is 2^1
    assert_eq!(p8(0b0110_0000).decode().scale(), 1);
    // the smallest positive posit has the longest zero regime
    assert_eq!(P8::min_pos().decode().scale(), -6);
    // the largest posit has the longest one regime
    assert_eq!(P8::max().decode().scale(), 6);

    // with exponent bits the scale combines regime and exponent
    assert_eq!(P8E2::min_pos().decode().scale(), -24);
    assert_eq!(P8E2::max().decode().scale(), 24);
    assert_eq!(P8E1::one().decode().scale(), 0);

    // negative posits decode through their two's complement
    assert_eq!(P8::minus_one().decode().scale(), 0);
    assert!(P8::minus_one().decode().sign());
}

fn roundtrip_all<const ES: usize>() {
    for pattern in 0..=255u64 {
        let p = Posit::<8, ES>::from_bits(WordArray::from_u64(pattern));
        let back = p.decode().encode();
        assert_eq!(back, p, "pattern {:#04x} ES {}", pattern, ES);
    }
}

#[test]
fn decode_encode_round_trips_every_pattern() {
    roundtrip_all::<0>();
    roundtrip_all::<1>();
    roundtrip_all::<2>();
}

#[test]
fn rounding_is_idempotent() {
    for pattern in 0..=255u64 {
        let p = Posit::<8, 1>::from_bits(WordArray::from_u64(pattern));
        let once = p.decode().encode();
        let twice = once.decode().encode();
        assert_eq!(once, twice, "pattern {:#04x}", pattern);
    }
}

#[test]
fn parameter_constants_encode_to_the_distinguished_patterns() {
    assert_eq!(PositParams::<8, 0>::zero().encode(), P8::zero());
    assert_eq!(PositParams::<8, 0>::nar().encode(), P8::nar());
    assert_eq!(PositParams::<16, 1>::zero().encode(), P16::zero());
    assert_eq!(PositParams::<16, 1>::nar().encode(), P16::nar());
}

#[test]
fn small_additions() {
    // 1 + 1 == 2
    assert_eq!(P8::one().add(&P8::one()), p8(0b0110_0000));
    // 1 + (-1) == 0
    assert_eq!(P8::one().add(&P8::minus_one()), P8::zero());
    // 1.5 + 2.5 == 4 in P<16, 1>
    assert_eq!(p16(0x4800).add(&p16(0x5400)), p16(0x6000));
    // 2 - 1 == 1
    assert_eq!(p8(0b0110_0000).sub(&P8::one()), P8::one());
}

#[test]
fn small_products() {
    // 1 * 1 == 1
    assert_eq!(P8::one().mul(&P8::one()), P8::one());
    // 2 * 2 == 4
    let two = p8(0b0110_0000);
    assert_eq!(two.mul(&two), p8(0b0111_0000));
    // 0.5 * 2 == 1
    assert_eq!(p8(0b0010_0000).mul(&two), P8::one());
    // (-1) * (-1) == 1
    assert_eq!(P8::minus_one().mul(&P8::minus_one()), P8::one());
}

#[test]
fn small_quotients() {
    let two = p8(0b0110_0000);
    let half = p8(0b0010_0000);

    assert_eq!(P8::one().div(&two), half);
    assert_eq!(two.div(&two), P8::one());
    assert_eq!(P8::one().div(&half), two);
    assert_eq!(P8::minus_one().div(&two), -half);

    // division by zero is NaR; zero divided by anything real is zero
    assert!(P8::one().div(&P8::zero()).is_nar());
    assert!(P8::zero().div(&two).is_zero());
}

#[test]
fn nar_is_absorbing() {
    let one = P8E2::one();
    let nar = P8E2::nar();

    assert!(nar.add(&one).is_nar());
    assert!(one.add(&nar).is_nar());
    assert!(nar.sub(&one).is_nar());
    assert!(nar.mul(&one).is_nar());
    assert!(one.mul(&nar).is_nar());
    assert!(nar.div(&one).is_nar());
    assert!(one.div(&nar).is_nar());
}

#[test]
fn zero_is_the_additive_identity_everywhere() {
    for pattern in 0..=255u64 {
        let p = P8E2::from_bits(WordArray::from_u64(pattern));
        assert_eq!(p.add(&P8E2::zero()), p, "pattern {:#04x}", pattern);
        assert_eq!(P8E2::zero().add(&p), p, "pattern {:#04x}", pattern);
    }
}

#[test]
fn every_real_cancels_with_its_negation() {
    for pattern in 0..=255u64 {
        let p = P8E1::from_bits(WordArray::from_u64(pattern));
        if p.is_nar() {
            continue;
        }
        assert!(p.add(&-p.clone()).is_zero(), "pattern {:#04x}", pattern);
    }
}

#[test]
fn one_is_the_multiplicative_identity_everywhere() {
    for pattern in 0..=255u64 {
        let p = P8E1::from_bits(WordArray::from_u64(pattern));
        assert_eq!(p.mul(&P8E1::one()), p, "pattern {:#04x}", pattern);
        assert_eq!(p.div(&P8E1::one()), p, "pattern {:#04x}", pattern);
    }
}

#[test]
fn incrementing_never_crosses_nar() {
    assert_eq!(P8::max().incremented_real(), P8::max());
    assert_eq!(P8::one().incremented_real(), p8(0x41));
    assert_eq!(p8(0x7E).incremented_real(), P8::max());
}

#[test]
fn bit_pattern_order() {
    assert!(P8::nar() < P8::min());
    assert!(P8::min() < P8::minus_one());
    assert!(P8::minus_one() < P8::zero());
    assert!(P8::zero() < P8::min_pos());
    assert!(P8::min_pos() < P8::one());
    assert!(P8::one() < P8::max());
}

#[test]
fn fractional_views_and_carries() {
    // 1.5 in P<16, 1> has significand 1.1000...
    let f = p16(0x4800).decode().fraction().clone();
    assert!(f.hidden_bit());
    assert!(!f.carry_bit());
    assert!(f.integer_bits().bit(0));
    assert!(!f.integer_bits().bit(1));
    assert!(f.fraction_bit(Fractional::<16>::FRACTION_BITS - 1));

    // 1.1 + 1.1 == 11.0, which shows up in the carry bit
    let sum = f.add(&f);
    assert!(sum.carry_bit());

    // shifting down renormalizes
    let renorm = sum >> 1;
    assert!(!renorm.carry_bit());
    assert!(renorm.hidden_bit());

    // subtraction of equal significands is exactly zero
    assert!(f.sub(&f).is_zero());
    assert!(f > Fractional::zero());
}

#[test]
fn tiles() {
    let t = Tile::<8, 2>::from(Posit::one(), true);
    assert!(t.is_uncertain());
    assert_eq!(t.value(), &Posit::one());
    assert!(!Tile::<8, 2>::zero().is_uncertain());
    assert!(Tile::<8, 2>::nar().is_nar());
}

#[test]
fn valid_skeleton() {
    // every empty form collapses to the canonical empty set
    let weird_empty = Valid::<8, 2>::from(
        Tile::from(Posit::one(), true),
        Tile::from(Posit::one(), true),
    );
    assert!(weird_empty.is_empty());
    assert_eq!(weird_empty, Valid::empty());
    assert_eq!(weird_empty.start().value(), &Posit::zero());

    assert!(Valid::<8, 2>::nar().is_nar());
    assert!(Valid::<8, 2>::zero().is_zero());
    assert!(!Valid::<8, 2>::one().is_empty());

    // interval arithmetic is an explicit extension point
    let v = Valid::<8, 2>::one();
    assert_eq!(v.add(&v), Err(ArithError::NotImplemented("valid addition")));
    assert!(v.sub(&v).is_err());
    assert!(v.mul(&v).is_err());
    assert!(v.div(&v).is_err());
}

#[test]
fn valid_ordering() {
    let negative = Valid::<8, 2>::from(
        Tile::from(Posit::minus_one(), false),
        Tile::from(Posit::minus_one(), false),
    );
    let positive = Valid::<8, 2>::one();

    // endpoints straddling zero are decided by the negative side
    assert!(negative.lt(&positive));
    assert!(!positive.lt(&negative));

    // NaR compares below nothing
    assert!(!Valid::<8, 2>::nar().lt(&positive));
    assert!(!positive.lt(&Valid::<8, 2>::nar()));

    // equal valids are not less than each other
    assert!(!positive.lt(&positive.clone()));
}
