use arith_sim::float::{Double, NormFloat, Single};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// a random finite double whose exponent keeps sums, products and
// quotients well inside the normal range
fn random_mid_double(rng: &mut StdRng) -> f64 {
    let sign = (rng.gen::<bool>() as u64) << 63;
    let exponent = rng.gen_range(800u64..1200);
    let fraction = rng.gen::<u64>() & ((1u64 << 52) - 1);
    f64::from_bits(sign | (exponent << 52) | fraction)
}

#[test]
fn format_parameters() {
    assert_eq!(Single::bias(), 127);
    assert_eq!(Single::emax(), 127);
    assert_eq!(Single::emin(), -126);
    assert_eq!(Double::bias(), 1023);
    assert_eq!(NormFloat::<5, 10>::bias(), 15);
}

#[test]
fn classification() {
    assert!(Single::zero(false).is_zero());
    assert!(Single::zero(true).is_zero());
    assert!(Single::nan().is_nan());
    assert!(Single::infinity(false).is_inf());
    assert!(Single::infinity(true).is_inf());
    assert!(Single::one().is_normalized());
    assert!(!Single::nan().is_finite());
    assert!(!Single::infinity(false).is_finite());
    assert!(Single::one().is_finite());
    assert!(Single::max().is_finite());
    assert!(Single::min().is_normalized());
}

#[test]
fn half_plus_quarter_rounds_to_three_quarters() {
    let a = Single::from_f32(0.5);
    let b = Single::from_f32(0.25);
    let sum = a.add(&b);

    assert!(!sum.sign());
    // mantissa 1.1 in binary at unbiased exponent -1
    assert_eq!(sum.unbiased_exponent(), -1);
    assert!(sum.fraction().bit(22));
    assert!(!sum.fraction().bit(21));
    assert_eq!(sum.to_f32(), 0.75f32);
}

#[test]
fn native_round_trips() {
    let mut rng = StdRng::seed_from_u64(53);
    for _ in 0..500 {
        let x = random_mid_double(&mut rng);
        assert_eq!(Double::from_f64(x).to_f64(), x);

        let y = f32::from_bits(rng.gen());
        if y.is_normal() || y == 0.0 {
            assert_eq!(Single::from_f32(y).to_f32(), y, "bits {:08x}", y.to_bits());
        }
    }

    assert_eq!(Double::from_f64(0.0).to_f64(), 0.0);
    assert_eq!(Double::from_f64(-2.5).to_f64(), -2.5);
    assert!(Double::from_f64(f64::NAN).is_nan());
    assert_eq!(Double::from_f64(f64::INFINITY).to_f64(), f64::INFINITY);
    assert_eq!(Double::from_f64(f64::NEG_INFINITY).to_f64(), f64::NEG_INFINITY);
}

#[test]
fn arithmetic_matches_native_doubles() {
    let mut rng = StdRng::seed_from_u64(59);
    for _ in 0..500 {
        let x = random_mid_double(&mut rng);
        let y = random_mid_double(&mut rng);
        let a = Double::from_f64(x);
        let b = Double::from_f64(y);

        assert_eq!(a.add(&b).to_f64(), x + y, "{} + {}", x, y);
        assert_eq!(a.sub(&b).to_f64(), x - y, "{} - {}", x, y);
        assert_eq!(a.mul(&b).to_f64(), x * y, "{} * {}", x, y);
        assert_eq!(a.div(&b).to_f64(), x / y, "{} / {}", x, y);
    }
}

#[test]
fn addition_and_multiplication_commute() {
    let mut rng = StdRng::seed_from_u64(61);
    for _ in 0..200 {
        let a = Double::from_f64(random_mid_double(&mut rng));
        let b = Double::from_f64(random_mid_double(&mut rng));
        assert_eq!(a.add(&b), b.add(&a));
        assert_eq!(a.mul(&b), b.mul(&a));
    }
}

#[test]
fn additive_identity() {
    let mut rng = StdRng::seed_from_u64(67);
    for _ in 0..100 {
        let x = Double::from_f64(random_mid_double(&mut rng));
        assert_eq!(x.add(&Double::zero(false)), x);
        assert_eq!(x.mul(&Double::one()), x);
    }
}

#[test]
fn special_values() {
    let inf = Single::infinity(false);
    let ninf = Single::infinity(true);
    let zero = Single::zero(false);
    let one = Single::one();

    // infinity minus infinity is NaN
    assert!(inf.sub(&inf).is_nan());
    assert!(inf.add(&ninf).is_nan());

    // zero times infinity is NaN
    assert!(zero.mul(&inf).is_nan());
    assert!(inf.mul(&zero).is_nan());

    // division by zero gives the XOR-signed infinity
    assert!(one.div(&zero).is_inf());
    assert!(!one.div(&zero).sign());
    assert!(one.neg().div(&zero).sign());
    assert!(zero.div(&zero).is_nan());

    // infinities absorb finite values
    assert_eq!(inf.add(&one), inf);
    assert!(inf.div(&inf).is_nan());
    assert!(one.div(&inf).is_zero());

    // NaN propagates through everything
    assert!(Single::nan().add(&one).is_nan());
    assert!(one.mul(&Single::nan()).is_nan());
}

#[test]
fn subtraction_cancels_exactly() {
    let x = Single::from_f32(3.5);
    let diff = x.sub(&x);
    assert!(diff.is_zero());
    assert!(!diff.sign());

    // cancellation renormalizes: 1.0 - 0.9999999 is tiny but exact
    let a = Double::from_f64(1.0);
    let b = Double::from_f64(0.9999999);
    assert_eq!(a.sub(&b).to_f64(), 1.0 - 0.9999999);
}

#[test]
fn decode_truncates_instead_of_rounding() {
    // all low mantissa bits set: narrowing to Single must drop them
    // without carrying into the kept bits
    let x = f64::from_bits((1023u64 << 52) | 0x000F_FFFF_FFFF_FFFF);
    let narrowed = Single::from_f64(x);
    let expected = Single::from_f32(f32::from_bits((127u32 << 23) | 0x0007_FFFF));
    assert_eq!(narrowed, expected);
}

#[test]
fn ordering() {
    let half = Single::from_f32(0.5);
    let one = Single::one();
    let neg = Single::from_f32(-1.0);

    assert!(half < one);
    assert!(neg < half);
    assert!(neg < Single::zero(false));
    assert!(Single::zero(true) < half);
    // the two zeros are distinct bit patterns; minus zero sorts first
    assert_ne!(Single::zero(true), Single::zero(false));
    assert_eq!(
        Single::zero(true).partial_cmp(&Single::zero(false)),
        Some(std::cmp::Ordering::Less)
    );
    assert_eq!(Single::nan().partial_cmp(&one), None);
    assert!(Single::from_f32(-2.0) < Single::from_f32(-1.0));
}

#[test]
fn overflow_and_underflow() {
    let max = Single::max();
    assert!(max.add(&max).is_inf());

    let min = Single::min();
    let half = Single::from_f32(0.5);
    // below the normal range flushes to zero
    assert!(min.mul(&half).is_zero());
}

#[test]
fn scientific_strings() {
    assert_eq!(Single::from_f32(0.75).to_sci_string(), "1.5E-1");
    assert_eq!(Single::one().to_sci_string(), "1E0");
    assert_eq!(Single::from_f32(-0.5).to_sci_string(), "-1E-1");
    assert_eq!(Single::from_f32(6.0).to_sci_string(), "1.5E2");
    assert_eq!(Single::nan().to_sci_string(), "NaN");
    assert_eq!(Single::infinity(true).to_sci_string(), "-Inf");
    assert_eq!(Single::zero(false).to_sci_string(), "0");
}

#[test]
fn grouped_bit_strings() {
    // 1.0 as a half float: sign 0, exponent 01111, mantissa 1.0000000000
    let one = NormFloat::<5, 10>::one();
    assert_eq!(one.to_binary(), "0 01111 10000000000");
    assert_eq!(one.to_hex(), "0 0f 400");
}

#[test]
fn packed_bit_patterns_round_trip() {
    let mut rng = StdRng::seed_from_u64(71);
    for _ in 0..200 {
        let x = Single::from_f32(f32::from_bits(rng.gen::<u32>() & 0x7F7F_FFFF));
        let bits = x.to_bits::<32>();
        let back = Single::from_bits(&bits);
        assert_eq!(back.sign(), x.sign());
        assert_eq!(back.exponent(), x.exponent());
        assert_eq!(back.fraction(), x.fraction());
    }
}
