//! Bit-exact vectors for the arithmetic surface: literal raw values in and
//! out, covering the documented overflow taxonomy and rounding edges.

use decfix::{ArithError, Fix128, Fix64, Rounding, UFix128, UFix64};

#[test]
fn ufix64_add_literals() {
    // 2 + 4 = 6 at scale 10^8
    let a = UFix64::from_raw(0x0000_0000_0beb_c200);
    let b = UFix64::from_raw(0x0000_0000_17d7_8400);
    assert_eq!(a.checked_add(b).unwrap().raw(), 0x0000_0000_23c2_4600);
}

#[test]
fn ufix64_add_overflow() {
    let a = UFix64::from_raw(0xffff_ffff_ffff_ffff);
    let b = UFix64::from_raw(0x0000_0000_0000_0001);
    assert_eq!(a.checked_add(b), Err(ArithError::Overflow));
}

#[test]
fn fix64_min_minus_iota() {
    let min = Fix64::from_raw(i64::MIN); // 0x8000000000000000
    let iota = Fix64::from_raw(1);
    assert_eq!(min.checked_sub(iota), Err(ArithError::NegOverflow));
}

#[test]
fn ufix64_fmd_ten_ten_ten() {
    // 10 * 10 / 10 = 10
    let ten = UFix64::from_raw(0x0000_0000_3b9a_ca00);
    assert_eq!(
        ten.mul_div(ten, ten, Rounding::NearestHalfAway).unwrap(),
        ten
    );
}

#[test]
fn ufix64_div_iota_by_one_plus_iota() {
    // iota / (1 + iota) is just under one iota: truncation underflows,
    // every nearest mode lands on iota.
    let iota = UFix64::IOTA;
    let d = UFix64::from_raw(0x0000_0000_05f5_e101);
    assert_eq!(iota.div(d, Rounding::TowardZero), Err(ArithError::Underflow));
    assert_eq!(iota.div(d, Rounding::HalfUp).unwrap(), UFix64::IOTA);
    assert_eq!(iota.div(d, Rounding::NearestHalfAway).unwrap(), UFix64::IOTA);
    assert_eq!(iota.div(d, Rounding::AwayFromZero).unwrap(), UFix64::IOTA);
}

#[test]
fn rounding_modes_disagree_exactly_on_ties() {
    // 0.25 / 2 = 0.125: exact, all modes agree.
    let a = UFix64::from_raw(25_000_000);
    let two = UFix64::from_raw(200_000_000);
    for mode in [
        Rounding::TowardZero,
        Rounding::AwayFromZero,
        Rounding::HalfUp,
        Rounding::HalfEven,
        Rounding::NearestHalfAway,
    ] {
        assert_eq!(a.div(two, mode).unwrap().raw(), 12_500_000);
    }
    // 0.000000015 / 10 ties at 1.5 iota.
    let t = UFix64::from_raw(15);
    let ten = UFix64::from_raw(1_000_000_000);
    assert_eq!(t.div(ten, Rounding::TowardZero).unwrap().raw(), 1);
    assert_eq!(t.div(ten, Rounding::AwayFromZero).unwrap().raw(), 2);
    assert_eq!(t.div(ten, Rounding::HalfUp).unwrap().raw(), 2);
    assert_eq!(t.div(ten, Rounding::HalfEven).unwrap().raw(), 2); // q = 1, odd
    assert_eq!(t.div(ten, Rounding::NearestHalfAway).unwrap().raw(), 2);
    // 0.000000025 / 10 ties at 2.5 iota: half-even now stays.
    let t = UFix64::from_raw(25);
    assert_eq!(t.div(ten, Rounding::HalfEven).unwrap().raw(), 2);
    assert_eq!(t.div(ten, Rounding::NearestHalfAway).unwrap().raw(), 3);
}

#[test]
fn fix64_fmd_sign_grid() {
    let three = Fix64::from_int(3).unwrap();
    let neg_three = Fix64::from_int(-3).unwrap();
    let two = Fix64::from_int(2).unwrap();
    let neg_two = Fix64::from_int(-2).unwrap();
    let six = Fix64::from_int(6).unwrap();
    let neg_six = Fix64::from_int(-6).unwrap();
    let m = Rounding::NearestHalfAway;
    assert_eq!(three.mul(two, m).unwrap(), six);
    assert_eq!(three.mul(neg_two, m).unwrap(), neg_six);
    assert_eq!(neg_three.mul(two, m).unwrap(), neg_six);
    assert_eq!(neg_three.mul(neg_two, m).unwrap(), six);
    assert_eq!(neg_six.div(neg_two, m).unwrap(), three);
    assert_eq!(neg_six.div(two, m).unwrap(), neg_three);
}

#[test]
fn fix64_mod_literals() {
    let a = Fix64::from_int(7).unwrap();
    let b = Fix64::from_int(3).unwrap();
    assert_eq!(a.rem(b).unwrap(), Fix64::from_int(1).unwrap());
    assert_eq!(
        a.neg().unwrap().rem(b).unwrap(),
        Fix64::from_int(-1).unwrap()
    );
    assert_eq!(
        a.rem(b.neg().unwrap()).unwrap(),
        Fix64::from_int(1).unwrap()
    );
}

#[test]
fn ufix128_scale_arithmetic() {
    let one = UFix128::ONE;
    let two = UFix128::from_int(2).unwrap();
    assert_eq!(one.checked_add(one).unwrap(), two);
    assert_eq!(
        two.mul(two, Rounding::TowardZero).unwrap(),
        UFix128::from_int(4).unwrap()
    );
    assert_eq!(
        one.div(UFix128::from_int(8).unwrap(), Rounding::TowardZero)
            .unwrap()
            .raw(),
        UFix128::SCALE / 8
    );
}

#[test]
fn fix128_most_negative_taxonomy() {
    assert_eq!(Fix128::MIN.neg(), Err(ArithError::NegOverflow));
    let (mag, sign) = Fix128::MIN.abs();
    assert_eq!(mag.raw(), 1u128 << 127);
    assert_eq!(sign, -1);
    assert_eq!(mag.apply_sign(-1).unwrap(), Fix128::MIN);
    assert_eq!(mag.apply_sign(1), Err(ArithError::Overflow));
}

#[test]
fn cross_type_widening_is_exact() {
    let x = UFix64::from_raw(314_159_265); // 3.14159265
    let wide = x.to_ufix128();
    assert_eq!(wide.raw(), 314_159_265u128 * 10u128.pow(16));
    assert_eq!(wide.to_ufix64(Rounding::TowardZero).unwrap(), x);

    let s = Fix64::from_raw(-314_159_265);
    let wide = s.to_fix128();
    assert_eq!(wide.raw(), -314_159_265i128 * 10i128.pow(16));
    assert_eq!(wide.to_fix64(Rounding::TowardZero).unwrap(), s);
}

#[test]
fn narrowing_flags_each_failure() {
    // Too large for 64 bits.
    assert_eq!(
        UFix128::MAX.to_ufix64(Rounding::TowardZero),
        Err(ArithError::Overflow)
    );
    // Nonzero but below 64-bit iota.
    assert_eq!(
        UFix128::IOTA.to_ufix64(Rounding::TowardZero),
        Err(ArithError::Underflow)
    );
    // Negative into unsigned.
    assert_eq!(
        Fix128::from_int(-1).unwrap().to_ufix128(),
        Err(ArithError::NegOverflow)
    );
    assert_eq!(
        Fix64::from_int(-1).unwrap().to_ufix64(),
        Err(ArithError::NegOverflow)
    );
    // Signed range is half the unsigned one.
    assert_eq!(
        UFix64::MAX.to_fix64(),
        Err(ArithError::Overflow)
    );
}

#[test]
fn zero_divisor_beats_zero_numerator_everywhere() {
    assert_eq!(
        UFix64::ZERO.div(UFix64::ZERO, Rounding::TowardZero),
        Err(ArithError::DivByZero)
    );
    assert_eq!(
        Fix64::ZERO.div(Fix64::ZERO, Rounding::TowardZero),
        Err(ArithError::DivByZero)
    );
    assert_eq!(
        UFix128::ZERO.mul_div(UFix128::ZERO, UFix128::ZERO, Rounding::TowardZero),
        Err(ArithError::DivByZero)
    );
    assert_eq!(UFix64::ZERO.rem(UFix64::ZERO), Err(ArithError::DivByZero));
}

#[test]
fn constants_are_bit_exact() {
    assert_eq!(UFix64::SCALE, 100_000_000);
    assert_eq!(UFix64::ONE.raw(), 0x05f5_e100);
    assert_eq!(UFix64::ONE_LEADING_ZEROS, 37);
    assert_eq!(UFix128::SCALE, 1_000_000_000_000_000_000_000_000);
    assert_eq!(UFix128::SCALE >> 64, 54_210);
    assert_eq!(UFix128::SCALE as u64, 2_003_764_205_206_896_640);
    assert_eq!(Fix64::MIN.raw(), i64::MIN);
    assert_eq!(Fix128::IOTA.raw(), 1);
}

#[test]
fn ordering_is_integer_ordering() {
    assert!(UFix64::from_raw(2) > UFix64::from_raw(1));
    assert!(Fix64::from_raw(-1) < Fix64::from_raw(0));
    assert!(Fix64::MIN < Fix64::from_raw(-1));
    assert!(Fix128::MIN < Fix128::MAX);
    assert_eq!(UFix128::from_raw(7), UFix128::from_raw(7));
}
