//! Property-based tests using quickcheck.
//!
//! The raw 256-bit primitives are checked against `ethnum::U256` as an
//! oracle; the fixed-point layers are checked through their algebraic
//! contracts (identities, sign symmetries, monotonicity, rounding bounds).

use quickcheck_macros::quickcheck;

use crate::fix192::Fix192;
use crate::u256::{div_rem_wide, widening_mul_128, U256};
use crate::{ArithError, Fix128, Fix64, Rounding, UFix128, UFix64};

fn to_ethnum(u: U256) -> ethnum::U256 {
    ethnum::U256::from_words(u.hi, u.lo)
}

// ============================================================================
// U256 primitives vs ethnum oracle
// ============================================================================

#[quickcheck]
fn u256_mul_matches_ethnum(a_hi: u64, a_lo: u64, b_hi: u64, b_lo: u64) -> bool {
    let a = ((a_hi as u128) << 64) | a_lo as u128;
    let b = ((b_hi as u128) << 64) | b_lo as u128;
    let got = to_ethnum(widening_mul_128(a, b));
    let want = ethnum::U256::from(a) * ethnum::U256::from(b);
    got == want
}

#[quickcheck]
fn u256_div_matches_ethnum(n_hi: u128, n_lo: u128, d: u128) -> bool {
    if d == 0 {
        return true;
    }
    let n_hi = n_hi % d; // quotient must fit 128 bits
    let (q, r) = div_rem_wide(U256::new(n_hi, n_lo), d);
    let n = ethnum::U256::from_words(n_hi, n_lo);
    let de = ethnum::U256::from(d);
    q == (n / de).as_u128() && r == (n % de).as_u128()
}

#[quickcheck]
fn u256_div_reconstructs(n_hi: u128, n_lo: u128, d: u128) -> bool {
    if d == 0 {
        return true;
    }
    let n_hi = n_hi % d;
    let n = U256::new(n_hi, n_lo);
    let (q, r) = div_rem_wide(n, d);
    r < d && widening_mul_128(q, d).wrapping_add(U256::new(0, r)) == n
}

#[quickcheck]
fn u256_add_sub_round_trip(a_hi: u128, a_lo: u128, b_hi: u128, b_lo: u128) -> bool {
    let a = U256::new(a_hi, a_lo);
    let b = U256::new(b_hi, b_lo);
    a.wrapping_add(b).wrapping_sub(b) == a
}

// ============================================================================
// Fix192 working type
// ============================================================================

#[quickcheck]
fn fix192_umul_one_is_exact(hi: u64, mid: u64, lo: u64) -> bool {
    let x = Fix192::from_words(hi, mid, lo);
    x.umul(Fix192::ONE).unwrap() == x
}

#[quickcheck]
fn fix192_smul_commutes(a_hi: u64, a_mid: u64, a_lo: u64, b_mid: u64, b_lo: u64) -> bool {
    // Keep magnitudes small enough to avoid overflow: products of values
    // below 2^95 always fit.
    let a = Fix192::from_words(a_hi & 0x7fff_ffff, a_mid, a_lo);
    let b = Fix192::from_words(0, b_mid, b_lo);
    a.smul(b).unwrap() == b.smul(a).unwrap()
}

#[quickcheck]
fn fix192_add_sub_round_trip(a_hi: u64, a_mid: u64, a_lo: u64, b_hi: u64, b_mid: u64, b_lo: u64) -> bool {
    let a = Fix192::from_words(a_hi, a_mid, a_lo);
    let b = Fix192::from_words(b_hi, b_mid, b_lo);
    a.wrapping_add(b).wrapping_sub(b) == a
}

#[quickcheck]
fn fix192_shift_round_trip(mid: u64, lo: u64, n: u8) -> bool {
    let n = (n % 64) as u32;
    let x = Fix192::from_words(0, mid, lo);
    x.shl(n).shr(n) == x
}

// ============================================================================
// P1: add/sub round trips
// ============================================================================

#[quickcheck]
fn ufix64_add_sub_identity(a: u64, b: u64) -> bool {
    let a = UFix64::from_raw(a);
    let b = UFix64::from_raw(b);
    match a.checked_add(b) {
        Ok(s) => s.checked_sub(b).unwrap() == a,
        Err(ArithError::Overflow) => true,
        Err(_) => false,
    }
}

#[quickcheck]
fn fix64_add_sub_identity(a: i64, b: i64) -> bool {
    let a = Fix64::from_raw(a);
    let b = Fix64::from_raw(b);
    match a.checked_add(b) {
        Ok(s) => s.checked_sub(b).unwrap() == a,
        Err(ArithError::Overflow) | Err(ArithError::NegOverflow) => true,
        Err(_) => false,
    }
}

#[quickcheck]
fn ufix128_add_sub_identity(a_hi: u64, a_lo: u64, b_hi: u64, b_lo: u64) -> bool {
    let a = UFix128::from_raw(((a_hi as u128) << 64) | a_lo as u128);
    let b = UFix128::from_raw(((b_hi as u128) << 64) | b_lo as u128);
    match a.checked_add(b) {
        Ok(s) => s.checked_sub(b).unwrap() == a,
        Err(ArithError::Overflow) => true,
        Err(_) => false,
    }
}

// ============================================================================
// P2/P3: FMD contracts
// ============================================================================

#[quickcheck]
fn ufix64_mul_div_round_trip(a: u64, b: u64) -> bool {
    // (a / b) * b recovers a to the division's granularity.
    let b = b | 1; // nonzero
    let af = UFix64::from_raw(a);
    let bf = UFix64::from_raw(b);
    let q = match af.div(bf, Rounding::NearestHalfAway) {
        Ok(q) => q,
        Err(ArithError::Underflow) | Err(ArithError::Overflow) => return true,
        Err(_) => return false,
    };
    let back = match q.mul(bf, Rounding::NearestHalfAway) {
        Ok(v) => v,
        Err(_) => return true,
    };
    let diff = back.raw().abs_diff(a);
    diff <= b / UFix64::SCALE + 2
}

#[quickcheck]
fn ufix64_fmd_no_intermediate_overflow(a: u64, b: u64) -> bool {
    // a * b may exceed 64 bits, yet a * b / b must come back exactly.
    if a == 0 || b == 0 {
        return true;
    }
    let af = UFix64::from_raw(a);
    let bf = UFix64::from_raw(b);
    af.mul_div(bf, bf, Rounding::TowardZero).unwrap() == af
}

#[quickcheck]
fn ufix128_fmd_no_intermediate_overflow(a_hi: u64, a_lo: u64, b_hi: u64, b_lo: u64) -> bool {
    let a = ((a_hi as u128) << 64) | a_lo as u128;
    let b = ((b_hi as u128) << 64) | b_lo as u128;
    if a == 0 || b == 0 {
        return true;
    }
    let af = UFix128::from_raw(a);
    let bf = UFix128::from_raw(b);
    af.mul_div(bf, bf, Rounding::TowardZero).unwrap() == af
}

#[quickcheck]
fn ufix64_fmd_matches_exact_reference(a: u64, b: u64, c: u64) -> bool {
    let got = UFix64::from_raw(a).mul_div(
        UFix64::from_raw(b),
        UFix64::from_raw(c),
        Rounding::TowardZero,
    );
    if c == 0 {
        return got == Err(ArithError::DivByZero);
    }
    if a == 0 || b == 0 {
        return got == Ok(UFix64::ZERO);
    }
    let want = (a as u128) * (b as u128) / (c as u128);
    if want > u64::MAX as u128 {
        got == Err(ArithError::Overflow)
    } else if want == 0 {
        got == Err(ArithError::Underflow)
    } else {
        got == Ok(UFix64::from_raw(want as u64))
    }
}

// ============================================================================
// P4: sign symmetries
// ============================================================================

#[quickcheck]
fn fix64_neg_neg_round_trip(a: i64) -> bool {
    let x = Fix64::from_raw(a);
    if a == i64::MIN {
        x.neg() == Err(ArithError::NegOverflow)
    } else {
        x.neg().unwrap().neg().unwrap() == x
    }
}

#[quickcheck]
fn fix64_mul_agrees_with_magnitudes(a: i64, b: i64) -> bool {
    let fa = Fix64::from_raw(a);
    let fb = Fix64::from_raw(b);
    let (ma, sa) = fa.abs();
    let (mb, sb) = fb.abs();
    let unsigned = ma.mul(mb, Rounding::TowardZero);
    let signed = fa.mul(fb, Rounding::TowardZero);
    match (unsigned, signed) {
        (Ok(m), Ok(s)) => {
            let (ms, ss) = s.abs();
            ms == m && (m.is_zero() || ss == sa * sb)
        }
        (Ok(m), Err(e)) => {
            // magnitude fits unsigned but not the signed range
            let sign = sa * sb;
            if sign < 0 {
                e == ArithError::NegOverflow && m.raw() > 1 << 63
            } else {
                e == ArithError::Overflow && m.raw() >= 1 << 63
            }
        }
        (Err(ue), Err(se)) => {
            (ue == se)
                || (ue == ArithError::Overflow
                    && se == ArithError::NegOverflow
                    && sa * sb < 0)
        }
        (Err(_), Ok(_)) => false,
    }
}

#[quickcheck]
fn fix128_rem_sign_follows_dividend(a: i128, b: i128) -> bool {
    if b == 0 {
        return Fix128::from_raw(a).rem(Fix128::from_raw(b)) == Err(ArithError::DivByZero);
    }
    let r = Fix128::from_raw(a).rem(Fix128::from_raw(b)).unwrap();
    r.is_zero() || (r.is_neg() == (a < 0))
}

// ============================================================================
// P5: monotonicity
// ============================================================================

#[quickcheck]
fn ufix64_add_is_monotone(a: u64, b: u64, c: u64) -> bool {
    let (a, b) = (a.min(b), a.max(b));
    let fa = UFix64::from_raw(a).checked_add(UFix64::from_raw(c));
    let fb = UFix64::from_raw(b).checked_add(UFix64::from_raw(c));
    match (fa, fb) {
        (Ok(x), Ok(y)) => x <= y,
        (Ok(_), Err(_)) => true,
        (Err(_), Ok(_)) => false, // smaller operand overflowing alone is impossible
        (Err(_), Err(_)) => true,
    }
}

#[quickcheck]
fn ufix64_mul_is_monotone(a: u64, b: u64, c: u32) -> bool {
    let (a, b) = (a.min(b), a.max(b));
    let c = UFix64::from_raw(c as u64 | 1);
    let fa = UFix64::from_raw(a).mul(c, Rounding::NearestHalfAway);
    let fb = UFix64::from_raw(b).mul(c, Rounding::NearestHalfAway);
    match (fa, fb) {
        (Ok(x), Ok(y)) => x <= y,
        (Err(ArithError::Underflow), Ok(_)) => true,
        (Ok(_), Err(_)) => true,
        _ => true,
    }
}

// ============================================================================
// P6: sqrt inverse bound
// ============================================================================

#[quickcheck]
fn ufix64_sqrt_squares_back(v: u64) -> bool {
    let s = UFix64::from_raw(v).sqrt().unwrap().raw() as u128;
    let n = (v as u128) * (UFix64::SCALE as u128);
    // nearest rounding keeps the squared error within the root itself
    s * s + s >= n && n + s >= s * s
}

#[quickcheck]
fn ufix128_sqrt_squares_back(hi: u64, lo: u64) -> bool {
    let v = ((hi as u128) << 64) | lo as u128;
    let s = UFix128::from_raw(v).sqrt().unwrap().raw();
    let n = widening_mul_128(v, UFix128::SCALE);
    let sq = widening_mul_128(s, s);
    let bound = U256::new(0, s);
    sq.wrapping_add(bound) >= n && n.wrapping_add(bound) >= sq
}

// ============================================================================
// P7: transcendental identities
// ============================================================================

#[quickcheck]
fn ufix64_exp_ln_round_trip(v: u64) -> bool {
    let v = v | 1; // positive
    let x = UFix64::from_raw(v);
    let l = x.ln().unwrap();
    let back = match l.exp() {
        Ok(b) => b,
        // The rounded logarithm of a value at the very top of the range can
        // exponentiate just past it.
        Err(ArithError::Overflow) => return v >= u64::MAX - 8 * (u64::MAX / 100_000_000),
        Err(_) => return false,
    };
    // ln rounds at 10^-8, so the round trip drifts by at most that factor
    let tol = v / 100_000_000 + 2;
    back.raw().abs_diff(v) <= tol
}

#[quickcheck]
fn fix64_sin_cos_pythagoras(x: i64) -> bool {
    let x = Fix64::from_raw(x);
    let s = x.sin().unwrap_or(Fix64::ZERO);
    let c = x.cos().unwrap_or(Fix64::ZERO);
    let s2 = (s.raw() as i128) * (s.raw() as i128);
    let c2 = (c.raw() as i128) * (c.raw() as i128);
    let one = (Fix64::ONE.raw() as i128) * (Fix64::ONE.raw() as i128);
    (s2 + c2 - one).unsigned_abs() <= 4 * Fix64::ONE.raw() as u128
}

#[quickcheck]
fn fix64_sin_is_odd(x: i64) -> bool {
    if x == i64::MIN {
        return true;
    }
    let f = Fix64::from_raw(x);
    let a = f.sin();
    let b = f.neg().unwrap().sin();
    match (a, b) {
        (Ok(a), Ok(b)) => a.raw() == -b.raw(),
        (Err(ArithError::Underflow), Err(ArithError::Underflow)) => true,
        _ => false,
    }
}

#[quickcheck]
fn fix64_cos_is_even(x: i64) -> bool {
    if x == i64::MIN {
        return true;
    }
    let f = Fix64::from_raw(x);
    f.cos() == f.neg().unwrap().cos()
}

#[quickcheck]
fn ufix64_pow_one_is_identity(v: u64) -> bool {
    let v = v | 1;
    let x = UFix64::from_raw(v);
    match x.pow(Fix64::ONE) {
        Ok(p) => p.raw().abs_diff(v) <= v / 100_000_000 + 2,
        Err(ArithError::Overflow) => v >= u64::MAX - 2,
        Err(_) => false,
    }
}

#[quickcheck]
fn ufix64_pow_zero_is_one(v: u64) -> bool {
    UFix64::from_raw(v).pow(Fix64::ZERO) == Ok(UFix64::ONE)
}

// ============================================================================
// Conversions
// ============================================================================

#[quickcheck]
fn ufix64_widen_narrow_round_trip(v: u64) -> bool {
    let x = UFix64::from_raw(v);
    x.to_ufix128().to_ufix64(Rounding::TowardZero) == Ok(x)
}

#[quickcheck]
fn fix64_widen_narrow_round_trip(v: i64) -> bool {
    let x = Fix64::from_raw(v);
    x.to_fix128().to_fix64(Rounding::TowardZero) == Ok(x)
}

#[quickcheck]
fn ufix128_narrowing_error_or_value(hi: u64, lo: u64) -> bool {
    let v = ((hi as u128) << 64) | lo as u128;
    match UFix128::from_raw(v).to_ufix64(Rounding::NearestHalfAway) {
        Ok(n) => {
            let back = n.raw() as u128 * crate::fix192::SCALE_RATIO as u128;
            back.abs_diff(v) <= crate::fix192::SCALE_RATIO as u128 / 2
        }
        Err(ArithError::Overflow) => v / crate::fix192::SCALE_RATIO as u128 >= u64::MAX as u128,
        Err(ArithError::Underflow) => v > 0 && v < crate::fix192::SCALE_RATIO as u128,
        Err(_) => false,
    }
}
