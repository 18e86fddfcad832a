//! ln, exp, pow, sin and cos on the working type.
//!
//! Each routine follows the same shape: reduce the argument into a narrow
//! band, evaluate a precomputed polynomial there, then recompose. All
//! polynomial tables live in `tables` and were generated offline; evaluation
//! is plain Horner over the signed working-scale multiply.

use std::cmp::Ordering;

use crate::error::{ArithError, Result};
use crate::fix192::{Fix192, FIVE_POW_24};
use crate::tables::{
    ANGLE_J, ANGLE_M, EXP_FRAC_COEFFS, EXP_INT_MIN, EXP_INT_POWERS, HALF_PI, LN_2, LN_BOUNDS,
    LN_COEFFS, PI, SIN_COEFFS, TWO_PI, TWO_PI_RESIDUAL,
};

/// Horner evaluation, lowest-degree coefficient first.
///
/// All tables keep their values and every partial sum far inside the signed
/// range for arguments in [0, 1.21), so the multiply cannot overflow.
fn horner(coeffs: &[Fix192], x: Fix192) -> Result<Fix192> {
    let mut acc = coeffs[coeffs.len() - 1];
    for c in coeffs[..coeffs.len() - 1].iter().rev() {
        acc = acc.smul(x)?.wrapping_add(*c);
    }
    Ok(acc)
}

// ============================================================================
// Natural logarithm
// ============================================================================

/// ln of an unsigned working value. Zero is outside the domain (negative
/// inputs never reach here; the façades route them to `Domain` directly).
///
/// Range reduction peels powers of two: shifting `x` to the bit length of
/// one lands it in [0.6035, 1.2071), where a binary search over the segment
/// bounds picks the polynomial, and `k * ln 2` restores the shift.
pub(crate) fn ln(x: Fix192) -> Result<Fix192> {
    if x.is_zero() {
        return Err(ArithError::Domain);
    }
    let k = 144i32 - (192 - x.leading_zeros()) as i32;
    let xr = if k <= 0 { x.shr((-k) as u32) } else { x.shl(k as u32) };
    debug_assert_eq!(xr.leading_zeros(), 48);

    // Largest segment whose left edge does not exceed xr.
    let mut lo = 0usize;
    let mut hi = LN_BOUNDS.len() - 1;
    while lo < hi {
        let mid = (lo + hi + 1) / 2;
        if LN_BOUNDS[mid].ucmp(&xr) != Ordering::Greater {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    let poly = horner(&LN_COEFFS[lo], xr)?;

    let shift = -k as i64; // ln(x) = poly(xr) + shift * ln 2
    Ok(poly.wrapping_add(LN_2.smul_i64(shift)))
}

// ============================================================================
// Exponential
// ============================================================================

/// Splits an unsigned working value into its integer part and fractional
/// remainder. The scale factors 2^64 and 2^24 come off as word drops and
/// shifts; the final 5^24 division yields the integer part, and the pieces
/// below it reassemble into the fraction.
fn split_int_frac(m: Fix192) -> (u64, Fix192) {
    let dropped24 = m.mid & 0xFF_FFFF;
    let n = m.top128() >> 24;
    let i = n / FIVE_POW_24 as u128;
    let rem5 = (n % FIVE_POW_24 as u128) as u64;
    let f = Fix192::from_words(
        rem5 >> 40,
        (((rem5 as u128) << 24) as u64) | dropped24,
        m.lo,
    );
    (i as u64, f)
}

/// e^x for a signed working value.
///
/// The integer part indexes a table of e^n covering every representable
/// power; the fractional part goes through the polynomial and multiplies in.
/// Below the table is `Underflow`, above it `Overflow`; the final multiply
/// can also overflow at the very top of the range.
pub(crate) fn exp(x: Fix192) -> Result<Fix192> {
    let (m, sign) = x.abs();
    let (i, mut f) = split_int_frac(m);
    let mut i = i as i64;
    if sign < 0 {
        if f.is_zero() {
            i = -i;
        } else {
            // x = -(i + f) = (-i - 1) + (1 - f), keeping the fraction in [0, 1)
            i = -i - 1;
            f = Fix192::ONE.wrapping_sub(f);
        }
    }

    if i < EXP_INT_MIN {
        return Err(ArithError::Underflow);
    }
    let idx = (i - EXP_INT_MIN) as usize;
    if idx >= EXP_INT_POWERS.len() {
        return Err(ArithError::Overflow);
    }

    let mut res = EXP_INT_POWERS[idx];
    if !f.is_zero() {
        let pf = horner(&EXP_FRAC_COEFFS, f)?;
        res = res.umul(pf)?;
    }
    Ok(res)
}

// ============================================================================
// Power
// ============================================================================

/// a^b as exp(b * ln a), with the limit cases resolved up front:
/// b = 0 gives one even at a = 0; 0^b is zero for positive b and a zero
/// division for negative b. A product b * ln a that rounds to zero means
/// the result is one to working precision; a product that falls off the
/// negative end is an underflow of the final value.
pub(crate) fn pow(a: Fix192, b: Fix192) -> Result<Fix192> {
    if b.is_zero() {
        return Ok(Fix192::ONE);
    }
    if a.is_zero() {
        return if b.is_neg() {
            Err(ArithError::DivByZero)
        } else {
            Ok(Fix192::ZERO)
        };
    }
    let t = ln(a)?;
    let p = match t.smul(b) {
        Ok(p) => p,
        Err(ArithError::NegOverflow) => return Err(ArithError::Underflow),
        Err(e) => return Err(e),
    };
    if p.is_zero() {
        return Ok(Fix192::ONE);
    }
    exp(p)
}

// ============================================================================
// Sine and cosine
// ============================================================================

/// Reduces an angle to `y` in [0, pi] with a sign flag such that
/// `sin(x) = sign * sin(y)`.
///
/// Small magnitudes return directly or fold across 2*pi. Larger ones count
/// whole cycles without a full-width division: `s = x / M` for the 64-bit
/// `M ~ j * 5^24 * 2*pi`, then `q = (s * j) >> 88` (the 5^24 cancels
/// against the scale, leaving word-drop and shift). The stored 2*pi is
/// rounded up, so `q * residual` compensates the accumulated gap, and a
/// negative remainder means `q` landed one cycle high, fixed by adding a
/// single 2*pi back.
fn clamp_angle(x: Fix192) -> (Fix192, i32) {
    let (m, mut sign) = x.abs();
    if m.ucmp(&PI) == Ordering::Less {
        return (m, sign);
    }
    if m.ucmp(&TWO_PI) != Ordering::Greater {
        return (TWO_PI.wrapping_sub(m), -sign);
    }

    let (s, _) = m.div_rem_u64(ANGLE_M);
    let q = s.umul_u64(ANGLE_J).shr(88).lo;
    let correction = ((q as u128 * TWO_PI_RESIDUAL as u128) >> 64) as u64;
    let mut r = m
        .wrapping_sub(TWO_PI.umul_u64(q))
        .wrapping_add(Fix192::from_words(0, 0, correction));
    if r.is_neg() {
        r = r.wrapping_add(TWO_PI);
    }
    debug_assert!(!r.is_neg());
    if r.ucmp(&PI) == Ordering::Greater {
        r = TWO_PI.wrapping_sub(r);
        sign = -sign;
    }
    (r, sign)
}

/// The shared polynomial on [0, pi/2].
fn sin_poly(y: Fix192) -> Result<Fix192> {
    if y.is_zero() {
        return Ok(Fix192::ZERO);
    }
    horner(&SIN_COEFFS, y)
}

/// sin of a signed working value, returned signed.
pub(crate) fn sin(x: Fix192) -> Result<Fix192> {
    let (mut y, sign) = clamp_angle(x);
    if y.ucmp(&HALF_PI) == Ordering::Greater {
        y = PI.wrapping_sub(y);
    }
    sin_poly(y)?.apply_sign(sign)
}

/// cos of a signed working value. Even symmetry reduces to the magnitude;
/// the clamped angle then swings around pi/2 onto the sine polynomial.
pub(crate) fn cos(x: Fix192) -> Result<Fix192> {
    let (m, _) = x.abs();
    let (y, _) = clamp_angle(m);
    if y.ucmp(&HALF_PI) != Ordering::Greater {
        sin_poly(HALF_PI.wrapping_sub(y))
    } else {
        sin_poly(y.wrapping_sub(HALF_PI))?.apply_sign(-1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one() -> Fix192 {
        Fix192::ONE
    }

    #[test]
    fn ln_of_one_is_zero() {
        assert_eq!(ln(one()).unwrap(), Fix192::ZERO);
        // one working-scale iota on either side lands one 128-scale iota away
        let up = ln(one().wrapping_add(Fix192::from_words(0, 1, 0))).unwrap();
        assert!(up.ucmp(&Fix192::from_words(0, 1, 2)) != Ordering::Greater);
        let down = ln(one().wrapping_sub(Fix192::from_words(0, 1, 0))).unwrap();
        assert!(down.is_neg());
    }

    #[test]
    fn ln_of_zero_is_domain() {
        assert_eq!(ln(Fix192::ZERO), Err(ArithError::Domain));
    }

    #[test]
    fn exp_of_zero_is_one() {
        assert_eq!(exp(Fix192::ZERO).unwrap(), one());
    }

    #[test]
    fn exp_table_edges() {
        // Far below the table: underflow; far above: overflow.
        let big = Fix192::from_ufix128(200_000_000_000_000_000_000_000_000);
        assert_eq!(exp(big.wrapping_neg()), Err(ArithError::Underflow));
        assert_eq!(exp(big), Err(ArithError::Overflow));
    }

    #[test]
    fn pow_limit_cases() {
        let two = Fix192::TWO;
        assert_eq!(pow(two, Fix192::ZERO).unwrap(), one());
        assert_eq!(pow(Fix192::ZERO, Fix192::ZERO).unwrap(), one());
        assert_eq!(pow(Fix192::ZERO, two).unwrap(), Fix192::ZERO);
        assert_eq!(
            pow(Fix192::ZERO, two.wrapping_neg()),
            Err(ArithError::DivByZero)
        );
        assert_eq!(pow(one(), two).unwrap(), one());
    }

    #[test]
    fn sin_of_zero_is_zero() {
        assert_eq!(sin(Fix192::ZERO).unwrap(), Fix192::ZERO);
    }

    #[test]
    fn cos_of_zero_is_one() {
        assert_eq!(cos(Fix192::ZERO).unwrap(), one());
    }

    #[test]
    fn sin_is_odd() {
        let x = Fix192::from_ufix128(1_300_000_000_000_000_000_000_000);
        let pos = sin(x).unwrap();
        let neg = sin(x.wrapping_neg()).unwrap();
        assert_eq!(pos, neg.wrapping_neg());
    }

    #[test]
    fn clamp_angle_stays_in_band() {
        // Sweep around many whole-cycle marks; the reduced angle must stay
        // in [0, pi] and the one-2*pi correction must always suffice.
        let mut x = TWO_PI;
        for _ in 0..220 {
            x = x.wrapping_add(x.shr(1)); // grow by 1.5x each round
            if x.is_neg() {
                break;
            }
            let (y, _) = clamp_angle(x);
            assert!(!y.is_neg());
            assert!(y.ucmp(&PI) != Ordering::Greater);
        }
    }
}
