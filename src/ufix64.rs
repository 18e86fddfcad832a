//! Unsigned decimal fixed-point at scale 10^8.

use crate::error::{ArithError, Result};
use crate::fix128::Fix128;
use crate::fix192::Fix192;
use crate::fix64::Fix64;
use crate::rounding::{round_up, Rounding};
use crate::transcendental;
use crate::ufix128::UFix128;

/// Unsigned fixed-point number scaled by 10^8: the stored integer `v`
/// represents the rational `v / 10^8`.
///
/// Equality and ordering are those of the underlying integer. All
/// arithmetic is total: it returns either an exact or correctly rounded
/// value, or one error kind.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct UFix64(u64);

impl UFix64 {
    /// The implicit denominator.
    pub const SCALE: u64 = 100_000_000;
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(Self::SCALE);
    /// One unit in the last place.
    pub const IOTA: Self = Self(1);
    pub const MAX: Self = Self(u64::MAX);
    /// Leading zero count of `ONE`'s stored integer; the sqrt seed and the
    /// ln range reduction are phrased against it.
    pub const ONE_LEADING_ZEROS: u32 = Self::SCALE.leading_zeros();

    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Scales an integer up, rejecting values past the representable range.
    pub fn from_int(v: u64) -> Result<Self> {
        v.checked_mul(Self::SCALE)
            .map(Self)
            .ok_or(ArithError::Overflow)
    }

    /// The integer part, truncated toward zero.
    #[inline]
    pub const fn trunc(self) -> u64 {
        self.0 / Self::SCALE
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Addition; a carry out of 64 bits is `Overflow`.
    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        let (r, carry) = self.0.overflowing_add(rhs.0);
        if carry {
            Err(ArithError::Overflow)
        } else {
            Ok(Self(r))
        }
    }

    /// Subtraction; a borrow is `NegOverflow`.
    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        let (r, borrow) = self.0.overflowing_sub(rhs.0);
        if borrow {
            Err(ArithError::NegOverflow)
        } else {
            Ok(Self(r))
        }
    }

    /// Fused multiply-divide: `self * b / c` with a full 128-bit
    /// intermediate, so the product alone overflowing does not fail the
    /// operation.
    pub fn mul_div(self, b: Self, c: Self, mode: Rounding) -> Result<Self> {
        fmd_u64(self.0, b.0, c.0, mode, false).map(Self)
    }

    /// `self * rhs`, rounding at the scale; FMD against `ONE` so that one
    /// rounding rule serves every precision-losing path.
    pub fn mul(self, rhs: Self, mode: Rounding) -> Result<Self> {
        self.mul_div(rhs, Self::ONE, mode)
    }

    /// `self / rhs`; the numerator is scaled up before dividing.
    pub fn div(self, rhs: Self, mode: Rounding) -> Result<Self> {
        self.mul_div(Self::ONE, rhs, mode)
    }

    /// Remainder of the raw division.
    pub fn rem(self, rhs: Self) -> Result<Self> {
        if rhs.0 == 0 {
            return Err(ArithError::DivByZero);
        }
        Ok(Self(self.0 % rhs.0))
    }

    /// Attaches a sign, producing the signed counterpart. The magnitude
    /// 2^63 is accepted only with a negative sign (the most-negative value).
    pub fn apply_sign(self, sign: i32) -> Result<Fix64> {
        const SIGN_BIT: u64 = 1 << 63;
        if sign < 0 {
            if self.0 > SIGN_BIT {
                Err(ArithError::NegOverflow)
            } else {
                Ok(Fix64::from_raw((self.0 as i64).wrapping_neg()))
            }
        } else if self.0 >= SIGN_BIT {
            Err(ArithError::Overflow)
        } else {
            Ok(Fix64::from_raw(self.0 as i64))
        }
    }

    // ========================================================================
    // Square root
    // ========================================================================

    /// Square root with the default nearest rounding.
    pub fn sqrt(self) -> Result<Self> {
        self.sqrt_round(Rounding::NearestHalfAway)
    }

    /// Square root. Newton-Raphson runs on the value scaled up by 10^8, so
    /// the integer square root of `raw * SCALE` is already the result's raw
    /// form. Never overflows or underflows: the result of a sqrt always
    /// lands inside the type's range.
    pub fn sqrt_round(self, mode: Rounding) -> Result<Self> {
        let n = (self.0 as u128) * (Self::SCALE as u128);
        if n == 0 {
            return Ok(Self::ZERO);
        }
        let s = isqrt_u128(n);
        Ok(Self(round_sqrt_u128(n, s, mode) as u64))
    }

    // ========================================================================
    // Transcendentals
    // ========================================================================

    /// Natural logarithm with the default nearest rounding.
    pub fn ln(self) -> Result<Fix64> {
        self.ln_round(Rounding::NearestHalfAway)
    }

    /// Natural logarithm, computed at working precision and rounded once
    /// into the signed result. Zero is a `Domain` error.
    pub fn ln_round(self, mode: Rounding) -> Result<Fix64> {
        if self.0 == 0 {
            return Err(ArithError::Domain);
        }
        let v = transcendental::ln(self.to_fix192())?;
        crate::fix64::from_fix192(v, mode)
    }

    /// `self ^ exponent` with the default nearest rounding.
    pub fn pow(self, exponent: Fix64) -> Result<Self> {
        self.pow_round(exponent, Rounding::NearestHalfAway)
    }

    /// `self ^ exponent` as `exp(exponent * ln self)`, with the zero-base
    /// and zero-exponent limits handled exactly.
    pub fn pow_round(self, exponent: Fix64, mode: Rounding) -> Result<Self> {
        let a = self.to_fix192();
        let b = Fix192::from_fix128(exponent.to_fix128().raw());
        let v = transcendental::pow(a, b)?;
        v.round_to_u64_scaled(mode, false).map(Self)
    }

    #[inline]
    pub(crate) fn to_fix192(self) -> Fix192 {
        Fix192::from_ufix128(self.to_ufix128().raw())
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    /// Lossless widening to scale 10^24.
    #[inline]
    pub fn to_ufix128(self) -> UFix128 {
        UFix128::from_raw(self.0 as u128 * crate::fix192::SCALE_RATIO as u128)
    }

    /// Lossless widening into the signed 128-bit type; every `UFix64` fits.
    #[inline]
    pub fn to_fix128(self) -> Fix128 {
        Fix128::from_raw((self.0 as u128 * crate::fix192::SCALE_RATIO as u128) as i128)
    }

    /// Same-width signed reinterpretation; the top half of the range does
    /// not fit.
    pub fn to_fix64(self) -> Result<Fix64> {
        if self.0 > i64::MAX as u64 {
            Err(ArithError::Overflow)
        } else {
            Ok(Fix64::from_raw(self.0 as i64))
        }
    }
}

// ============================================================================
// Shared unsigned 64-bit kernels
// ============================================================================

/// `a * b / c` on raw magnitudes. The checks run in a fixed order: a zero
/// divisor wins over a zero numerator (so 0/0 reports), then the 128-bit
/// product's high half against `c` bounds the quotient, then rounding may
/// carry out of range, and a rounded-to-zero result from nonzero inputs is
/// an underflow. `negative` feeds the tie direction of `HalfUp`.
pub(crate) fn fmd_u64(a: u64, b: u64, c: u64, mode: Rounding, negative: bool) -> Result<u64> {
    if c == 0 {
        return Err(ArithError::DivByZero);
    }
    if a == 0 || b == 0 {
        return Ok(0);
    }
    let prod = (a as u128) * (b as u128);
    if prod >> 64 >= c as u128 {
        return Err(ArithError::Overflow);
    }
    let mut q = prod / c as u128;
    let r = prod % c as u128;
    if round_up(mode, q & 1 == 1, r, c as u128, negative) {
        q += 1;
        if q > u64::MAX as u128 {
            return Err(ArithError::Overflow);
        }
    }
    if q == 0 {
        return Err(ArithError::Underflow);
    }
    Ok(q as u64)
}

/// Integer square root by Newton-Raphson.
///
/// The seed is the power of two at half the bit length, which bounds the
/// true root from above; iteration stops when quotient and estimate are
/// within one of each other, at which point the smaller of the two is the
/// floor root.
pub(crate) fn isqrt_u128(n: u128) -> u128 {
    debug_assert!(n != 0);
    let bit_len = 128 - n.leading_zeros();
    let mut est: u128 = 1 << ((bit_len + 1) / 2);
    loop {
        let quo = n / est;
        let diff = if quo >= est { quo - est } else { est - quo };
        if diff <= 1 {
            return est.min(quo);
        }
        est = (est + quo) / 2;
    }
}

/// Applies a rounding mode to a floor square root. Exact halves cannot
/// occur (no integer square sits exactly between two squares), so every
/// nearest mode reduces to comparing the two candidate errors, which is
/// `n - s^2 > s` without squaring the larger candidate.
pub(crate) fn round_sqrt_u128(n: u128, s: u128, mode: Rounding) -> u128 {
    if s * s == n {
        return s;
    }
    let up = match mode {
        Rounding::TowardZero => false,
        Rounding::AwayFromZero => true,
        _ => n - s * s > s,
    };
    if up {
        s + 1
    } else {
        s
    }
}
