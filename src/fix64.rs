//! Signed decimal fixed-point at scale 10^8.
//!
//! Signed operations layer over the unsigned kernels through
//! (magnitude, sign) decomposition; the only subtlety is the most-negative
//! value, whose magnitude exceeds the positive range by one and is handled
//! at the `abs`/`apply_sign` boundary.

use crate::error::{ArithError, Result};
use crate::fix128::Fix128;
use crate::fix192::Fix192;
use crate::rounding::Rounding;
use crate::transcendental;
use crate::ufix128::UFix128;
use crate::ufix64::{fmd_u64, UFix64};

/// Signed fixed-point number scaled by 10^8, stored in two's complement.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fix64(i64);

impl Fix64 {
    pub const SCALE: u64 = UFix64::SCALE;
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(Self::SCALE as i64);
    pub const IOTA: Self = Self(1);
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);
    pub const ONE_LEADING_ZEROS: u32 = Self::SCALE.leading_zeros();

    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    pub fn from_int(v: i64) -> Result<Self> {
        match v.checked_mul(Self::SCALE as i64) {
            Some(r) => Ok(Self(r)),
            None if v < 0 => Err(ArithError::NegOverflow),
            None => Err(ArithError::Overflow),
        }
    }

    /// The integer part, truncated toward zero.
    #[inline]
    pub const fn trunc(self) -> i64 {
        self.0 / Self::SCALE as i64
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn is_neg(&self) -> bool {
        self.0 < 0
    }

    /// -1, 0 or +1 with the value's sign.
    #[inline]
    pub fn sign(&self) -> i32 {
        self.0.signum() as i32
    }

    // ========================================================================
    // Sign handling
    // ========================================================================

    /// Unsigned magnitude and a sign in {-1, +1}. `MIN` yields the
    /// magnitude 2^63, which only `apply_sign(-1)` maps back.
    #[inline]
    pub fn abs(self) -> (UFix64, i32) {
        (
            UFix64::from_raw(self.0.unsigned_abs()),
            if self.0 < 0 { -1 } else { 1 },
        )
    }

    /// Negation. `MIN` has no positive counterpart.
    pub fn neg(self) -> Result<Self> {
        if self.0 == i64::MIN {
            Err(ArithError::NegOverflow)
        } else {
            Ok(Self(-self.0))
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Addition. Two positives flipping negative is `Overflow`; two
    /// negatives flipping non-negative is `NegOverflow`.
    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        let r = self.0.wrapping_add(rhs.0);
        if self.0 >= 0 && rhs.0 >= 0 && r < 0 {
            Err(ArithError::Overflow)
        } else if self.0 < 0 && rhs.0 < 0 && r >= 0 {
            Err(ArithError::NegOverflow)
        } else {
            Ok(Self(r))
        }
    }

    /// Subtraction, with the sign-flip overflow taxonomy mirrored from
    /// addition.
    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        let r = self.0.wrapping_sub(rhs.0);
        if self.0 >= 0 && rhs.0 < 0 && r < 0 {
            Err(ArithError::Overflow)
        } else if self.0 < 0 && rhs.0 >= 0 && r >= 0 {
            Err(ArithError::NegOverflow)
        } else {
            Ok(Self(r))
        }
    }

    /// Fused multiply-divide on magnitudes, with the composed sign fed to
    /// the rounding rule and any overflow reported on the correct side.
    pub fn mul_div(self, b: Self, c: Self, mode: Rounding) -> Result<Self> {
        let (ma, sa) = self.abs();
        let (mb, sb) = b.abs();
        let (mc, sc) = c.abs();
        let sign = sa * sb * sc;
        match fmd_u64(ma.raw(), mb.raw(), mc.raw(), mode, sign < 0) {
            Ok(0) => Ok(Self::ZERO),
            Ok(m) => UFix64::from_raw(m).apply_sign(sign),
            Err(ArithError::Overflow) if sign < 0 => Err(ArithError::NegOverflow),
            Err(e) => Err(e),
        }
    }

    pub fn mul(self, rhs: Self, mode: Rounding) -> Result<Self> {
        self.mul_div(rhs, Self::ONE, mode)
    }

    pub fn div(self, rhs: Self, mode: Rounding) -> Result<Self> {
        self.mul_div(Self::ONE, rhs, mode)
    }

    /// Truncated remainder: magnitudes divide, the dividend's sign returns.
    pub fn rem(self, rhs: Self) -> Result<Self> {
        if rhs.0 == 0 {
            return Err(ArithError::DivByZero);
        }
        let (ma, sa) = self.abs();
        let (mb, _) = rhs.abs();
        UFix64::from_raw(ma.raw() % mb.raw()).apply_sign(sa)
    }

    // ========================================================================
    // Transcendentals
    // ========================================================================

    /// e^self with the default nearest rounding.
    pub fn exp(self) -> Result<UFix64> {
        self.exp_round(Rounding::NearestHalfAway)
    }

    /// e^self, always non-negative, so the result is unsigned.
    pub fn exp_round(self, mode: Rounding) -> Result<UFix64> {
        let v = transcendental::exp(self.to_fix192())?;
        v.round_to_u64_scaled(mode, false).map(UFix64::from_raw)
    }

    /// sin(self) with the default nearest rounding.
    pub fn sin(self) -> Result<Self> {
        self.sin_round(Rounding::NearestHalfAway)
    }

    pub fn sin_round(self, mode: Rounding) -> Result<Self> {
        let v = transcendental::sin(self.to_fix192())?;
        from_fix192(v, mode)
    }

    /// cos(self) with the default nearest rounding.
    pub fn cos(self) -> Result<Self> {
        self.cos_round(Rounding::NearestHalfAway)
    }

    pub fn cos_round(self, mode: Rounding) -> Result<Self> {
        let v = transcendental::cos(self.to_fix192())?;
        from_fix192(v, mode)
    }

    #[inline]
    pub(crate) fn to_fix192(self) -> Fix192 {
        Fix192::from_fix128(self.to_fix128().raw())
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    /// Lossless widening to scale 10^24.
    #[inline]
    pub fn to_fix128(self) -> Fix128 {
        Fix128::from_raw(self.0 as i128 * crate::fix192::SCALE_RATIO as i128)
    }

    /// Unsigned same-width view; negative values do not fit.
    pub fn to_ufix64(self) -> Result<UFix64> {
        if self.0 < 0 {
            Err(ArithError::NegOverflow)
        } else {
            Ok(UFix64::from_raw(self.0 as u64))
        }
    }

    /// Unsigned widening; negative values do not fit.
    pub fn to_ufix128(self) -> Result<UFix128> {
        if self.0 < 0 {
            Err(ArithError::NegOverflow)
        } else {
            Ok(UFix64::from_raw(self.0 as u64).to_ufix128())
        }
    }
}

/// Rounds a signed working value into `Fix64`: magnitude through the single
/// scaled division, sign reattached, overflow reported on the value's side.
pub(crate) fn from_fix192(v: Fix192, mode: Rounding) -> Result<Fix64> {
    let (m, sign) = v.abs();
    match m.round_to_u64_scaled(mode, sign < 0) {
        Ok(0) => Ok(Fix64::ZERO),
        Ok(raw) => UFix64::from_raw(raw).apply_sign(sign),
        Err(ArithError::Overflow) if sign < 0 => Err(ArithError::NegOverflow),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_minus_iota_is_neg_overflow() {
        assert_eq!(
            Fix64::MIN.checked_sub(Fix64::IOTA),
            Err(ArithError::NegOverflow)
        );
    }

    #[test]
    fn max_plus_iota_is_overflow() {
        assert_eq!(Fix64::MAX.checked_add(Fix64::IOTA), Err(ArithError::Overflow));
    }

    #[test]
    fn pos_minus_neg_can_overflow() {
        assert_eq!(
            Fix64::MAX.checked_sub(Fix64::from_raw(-1)),
            Err(ArithError::Overflow)
        );
        assert_eq!(
            Fix64::ZERO.checked_sub(Fix64::MIN),
            Err(ArithError::Overflow)
        );
    }

    #[test]
    fn abs_of_min() {
        let (mag, sign) = Fix64::MIN.abs();
        assert_eq!(mag.raw(), 1 << 63);
        assert_eq!(sign, -1);
        assert_eq!(mag.apply_sign(-1).unwrap(), Fix64::MIN);
    }

    #[test]
    fn neg_of_min_fails() {
        assert_eq!(Fix64::MIN.neg(), Err(ArithError::NegOverflow));
        assert_eq!(Fix64::MAX.neg().unwrap().neg().unwrap(), Fix64::MAX);
    }

    #[test]
    fn signed_mul_follows_magnitudes() {
        let a = Fix64::from_int(-3).unwrap();
        let b = Fix64::from_int(7).unwrap();
        assert_eq!(
            a.mul(b, Rounding::TowardZero).unwrap(),
            Fix64::from_int(-21).unwrap()
        );
        assert_eq!(
            a.mul(a, Rounding::TowardZero).unwrap(),
            Fix64::from_int(9).unwrap()
        );
    }

    #[test]
    fn negative_overflow_is_translated() {
        let big = Fix64::MAX;
        let minus_two = Fix64::from_int(-2).unwrap();
        assert_eq!(
            big.mul(minus_two, Rounding::TowardZero),
            Err(ArithError::NegOverflow)
        );
        assert_eq!(
            big.mul(Fix64::from_int(2).unwrap(), Rounding::TowardZero),
            Err(ArithError::Overflow)
        );
    }

    #[test]
    fn rem_keeps_dividend_sign() {
        let a = Fix64::from_raw(-700);
        let b = Fix64::from_raw(400);
        assert_eq!(a.rem(b).unwrap(), Fix64::from_raw(-300));
        assert_eq!(b.rem(a).unwrap(), Fix64::from_raw(400 % 700));
        assert_eq!(a.rem(Fix64::ZERO), Err(ArithError::DivByZero));
    }

    #[test]
    fn half_up_ties_differ_by_sign() {
        // 0.000000005 rounds to iota going up, its negation stays at zero
        // magnitude... which reports underflow for the negative tie.
        let half = Fix64::from_raw(5);
        let ten = Fix64::from_int(10).unwrap();
        let up = half.div(ten, Rounding::HalfUp).unwrap();
        assert_eq!(up, Fix64::IOTA);
        let down = half.neg().unwrap().div(ten, Rounding::HalfUp);
        assert_eq!(down, Err(ArithError::Underflow));
    }
}
