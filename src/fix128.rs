//! Signed decimal fixed-point at scale 10^24.

use crate::error::{ArithError, Result};
use crate::fix192::{Fix192, SCALE_RATIO};
use crate::fix64::Fix64;
use crate::rounding::{round_up, Rounding};
use crate::transcendental;
use crate::ufix128::{fmd_u128, UFix128};
use crate::ufix64::UFix64;

/// Signed fixed-point number scaled by 10^24, stored in two's complement.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fix128(i128);

impl Fix128 {
    pub const SCALE: u128 = UFix128::SCALE;
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(Self::SCALE as i128);
    pub const IOTA: Self = Self(1);
    pub const MAX: Self = Self(i128::MAX);
    pub const MIN: Self = Self(i128::MIN);
    pub const ONE_LEADING_ZEROS: u32 = Self::SCALE.leading_zeros();

    #[inline]
    pub const fn from_raw(raw: i128) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> i128 {
        self.0
    }

    pub fn from_int(v: i64) -> Result<Self> {
        match (v as i128).checked_mul(Self::SCALE as i128) {
            Some(r) => Ok(Self(r)),
            None if v < 0 => Err(ArithError::NegOverflow),
            None => Err(ArithError::Overflow),
        }
    }

    /// The integer part, truncated toward zero.
    #[inline]
    pub const fn trunc(self) -> i128 {
        self.0 / Self::SCALE as i128
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn is_neg(&self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub fn sign(&self) -> i32 {
        self.0.signum() as i32
    }

    // ========================================================================
    // Sign handling
    // ========================================================================

    #[inline]
    pub fn abs(self) -> (UFix128, i32) {
        (
            UFix128::from_raw(self.0.unsigned_abs()),
            if self.0 < 0 { -1 } else { 1 },
        )
    }

    pub fn neg(self) -> Result<Self> {
        if self.0 == i128::MIN {
            Err(ArithError::NegOverflow)
        } else {
            Ok(Self(-self.0))
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

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

    pub fn mul_div(self, b: Self, c: Self, mode: Rounding) -> Result<Self> {
        let (ma, sa) = self.abs();
        let (mb, sb) = b.abs();
        let (mc, sc) = c.abs();
        let sign = sa * sb * sc;
        match fmd_u128(ma.raw(), mb.raw(), mc.raw(), mode, sign < 0) {
            Ok(0) => Ok(Self::ZERO),
            Ok(m) => UFix128::from_raw(m).apply_sign(sign),
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

    /// Truncated remainder with the dividend's sign.
    pub fn rem(self, rhs: Self) -> Result<Self> {
        if rhs.0 == 0 {
            return Err(ArithError::DivByZero);
        }
        let (ma, sa) = self.abs();
        let (mb, _) = rhs.abs();
        UFix128::from_raw(ma.raw() % mb.raw()).apply_sign(sa)
    }

    // ========================================================================
    // Transcendentals
    // ========================================================================

    pub fn exp(self) -> Result<UFix128> {
        self.exp_round(Rounding::NearestHalfAway)
    }

    pub fn exp_round(self, mode: Rounding) -> Result<UFix128> {
        let v = transcendental::exp(Fix192::from_fix128(self.0))?;
        v.round_to_u128(mode, false).map(UFix128::from_raw)
    }

    pub fn sin(self) -> Result<Self> {
        self.sin_round(Rounding::NearestHalfAway)
    }

    pub fn sin_round(self, mode: Rounding) -> Result<Self> {
        let v = transcendental::sin(Fix192::from_fix128(self.0))?;
        from_fix192(v, mode)
    }

    pub fn cos(self) -> Result<Self> {
        self.cos_round(Rounding::NearestHalfAway)
    }

    pub fn cos_round(self, mode: Rounding) -> Result<Self> {
        let v = transcendental::cos(Fix192::from_fix128(self.0))?;
        from_fix192(v, mode)
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    /// Narrowing to the signed 10^8 scale: magnitude through one division
    /// by 10^16, sign reattached.
    pub fn to_fix64(self, mode: Rounding) -> Result<Fix64> {
        let (m, sign) = self.abs();
        let d = SCALE_RATIO as u128;
        let mut q = m.raw() / d;
        let r = m.raw() % d;
        if round_up(mode, q & 1 == 1, r, d, sign < 0) {
            q += 1;
        }
        if q == 0 {
            return if m.raw() == 0 {
                Ok(Fix64::ZERO)
            } else {
                Err(ArithError::Underflow)
            };
        }
        if q > u64::MAX as u128 {
            return Err(if sign < 0 {
                ArithError::NegOverflow
            } else {
                ArithError::Overflow
            });
        }
        UFix64::from_raw(q as u64).apply_sign(sign)
    }

    /// Unsigned same-width view; negative values do not fit.
    pub fn to_ufix128(self) -> Result<UFix128> {
        if self.0 < 0 {
            Err(ArithError::NegOverflow)
        } else {
            Ok(UFix128::from_raw(self.0 as u128))
        }
    }

    /// Narrowing to the unsigned 10^8 scale; negative values do not fit.
    pub fn to_ufix64(self, mode: Rounding) -> Result<UFix64> {
        self.to_ufix128()?.to_ufix64(mode)
    }
}

/// Rounds a signed working value into `Fix128` by resolving the low word.
pub(crate) fn from_fix192(v: Fix192, mode: Rounding) -> Result<Fix128> {
    let (m, sign) = v.abs();
    match m.round_to_u128(mode, sign < 0) {
        Ok(0) => Ok(Fix128::ZERO),
        Ok(raw) => UFix128::from_raw(raw).apply_sign(sign),
        Err(ArithError::Overflow) if sign < 0 => Err(ArithError::NegOverflow),
        Err(e) => Err(e),
    }
}
