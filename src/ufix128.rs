//! Unsigned decimal fixed-point at scale 10^24.

use crate::error::{ArithError, Result};
use crate::fix128::Fix128;
use crate::fix192::{Fix192, SCALE_RATIO};
use crate::fix64::Fix64;
use crate::rounding::{round_up, Rounding};
use crate::transcendental;
use crate::u256::{div_rem_wide, widening_mul_128, U256};
use crate::ufix64::UFix64;

/// Unsigned fixed-point number scaled by 10^24.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct UFix128(u128);

impl UFix128 {
    /// The implicit denominator, 10^24.
    pub const SCALE: u128 = 1_000_000_000_000_000_000_000_000;
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(Self::SCALE);
    pub const IOTA: Self = Self(1);
    pub const MAX: Self = Self(u128::MAX);
    pub const ONE_LEADING_ZEROS: u32 = Self::SCALE.leading_zeros();

    #[inline]
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u128 {
        self.0
    }

    pub fn from_int(v: u64) -> Result<Self> {
        (v as u128)
            .checked_mul(Self::SCALE)
            .map(Self)
            .ok_or(ArithError::Overflow)
    }

    /// The integer part, truncated toward zero.
    #[inline]
    pub const fn trunc(self) -> u128 {
        self.0 / Self::SCALE
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        let (r, carry) = self.0.overflowing_add(rhs.0);
        if carry {
            Err(ArithError::Overflow)
        } else {
            Ok(Self(r))
        }
    }

    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        let (r, borrow) = self.0.overflowing_sub(rhs.0);
        if borrow {
            Err(ArithError::NegOverflow)
        } else {
            Ok(Self(r))
        }
    }

    /// Fused multiply-divide over a 256-bit intermediate.
    pub fn mul_div(self, b: Self, c: Self, mode: Rounding) -> Result<Self> {
        fmd_u128(self.0, b.0, c.0, mode, false).map(Self)
    }

    /// Full 256-bit product, then division by the scale. Overflow exactly
    /// when the product's high limb reaches the scale.
    pub fn mul(self, rhs: Self, mode: Rounding) -> Result<Self> {
        self.mul_div(rhs, Self::ONE, mode)
    }

    /// The numerator scales up first, so the 256-by-128 division always
    /// yields a 128-bit quotient.
    pub fn div(self, rhs: Self, mode: Rounding) -> Result<Self> {
        self.mul_div(Self::ONE, rhs, mode)
    }

    pub fn rem(self, rhs: Self) -> Result<Self> {
        if rhs.0 == 0 {
            return Err(ArithError::DivByZero);
        }
        Ok(Self(self.0 % rhs.0))
    }

    pub fn apply_sign(self, sign: i32) -> Result<Fix128> {
        const SIGN_BIT: u128 = 1 << 127;
        if sign < 0 {
            if self.0 > SIGN_BIT {
                Err(ArithError::NegOverflow)
            } else {
                Ok(Fix128::from_raw((self.0 as i128).wrapping_neg()))
            }
        } else if self.0 >= SIGN_BIT {
            Err(ArithError::Overflow)
        } else {
            Ok(Fix128::from_raw(self.0 as i128))
        }
    }

    // ========================================================================
    // Square root
    // ========================================================================

    pub fn sqrt(self) -> Result<Self> {
        self.sqrt_round(Rounding::NearestHalfAway)
    }

    /// Newton-Raphson on `raw * SCALE`, a 256-bit radicand whose integer
    /// square root is the result's raw form.
    pub fn sqrt_round(self, mode: Rounding) -> Result<Self> {
        if self.0 == 0 {
            return Ok(Self::ZERO);
        }
        let n = widening_mul_128(self.0, Self::SCALE);
        let s = isqrt_u256(n);
        Ok(Self(round_sqrt_u256(n, s, mode)))
    }

    // ========================================================================
    // Transcendentals
    // ========================================================================

    pub fn ln(self) -> Result<Fix128> {
        self.ln_round(Rounding::NearestHalfAway)
    }

    pub fn ln_round(self, mode: Rounding) -> Result<Fix128> {
        if self.0 == 0 {
            return Err(ArithError::Domain);
        }
        let v = transcendental::ln(Fix192::from_ufix128(self.0))?;
        crate::fix128::from_fix192(v, mode)
    }

    pub fn pow(self, exponent: Fix128) -> Result<Self> {
        self.pow_round(exponent, Rounding::NearestHalfAway)
    }

    pub fn pow_round(self, exponent: Fix128, mode: Rounding) -> Result<Self> {
        let a = Fix192::from_ufix128(self.0);
        let b = Fix192::from_fix128(exponent.raw());
        let v = transcendental::pow(a, b)?;
        v.round_to_u128(mode, false).map(Self)
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    /// Narrowing to scale 10^8: one division by 10^16 under the caller's
    /// rounding mode.
    pub fn to_ufix64(self, mode: Rounding) -> Result<UFix64> {
        let d = SCALE_RATIO as u128;
        let mut q = self.0 / d;
        let r = self.0 % d;
        if round_up(mode, q & 1 == 1, r, d, false) {
            q += 1;
        }
        if q > u64::MAX as u128 {
            return Err(ArithError::Overflow);
        }
        if q == 0 && self.0 != 0 {
            return Err(ArithError::Underflow);
        }
        Ok(UFix64::from_raw(q as u64))
    }

    /// Narrowing into the signed 64-bit type.
    pub fn to_fix64(self, mode: Rounding) -> Result<Fix64> {
        self.to_ufix64(mode)?.to_fix64()
    }

    /// Same-width signed reinterpretation.
    pub fn to_fix128(self) -> Result<Fix128> {
        if self.0 > i128::MAX as u128 {
            Err(ArithError::Overflow)
        } else {
            Ok(Fix128::from_raw(self.0 as i128))
        }
    }
}

// ============================================================================
// Shared unsigned 128-bit kernels
// ============================================================================

/// `a * b / c` over the 256-bit product; same check order as the 64-bit
/// kernel.
pub(crate) fn fmd_u128(a: u128, b: u128, c: u128, mode: Rounding, negative: bool) -> Result<u128> {
    if c == 0 {
        return Err(ArithError::DivByZero);
    }
    if a == 0 || b == 0 {
        return Ok(0);
    }
    let prod = widening_mul_128(a, b);
    if prod.hi >= c {
        return Err(ArithError::Overflow);
    }
    let (mut q, r) = div_rem_wide(prod, c);
    if round_up(mode, q & 1 == 1, r, c, negative) {
        q = q.checked_add(1).ok_or(ArithError::Overflow)?;
    }
    if q == 0 {
        return Err(ArithError::Underflow);
    }
    Ok(q)
}

/// Integer square root of a 256-bit radicand; same Newton loop as the
/// 128-bit version, with the wide division supplying the quotient.
pub(crate) fn isqrt_u256(n: U256) -> u128 {
    debug_assert!(!n.is_zero());
    let bit_len = if n.hi != 0 {
        256 - n.hi.leading_zeros()
    } else {
        128 - n.lo.leading_zeros()
    };
    let mut est: u128 = 1 << ((bit_len + 1) / 2);
    loop {
        let quo = div_rem_wide(n, est).0;
        let diff = if quo >= est { quo - est } else { est - quo };
        if diff <= 1 {
            return est.min(quo);
        }
        // est stays well above 2^(bit_len/2 - 1), so the next quotient
        // keeps fitting 128 bits
        est = (est / 2) + (quo / 2) + (est & quo & 1);
    }
}

/// Rounds a floor square root of a 256-bit radicand; ties cannot occur.
pub(crate) fn round_sqrt_u256(n: U256, s: u128, mode: Rounding) -> u128 {
    let sq = widening_mul_128(s, s);
    if sq == n {
        return s;
    }
    let up = match mode {
        Rounding::TowardZero => false,
        Rounding::AwayFromZero => true,
        _ => {
            let d = n.wrapping_sub(sq);
            d.hi != 0 || d.lo > s
        }
    };
    if up {
        s + 1
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_has_the_documented_words() {
        assert_eq!(UFix128::SCALE >> 64, 54210);
        assert_eq!(UFix128::SCALE as u64, 2003764205206896640);
    }

    #[test]
    fn mul_overflow_boundary() {
        // MAX * 1 is fine; MAX * (1 + iota) pushes the high limb to SCALE.
        assert_eq!(
            UFix128::MAX.mul(UFix128::ONE, Rounding::TowardZero).unwrap(),
            UFix128::MAX
        );
        let just_over = UFix128::from_raw(UFix128::SCALE + 1);
        assert_eq!(
            UFix128::MAX.mul(just_over, Rounding::TowardZero),
            Err(ArithError::Overflow)
        );
    }

    #[test]
    fn mul_underflow_when_product_below_scale() {
        let tiny = UFix128::IOTA;
        assert_eq!(
            tiny.mul(tiny, Rounding::TowardZero),
            Err(ArithError::Underflow)
        );
        // ...but a nearest mode can rescue a product at half the scale.
        let half = UFix128::from_raw(500_000_000_000_000_000_000_000);
        assert_eq!(
            UFix128::IOTA.mul(half, Rounding::NearestHalfAway).unwrap(),
            UFix128::IOTA
        );
    }

    #[test]
    fn div_scales_numerator_first() {
        let a = UFix128::MAX;
        assert_eq!(a.div(UFix128::ONE, Rounding::TowardZero).unwrap(), a);
        let two = UFix128::from_raw(2 * UFix128::SCALE);
        assert_eq!(
            a.div(two, Rounding::TowardZero).unwrap(),
            UFix128::from_raw(u128::MAX / 2)
        );
    }

    #[test]
    fn sqrt_vectors() {
        let four = UFix128::from_raw(4 * UFix128::SCALE);
        assert_eq!(
            four.sqrt().unwrap(),
            UFix128::from_raw(2 * UFix128::SCALE)
        );
        assert_eq!(
            UFix128::MAX.sqrt().unwrap().raw(),
            0xe8d4a510000000000000000000
        );
        let two = UFix128::from_raw(2 * UFix128::SCALE);
        assert_eq!(two.sqrt().unwrap().raw(), 0x12b78abbbc9bf9f92ed99);
    }

    #[test]
    fn narrowing_rounds_and_flags() {
        let x = UFix128::from_raw(15 * SCALE_RATIO as u128 / 10);
        assert_eq!(
            x.to_ufix64(Rounding::TowardZero).unwrap(),
            UFix64::from_raw(1)
        );
        assert_eq!(
            x.to_ufix64(Rounding::NearestHalfAway).unwrap(),
            UFix64::from_raw(2)
        );
        assert_eq!(
            UFix128::IOTA.to_ufix64(Rounding::TowardZero),
            Err(ArithError::Underflow)
        );
        assert_eq!(
            UFix128::MAX.to_ufix64(Rounding::TowardZero),
            Err(ArithError::Overflow)
        );
    }
}
