/// How to resolve a result that falls between two representable values.
///
/// The decision is always taken on the magnitude of the result, with the
/// final sign supplied separately, so one rule serves signed and unsigned
/// callers alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Truncate toward zero.
    TowardZero,
    /// Any nonzero remainder rounds the magnitude up.
    AwayFromZero,
    /// Nearest, with ties toward positive infinity.
    HalfUp,
    /// Nearest, with ties to the even quotient.
    HalfEven,
    /// Nearest, with ties away from zero.
    NearestHalfAway,
}

/// Decides whether a truncated quotient must be bumped by one.
///
/// `r` is the remainder of a magnitude division by `d` (`r < d`). Doubling
/// `r` may not wrap: when its top bit is set, `2r` already exceeds any
/// 128-bit divisor and every nearest mode rounds up; only otherwise is
/// `r << 1` compared against `d` directly.
#[inline]
pub(crate) fn round_up(mode: Rounding, quotient_odd: bool, r: u128, d: u128, negative: bool) -> bool {
    if r == 0 {
        return false;
    }
    match mode {
        Rounding::TowardZero => false,
        Rounding::AwayFromZero => true,
        _ => {
            if r >> 127 != 0 {
                return true;
            }
            let twice = r << 1;
            match mode {
                Rounding::HalfUp => {
                    if negative {
                        twice > d
                    } else {
                        twice >= d
                    }
                }
                Rounding::HalfEven => twice > d || (twice == d && quotient_odd),
                Rounding::NearestHalfAway => twice >= d,
                _ => unreachable!(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_up_is_asymmetric_on_ties() {
        // +2.5 -> 3, -2.5 -> -2 (magnitude stays 2)
        assert!(round_up(Rounding::HalfUp, false, 5, 10, false));
        assert!(!round_up(Rounding::HalfUp, false, 5, 10, true));
    }

    #[test]
    fn half_even_tie_follows_quotient_parity() {
        assert!(round_up(Rounding::HalfEven, true, 5, 10, false));
        assert!(!round_up(Rounding::HalfEven, false, 5, 10, false));
    }

    #[test]
    fn top_bit_remainder_rounds_up_without_wrapping() {
        let r = 1u128 << 127;
        let d = u128::MAX;
        assert!(round_up(Rounding::NearestHalfAway, false, r, d, false));
        assert!(round_up(Rounding::HalfEven, false, r, d, false));
        assert!(!round_up(Rounding::TowardZero, false, r, d, false));
    }

    #[test]
    fn exact_results_never_round() {
        for mode in [
            Rounding::TowardZero,
            Rounding::AwayFromZero,
            Rounding::HalfUp,
            Rounding::HalfEven,
            Rounding::NearestHalfAway,
        ] {
            assert!(!round_up(mode, true, 0, 7, false));
        }
    }
}
