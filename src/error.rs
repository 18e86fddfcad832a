use thiserror::Error;

/// Failure kinds for fixed-point arithmetic.
///
/// Every fallible operation maps each of its failure modes onto exactly one
/// of these; an `Ok` value is always exact or correctly rounded.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithError {
    /// The rounded result would exceed the type's positive bound.
    #[error("result exceeds the representable range")]
    Overflow,
    /// The rounded result would fall below the signed type's negative bound.
    #[error("result falls below the representable range")]
    NegOverflow,
    /// Inputs are nonzero and the exact result is nonzero, but it rounds to
    /// zero at the type's precision.
    #[error("nonzero result rounds to zero")]
    Underflow,
    /// A divisor (or FMD denominator) is zero. Reported even when the
    /// numerator is also zero.
    #[error("division by zero")]
    DivByZero,
    /// The operation is mathematically undefined for the input, e.g. the
    /// logarithm of zero or of a negative value.
    #[error("input outside the operation's domain")]
    Domain,
}

/// Fixed-point arithmetic result.
pub type Result<T> = core::result::Result<T, ArithError>;
