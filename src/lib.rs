//! Deterministic decimal fixed-point arithmetic for financial use.
//!
//! Four scaled-integer value types with total, bit-exact operations:
//!
//! | Type | Storage | Scale | Iota |
//! |---|---|---|---|
//! | [`UFix64`] | `u64` | 10^8 | 10^-8 |
//! | [`Fix64`] | `i64` | 10^8 | 10^-8 |
//! | [`UFix128`] | `u128` | 10^24 | 10^-24 |
//! | [`Fix128`] | `i128` | 10^24 | 10^-24 |
//!
//! Every operation returns either an exact (or correctly rounded) value or
//! one of five error kinds ([`ArithError`]); there are no NaNs, no
//! infinities, no silent wrapping, and no dependence on host endianness or
//! floating point. Precision-losing operations take an explicit
//! [`Rounding`] mode; square root and the transcendentals default to
//! nearest-half-away.
//!
//! Internally, the 64-bit types compute through native 128-bit
//! intermediates, the 128-bit types through a two-limb 256-bit integer with
//! Knuth long division, and the transcendentals (`ln`, `exp`, `pow`, `sin`,
//! `cos`) through a three-word working type at scale 10^24 * 2^64 with
//! offline-generated polynomial tables.
//!
//! ```
//! use decfix::{Rounding, UFix64};
//!
//! let ten = UFix64::from_int(10).unwrap();
//! let three = UFix64::from_int(3).unwrap();
//! let q = ten.div(three, Rounding::NearestHalfAway).unwrap();
//! assert_eq!(q.raw(), 333_333_333); // 3.33333333
//! ```

mod error;
mod fix128;
mod fix192;
mod fix64;
mod rounding;
mod tables;
mod transcendental;
mod u256;
mod ufix128;
mod ufix64;

#[cfg(test)]
mod tests;

pub use error::{ArithError, Result};
pub use fix128::Fix128;
pub use fix64::Fix64;
pub use rounding::Rounding;
pub use ufix128::UFix128;
pub use ufix64::UFix64;
