//! Rule-set constants. All fractions are of the net estate.

use crate::fraction::Fraction;

pub const HALF: Fraction = Fraction::from_parts(1, 2);
pub const THIRD: Fraction = Fraction::from_parts(1, 3);
pub const TWO_THIRDS: Fraction = Fraction::from_parts(2, 3);
pub const QUARTER: Fraction = Fraction::from_parts(1, 4);
pub const SIXTH: Fraction = Fraction::from_parts(1, 6);
pub const EIGHTH: Fraction = Fraction::from_parts(1, 8);

/// Residuary weight of a male heir relative to a female heir (2:1).
pub const MALE_RESIDUARY_WEIGHT: u64 = 2;
pub const FEMALE_RESIDUARY_WEIGHT: u64 = 1;

/// Largest bequest permitted, as a fraction of the estate after debts and
/// funeral expenses.
///
/// # Examples
///
/// ```
/// use mirath_core::constants::MAX_BEQUEST_FRACTION;
/// assert_eq!(MAX_BEQUEST_FRACTION.to_string(), "1/3");
/// ```
pub const MAX_BEQUEST_FRACTION: Fraction = THIRD;

/// Upper bound on `count` for a spouse entry (up to four wives).
pub const MAX_SPOUSE_COUNT: u32 = 4;
/// Upper bound on `count` for every other entry.
pub const MAX_HEIR_COUNT: u32 = 20;

/// Absolute tolerance used when comparing monetary sums.
pub const AMOUNT_EPSILON: f64 = 1e-6;

/// Tolerance for comparing sums against `net_estate`.
///
/// Rounding error grows with the magnitude of the estate, so the absolute
/// [`AMOUNT_EPSILON`] is scaled by it once the estate exceeds one unit.
///
/// # Examples
///
/// ```
/// use mirath_core::constants::{amount_tolerance, AMOUNT_EPSILON};
/// assert_eq!(amount_tolerance(0.5), AMOUNT_EPSILON);
/// assert_eq!(amount_tolerance(1e12), 1e6);
/// ```
pub fn amount_tolerance(net_estate: f64) -> f64 {
    AMOUNT_EPSILON * net_estate.max(1.0)
}
