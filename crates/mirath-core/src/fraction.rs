//! Exact rational shares.
//!
//! Fixed shares are defined as small rationals (1/2, 2/3, 1/6, ...). Group
//! splits multiply them by `count / group_count`. Keeping them exact until
//! the final multiplication by the net estate means a group always sums to
//! its tabled fraction, no matter how the caller splits it into entries.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// A non-negative rational number in lowest terms.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    num: u128,
    den: u128,
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl Fraction {
    pub const ZERO: Self = Self { num: 0, den: 1 };
    pub const ONE: Self = Self { num: 1, den: 1 };

    /// Build a fraction from parts already in lowest terms.
    ///
    /// Only for constants; `den` must be non-zero.
    pub const fn from_parts(num: u128, den: u128) -> Self {
        Self { num, den }
    }

    /// Build and reduce `num / den`. Returns `None` when `den` is zero.
    pub fn new(num: u128, den: u128) -> Option<Self> {
        if den == 0 {
            return None;
        }
        if num == 0 {
            return Some(Self::ZERO);
        }
        let g = gcd(num, den);
        Some(Self {
            num: num / g,
            den: den / g,
        })
    }

    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    /// The portion of this fraction owed to `part` members of a group of
    /// `whole` members. Zero when the group is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use mirath_core::constants::TWO_THIRDS;
    /// use mirath_core::fraction::Fraction;
    /// assert_eq!(TWO_THIRDS.portion(1, 2), Fraction::from_parts(1, 3));
    /// ```
    pub fn portion(&self, part: u64, whole: u64) -> Self {
        let num = self.num.saturating_mul(part as u128);
        let den = self.den.saturating_mul(whole as u128);
        Self::new(num, den).unwrap_or(Self::ZERO)
    }

    pub fn to_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// `self * amount`, computed as `amount * num / den`.
    pub fn of(&self, amount: f64) -> f64 {
        amount * self.num as f64 / self.den as f64
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        let num = self
            .num
            .saturating_mul(rhs.den)
            .saturating_add(rhs.num.saturating_mul(self.den));
        let den = self.den.saturating_mul(rhs.den);
        Fraction::new(num, den).unwrap_or(Fraction::ZERO)
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        let num = self.num.saturating_mul(rhs.num);
        let den = self.den.saturating_mul(rhs.den);
        Fraction::new(num, den).unwrap_or(Fraction::ZERO)
    }
}

impl Sum for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::ZERO, Add::add)
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        self.num
            .saturating_mul(other.den)
            .cmp(&other.num.saturating_mul(self.den))
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}
