//! Side-by-side comparison of the multiplication methods.

use crate::karatsuba::karatsuba;
use crate::toom3::toom3;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Available integer multiplication methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultiplicationMethod {
    /// Native big-integer multiplication
    Standard,
    /// Karatsuba, three sub-products per level
    Karatsuba,
    /// Toom-3, five sub-products per level
    Toom3,
}

impl MultiplicationMethod {
    /// All methods, in the order they are reported.
    pub const ALL: [MultiplicationMethod; 3] = [Self::Standard, Self::Karatsuba, Self::Toom3];

    /// Multiply `x` by `y` using this method.
    pub fn multiply(&self, x: &BigInt, y: &BigInt) -> BigInt {
        match self {
            Self::Standard => x * y,
            Self::Karatsuba => karatsuba(x, y),
            Self::Toom3 => toom3(x, y),
        }
    }
}

impl fmt::Display for MultiplicationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "Standard"),
            Self::Karatsuba => write!(f, "Karatsuba"),
            Self::Toom3 => write!(f, "Toom-3"),
        }
    }
}

/// Products of the same operands under every method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// Left operand
    pub x: BigInt,
    /// Right operand
    pub y: BigInt,
    /// Native product
    pub standard: BigInt,
    /// Karatsuba product
    pub karatsuba: BigInt,
    /// Toom-3 product
    pub toom3: BigInt,
}

impl Comparison {
    /// Whether every method produced the same product.
    #[must_use]
    pub fn all_agree(&self) -> bool {
        self.standard == self.karatsuba && self.karatsuba == self.toom3
    }

    /// Product computed by `method`.
    pub fn product(&self, method: MultiplicationMethod) -> &BigInt {
        match method {
            MultiplicationMethod::Standard => &self.standard,
            MultiplicationMethod::Karatsuba => &self.karatsuba,
            MultiplicationMethod::Toom3 => &self.toom3,
        }
    }
}

/// Multiply `x` and `y` with every method.
pub fn compare(x: &BigInt, y: &BigInt) -> Comparison {
    let comparison = Comparison {
        x: x.clone(),
        y: y.clone(),
        standard: MultiplicationMethod::Standard.multiply(x, y),
        karatsuba: MultiplicationMethod::Karatsuba.multiply(x, y),
        toom3: MultiplicationMethod::Toom3.multiply(x, y),
    };

    if comparison.all_agree() {
        debug!(%x, %y, "all multiplication methods agree");
    } else {
        warn!(%x, %y, "multiplication methods disagree");
    }
    comparison
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_demo_pairs() {
        for (x, y) in [(123i64, 456i64), (1234567, 7654321), (12345, 6789)] {
            let comparison = compare(&BigInt::from(x), &BigInt::from(y));
            assert!(comparison.all_agree(), "{x} × {y}");
            assert_eq!(comparison.standard, BigInt::from(x) * BigInt::from(y));
        }
    }

    #[test]
    fn test_disagreement_detected() {
        let mut comparison = compare(&BigInt::from(12), &BigInt::from(34));
        comparison.toom3 += 1u32;
        assert!(!comparison.all_agree());
    }

    #[test]
    fn test_method_names() {
        let names: Vec<String> = MultiplicationMethod::ALL
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(names, ["Standard", "Karatsuba", "Toom-3"]);
        assert_eq!(
            MultiplicationMethod::Toom3.multiply(&BigInt::from(-3), &BigInt::from(7)),
            BigInt::from(-21)
        );
    }
}
