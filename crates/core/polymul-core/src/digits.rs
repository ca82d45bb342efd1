//! Decimal limb helpers shared by the multiplication algorithms.

use num_bigint::BigUint;

/// Number of decimal digits in `x` (zero has one digit).
pub(crate) fn decimal_digits(x: &BigUint) -> usize {
    x.to_str_radix(10).len()
}

/// `10^exp`
pub(crate) fn pow10(exp: usize) -> BigUint {
    // exponents are digit counts of in-memory integers
    BigUint::from(10u32).pow(exp as u32)
}
