//! Karatsuba multiplication.
//!
//! Splitting both operands at `m` decimal digits,
//!
//! ```text
//! x = a·10^m + b
//! y = c·10^m + d
//! x·y = ac·10^(2m) + ((a+b)(c+d) - ac - bd)·10^m + bd
//! ```
//!
//! needs three recursive products instead of four, giving O(n^log2(3)).

use crate::digits::{decimal_digits, pow10};
use num_bigint::{BigInt, BigUint};
use tracing::instrument;

/// Operands below this use native multiplication.
const BASE_CASE: u32 = 10;

/// Multiply two integers with Karatsuba's algorithm.
///
/// ```
/// use num_bigint::BigInt;
/// use polymul_core::karatsuba::karatsuba;
///
/// let product = karatsuba(&BigInt::from(123), &BigInt::from(456));
/// assert_eq!(product, BigInt::from(56088));
/// ```
#[instrument(level = "debug", skip_all, fields(x = %x, y = %y))]
pub fn karatsuba(x: &BigInt, y: &BigInt) -> BigInt {
    let magnitude = karatsuba_unsigned(x.magnitude(), y.magnitude());
    BigInt::from_biguint(x.sign() * y.sign(), magnitude)
}

fn karatsuba_unsigned(x: &BigUint, y: &BigUint) -> BigUint {
    let base = BigUint::from(BASE_CASE);
    if x < &base || y < &base {
        return x * y;
    }

    let n = decimal_digits(x).max(decimal_digits(y));
    let m = n / 2;
    let divisor = pow10(m);

    let (a, b) = (x / &divisor, x % &divisor);
    let (c, d) = (y / &divisor, y % &divisor);

    let ac = karatsuba_unsigned(&a, &c);
    let bd = karatsuba_unsigned(&b, &d);
    let ad_plus_bc = karatsuba_unsigned(&(&a + &b), &(&c + &d)) - &ac - &bd;

    ac * pow10(2 * m) + ad_plus_bc * divisor + bd
}
