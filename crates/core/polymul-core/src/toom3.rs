//! Toom-3 (Toom-Cook) multiplication.
//!
//! Each operand is split into three decimal limbs and read as a quadratic
//! polynomial `P(t) = x0 + x1·t + x2·t²` evaluated at `t = 10^k`. The
//! degree-4 product polynomial is recovered from its values at the five
//! points `0, 1, -1, -2, ∞`, so five recursive products replace nine.
//! Complexity is O(n^log3(5)) ≈ O(n^1.465).

use crate::digits::{decimal_digits, pow10};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;
use tracing::instrument;

/// Operands below this use native multiplication.
const BASE_CASE: u32 = 1000;

/// Values of a limb polynomial at `0, 1, -1, -2, ∞`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Evaluation {
    at_zero: BigInt,
    at_one: BigInt,
    at_minus_one: BigInt,
    at_minus_two: BigInt,
    at_infinity: BigInt,
}

/// Split `n` into limbs `(x0, x1, x2)` with `n = x0 + x1·base + x2·base²`.
///
/// `x2` absorbs everything above `base²` and may exceed `base`.
fn split(n: &BigUint, base: &BigUint) -> (BigInt, BigInt, BigInt) {
    let x0 = n % base;
    let x1 = (n / base) % base;
    let x2 = n / (base * base);
    (x0.into(), x1.into(), x2.into())
}

fn evaluate(x0: &BigInt, x1: &BigInt, x2: &BigInt) -> Evaluation {
    let even = x0 + x2;
    Evaluation {
        at_zero: x0.clone(),
        at_one: &even + x1,
        at_minus_one: &even - x1,
        at_minus_two: x0 - x1 * 2u32 + x2 * 4u32,
        at_infinity: x2.clone(),
    }
}

/// Recover the five product coefficients from the pointwise products.
fn interpolate(w: Evaluation) -> [BigInt; 5] {
    let r0 = w.at_zero;
    let r4 = w.at_infinity;

    // all divisions below are exact
    let r3 = (&w.at_minus_two - &w.at_one) / 3u32;
    let r1 = (&w.at_one - &w.at_minus_one) / 2u32;
    let r2 = &w.at_minus_one - &r0;
    let r3 = (&r2 - &r3) / 2u32 + &r4 * 2u32;
    let r2 = r2 + &r1 - &r4;
    let r1 = r1 - &r3;

    [r0, r1, r2, r3, r4]
}

/// Multiply two integers with the Toom-3 algorithm.
///
/// ```
/// use num_bigint::BigInt;
/// use polymul_core::toom3::toom3;
///
/// let product = toom3(&BigInt::from(123456), &BigInt::from(789012));
/// assert_eq!(product, BigInt::from(97408265472i64));
/// ```
#[instrument(level = "debug", skip_all, fields(x = %x, y = %y))]
pub fn toom3(x: &BigInt, y: &BigInt) -> BigInt {
    toom3_signed(x, y)
}

fn toom3_signed(x: &BigInt, y: &BigInt) -> BigInt {
    let magnitude = toom3_unsigned(x.magnitude(), y.magnitude());
    BigInt::from_biguint(x.sign() * y.sign(), magnitude)
}

fn toom3_unsigned(x: &BigUint, y: &BigUint) -> BigUint {
    let base_case = BigUint::from(BASE_CASE);
    if x < &base_case || y < &base_case {
        return x * y;
    }

    let n = decimal_digits(x).max(decimal_digits(y));
    let base = pow10(n / 3);

    let (x0, x1, x2) = split(x, &base);
    let (y0, y1, y2) = split(y, &base);
    let px = evaluate(&x0, &x1, &x2);
    let py = evaluate(&y0, &y1, &y2);

    let products = Evaluation {
        at_zero: toom3_signed(&px.at_zero, &py.at_zero),
        at_one: toom3_signed(&px.at_one, &py.at_one),
        at_minus_one: toom3_signed(&px.at_minus_one, &py.at_minus_one),
        at_minus_two: toom3_signed(&px.at_minus_two, &py.at_minus_two),
        at_infinity: toom3_signed(&px.at_infinity, &py.at_infinity),
    };

    let base = BigInt::from(base);
    let mut result = BigInt::zero();
    for coefficient in interpolate(products).into_iter().rev() {
        result = result * &base + coefficient;
    }

    debug_assert!(
        result.sign() != Sign::Minus,
        "toom3 recomposed a negative product of magnitudes"
    );
    result.into_parts().1
}
