//! Tests for Karatsuba and Toom-3 multiplication

use polymul_core::compare::{compare, MultiplicationMethod};
use polymul_core::karatsuba::karatsuba;
use polymul_core::report::render_comparison;
use polymul_core::toom3::toom3;
use num_bigint::BigInt;

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn test_karatsuba_demo_examples() {
    let cases = [
        ("123", "456", "56088"),
        ("12345", "6789", "83810205"),
        ("1234567", "7654321", "9449772114007"),
    ];
    for (x, y, expected) in cases {
        assert_eq!(karatsuba(&big(x), &big(y)), big(expected), "{x} × {y}");
    }
}

#[test]
fn test_toom3_medium_numbers() {
    // five-coefficient recombination is required for this pair
    let x = big("1234567");
    let y = big("7654321");
    assert_eq!(toom3(&x, &y), big("9449772114007"));
}

#[test]
fn test_powers_of_ten() {
    for exp in 0..60 {
        let p = BigInt::from(10).pow(exp);
        let q = BigInt::from(10).pow(60 - exp);
        let expected = BigInt::from(10).pow(60);
        assert_eq!(karatsuba(&p, &q), expected);
        assert_eq!(toom3(&p, &q), expected);
    }
}

#[test]
fn test_all_nines() {
    for digits in 1..40 {
        let x = big(&"9".repeat(digits));
        let expected = &x * &x;
        assert_eq!(karatsuba(&x, &x), expected, "{digits} digits");
        assert_eq!(toom3(&x, &x), expected, "{digits} digits");
    }
}

#[test]
fn test_large_unbalanced() {
    let x = big(&"31415926535897932384626433832795028841971693993751".repeat(8));
    let y = big("-2718281828");
    let expected = &x * &y;
    for method in MultiplicationMethod::ALL {
        assert_eq!(method.multiply(&x, &y), expected, "{method}");
    }
}

#[test]
fn test_comparison_report() {
    let comparison = compare(&big("1234567"), &big("7654321"));
    let report = render_comparison(&comparison);
    assert!(report.starts_with("Numbers: 1234567 × 7654321\n"));
    assert!(report.contains("Toom-3:    9449772114007\n"));
    assert!(report.ends_with("All methods agree: true\n"));
}
