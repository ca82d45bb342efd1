//! Text rendering for complex values.
//!
//! Values print as `(re±imi)`, e.g. `(1+0i)` or
//! `(-1.8369701987210297e-16-1i)`. Each component uses the shortest decimal
//! that round-trips; exponent notation is used when the decimal exponent is
//! below -4 or at least 6, as Go's `%v` does.

use num_complex::Complex64;
use std::fmt;

/// Exponents at or above this use scientific notation.
const EXP_UPPER: i32 = 6;
/// Exponents below this use scientific notation.
const EXP_LOWER: i32 = -4;

/// Wrapper that renders a [`Complex64`] as `(re±imi)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexDisplay(pub Complex64);

impl fmt::Display for ComplexDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let re = format_float(self.0.re);
        let im = format_float(self.0.im);
        let sign = if im.starts_with(|c: char| c == '+' || c == '-') { "" } else { "+" };
        write!(f, "({re}{sign}{im}i)")
    }
}

impl From<Complex64> for ComplexDisplay {
    fn from(z: Complex64) -> Self {
        Self(z)
    }
}

/// Render a single `f64` component.
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let sci = format!("{x:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return format!("{x}");
    };
    let exp: i32 = match exp.parse() {
        Ok(e) => e,
        Err(_) => return format!("{x}"),
    };

    if exp < EXP_LOWER || exp >= EXP_UPPER {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{exp_sign}{:02}", exp.unsigned_abs())
    } else {
        format!("{x}")
    }
}
