//! Decimal rendering of roots.
//!
//! Numbers are rounded to a number of significant digits and printed in fixed
//! notation while their decimal exponent sits in `[LOWER_EXP, UPPER_EXP)`,
//! exponential notation otherwise. Trailing zeros are dropped.

/// Significant digits used for real roots.
pub const REAL_PRECISION: usize = 8;
/// Significant digits used for each part of a complex root.
pub const COMPLEX_PRECISION: usize = 5;

const LOWER_EXP: i32 = -3;
const UPPER_EXP: i32 = 5;

pub fn format_number(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // also catches -0
    if value == 0.0 {
        return "0".to_string();
    }
    let precision = precision.max(1);
    let sci = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if (LOWER_EXP..UPPER_EXP).contains(&exp) {
        let rounded: f64 = sci.parse().unwrap_or(value);
        let decimals = (precision as i32 - 1 - exp).max(0) as usize;
        strip_zeros(format!("{:.*}", decimals, rounded))
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{}", strip_zeros(mantissa.to_string()), sign, exp.abs())
    }
}

/// `re + im i` with the sign of the imaginary part pulled out as the operator.
pub fn format_complex(re: f64, im: f64) -> String {
    format!(
        "{} {} {}i",
        format_number(re, COMPLEX_PRECISION),
        if im < 0.0 { '-' } else { '+' },
        format_number(im.abs(), COMPLEX_PRECISION)
    )
}

fn strip_zeros(mut s: String) -> String {
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    s
}
