use crate::rational::{Fraction, gcd};
use crate::surd::Surd;

/// Exact form of `(-b + sign·√delta) / 2a` for integer `a != 0` and `b`, with
/// `root` the simplified `√delta` so both signs share one factorization.
///
/// Perfect squares collapse to an integer or reduced fraction. Anything else
/// renders as `b' ± c'√r` over a positive denominator, with `b`, the surd
/// coefficient and `2a` divided by their common factor.
pub fn quadratic_root(a: i64, b: i64, root: Surd, sign: i64) -> String {
    let denom = 2 * a;
    if root.is_rational() {
        return Fraction::new(-b + sign * root.coeff, denom).to_string();
    }

    let common = gcd(gcd(b, root.coeff), denom);
    let (mut rational, mut irrational, mut denom) =
        (-b / common, sign * root.coeff / common, denom / common);
    if denom < 0 {
        rational = -rational;
        irrational = -irrational;
        denom = -denom;
    }

    let mut numerator = String::new();
    if rational != 0 {
        numerator.push_str(&rational.to_string());
    }
    if irrational < 0 {
        numerator.push('-');
    } else if !numerator.is_empty() {
        numerator.push('+');
    }
    let surd = Surd {
        coeff: irrational.abs(),
        radical: root.radical,
    };
    numerator.push_str(&surd.to_string());

    if denom != 1 {
        format!("({})/{}", numerator, denom)
    } else {
        numerator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surd::simplify_sqrt;

    fn roots(a: i64, b: i64, c: i64) -> (String, String) {
        let root = simplify_sqrt(b * b - 4 * a * c);
        (quadratic_root(a, b, root, 1), quadratic_root(a, b, root, -1))
    }

    #[test]
    fn integer_and_fraction_roots() {
        assert_eq!(roots(1, -3, 2), ("2".to_string(), "1".to_string()));
        assert_eq!(roots(2, -3, 1), ("1".to_string(), "1/2".to_string()));
        assert_eq!(roots(1, 2, 1), ("-1".to_string(), "-1".to_string()));
        assert_eq!(roots(6, -1, -1), ("1/2".to_string(), "-1/3".to_string()));
        assert_eq!(roots(-1, 0, 4), ("-2".to_string(), "2".to_string()));
    }

    #[test]
    fn surd_roots() {
        assert_eq!(roots(1, 0, -2), ("√2".to_string(), "-√2".to_string()));
        assert_eq!(roots(1, 2, -1), ("-1+√2".to_string(), "-1-√2".to_string()));
        assert_eq!(
            roots(1, 1, -1),
            ("(-1+√5)/2".to_string(), "(-1-√5)/2".to_string())
        );
        assert_eq!(
            roots(1, -4, 1),
            ("2+√3".to_string(), "2-√3".to_string())
        );
        assert_eq!(
            roots(2, 0, -3),
            ("(√6)/2".to_string(), "(-√6)/2".to_string())
        );
    }

    #[test]
    fn negative_leading_coefficient_keeps_denominator_positive() {
        // (-2 ± √8) / -2 = 1 ∓ √2
        assert_eq!(roots(-1, 2, 1), ("1-√2".to_string(), "1+√2".to_string()));
        // (-1 ± √13) / -6
        assert_eq!(
            roots(-3, 1, 1),
            ("(1-√13)/6".to_string(), "(1+√13)/6".to_string())
        );
    }
}
