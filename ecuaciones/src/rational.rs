use std::fmt;

/// Euclid's gcd. Result is always non-negative, gcd(a, 0) = |a|.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a as i64
}

/// A fraction in lowest terms with the sign carried by the numerator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fraction {
    pub num: i64,
    pub den: i64,
}

impl Fraction {
    /// Reduces num/den. A zero denominator is left as is, callers never build one.
    pub fn new(num: i64, den: i64) -> Self {
        let common = match gcd(num, den) {
            0 => 1,
            g => g,
        };
        let (num, den) = (num / common, den / common);
        if den < 0 {
            Fraction { num: -num, den: -den }
        } else {
            Fraction { num, den }
        }
    }

    pub fn is_integer(&self) -> bool {
        self.den == 1
    }

    pub fn value(&self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(-12, 8), 4);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn reduce_and_normalize_sign() {
        assert_eq!(Fraction::new(4, 6), Fraction { num: 2, den: 3 });
        assert_eq!(Fraction::new(4, -6), Fraction { num: -2, den: 3 });
        assert_eq!(Fraction::new(-4, -6), Fraction { num: 2, den: 3 });
        assert_eq!(Fraction::new(0, -5), Fraction { num: 0, den: 1 });
        assert_eq!(Fraction::new(6, -3).to_string(), "-2");
        assert_eq!(Fraction::new(3, 6).to_string(), "1/2");
        assert_eq!(Fraction::new(-3, 6).to_string(), "-1/2");
    }
}
