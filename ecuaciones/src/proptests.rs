//! Property-based tests for the exact arithmetic helpers and formatting.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::format::format_number;
    use crate::{Fraction, gcd, simplify_sqrt, solve_quadratic};

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn is_squarefree(n: i64) -> bool {
        (2..).take_while(|i| i * i <= n).all(|i| n % (i * i) != 0)
    }

    proptest! {
        #[test]
        fn surd_recomposes(n in 0i64..200_000) {
            let s = simplify_sqrt(n);
            prop_assert_eq!(s.coeff * s.coeff * s.radical, n);
            prop_assert!(is_squarefree(s.radical));
        }

        #[test]
        fn fraction_is_reduced(num in -10_000i64..10_000, den in non_zero_int()) {
            let f = Fraction::new(num, den);
            prop_assert!(f.den > 0);
            prop_assert_eq!(gcd(f.num, f.den), 1);
            prop_assert_eq!(f.num * den, num * f.den);
        }

        #[test]
        fn formatting_keeps_value(x in -1e12f64..1e12) {
            let parsed: f64 = format_number(x, 8).parse().unwrap();
            prop_assert!((parsed - x).abs() <= x.abs() * 1e-7 + f64::MIN_POSITIVE);
        }

        #[test]
        fn integer_roots_are_printed_as_integers(r1 in -50i64..50, r2 in -50i64..50, k in non_zero_int()) {
            // k·(x - r1)(x - r2)
            let (a, b, c) = (k, -k * (r1 + r2), k * r1 * r2);
            let set = solve_quadratic(&[a as f64, b as f64, c as f64]);
            let mut got: Vec<i64> = set.iter().map(|s| s.exact.parse().unwrap()).collect();
            let mut want = vec![r1, r2];
            got.sort();
            want.sort();
            prop_assert_eq!(got, want);
            for s in set.iter() {
                prop_assert_eq!(&s.exact, &s.decimal);
            }
        }
    }
}
