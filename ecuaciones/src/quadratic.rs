use log::{debug, trace};

use crate::format::{REAL_PRECISION, format_complex, format_number};
use crate::roots::quadratic_root;
use crate::surd::simplify_sqrt;
use crate::solution::{Solution, SolutionSet, indexed_label};
use crate::solve_linear2;

// Largest magnitude an f64 holds with every integer below it exact.
const EXACT_LIMIT: i128 = 1 << 53;

/// `a·x² + b·x + c = 0`. With `a = 0` the equation is solved as linear.
pub fn solve_quadratic(coeffs: &[f64; 3]) -> SolutionSet {
    let [a, b, c] = *coeffs;
    if a == 0.0 {
        debug!("quadratic with a=0, solving {}x + {} = 0", b, c);
        // pin the second unknown so the system is only singular when b = 0
        let mut set = solve_linear2(&[b, 0.0, -c, 0.0, 1.0, 0.0]);
        set.0.retain(|s| s.label != "Y");
        return set;
    }
    quadratic_roots(a, b, c)
}

/// Roots of a true quadratic, `a != 0`.
pub(crate) fn quadratic_roots(a: f64, b: f64, c: f64) -> SolutionSet {
    let delta = b * b - 4.0 * a * c;
    trace!("quadratic delta={}", delta);

    if delta < 0.0 {
        let re = -b / (2.0 * a);
        let im = (delta.abs().sqrt() / (2.0 * a)).abs();
        return SolutionSet(vec![
            Solution::text(indexed_label(1), format_complex(re, im)),
            Solution::text(indexed_label(2), format_complex(re, -im)),
        ]);
    }

    let exact = exact_delta(a, b, c).map(|(a, b, delta)| (a, b, simplify_sqrt(delta)));
    SolutionSet(
        [1, -1]
            .into_iter()
            .enumerate()
            .map(|(i, sign)| {
                let value = (-b + sign as f64 * delta.sqrt()) / (2.0 * a);
                let decimal = format_number(value, REAL_PRECISION);
                let exact = match exact {
                    Some((a, b, root)) => quadratic_root(a, b, root, sign),
                    None => decimal.clone(),
                };
                Solution::new(indexed_label(i + 1), exact, decimal)
            })
            .collect(),
    )
}

// Integer coefficients and discriminant when the exact form can be trusted.
fn exact_delta(a: f64, b: f64, c: f64) -> Option<(i64, i64, i64)> {
    let (a, b, c) = (integral(a)?, integral(b)?, integral(c)?);
    let delta = b * b - 4 * a * c;
    if delta < 0 || delta > EXACT_LIMIT {
        return None;
    }
    Some((a as i64, b as i64, delta as i64))
}

fn integral(x: f64) -> Option<i128> {
    (x.fract() == 0.0 && (x.abs() as i128) <= EXACT_LIMIT).then(|| x as i128)
}
