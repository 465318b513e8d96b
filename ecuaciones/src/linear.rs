use log::debug;

use crate::matrix::{Matrix, nsolve};
use crate::solution::{Solution, SolutionSet};

const SINGULAR_EPS: f64 = 1e-12;
// Unknowns this small relative to the largest one are QR rounding noise.
const NOISE_EPS: f64 = 1e-14;

pub const NO_UNIQUE_SOLUTION: &str = "No Unique Solution";
pub const MATH_ERROR: &str = "Math Error";

/// `a1·x + b1·y = c1`, `a2·x + b2·y = c2` by Cramer's rule.
pub fn solve_linear2(coeffs: &[f64; 6]) -> SolutionSet {
    let [a1, b1, c1, a2, b2, c2] = *coeffs;
    let det = a1 * b2 - a2 * b1;
    if det.abs() < SINGULAR_EPS {
        debug!("linear2 singular, det={}", det);
        return SolutionSet::sentinel("Info", NO_UNIQUE_SOLUTION);
    }
    let x = (c1 * b2 - c2 * b1) / det;
    let y = (a1 * c2 - a2 * c1) / det;
    SolutionSet(vec![Solution::numeric("X", x), Solution::numeric("Y", y)])
}

/// Three equations `a·x + b·y + c·z = d`, four coefficients each.
pub fn solve_linear3(coeffs: &[f64; 12]) -> SolutionSet {
    let rows: Vec<Vec<f64>> = coeffs.chunks(4).map(|eq| eq[..3].to_vec()).collect();
    let constants: Vec<f64> = coeffs.chunks(4).map(|eq| eq[3]).collect();
    match Matrix::from_rows(rows).and_then(|a| nsolve(&a, &constants)) {
        Ok(xyz) => {
            let scale = xyz.iter().fold(0.0f64, |m, x| m.max(x.abs()));
            SolutionSet(
                ["X", "Y", "Z"]
                    .iter()
                    .zip(xyz)
                    .map(|(label, v)| {
                        let v = if v.abs() < NOISE_EPS * scale { 0.0 } else { v };
                        Solution::numeric(*label, v)
                    })
                    .collect(),
            )
        }
        Err(e) => {
            debug!("linear3 failed: {}", e);
            SolutionSet::sentinel("Error", MATH_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(set: &SolutionSet) -> Vec<(&str, &str)> {
        set.iter()
            .map(|s| (s.label.as_str(), s.exact.as_str()))
            .collect()
    }

    #[test]
    fn two_unknowns() {
        // x + y = 3, x - y = 1
        let set = solve_linear2(&[1.0, 1.0, 3.0, 1.0, -1.0, 1.0]);
        assert_eq!(values(&set), vec![("X", "2"), ("Y", "1")]);

        // 3x + 2y = 1, x - y = 0
        let set = solve_linear2(&[3.0, 2.0, 1.0, 1.0, -1.0, 0.0]);
        assert_eq!(values(&set), vec![("X", "0.2"), ("Y", "0.2")]);
        assert_eq!(set.0[0].exact, set.0[0].decimal);
    }

    #[test]
    fn two_unknowns_singular() {
        let set = solve_linear2(&[1.0, 2.0, 3.0, 2.0, 4.0, 6.0]);
        assert_eq!(values(&set), vec![("Info", NO_UNIQUE_SOLUTION)]);
        // inconsistent rows are reported the same way
        let set = solve_linear2(&[1.0, 2.0, 3.0, 2.0, 4.0, 7.0]);
        assert_eq!(values(&set), vec![("Info", NO_UNIQUE_SOLUTION)]);
        let set = solve_linear2(&[0.0; 6]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn three_unknowns() {
        // x + y + z = 6, 2y + 5z = -4, 2x + 5y - z = 27
        let set = solve_linear3(&[
            1.0, 1.0, 1.0, 6.0, //
            0.0, 2.0, 5.0, -4.0, //
            2.0, 5.0, -1.0, 27.0,
        ]);
        assert_eq!(values(&set), vec![("X", "5"), ("Y", "3"), ("Z", "-2")]);

        // x + y = 2, y + z = 2, x + z = 2
        let set = solve_linear3(&[
            1.0, 1.0, 0.0, 2.0, //
            0.0, 1.0, 1.0, 2.0, //
            1.0, 0.0, 1.0, 2.0,
        ]);
        assert_eq!(values(&set), vec![("X", "1"), ("Y", "1"), ("Z", "1")]);
        // x + y + z = 1, x - y = 0, z = 1 leaves x = y = 0
        let set = solve_linear3(&[
            1.0, 1.0, 1.0, 1.0, //
            1.0, -1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 1.0,
        ]);
        assert_eq!(values(&set), vec![("X", "0"), ("Y", "0"), ("Z", "1")]);
    }

    #[test]
    fn three_unknowns_small_answers_survive() {
        let set = solve_linear3(&[
            1.0, 0.0, 0.0, 1e-13, //
            0.0, 1.0, 0.0, 1.0, //
            0.0, 0.0, 1.0, 1.0,
        ]);
        assert_eq!(values(&set), vec![("X", "1e-13"), ("Y", "1"), ("Z", "1")]);
        let set = solve_linear3(&[
            1e13, 0.0, 0.0, 1.0, //
            0.0, 1.0, 0.0, 1.0, //
            0.0, 0.0, 1.0, 1.0,
        ]);
        assert_eq!(values(&set), vec![("X", "1e-13"), ("Y", "1"), ("Z", "1")]);
        // all unknowns tiny, nothing to compare against but each other
        let set = solve_linear3(&[
            1.0, 0.0, 0.0, 2e-15, //
            0.0, 1.0, 0.0, 3e-15, //
            0.0, 0.0, 1.0, 4e-15,
        ]);
        assert_eq!(values(&set), vec![("X", "2e-15"), ("Y", "3e-15"), ("Z", "4e-15")]);
        // same answer the two unknown solver gives
        let set = solve_linear2(&[1.0, 0.0, 1e-13, 0.0, 1.0, 1.0]);
        assert_eq!(values(&set), vec![("X", "1e-13"), ("Y", "1")]);
    }

    #[test]
    fn three_unknowns_singular() {
        let set = solve_linear3(&[
            1.0, 2.0, 3.0, 1.0, //
            2.0, 4.0, 6.0, 2.0, //
            1.0, 1.0, 1.0, 1.0,
        ]);
        assert_eq!(values(&set), vec![("Error", MATH_ERROR)]);
        assert_eq!(values(&solve_linear3(&[0.0; 12])), vec![("Error", MATH_ERROR)]);
    }
}
