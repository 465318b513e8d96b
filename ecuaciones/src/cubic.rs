use std::f64::consts::PI;

use log::debug;

use crate::format::format_complex;
use crate::quadratic::quadratic_roots;
use crate::solution::{Solution, SolutionSet, indexed_label};
use crate::solve_quadratic;

const CUBIC_EPS: f64 = 1e-9;

/// `a·x³ + b·x² + c·x + d = 0`. Roots come out decimal only.
pub fn solve_cubic(coeffs: &[f64; 4]) -> SolutionSet {
    let [a, b, c, d] = *coeffs;
    if a.abs() < CUBIC_EPS {
        debug!("cubic with a≈0, solving as quadratic");
        return solve_quadratic(&[b, c, d]);
    }
    if d.abs() < CUBIC_EPS {
        // x·(a·x² + b·x + c) = 0
        debug!("cubic with d≈0, factoring out x = 0");
        let mut set = quadratic_roots(a, b, c);
        set.0.push(Solution::text("", "0"));
        for (i, s) in set.0.iter_mut().enumerate() {
            s.label = indexed_label(i + 1);
        }
        return set;
    }
    depressed(a, b, c, d)
}

// Substitutes x = t - A/3 to get t³ + p·t + q = 0.
fn depressed(a: f64, b: f64, c: f64, d: f64) -> SolutionSet {
    let (na, nb, nc) = (b / a, c / a, d / a);
    let sq = na * na;
    let p = nb - sq / 3.0;
    let q = 2.0 * sq * na / 27.0 - na * nb / 3.0 + nc;
    let disc = q * q / 4.0 + p * p * p / 27.0;
    let offset = na / 3.0;
    debug!("depressed cubic p={} q={} D={}", p, q, disc);

    let mut roots = if disc.abs() < CUBIC_EPS {
        if p.abs() < CUBIC_EPS {
            vec![-offset; 3]
        } else {
            let t1 = 2.0 * (-q / 2.0).cbrt();
            let t2 = -t1 / 2.0;
            vec![t1 - offset, t2 - offset, t2 - offset]
        }
    } else if disc > 0.0 {
        let sd = disc.sqrt();
        let u = (-q / 2.0 + sd).cbrt();
        let v = (-q / 2.0 - sd).cbrt();
        let re = snap(-(u + v) / 2.0 - offset);
        let im = 3f64.sqrt() / 2.0 * (u - v);
        return SolutionSet(vec![
            Solution::numeric(indexed_label(1), snap(u + v - offset)),
            Solution::text(indexed_label(2), format_complex(re, im)),
            Solution::text(indexed_label(3), format_complex(re, -im)),
        ]);
    } else {
        // three real roots, Viète's trigonometric form
        let cos_arg = (-q / 2.0) / (-(p * p * p) / 27.0).sqrt();
        let phi = cos_arg.clamp(-1.0, 1.0).acos();
        let r = 2.0 * (-p / 3.0).sqrt();
        (0..3)
            .map(|k| r * (phi / 3.0 + k as f64 * 2.0 * PI / 3.0).cos() - offset)
            .collect()
    };

    roots.sort_by(|x, y| y.total_cmp(x));
    SolutionSet(
        roots
            .into_iter()
            .enumerate()
            .map(|(i, root)| Solution::numeric(indexed_label(i + 1), snap(root)))
            .collect(),
    )
}

// Rounding noise around zero would otherwise print as 1e-16.
fn snap(x: f64) -> f64 {
    if x.abs() < CUBIC_EPS { 0.0 } else { x }
}
