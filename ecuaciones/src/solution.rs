use std::fmt;
use std::str::FromStr;

use crate::format::{REAL_PRECISION, format_number};
use crate::{CoefficientError, solve_cubic, solve_linear2, solve_linear3, solve_quadratic};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EquationKind {
    /// a₁X + b₁Y = c₁, a₂X + b₂Y = c₂
    Linear2,
    /// aₙX + bₙY + cₙZ = dₙ for n = 1..3
    Linear3,
    /// aX² + bX + c = 0
    Quadratic,
    /// aX³ + bX² + cX + d = 0
    Cubic,
}

impl EquationKind {
    pub const ALL: [EquationKind; 4] = [
        EquationKind::Linear2,
        EquationKind::Linear3,
        EquationKind::Quadratic,
        EquationKind::Cubic,
    ];

    /// Number of coefficients the equation takes.
    pub fn arity(self) -> usize {
        match self {
            EquationKind::Linear2 => 6,
            EquationKind::Linear3 => 12,
            EquationKind::Quadratic => 3,
            EquationKind::Cubic => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EquationKind::Linear2 => "Lin(2)",
            EquationKind::Linear3 => "Lin(3)",
            EquationKind::Quadratic => "Quad",
            EquationKind::Cubic => "Cubic",
        }
    }

    pub fn form(self) -> &'static str {
        match self {
            EquationKind::Linear2 => "anX + bnY = cn",
            EquationKind::Linear3 => "anX + bnY + cnZ = dn",
            EquationKind::Quadratic => "aX² + bX + c = 0",
            EquationKind::Cubic => "aX³ + bX² + cX + d = 0",
        }
    }

    /// Names of the coefficient cells in entry order, eg: a₁ b₁ c₁ a₂ b₂ c₂.
    pub fn cell_labels(self) -> Vec<String> {
        const ABC: &[char] = &['a', 'b', 'c'];
        const ABCD: &[char] = &['a', 'b', 'c', 'd'];
        let (letters, rows): (&[char], usize) = match self {
            EquationKind::Linear2 => (ABC, 2),
            EquationKind::Linear3 => (ABCD, 3),
            EquationKind::Quadratic => (ABC, 0),
            EquationKind::Cubic => (ABCD, 0),
        };
        if rows == 0 {
            return letters.iter().map(|l| l.to_string()).collect();
        }
        (1..=rows)
            .flat_map(|row| letters.iter().map(move |l| format!("{}{}", l, subscript(row))))
            .collect()
    }
}

impl fmt::Display for EquationKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for EquationKind {
    type Err = CoefficientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "1" | "lin2" | "linear2" | "lin(2)" => EquationKind::Linear2,
            "2" | "lin3" | "linear3" | "lin(3)" => EquationKind::Linear3,
            "3" | "quad" | "quadratic" => EquationKind::Quadratic,
            "4" | "cubic" => EquationKind::Cubic,
            _ => return Err(CoefficientError::UnknownKind(s.to_string())),
        })
    }
}

/// Coefficients of one equation, row by row, highest power first.
/// Always holds exactly `kind.arity()` values.
#[derive(Clone, Debug, PartialEq)]
pub struct CoefficientVector {
    kind: EquationKind,
    values: Vec<f64>,
}

impl CoefficientVector {
    pub fn new(kind: EquationKind) -> Self {
        CoefficientVector {
            kind,
            values: vec![0.0; kind.arity()],
        }
    }

    /// Missing trailing values are taken as 0.
    pub fn from_values(
        kind: EquationKind,
        values: impl IntoIterator<Item = f64>,
    ) -> Result<Self, CoefficientError> {
        let mut values: Vec<f64> = values.into_iter().collect();
        if values.len() > kind.arity() {
            return Err(CoefficientError::TooMany {
                kind: kind.name(),
                expected: kind.arity(),
                got: values.len(),
            });
        }
        values.resize(kind.arity(), 0.0);
        Ok(CoefficientVector { kind, values })
    }

    pub fn kind(&self) -> EquationKind {
        self.kind
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, idx: usize) -> Option<f64> {
        self.values.get(idx).copied()
    }

    pub fn set(&mut self, idx: usize, value: f64) -> Option<f64> {
        self.values
            .get_mut(idx)
            .map(|slot| std::mem::replace(slot, value))
    }

    fn array<const N: usize>(&self) -> [f64; N] {
        let mut out = [0.0; N];
        for (o, v) in out.iter_mut().zip(&self.values) {
            *o = *v;
        }
        out
    }
}

/// Reads a coefficient as typed by a user: a decimal or a simple fraction `p/q`.
/// Cells still being typed ("", "-", ".") read as 0.
pub fn parse_coefficient(text: &str) -> Result<f64, CoefficientError> {
    let text = text.trim();
    if matches!(text, "" | "-" | "." | "-.") {
        return Ok(0.0);
    }
    let bad = || CoefficientError::BadNumber(text.to_string());
    let value = match text.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num.trim().parse().map_err(|_| bad())?;
            let den: f64 = den.trim().parse().map_err(|_| bad())?;
            if den == 0.0 {
                return Err(bad());
            }
            num / den
        }
        None => text.parse().map_err(|_| bad())?,
    };
    if value.is_finite() { Ok(value) } else { Err(bad()) }
}

/// Dispatch a coefficient vector to the solver for its kind.
pub fn solve(coeffs: &CoefficientVector) -> SolutionSet {
    match coeffs.kind {
        EquationKind::Linear2 => solve_linear2(&coeffs.array()),
        EquationKind::Linear3 => solve_linear3(&coeffs.array()),
        EquationKind::Quadratic => solve_quadratic(&coeffs.array()),
        EquationKind::Cubic => solve_cubic(&coeffs.array()),
    }
}

/// Which representation of the roots is on display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Exact,
    Decimal,
}

impl View {
    pub fn toggle(self) -> View {
        match self {
            View::Exact => View::Decimal,
            View::Decimal => View::Exact,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            View::Exact => write!(f, "EXACT"),
            View::Decimal => write!(f, "DECIMAL"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub label: String,
    pub exact: String,
    pub decimal: String,
}

impl Solution {
    pub fn new(
        label: impl Into<String>,
        exact: impl Into<String>,
        decimal: impl Into<String>,
    ) -> Self {
        Solution {
            label: label.into(),
            exact: exact.into(),
            decimal: decimal.into(),
        }
    }

    /// Same text for both views.
    pub(crate) fn text(label: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        Solution::new(label, text.clone(), text)
    }

    pub(crate) fn numeric(label: impl Into<String>, value: f64) -> Self {
        Solution::text(label, format_number(value, REAL_PRECISION))
    }

    pub fn render(&self, view: View) -> &str {
        match view {
            View::Exact => &self.exact,
            View::Decimal => &self.decimal,
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.label, self.exact)
    }
}

/// Ordered roots of one solve. Empty means no solution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolutionSet(pub Vec<Solution>);

impl SolutionSet {
    pub(crate) fn sentinel(label: &str, message: &str) -> Self {
        SolutionSet(vec![Solution::text(label, message)])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.0.iter()
    }

    /// One line record of the exact roots, eg: `X₁=2; X₂=1`.
    pub fn summary(&self) -> String {
        self.iter()
            .map(|s| format!("{}={}", s.label, s.exact))
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn render(&self, view: View) -> String {
        if self.is_empty() {
            return "No Solution".to_string();
        }
        self.iter()
            .map(|s| format!("{} = {}", s.label, s.render(view)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for SolutionSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render(View::Exact))
    }
}

fn subscript(n: usize) -> String {
    const DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];
    n.to_string()
        .chars()
        .filter_map(|d| d.to_digit(10).map(|d| DIGITS[d as usize]))
        .collect()
}

/// `X` with a subscripted index, eg: X₁.
pub(crate) fn indexed_label(n: usize) -> String {
    format!("X{}", subscript(n))
}
