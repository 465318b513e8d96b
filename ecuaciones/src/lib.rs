//! Exact and decimal roots for small systems of equations: two and three
//! unknown linear systems, quadratics and cubics.

mod error;
pub use error::{CellError, CoefficientError, MatrixError};

pub mod format;
mod rational;
pub use rational::{Fraction, gcd};
mod surd;
pub use surd::{Surd, simplify_sqrt};
mod roots;
pub use roots::quadratic_root;

pub mod matrix;

mod linear;
pub use linear::{MATH_ERROR, NO_UNIQUE_SOLUTION, solve_linear2, solve_linear3};
mod quadratic;
pub use quadratic::solve_quadratic;
mod cubic;
pub use cubic::solve_cubic;

mod solution;
pub use solution::{
    CoefficientVector, EquationKind, Solution, SolutionSet, View, parse_coefficient, solve,
};

mod session;
pub use session::{Advance, EquationSession};
mod history;
pub use history::{HISTORY_LIMIT, History, HistoryItem};

#[cfg(test)]
mod proptests;
