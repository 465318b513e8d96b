use thiserror::Error;

/// Failures editing the coefficient cells of a session.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CellError {
    #[error("invalid character {0:?} in coefficient")]
    InvalidChar(char),
    #[error("cell {index} out of range, equation has {cells} coefficients")]
    OutOfRange { index: usize, cells: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoefficientError {
    #[error("{kind} takes {expected} coefficients, got {got}")]
    TooMany {
        kind: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("can't read {0:?} as a number")]
    BadNumber(String),
    #[error("unknown equation kind {0:?}, try lin2, lin3, quad or cubic")]
    UnknownKind(String),
    #[error(transparent)]
    Cell(#[from] CellError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    #[error("matrix is singular")]
    Singular,
    #[error("rows must be non-empty and of equal length")]
    Shape,
    #[error("expected a square system with one constant per row, got {rows}x{cols} and {len} constants")]
    Dimension { rows: usize, cols: usize, len: usize },
}
