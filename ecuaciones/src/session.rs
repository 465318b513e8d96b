use log::debug;

use crate::solution::parse_coefficient;
use crate::{
    CellError, CoefficientError, CoefficientVector, EquationKind, HistoryItem, SolutionSet, View,
    solve,
};

/// What happened after confirming the active cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Moved on to the cell with this index.
    Moved(usize),
    /// That was the last cell, the equation got solved.
    Solved(HistoryItem),
}

/// Coefficient entry for one equation: text cells edited one key at a time,
/// the roots of the last solve and which of their forms is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct EquationSession {
    kind: EquationKind,
    cells: Vec<String>,
    active: usize,
    results: Option<SolutionSet>,
    view: View,
}

impl EquationSession {
    pub fn new(kind: EquationKind) -> Self {
        EquationSession {
            kind,
            cells: vec![String::new(); kind.arity()],
            active: 0,
            results: None,
            view: View::Exact,
        }
    }

    pub(crate) fn restored(kind: EquationKind, cells: Vec<String>, results: SolutionSet) -> Self {
        EquationSession {
            kind,
            cells,
            active: 0,
            results: Some(results),
            view: View::Exact,
        }
    }

    pub fn kind(&self) -> EquationKind {
        self.kind
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn results(&self) -> Option<&SolutionSet> {
        self.results.as_ref()
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Types one key into the active cell.
    pub fn input(&mut self, key: char) -> Result<(), CellError> {
        let cell = &mut self.cells[self.active];
        match key {
            '0'..='9' => cell.push(key),
            '-' => {
                if cell.starts_with('-') {
                    cell.remove(0);
                } else {
                    cell.insert(0, '-');
                }
            }
            // one decimal point per number, numerator and denominator apart
            '.' => {
                let current = cell.rsplit('/').next().unwrap_or_default();
                if !current.contains('.') {
                    cell.push('.');
                }
            }
            '/' => {
                if !cell.contains('/') && cell.chars().any(|c| c.is_ascii_digit()) {
                    cell.push('/');
                }
            }
            _ => return Err(CellError::InvalidChar(key)),
        }
        self.results = None;
        Ok(())
    }

    pub fn backspace(&mut self) {
        self.cells[self.active].pop();
        self.results = None;
    }

    /// Empties the active cell.
    pub fn clear(&mut self) {
        self.cells[self.active].clear();
        self.results = None;
    }

    pub fn select(&mut self, index: usize) -> Result<(), CellError> {
        if index >= self.cells.len() {
            return Err(CellError::OutOfRange {
                index,
                cells: self.cells.len(),
            });
        }
        self.active = index;
        Ok(())
    }

    /// Replaces a whole cell, checking each key as if typed.
    pub fn set_cell(&mut self, index: usize, text: &str) -> Result<(), CellError> {
        self.select(index)?;
        self.clear();
        text.chars().try_for_each(|key| self.input(key))
    }

    /// Confirms the active cell. The last cell triggers a solve.
    pub fn advance(&mut self) -> Result<Advance, CoefficientError> {
        if self.active + 1 < self.cells.len() {
            self.active += 1;
            return Ok(Advance::Moved(self.active));
        }
        Ok(Advance::Solved(self.solve()?))
    }

    pub fn coefficients(&self) -> Result<CoefficientVector, CoefficientError> {
        let values = self
            .cells
            .iter()
            .map(|cell| parse_coefficient(cell))
            .collect::<Result<Vec<_>, _>>()?;
        CoefficientVector::from_values(self.kind, values)
    }

    /// Solves the current cells, switching to the exact view.
    pub fn solve(&mut self) -> Result<HistoryItem, CoefficientError> {
        let coeffs = self.coefficients()?;
        let results = solve(&coeffs);
        debug!("{} {:?} => {}", self.kind, coeffs.values(), results.summary());
        self.results = Some(results.clone());
        self.view = View::Exact;
        Ok(HistoryItem::new(self.kind, self.cells.clone(), results))
    }

    /// Flips between exact and decimal forms of the roots.
    pub fn toggle_view(&mut self) -> View {
        self.view = self.view.toggle();
        self.view
    }

    /// Back to coefficient entry from the first cell, keeping what was typed.
    pub fn edit(&mut self) {
        self.active = 0;
        self.results = None;
    }

    pub fn render(&self) -> String {
        match &self.results {
            Some(results) => format!("[{}]\n{}", self.view, results.render(self.view)),
            None => self
                .kind
                .cell_labels()
                .iter()
                .zip(&self.cells)
                .enumerate()
                .map(|(i, (label, cell))| {
                    let marker = if i == self.active { ">" } else { " " };
                    let cell = if cell.is_empty() { "0" } else { cell.as_str() };
                    format!("{}{} = {}", marker, label, cell)
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
