use std::collections::VecDeque;

use crate::{EquationKind, EquationSession, SolutionSet};

/// How many solves are remembered.
pub const HISTORY_LIMIT: usize = 50;

/// Record of one solve.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryItem {
    pub kind: EquationKind,
    pub cells: Vec<String>,
    /// Kind and coefficients, eg: `Quad: 1, -3, 2`.
    pub expression: String,
    /// Exact roots, eg: `X₁=2; X₂=1`.
    pub result: String,
    pub solutions: SolutionSet,
}

impl HistoryItem {
    pub fn new(kind: EquationKind, cells: Vec<String>, solutions: SolutionSet) -> Self {
        let coeffs = cells
            .iter()
            .map(|c| if c.is_empty() { "0" } else { c.as_str() })
            .collect::<Vec<_>>()
            .join(", ");
        HistoryItem {
            kind,
            expression: format!("{}: {}", kind.name(), coeffs),
            result: solutions.summary(),
            cells,
            solutions,
        }
    }

    /// A session showing this solve again.
    pub fn restore(&self) -> EquationSession {
        EquationSession::restored(self.kind, self.cells.clone(), self.solutions.clone())
    }
}

/// Most recent solves first.
#[derive(Debug, Clone)]
pub struct History {
    items: VecDeque<HistoryItem>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        History::new(HISTORY_LIMIT)
    }
}

impl History {
    pub fn new(limit: usize) -> Self {
        History {
            items: VecDeque::with_capacity(limit),
            limit,
        }
    }

    pub fn push(&mut self, item: HistoryItem) {
        self.items.push_front(item);
        self.items.truncate(self.limit);
    }

    pub fn get(&self, idx: usize) -> Option<&HistoryItem> {
        self.items.get(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CoefficientVector, View, solve};

    fn item(c: f64) -> HistoryItem {
        let coeffs = CoefficientVector::from_values(EquationKind::Quadratic, vec![1.0, 0.0, c])
            .unwrap();
        HistoryItem::new(
            EquationKind::Quadratic,
            vec!["1".to_string(), String::new(), c.to_string()],
            solve(&coeffs),
        )
    }

    #[test]
    fn newest_first_and_bounded() {
        let mut history = History::new(3);
        for c in 1..=5 {
            history.push(item(-(c as f64)));
        }
        assert_eq!(history.len(), 3);
        let exprs: Vec<_> = history.iter().map(|h| h.expression.as_str()).collect();
        assert_eq!(exprs, vec!["Quad: 1, 0, -5", "Quad: 1, 0, -4", "Quad: 1, 0, -3"]);
        history.clear();
        assert!(history.is_empty());
        assert_eq!(History::default().limit, HISTORY_LIMIT);
    }

    #[test]
    fn restore_shows_the_solve() {
        let item = item(-4.0);
        assert_eq!(item.result, "X₁=2; X₂=-2");
        let session = item.restore();
        assert_eq!(session.kind(), EquationKind::Quadratic);
        assert_eq!(session.results(), Some(&item.solutions));
        assert_eq!(session.view(), View::Exact);
        assert_eq!(session.cells()[1], "");
    }
}
