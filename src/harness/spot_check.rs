use crate::domain::*;
use crate::solver::*;
use crate::util::*;

/// One interior cell next to its four neighbors,
/// plus the residual over the whole grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpotCheck<F: GridFloat> {
    pub row: usize,
    pub col: usize,
    pub value: F,
    pub above: F,
    pub below: F,
    pub left: F,
    pub right: F,
    /// Average of the four neighbors.
    pub expected: F,
    pub max_residual: F,
    pub converged: bool,
}

/// Check the center cell, `None` if the grid has no interior.
pub fn spot_check<F: GridFloat>(
    grid: &Grid<F>,
    precision: F,
) -> Option<SpotCheck<F>> {
    grid.interior()?;
    let n = grid.size();
    let (row, col) = (n / 2, n / 2);
    let above = grid.get(row - 1, col);
    let below = grid.get(row + 1, col);
    let left = grid.get(row, col - 1);
    let right = grid.get(row, col + 1);
    let max_residual = max_residual(grid);
    Some(SpotCheck {
        row,
        col,
        value: grid.get(row, col),
        above,
        below,
        left,
        right,
        expected: (above + below + left + right) / F::from_f64(4.0),
        max_residual,
        converged: max_residual < precision,
    })
}

impl<F: GridFloat> std::fmt::Display for SpotCheck<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}) Value: {:.3}\tAbove: {:.3}\tBelow: {:.3}\t\
             Left: {:.3}\tRight: {:.3}\tExpected: {:.3}\t\
             Max residual: {:e}",
            self.row,
            self.col,
            self.value,
            self.above,
            self.below,
            self.left,
            self.right,
            self.expected,
            self.max_residual.as_f64(),
        )
    }
}
