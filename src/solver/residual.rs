use crate::domain::*;
use crate::util::*;
use rayon::prelude::*;

/// Largest `|value - (up + down + left + right) / 4|` over the interior.
/// Zero for grids without an interior.
pub fn max_residual<F: GridFloat>(grid: &Grid<F>) -> F {
    let n = grid.size();
    if n < 3 {
        return F::zero();
    }
    profiling::scope!("max_residual");
    let four = F::from_f64(4.0);
    (1..n - 1)
        .into_par_iter()
        .map(|i| {
            let mut worst = F::zero();
            for j in 1..n - 1 {
                let average = (grid.get(i - 1, j)
                    + grid.get(i + 1, j)
                    + grid.get(i, j - 1)
                    + grid.get(i, j + 1))
                    / four;
                worst = worst.max((grid.get(i, j) - average).abs());
            }
            worst
        })
        .reduce(F::zero, |a, b| a.max(b))
}

/// Every interior cell is within `precision` of its neighbor average.
pub fn is_fixed_point<F: GridFloat>(grid: &Grid<F>, precision: F) -> bool {
    max_residual(grid) < precision
}
