use crate::domain::*;
use crate::util::*;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Fill the interior with uniform values in `[0, max_val)`,
/// boundary cells are reset to zero.
/// Every cell draws from a generator seeded from `seed` and its coordinate,
/// so the result does not depend on how rows are scheduled.
pub fn rand_ic<F: GridFloat>(grid: &mut Grid<F>, max_val: f64, seed: u64) {
    let n = grid.size();
    grid.par_set_values(
        |row, col| {
            if row == 0 || col == 0 || row + 1 >= n || col + 1 >= n {
                return F::zero();
            }
            let mut rng =
                StdRng::seed_from_u64(seed ^ ((row as u64) << 32 | col as u64));
            F::from_f64(rng.gen::<f64>() * max_val)
        },
        1,
    );
}
