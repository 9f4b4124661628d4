use crate::domain::*;
use crate::util::*;

/// Seed the fixed boundary: row 0 and column 0 are one,
/// the far row and column are zero.
/// Interior cells are left untouched.
pub fn seed_dirichlet<F: GridFloat>(grid: &mut Grid<F>) {
    let aabb = *grid.aabb();
    for coord in aabb.coord_iter().filter(|c| aabb.is_edge(c)) {
        let value = if coord[0] == 0 || coord[1] == 0 {
            F::one()
        } else {
            F::zero()
        };
        grid.set_coord(&coord, value);
    }
}
