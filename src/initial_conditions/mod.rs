mod dirichlet;
pub mod rand;

use crate::domain::*;
use crate::util::*;
use clap::ValueEnum;
pub use dirichlet::*;

/// Starting guess for the interior cells.
/// Boundary cells are always seeded by [`seed_dirichlet`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum ICType {
    /// Interior left at zero.
    #[default]
    Zero,
    /// Uniform values in `[0, max_val)`.
    Rand { max_val: f64, seed: u64 },
}

#[derive(Copy, Clone, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum ClapICType {
    #[default]
    Zero,
    Rand,
}

impl ClapICType {
    pub fn to_ic_type(&self, dial: f64, seed: u64) -> ICType {
        match self {
            ClapICType::Zero => ICType::Zero,
            ClapICType::Rand => ICType::Rand {
                max_val: dial,
                seed,
            },
        }
    }
}

pub fn generate_ic<F: GridFloat>(grid: &mut Grid<F>, ic_type: ICType) {
    match ic_type {
        // Special case, grids are zero initialized
        ICType::Zero => {}
        ICType::Rand { max_val, seed } => {
            rand::rand_ic(grid, max_val, seed);
        }
    }
}

/// Allocate a grid, fill the interior from `ic_type`,
/// then seed the fixed boundary.
pub fn dirichlet_grid<F: GridFloat>(size: usize, ic_type: ICType) -> Grid<F> {
    let mut grid = Grid::new(size);
    generate_ic(&mut grid, ic_type);
    seed_dirichlet(&mut grid);
    grid
}
