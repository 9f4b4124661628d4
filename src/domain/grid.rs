use crate::util::*;
use rayon::prelude::*;

/// Owned square grid, stored row major.
///
/// Cells are relaxed atomics (see [`GridFloat`]) so that the relaxation
/// workers can share one buffer for a whole sweep without locks.
/// Outside of a sweep the grid behaves like a plain owned buffer.
pub struct Grid<F: GridFloat> {
    aabb: AABB,
    size: usize,
    cells: Vec<F::Cell>,
}

impl<F: GridFloat> Grid<F> {
    /// Zero filled `size` x `size` grid.
    pub fn new(size: usize) -> Self {
        Self::from_fn(size, |_, _| F::zero())
    }

    pub fn from_fn<G: FnMut(usize, usize) -> F>(size: usize, mut f: G) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                cells.push(F::new_cell(f(row, col)));
            }
        }
        Grid {
            aabb: AABB::square(size),
            size,
            cells,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn aabb(&self) -> &AABB {
        &self.aabb
    }

    /// The cells relaxation may write, `None` when there are none.
    pub fn interior(&self) -> Option<AABB> {
        self.aabb.shrink_by(1)
    }

    #[inline]
    #[track_caller]
    pub fn get(&self, row: usize, col: usize) -> F {
        debug_assert!(row < self.size && col < self.size);
        F::load(&self.cells[row * self.size + col])
    }

    #[inline]
    #[track_caller]
    pub fn set(&mut self, row: usize, col: usize, value: F) {
        debug_assert!(row < self.size && col < self.size);
        F::store(&self.cells[row * self.size + col], value);
    }

    #[track_caller]
    pub fn view(&self, world_coord: &Coord) -> F {
        debug_assert!(
            self.aabb.contains(world_coord),
            "{:?} does not contain {:?}",
            self.aabb,
            world_coord
        );
        F::load(&self.cells[self.aabb.coord_to_linear(world_coord)])
    }

    #[track_caller]
    pub fn set_coord(&mut self, world_coord: &Coord, value: F) {
        debug_assert!(
            self.aabb.contains(world_coord),
            "{:?} does not contain {:?}",
            self.aabb,
            world_coord
        );
        F::store(&self.cells[self.aabb.coord_to_linear(world_coord)], value);
    }

    pub fn row(&self, row: usize) -> Vec<F> {
        self.cells[row * self.size..(row + 1) * self.size]
            .iter()
            .map(F::load)
            .collect()
    }

    /// Row major snapshot of the current values.
    pub fn to_vec(&self) -> Vec<F> {
        self.cells.iter().map(F::load).collect()
    }

    /// Set every cell from its (row, column), one task per chunk of rows.
    pub fn par_set_values<G: Fn(usize, usize) -> F + Send + Sync>(
        &mut self,
        f: G,
        rows_per_chunk: usize,
    ) {
        let size = self.size;
        if size == 0 {
            return;
        }
        self.cells
            .par_chunks_mut(size * rows_per_chunk.max(1))
            .enumerate()
            .for_each(|(chunk, cells)| {
                let first_row = chunk * rows_per_chunk.max(1);
                for (i, cell) in cells.iter_mut().enumerate() {
                    *cell = F::new_cell(f(first_row + i / size, i % size));
                }
            });
    }

    /// Shared access to the raw cells, used by sweep workers.
    pub(crate) fn cells(&self) -> &[F::Cell] {
        &self.cells
    }
}

impl<F: GridFloat> Clone for Grid<F> {
    fn clone(&self) -> Self {
        Grid {
            aabb: self.aabb,
            size: self.size,
            cells: self
                .cells
                .iter()
                .map(|c| F::new_cell(F::load(c)))
                .collect(),
        }
    }
}

impl<F: GridFloat> std::fmt::Debug for Grid<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("aabb", &self.aabb)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn grid_indexing_test() {
        let mut grid = Grid::<f64>::from_fn(4, |r, c| (r * 10 + c) as f64);
        assert_eq!(grid.get(2, 3), 23.0);
        assert_eq!(grid.view(&vector![3, 1]), 31.0);
        grid.set(1, 1, -1.0);
        grid.set_coord(&vector![0, 2], 7.5);
        assert_eq!(grid.row(1), vec![10.0, -1.0, 12.0, 13.0]);
        assert_eq!(grid.get(0, 2), 7.5);
        assert_eq!(grid.to_vec().len(), 16);
    }

    #[test]
    fn interior_test() {
        let grid = Grid::<f32>::new(5);
        assert_eq!(grid.interior(), Some(AABB::new(matrix![1, 3; 1, 3])));
        assert_eq!(Grid::<f32>::new(2).interior(), None);
        assert_eq!(Grid::<f32>::new(0).interior(), None);
        assert!(Grid::<f32>::new(0).to_vec().is_empty());
    }

    #[test]
    fn par_set_values_test() {
        for rows_per_chunk in [1, 2, 3, 7, 100] {
            let mut grid = Grid::<f64>::new(7);
            grid.par_set_values(|r, c| (r * 7 + c) as f64, rows_per_chunk);
            for (i, v) in grid.to_vec().into_iter().enumerate() {
                assert_eq!(v, i as f64);
            }
        }
    }

    #[test]
    fn clone_is_a_snapshot() {
        let mut grid = Grid::<f64>::new(3);
        let copy = grid.clone();
        grid.set(1, 1, 1.0);
        assert_eq!(copy.get(1, 1), 0.0);
        assert_eq!(grid.get(1, 1), 1.0);
    }
}
