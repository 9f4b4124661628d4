use crate::util::indexing::*;
use crate::util::*;

/// Axis Aligned Bounding Box (AABB) over grid coordinates.
/// Each instance is inclusive of both corners.
/// This class is responsible for the indexing operations
/// where we map between a linear buffer and (row, column) coordinates.
#[derive(Hash, Debug, Copy, Clone, Eq, PartialEq)]
pub struct AABB {
    pub bounds: Bounds,
}

impl AABB {
    /// Create AABB from raw bounds.
    #[inline]
    pub fn new(bounds: Bounds) -> Self {
        AABB { bounds }
    }

    /// Square box covering `[0, size - 1]` on both axes.
    pub fn square(size: usize) -> Self {
        let inclusive = size as i32 - 1;
        AABB::new(matrix![0, inclusive; 0, inclusive])
    }

    /// Moving min to the origin, returns the exclusive size in each direction
    /// i.e. [0, 9]  would have exclusive size of 10.
    pub fn exclusive_bounds(&self) -> Coord {
        (self.bounds.column(1) - self.bounds.column(0)).add_scalar(1)
    }

    /// Return the number of coordinates contained in the instance.
    #[inline]
    pub fn buffer_size(&self) -> usize {
        if !self.check_validity() {
            return 0;
        }
        real_buffer_size(&self.exclusive_bounds())
    }

    /// Return the linear index for a coord in the instance
    pub fn coord_to_linear(&self, coord: &Coord) -> usize {
        coord_to_linear(&(coord - self.min()), &self.exclusive_bounds())
    }

    /// Return the coordinate in the instance for a given linear index.
    pub fn linear_to_coord(&self, index: usize) -> Coord {
        linear_to_coord(index, &self.exclusive_bounds()) + self.min()
    }

    /// Check whether the instance contains a coordinate.
    pub fn contains(&self, coord: &Coord) -> bool {
        for d in 0..2 {
            if coord[d] < self.bounds[(d, 0)] || coord[d] > self.bounds[(d, 1)]
            {
                return false;
            }
        }
        true
    }

    /// Return min corner.
    pub fn min(&self) -> Coord {
        self.bounds.column(0).into()
    }

    /// Return max corner
    pub fn max(&self) -> Coord {
        self.bounds.column(1).into()
    }

    /// Check that max >= min
    pub fn check_validity(&self) -> bool {
        for d in 0..2 {
            if self.bounds[(d, 0)] > self.bounds[(d, 1)] {
                return false;
            }
        }
        true
    }

    /// Shrink every side by `amount`,
    /// `None` when nothing would be left.
    pub fn shrink_by(&self, amount: i32) -> Option<Self> {
        let result = AABB::new(Bounds::from_columns(&[
            self.min().add_scalar(amount),
            self.max().add_scalar(-amount),
        ]));
        result.check_validity().then_some(result)
    }

    /// Coordinates on the outer ring of the box.
    pub fn is_edge(&self, coord: &Coord) -> bool {
        debug_assert!(self.contains(coord));
        coord[0] == self.bounds[(0, 0)]
            || coord[0] == self.bounds[(0, 1)]
            || coord[1] == self.bounds[(1, 0)]
            || coord[1] == self.bounds[(1, 1)]
    }

    /// Return iterator over contained coords
    /// in linear ordering.
    #[allow(clippy::needless_lifetimes)]
    pub fn coord_iter<'a>(&'a self) -> impl Iterator<Item = Coord> + use<'a> {
        (0..self.buffer_size()).map(|i| self.linear_to_coord(i))
    }
}
