use num_traits::Float;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

/// Floating point types a grid can hold.
///
/// Cells live in atomic words holding the float's bits.
/// All accesses are `Relaxed`, which lowers to plain loads and stores,
/// while still giving the unsynchronized neighbor reads between
/// workers a defined meaning.
pub trait GridFloat:
    Float
    + Send
    + Sync
    + Default
    + std::fmt::Debug
    + std::fmt::Display
    + 'static
{
    type Cell: Send + Sync + std::fmt::Debug;

    fn new_cell(value: Self) -> Self::Cell;

    fn load(cell: &Self::Cell) -> Self;

    fn store(cell: &Self::Cell, value: Self);

    /// Lossy conversion for output.
    fn as_f64(self) -> f64;

    /// Conversion for constants and configuration.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_grid_float {
    ($float:ty, $atomic:ty) => {
        impl GridFloat for $float {
            type Cell = $atomic;

            #[inline]
            fn new_cell(value: Self) -> Self::Cell {
                <$atomic>::new(value.to_bits())
            }

            #[inline(always)]
            fn load(cell: &Self::Cell) -> Self {
                <$float>::from_bits(cell.load(Ordering::Relaxed))
            }

            #[inline(always)]
            fn store(cell: &Self::Cell, value: Self) {
                cell.store(value.to_bits(), Ordering::Relaxed)
            }

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $float
            }
        }
    };
}

impl_grid_float!(f32, AtomicU32);
impl_grid_float!(f64, AtomicU64);
