//! The relaxation engine.
//!
//! Each interior cell is replaced with the average of its four
//! axis neighbors, in place, sweep after sweep, until a full sweep
//! changes no cell by `precision` or more.
//!
//! Interior rows are split into bands, one worker per band per sweep.
//! Workers share the grid buffer without locks:
//! a cell's neighbors may already hold this sweep's value
//! or still hold last sweep's, depending on visiting order
//! and on which worker owns the neighbor's row.
//! This is deliberate. Do not turn it into double buffering,
//! the trajectory is allowed to depend on the decomposition,
//! the fixed point is not.

mod change_flag;
mod relaxation;
mod residual;
mod row_bands;
mod solver_parameters;

pub use change_flag::*;
pub use relaxation::*;
pub use residual::*;
pub use row_bands::*;
pub use solver_parameters::*;
