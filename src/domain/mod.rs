//! This module has things for managing the domain,
//! which here means the square grid being relaxed.
//! The grid owns its buffer and an AABB describing
//! the index space, so callers can work in world coordinates
//! while the kernel works on the linear buffer.

mod grid;

pub use grid::*;
