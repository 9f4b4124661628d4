pub mod build_info;
pub mod csv;
pub mod domain;
pub mod harness;
pub mod image;
pub mod initial_conditions;
pub mod solver;
pub mod util;
