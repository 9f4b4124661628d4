use crate::solver::Decomposition;
use crate::util::*;

/// Everything one relaxation run is configured with.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RelaxParameters<F: GridFloat> {
    /// Upper bound on workers for every sweep of this run.
    /// Zero is treated as one.
    pub threads: usize,

    /// A cell is still changing if its update moved it
    /// by at least this much.
    /// Must be positive, zero or NaN may never converge.
    pub precision: F,

    /// How interior rows are assigned to workers.
    pub decomposition: Decomposition,
}

impl<F: GridFloat> RelaxParameters<F> {
    pub fn new(threads: usize, precision: F) -> Self {
        RelaxParameters {
            threads,
            precision,
            decomposition: Decomposition::default(),
        }
    }

    pub fn with_decomposition(mut self, decomposition: Decomposition) -> Self {
        self.decomposition = decomposition;
        self
    }
}
