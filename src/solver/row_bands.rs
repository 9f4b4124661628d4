use clap::ValueEnum;
use std::iter::StepBy;
use std::ops::Range;

/// How interior rows are split between workers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Decomposition {
    /// Each worker gets one contiguous run of rows,
    /// run lengths differ by at most one.
    #[default]
    Contiguous,

    /// Worker `w` of `k` gets rows `1 + w`, `1 + w + k`, ...
    Interleaved,
}

/// The interior rows one worker processes in a sweep.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RowBand {
    pub start: usize,
    pub end: usize,
    pub step: usize,
}

impl RowBand {
    pub fn rows(&self) -> StepBy<Range<usize>> {
        (self.start..self.end).step_by(self.step)
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Split the interior rows `1..size - 1` into at most `threads` bands.
/// Every interior row lands in exactly one band and no band is empty.
pub fn row_bands(
    size: usize,
    threads: usize,
    decomposition: Decomposition,
) -> Vec<RowBand> {
    if size < 3 {
        return Vec::new();
    }
    let interior_rows = size - 2;
    let bands = threads.clamp(1, interior_rows);

    match decomposition {
        Decomposition::Contiguous => {
            let base = interior_rows / bands;
            let remainder = interior_rows % bands;
            let mut result = Vec::with_capacity(bands);
            let mut start = 1;
            for b in 0..bands {
                let len = base + usize::from(b < remainder);
                result.push(RowBand {
                    start,
                    end: start + len,
                    step: 1,
                });
                start += len;
            }
            debug_assert_eq!(start, size - 1);
            result
        }
        Decomposition::Interleaved => (0..bands)
            .map(|w| RowBand {
                start: 1 + w,
                end: size - 1,
                step: bands,
            })
            .collect(),
    }
}
