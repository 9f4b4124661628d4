use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a timing run.
/// The relaxation itself never fails, these all come from setup and output.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("failed to build a thread pool with {threads} threads")]
    ThreadPool {
        threads: usize,
        #[source]
        source: rayon::ThreadPoolBuildError,
    },

    #[error("i/o error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write image {}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: ::image::ImageError,
    },

    #[error("profiler: {0}")]
    Profiler(String),
}

impl HarnessError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HarnessError::Io {
            path: path.into(),
            source,
        }
    }
}
