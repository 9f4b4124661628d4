use crate::build_info;
use crate::harness::HarnessError;
use crate::initial_conditions::*;
use crate::solver::Decomposition;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[cfg(feature = "profile-with-puffin")]
use std::sync::Mutex;

#[cfg(feature = "profile-with-puffin")]
static PUFFIN_SERVER: Mutex<Option<puffin_http::Server>> = Mutex::new(None);

/// Cell type for the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FloatType {
    F32,
    #[default]
    F64,
}

/// Times in-place stencil relaxation over a list of
/// grid sizes and thread counts.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Grid sizes (square), each one is a line in the times file.
    #[arg(short, long, value_delimiter = ',', default_value = "1000")]
    pub domain_sizes: Vec<usize>,

    /// Thread counts to time for every grid size.
    #[arg(short, long, value_delimiter = ',', default_value = "1,2,4,6,8")]
    pub threads: Vec<usize>,

    /// Stop once a sweep changes no cell by this much.
    #[arg(short, long, default_value = "0.001")]
    pub precision: f64,

    /// Grid cell type.
    #[arg(long, value_enum, default_value = "f64")]
    pub float: FloatType,

    /// How interior rows are split between threads.
    #[arg(long, value_enum, default_value = "contiguous")]
    pub decomposition: Decomposition,

    /// Times are appended here.
    #[arg(long, default_value = "times.txt")]
    pub times_file: PathBuf,

    /// Directory for grid dumps, created if missing.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Write each converged grid as CSV.
    #[arg(long, requires("output_dir"))]
    pub write_csv: bool,

    /// Write each converged grid as PNG,
    /// WARNING: we do not check image size, so be reasonable.
    #[arg(short, long, requires("output_dir"))]
    pub write_images: bool,

    /// Interior starting guess.
    #[arg(long, value_enum, default_value = "zero")]
    pub ic: ClapICType,

    /// Largest value for the rand starting guess.
    #[arg(long, default_value = "1.0")]
    pub ic_dial: f64,

    /// Seed for the rand starting guess.
    #[arg(long, default_value = "0")]
    pub seed: u64,

    /// Skip printing the center cell and residual after each run.
    #[arg(long)]
    pub no_spot_check: bool,

    /// Print build information and quit
    #[arg(long)]
    pub build_info: bool,
}

impl Default for Args {
    fn default() -> Self {
        Args::parse_from(["relax_timings"])
    }
}

impl Args {
    pub fn cli_setup(name: &str) -> Result<Self, HarnessError> {
        let args = Args::parse();

        if args.build_info {
            build_info::print_report(name);
            std::process::exit(0);
        }

        crate::harness::init_tracing();
        args.validate()?;

        if let Some(output_dir) = &args.output_dir {
            std::fs::create_dir_all(output_dir)
                .map_err(|e| HarnessError::io(output_dir, e))?;
        }

        #[cfg(feature = "profile-with-puffin")]
        {
            let server_addr =
                format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
            tracing::info!(
                "Run this to view profiling data:  puffin_viewer {server_addr}"
            );
            let server = puffin_http::Server::new(&server_addr)
                .map_err(|e| HarnessError::Profiler(e.to_string()))?;
            if let Ok(mut slot) = PUFFIN_SERVER.lock() {
                *slot = Some(server);
            }
            profiling::puffin::set_scopes_on(true);
        }

        tracing::info!(name, git = env!("GIT_DESCRIBE"), ?args, "setup done");
        Ok(args)
    }

    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.domain_sizes.is_empty() {
            return Err(HarnessError::InvalidArgs(
                "at least one domain size is required".into(),
            ));
        }
        if self.threads.is_empty() {
            return Err(HarnessError::InvalidArgs(
                "at least one thread count is required".into(),
            ));
        }
        if self.threads.contains(&0) {
            return Err(HarnessError::InvalidArgs(
                "thread counts must be positive".into(),
            ));
        }
        if !(self.precision.is_finite() && self.precision > 0.0) {
            return Err(HarnessError::InvalidArgs(format!(
                "precision must be positive and finite, got {}",
                self.precision
            )));
        }
        Ok(())
    }

    pub fn ic_type(&self) -> ICType {
        self.ic.to_ic_type(self.ic_dial, self.seed)
    }

    pub fn spot_check(&self) -> bool {
        !self.no_spot_check
    }

    fn dump_path(
        &self,
        size: usize,
        threads: usize,
        ext: &str,
    ) -> Option<PathBuf> {
        let mut result = self.output_dir.as_ref()?.clone();
        result.push(format!("relaxed_{size}_{threads:02}.{ext}"));
        Some(result)
    }

    pub fn csv_path(&self, size: usize, threads: usize) -> Option<PathBuf> {
        self.dump_path(size, threads, "csv")
    }

    pub fn image_path(&self, size: usize, threads: usize) -> Option<PathBuf> {
        self.dump_path(size, threads, "png")
    }

    pub fn finish(&self) {
        #[cfg(feature = "profile-with-puffin")]
        {
            tracing::info!("Flushing profiler");
            if let Ok(mut slot) = PUFFIN_SERVER.lock() {
                slot.take();
            }
        }
    }
}
