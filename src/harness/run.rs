use crate::csv::write_csv;
use crate::harness::*;
use crate::image::write_image;
use crate::initial_conditions::*;
use crate::solver::*;
use crate::util::*;
use std::time::{Duration, Instant};

/// Timing for one (grid size, thread count) configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RunRecord {
    pub size: usize,
    pub threads: usize,
    pub elapsed: Duration,
    pub converged: bool,
}

pub fn build_pool(threads: usize) -> Result<rayon::ThreadPool, HarnessError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("relax_thread_{}", i))
        .build()
        .map_err(|source| HarnessError::ThreadPool { threads, source })
}

/// Run every configuration in `args` with the requested cell type.
pub fn run_from_args(args: &Args) -> Result<Vec<RunRecord>, HarnessError> {
    match args.float {
        FloatType::F32 => run::<f32>(args),
        FloatType::F64 => run::<f64>(args),
    }
}

/// For each grid size, time every thread count and append one
/// line to the times file.
pub fn run<F: GridFloat>(args: &Args) -> Result<Vec<RunRecord>, HarnessError> {
    args.validate()?;
    let mut log = TimesLog::open(&args.times_file)?;
    let mut records =
        Vec::with_capacity(args.domain_sizes.len() * args.threads.len());

    for &size in &args.domain_sizes {
        for &threads in &args.threads {
            let record = run_configuration::<F>(args, size, threads)?;
            log.record(record.elapsed)?;
            records.push(record);
        }
        log.end_batch()?;
    }
    Ok(records)
}

pub fn run_configuration<F: GridFloat>(
    args: &Args,
    size: usize,
    threads: usize,
) -> Result<RunRecord, HarnessError> {
    let pool = build_pool(threads)?;
    let precision = F::from_f64(args.precision);
    let parameters = RelaxParameters::new(threads, precision)
        .with_decomposition(args.decomposition);

    let mut grid = {
        profiling::scope!("grid setup");
        pool.install(|| dirichlet_grid::<F>(size, args.ic_type()))
    };

    let start = Instant::now();
    pool.install(|| {
        relax_with(&mut grid, &parameters);
    });
    let elapsed = start.elapsed();
    profiling::finish_frame!();

    tracing::info!(
        size,
        threads,
        seconds = elapsed.as_secs_f64(),
        "Time taken: {} seconds.",
        elapsed.as_secs_f64()
    );

    let converged = if args.spot_check() {
        match spot_check(&grid, precision) {
            Some(check) => {
                tracing::info!("{check}");
                if !check.converged {
                    tracing::warn!(
                        size,
                        threads,
                        max_residual = check.max_residual.as_f64(),
                        "grid is not a fixed point within precision"
                    );
                }
                check.converged
            }
            None => true,
        }
    } else {
        is_fixed_point(&grid, precision)
    };

    if args.write_csv {
        if let Some(path) = args.csv_path(size, threads) {
            write_csv(&grid, &path)?;
        }
    }
    if args.write_images {
        if let Some(path) = args.image_path(size, threads) {
            write_image(&grid, &path)?;
        }
    }

    Ok(RunRecord {
        size,
        threads,
        elapsed,
        converged,
    })
}
