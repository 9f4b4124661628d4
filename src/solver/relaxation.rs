use crate::domain::*;
use crate::solver::*;
use crate::util::*;

/// Relax `grid` in place until a full sweep changes no interior cell
/// by `precision` or more, using up to `threads` workers per sweep.
///
/// Returns the same grid.
/// Grids smaller than 3x3 have no interior and are returned untouched.
/// Boundary cells are read, never written.
///
/// Workers are spawned onto the current rayon pool, so the pool
/// the call runs in (see `ThreadPool::install`) also bounds parallelism.
/// There is no iteration cap: `precision <= 0` or NaN may not terminate.
pub fn relax<F: GridFloat>(
    grid: &mut Grid<F>,
    threads: usize,
    precision: F,
) -> &mut Grid<F> {
    relax_with(grid, &RelaxParameters::new(threads, precision))
}

/// [`relax`] with every parameter spelled out.
pub fn relax_with<'a, F: GridFloat>(
    grid: &'a mut Grid<F>,
    parameters: &RelaxParameters<F>,
) -> &'a mut Grid<F> {
    run_sweeps(grid, parameters);
    grid
}

/// Returns the number of sweeps performed.
pub(crate) fn run_sweeps<F: GridFloat>(
    grid: &mut Grid<F>,
    parameters: &RelaxParameters<F>,
) -> usize {
    let size = grid.size();
    if size < 3 {
        return 0;
    }
    profiling::scope!("relax");

    let bands = row_bands(size, parameters.threads, parameters.decomposition);
    let precision = parameters.precision;
    let grid: &Grid<F> = grid;
    let mut changed = ChangeFlag::new();
    let mut sweeps = 0;
    loop {
        changed.reset();
        sweep(grid, &bands, precision, &changed);
        sweeps += 1;
        tracing::trace!(sweeps, changed = changed.is_raised(), "sweep done");
        if !changed.is_raised() {
            break;
        }
    }

    tracing::debug!(
        size,
        bands = bands.len(),
        decomposition = ?parameters.decomposition,
        sweeps,
        "relaxation converged"
    );
    sweeps
}

/// One pass over every interior cell.
/// Returns after every band has finished.
fn sweep<F: GridFloat>(
    grid: &Grid<F>,
    bands: &[RowBand],
    precision: F,
    changed: &ChangeFlag,
) {
    profiling::scope!("relax: sweep");
    for_each_band(bands, |band| relax_band(grid, band, precision, changed));
}

/// Run `work` once per band, one task per band on the current pool.
/// A single band runs on the calling thread.
fn for_each_band<G: Fn(&RowBand) + Sync>(bands: &[RowBand], work: G) {
    match bands {
        [band] => work(band),
        _ => rayon::scope(|s| {
            let work = &work;
            for band in bands {
                s.spawn(move |_| {
                    profiling::scope!("relax: band callback");
                    work(band);
                });
            }
        }),
    }
}

#[inline]
fn relax_band<F: GridFloat>(
    grid: &Grid<F>,
    band: &RowBand,
    precision: F,
    changed: &ChangeFlag,
) {
    let n = grid.size();
    let cells = grid.cells();
    let four = F::from_f64(4.0);
    let mut raised = false;

    for i in band.rows() {
        // Rows i - 1, i, i + 1.
        let rows = &cells[(i - 1) * n..(i + 2) * n];
        let (up, rest) = rows.split_at(n);
        let (current, down) = rest.split_at(n);

        for j in 1..n - 1 {
            let old = F::load(&current[j]);
            let new = (F::load(&up[j])
                + F::load(&down[j])
                + F::load(&current[j - 1])
                + F::load(&current[j + 1]))
                / four;
            F::store(&current[j], new);

            if !raised && (new - old).abs() >= precision {
                raised = true;
                changed.raise();
            }
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::initial_conditions::*;
    use float_cmp::assert_approx_eq;

    /// Plain sequential relaxation over nested vectors.
    fn reference_relax(grid: &mut [Vec<f64>], precision: f64) -> usize {
        let n = grid.len();
        let mut sweeps = 0;
        let mut changed = true;
        while changed {
            changed = false;
            for i in 1..n - 1 {
                for j in 1..n - 1 {
                    let old = grid[i][j];
                    grid[i][j] = (grid[i - 1][j]
                        + grid[i + 1][j]
                        + grid[i][j - 1]
                        + grid[i][j + 1])
                        / 4.0;
                    if !changed && (grid[i][j] - old).abs() >= precision {
                        changed = true;
                    }
                }
            }
            sweeps += 1;
        }
        sweeps
    }

    fn seeded_rows(n: usize) -> Vec<Vec<f64>> {
        let mut rows = vec![vec![0.0; n]; n];
        for i in 0..n {
            rows[0][i] = 1.0;
            rows[i][0] = 1.0;
        }
        rows
    }

    #[test]
    fn single_worker_matches_reference() {
        for n in [3, 4, 5, 9, 16] {
            let mut expected = seeded_rows(n);
            let expected_sweeps = reference_relax(&mut expected, 0.001);

            let mut grid = dirichlet_grid::<f64>(n, ICType::Zero);
            let sweeps =
                run_sweeps(&mut grid, &RelaxParameters::new(1, 0.001));
            assert_eq!(sweeps, expected_sweeps);
            for i in 0..n {
                for j in 0..n {
                    assert_eq!(
                        grid.get(i, j).to_bits(),
                        expected[i][j].to_bits()
                    );
                }
            }
        }
    }

    #[test]
    fn converged_grid_takes_one_sweep() {
        let mut grid = dirichlet_grid::<f64>(12, ICType::Zero);
        let parameters = RelaxParameters::new(1, 1e-4);
        assert!(run_sweeps(&mut grid, &parameters) > 1);
        let before = grid.to_vec();
        assert_eq!(run_sweeps(&mut grid, &parameters), 1);
        for (a, b) in before.iter().zip(grid.to_vec()) {
            assert!((a - b).abs() < 1e-4);
        }
    }

    #[test]
    fn small_grids_untouched() {
        for n in 0..3 {
            let mut grid =
                Grid::<f64>::from_fn(n, |r, c| (r * 3 + c) as f64 + 0.5);
            let before = grid.to_vec();
            let parameters = RelaxParameters::new(4, 0.001);
            assert_eq!(run_sweeps(&mut grid, &parameters), 0);
            let after = grid.to_vec();
            assert_eq!(before.len(), after.len());
            for (a, b) in before.iter().zip(after.iter()) {
                assert_eq!(a.to_bits(), b.to_bits());
            }
        }
    }

    #[test]
    fn three_by_three_single_cell() {
        let mut grid = dirichlet_grid::<f64>(3, ICType::Zero);
        relax(&mut grid, 1, 0.001);
        // (1 + 0 + 1 + 0) / 4
        assert_approx_eq!(f64, grid.get(1, 1), 0.5);
    }

    #[test]
    fn zero_threads_runs_single_worker() {
        let mut a = dirichlet_grid::<f64>(10, ICType::Zero);
        let mut b = dirichlet_grid::<f64>(10, ICType::Zero);
        relax(&mut a, 0, 0.001);
        relax(&mut b, 1, 0.001);
        assert_eq!(a.to_vec(), b.to_vec());
    }

    #[test]
    fn f32_grid_converges() {
        let mut grid = dirichlet_grid::<f32>(10, ICType::Zero);
        relax(&mut grid, 3, 0.001f32);
        assert!(is_fixed_point(&grid, 0.001f32));
        assert_eq!(grid.get(0, 5), 1.0);
        assert_eq!(grid.get(9, 5), 0.0);
    }

    #[test]
    fn band_tasks_bounded_by_pool() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let bands = row_bands(40, 6, Decomposition::Contiguous);
        assert_eq!(bands.len(), 6);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(2)
            .build()
            .unwrap();
        let running = AtomicUsize::new(0);
        let high_water = AtomicUsize::new(0);
        let calls = AtomicUsize::new(0);
        pool.install(|| {
            for_each_band(&bands, |_| {
                let now = running.fetch_add(1, Ordering::SeqCst) + 1;
                high_water.fetch_max(now, Ordering::SeqCst);
                std::thread::sleep(std::time::Duration::from_millis(5));
                running.fetch_sub(1, Ordering::SeqCst);
                calls.fetch_add(1, Ordering::SeqCst);
            });
        });
        assert_eq!(calls.load(Ordering::SeqCst), 6);
        assert!(high_water.load(Ordering::SeqCst) <= 2);
    }

    #[test]
    fn single_band_runs_inline() {
        let bands = row_bands(10, 1, Decomposition::Contiguous);
        let caller = std::thread::current().id();
        for_each_band(&bands, |_| {
            assert_eq!(std::thread::current().id(), caller);
        });
    }

    #[test]
    fn returns_same_grid() {
        let mut grid = dirichlet_grid::<f64>(6, ICType::Zero);
        let address = &grid as *const Grid<f64>;
        let returned = relax(&mut grid, 2, 0.01);
        assert_eq!(returned as *const Grid<f64>, address);
    }
}
