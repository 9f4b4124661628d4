use proptest::prelude::*;
use relax::domain::*;
use relax::initial_conditions::*;
use relax::solver::*;

fn decomposition(interleaved: bool) -> Decomposition {
    if interleaved {
        Decomposition::Interleaved
    } else {
        Decomposition::Contiguous
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn boundary_is_never_written(
        size in 0usize..20,
        threads in 1usize..6,
        seed in any::<u64>(),
        interleaved in any::<bool>(),
    ) {
        let ic = ICType::Rand { max_val: 2.0, seed };
        let mut grid = dirichlet_grid::<f64>(size, ic);
        let before = grid.to_vec();
        let parameters = RelaxParameters::new(threads, 1e-3)
            .with_decomposition(decomposition(interleaved));
        relax_with(&mut grid, &parameters);
        let after = grid.to_vec();

        for (l, (a, b)) in before.iter().zip(after.iter()).enumerate() {
            let (r, c) = (l / size, l % size);
            if r == 0 || c == 0 || r == size - 1 || c == size - 1 {
                prop_assert_eq!(a.to_bits(), b.to_bits());
            }
        }
    }

    #[test]
    fn converged_grid_is_a_fixed_point(
        size in 3usize..41,
        threads in 1usize..17,
        exponent in 2i32..6,
        seed in any::<u64>(),
        interleaved in any::<bool>(),
    ) {
        let precision = 10f64.powi(-exponent);
        let ic = ICType::Rand { max_val: 1.0, seed };
        let mut grid = dirichlet_grid::<f64>(size, ic);
        let parameters = RelaxParameters::new(threads, precision)
            .with_decomposition(decomposition(interleaved));
        relax_with(&mut grid, &parameters);
        prop_assert!(
            is_fixed_point(&grid, precision),
            "residual {} with precision {}",
            max_residual(&grid),
            precision
        );
    }

    #[test]
    fn single_thread_is_deterministic(
        size in 0usize..16,
        seed in any::<u64>(),
    ) {
        let ic = ICType::Rand { max_val: 1.0, seed };
        let mut a = dirichlet_grid::<f64>(size, ic);
        let mut b = dirichlet_grid::<f64>(size, ic);
        relax(&mut a, 1, 1e-4);
        relax(&mut b, 1, 1e-4);
        let a: Vec<u64> = a.to_vec().iter().map(|v| v.to_bits()).collect();
        let b: Vec<u64> = b.to_vec().iter().map(|v| v.to_bits()).collect();
        prop_assert_eq!(a, b);
    }
}
