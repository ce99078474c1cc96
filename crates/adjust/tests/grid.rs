use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use themis_adjust::{AdjustConfig, Grouping, SeriesGrid, adjust};
use themis_methods::Kind;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const N_YEARS: usize = 5;
const N_TIME: usize = N_YEARS * 360;

/// One noisy seasonal column shifted by a per-cell offset.
fn column(seed: u64, offset: f64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 1.0).expect("valid normal params");
    (0..N_TIME)
        .map(|t| {
            let doy = (t % 360) as f64;
            let season = 10.0 * (2.0 * std::f64::consts::PI * doy / 360.0).sin();
            15.0 + offset + season + noise.sample(&mut rng)
        })
        .collect()
}

/// Month key (1..=12) per time step of a 360-day calendar.
fn month_keys() -> Vec<u32> {
    (0..N_TIME).map(|t| ((t % 360) / 30 + 1) as u32).collect()
}

/// A 2x3 grid of independent seasonal columns, plus the per-cell columns.
fn gridded(seed: u64, bias: f64) -> (SeriesGrid, Vec<Vec<f64>>) {
    let cell_shape = vec![2, 3];
    let n_cells: usize = cell_shape.iter().product();
    let mut columns = Vec::with_capacity(n_cells);
    let mut values = Vec::with_capacity(n_cells * N_TIME);
    for cell in 0..n_cells {
        let col = column(seed + cell as u64, bias + cell as f64 * 0.5);
        values.extend(col.iter().copied());
        columns.push(col);
    }
    (SeriesGrid::new(values, N_TIME, cell_shape).unwrap(), columns)
}

// ---------------------------------------------------------------------------
// Grid consistency
// ---------------------------------------------------------------------------

/// Adjusting a gridded array must give, at every cell, exactly the result
/// of adjusting that cell's 1-D column on its own.
#[test]
fn grid_matches_independent_columns() {
    let (obs, obs_cols) = gridded(100, 0.0);
    let (simh, simh_cols) = gridded(100, -2.0);
    let (simp, simp_cols) = gridded(200, -2.0);
    let grouping = Grouping::new(month_keys(), month_keys());

    for method in [
        "linear_scaling",
        "variance_scaling",
        "delta_method",
        "quantile_mapping",
        "detrended_quantile_mapping",
        "quantile_delta_mapping",
    ] {
        let config = AdjustConfig::new(Kind::Additive).with_n_quantiles(50);
        let full = adjust(method, &obs, &simh, &simp, Some(&grouping), &config).unwrap();

        for cell in 0..obs.cell_count() {
            let obs_1d = SeriesGrid::from_series(obs_cols[cell].clone()).unwrap();
            let simh_1d = SeriesGrid::from_series(simh_cols[cell].clone()).unwrap();
            let simp_1d = SeriesGrid::from_series(simp_cols[cell].clone()).unwrap();
            let single = adjust(method, &obs_1d, &simh_1d, &simp_1d, Some(&grouping), &config)
                .unwrap();
            assert_eq!(
                full.series(cell),
                single.series(0),
                "{method}: cell {cell} differs from its independent 1-D adjustment"
            );
        }
    }
}

#[test]
fn output_preserves_grid_shape() {
    let (obs, _) = gridded(300, 0.0);
    let (simh, _) = gridded(300, -1.0);
    let (simp, _) = gridded(400, -1.0);
    let config = AdjustConfig::new(Kind::Additive).with_n_quantiles(25);

    let result = adjust("quantile_mapping", &obs, &simh, &simp, None, &config).unwrap();
    assert_eq!(result.n_time(), simp.n_time());
    assert_eq!(result.cell_shape(), simp.cell_shape());

    let delta = adjust("delta_method", &obs, &simh, &simp, None, &config).unwrap();
    assert_eq!(delta.n_time(), obs.n_time());
    assert_eq!(delta.cell_shape(), simp.cell_shape());
}

// ---------------------------------------------------------------------------
// Parallel dispatch
// ---------------------------------------------------------------------------

/// Worker scheduling must not influence results: parallel and sequential
/// dispatch are bit-identical.
#[test]
fn parallel_matches_sequential() {
    let (obs, _) = gridded(500, 0.0);
    let (simh, _) = gridded(500, -2.0);
    let (simp, _) = gridded(600, -2.0);
    let grouping = Grouping::new(month_keys(), month_keys());

    for method in ["quantile_mapping", "quantile_delta_mapping", "linear_scaling"] {
        let sequential = adjust(
            method,
            &obs,
            &simh,
            &simp,
            Some(&grouping),
            &AdjustConfig::new(Kind::Additive).with_n_quantiles(50),
        )
        .unwrap();
        let parallel = adjust(
            method,
            &obs,
            &simh,
            &simp,
            Some(&grouping),
            &AdjustConfig::new(Kind::Additive)
                .with_n_quantiles(50)
                .with_n_jobs(4),
        )
        .unwrap();
        assert_eq!(
            sequential.values(),
            parallel.values(),
            "{method}: parallel dispatch changed the output"
        );
    }
}

/// A unit failure inside parallel dispatch aborts the whole invocation.
#[test]
fn parallel_failure_aborts_invocation() {
    let (obs, _) = gridded(700, 0.0);
    let (simh, _) = gridded(700, -1.0);
    let (simp, _) = gridded(800, -1.0);
    let config = AdjustConfig::new(Kind::Multiplicative).with_n_jobs(4);

    // Variance scaling rejects the multiplicative kind in every unit.
    let err = adjust("variance_scaling", &obs, &simh, &simp, None, &config).unwrap_err();
    assert!(err.to_string().contains("not available"));
}
