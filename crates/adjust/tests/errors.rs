use themis_adjust::{AdjustConfig, AdjustError, Grouping, SeriesGrid, adjust, get_function};
use themis_methods::{Kind, MethodError};

fn series(values: &[f64]) -> SeriesGrid {
    SeriesGrid::from_series(values.to_vec()).unwrap()
}

fn sample() -> SeriesGrid {
    series(&[1.0, 2.0, 3.0, 4.0, 5.0])
}

// ---------------------------------------------------------------------------
// Unknown method
// ---------------------------------------------------------------------------

#[test]
fn get_function_unknown_method() {
    let err = get_function("NOT_A_METHOD").unwrap_err();
    assert!(matches!(err, AdjustError::UnknownMethod { .. }));
    assert_eq!(err.to_string(), "unknown method 'NOT_A_METHOD'");
}

#[test]
fn adjust_unknown_method() {
    let grid = sample();
    let config = AdjustConfig::new(Kind::Additive);
    let err = adjust("distribution_mapping", &grid, &grid, &grid, None, &config).unwrap_err();
    assert!(matches!(err, AdjustError::UnknownMethod { .. }));
}

// ---------------------------------------------------------------------------
// Not implemented
// ---------------------------------------------------------------------------

#[test]
fn empirical_quantile_mapping_resolves_but_fails_on_invocation() {
    let method = get_function("empirical_quantile_mapping").unwrap();
    let data = [1.0, 2.0, 3.0];
    let config = AdjustConfig::new(Kind::Additive);
    let err = method.apply_series(&data, &data, &data, &config).unwrap_err();
    assert!(matches!(err, MethodError::NotImplemented { .. }));
}

#[test]
fn adjust_empirical_quantile_mapping_fails() {
    let grid = sample();
    let config = AdjustConfig::new(Kind::Additive);
    let err = adjust(
        "empirical_quantile_mapping",
        &grid,
        &grid,
        &grid,
        None,
        &config,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AdjustError::Method(MethodError::NotImplemented { .. })
    ));
}

// ---------------------------------------------------------------------------
// Unsupported kinds
// ---------------------------------------------------------------------------

#[test]
fn variance_scaling_rejects_multiplicative() {
    let grid = sample();
    let config = AdjustConfig::new(Kind::Multiplicative);
    let err = adjust("variance_scaling", &grid, &grid, &grid, None, &config).unwrap_err();
    assert!(matches!(
        err,
        AdjustError::Method(MethodError::UnsupportedKind { .. })
    ));
}

#[test]
fn kind_parsing_rejects_unknown_spellings() {
    for bad in ["/", "-", "divisive", ""] {
        let err = bad.parse::<Kind>().unwrap_err();
        assert!(matches!(err, MethodError::UnknownKind { .. }));
    }
    assert_eq!("+".parse::<Kind>().unwrap(), Kind::Additive);
    assert_eq!("*".parse::<Kind>().unwrap(), Kind::Multiplicative);
}

// ---------------------------------------------------------------------------
// Grouping failures
// ---------------------------------------------------------------------------

#[test]
fn detrended_quantile_mapping_requires_group() {
    let grid = sample();
    let config = AdjustConfig::new(Kind::Additive);
    let err = adjust(
        "detrended_quantile_mapping",
        &grid,
        &grid,
        &grid,
        None,
        &config,
    )
    .unwrap_err();
    assert!(matches!(err, AdjustError::GroupRequired { .. }));
}

#[test]
fn future_only_key_rejected() {
    let grid = sample();
    let grouping = Grouping::new(vec![1; 5], vec![1, 1, 1, 1, 9]);
    let config = AdjustConfig::new(Kind::Additive);
    let err = adjust("linear_scaling", &grid, &grid, &grid, Some(&grouping), &config)
        .unwrap_err();
    assert!(matches!(err, AdjustError::MissingGroup { key: 9, .. }));
}

#[test]
fn delta_method_needs_future_steps_for_every_key() {
    let grid = sample();
    // Key 2 exists historically but never in the projection.
    let grouping = Grouping::new(vec![1, 1, 1, 2, 2], vec![1; 5]);
    let config = AdjustConfig::new(Kind::Additive);
    let err = adjust("delta_method", &grid, &grid, &grid, Some(&grouping), &config)
        .unwrap_err();
    assert!(matches!(err, AdjustError::MissingGroup { key: 2, .. }));

    // Non-delta methods simply leave nothing to correct for key 2.
    let ok = adjust("linear_scaling", &grid, &grid, &grid, Some(&grouping), &config);
    assert!(ok.is_ok());
}

// ---------------------------------------------------------------------------
// Shape and config failures
// ---------------------------------------------------------------------------

#[test]
fn cell_shape_mismatch_rejected() {
    let obs = SeriesGrid::new(vec![0.0; 12], 3, vec![4]).unwrap();
    let simh = SeriesGrid::new(vec![0.0; 12], 3, vec![4]).unwrap();
    let simp = SeriesGrid::new(vec![0.0; 12], 3, vec![2, 2]).unwrap();
    let config = AdjustConfig::new(Kind::Additive);
    let err = adjust("linear_scaling", &obs, &simh, &simp, None, &config).unwrap_err();
    assert!(matches!(err, AdjustError::CellShapeMismatch { .. }));
}

#[test]
fn invalid_config_rejected() {
    let grid = sample();
    let config = AdjustConfig::new(Kind::Additive).with_n_quantiles(0);
    let err = adjust("quantile_mapping", &grid, &grid, &grid, None, &config).unwrap_err();
    assert!(matches!(err, AdjustError::InvalidConfig { .. }));
}
