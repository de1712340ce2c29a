use approx::assert_relative_eq;
use chart_composer::core::{AxisKind, DataPoint, Series, StatisticsSummary, compute_statistics};
use chart_composer::error::{ChartError, ErrorCategory};

#[test]
fn quarterly_revenue_summary_matches_hand_computed_values() {
    let summary = compute_statistics(&[1200.0, 1900.0, 800.0, 1500.0]).expect("statistics");

    assert_eq!(summary.count, 4);
    assert_relative_eq!(summary.sum, 5400.0);
    assert_relative_eq!(summary.mean, 1350.0);
    assert_relative_eq!(summary.median, 1350.0);
    assert_relative_eq!(summary.min, 800.0);
    assert_relative_eq!(summary.max, 1900.0);
    assert_relative_eq!(summary.range, 1100.0);
}

#[test]
fn variance_uses_population_formula() {
    let summary = compute_statistics(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).expect("stats");

    assert_relative_eq!(summary.variance, 4.0);
    assert_relative_eq!(summary.std_dev, 2.0);
}

#[test]
fn odd_length_median_is_middle_element() {
    let summary = compute_statistics(&[9.0, 1.0, 5.0]).expect("stats");
    assert_relative_eq!(summary.median, 5.0);
}

#[test]
fn empty_input_is_an_error_not_zeros() {
    let err = compute_statistics(&[]).expect_err("empty input must fail");
    assert_eq!(err, ChartError::EmptyInput);
    assert_eq!(err.category(), ErrorCategory::InputValidation);
}

#[test]
fn non_finite_value_reports_its_index() {
    let err = compute_statistics(&[1.0, f64::NAN, 3.0]).expect_err("nan must fail");
    assert!(matches!(err, ChartError::NonNumericInput { index: 1, .. }));
}

#[test]
fn series_with_undefined_marker_is_rejected() {
    let series = Series::new(
        AxisKind::Category,
        vec![DataPoint::value("a", 1.0), DataPoint::undefined("b")],
    )
    .expect("series");

    let err = StatisticsSummary::from_series(&series).expect_err("undefined must fail");
    assert!(matches!(err, ChartError::NonNumericInput { index: 1, .. }));
}

#[test]
fn coefficient_of_variation_is_none_for_zero_mean() {
    let summary = compute_statistics(&[-1.0, 1.0]).expect("stats");
    assert_eq!(summary.coefficient_of_variation(), None);

    let summary = compute_statistics(&[10.0, 20.0]).expect("stats");
    assert_relative_eq!(
        summary.coefficient_of_variation().expect("cv"),
        5.0 / 15.0,
        epsilon = 1e-12
    );
}
