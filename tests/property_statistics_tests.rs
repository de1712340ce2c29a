use chart_composer::core::compute_statistics;
use proptest::prelude::*;

proptest! {
    #[test]
    fn statistics_bounds_property(
        values in prop::collection::vec(-1_000_000.0f64..1_000_000.0, 1..64)
    ) {
        let summary = compute_statistics(&values).expect("finite input");

        prop_assert_eq!(summary.count, values.len());
        prop_assert!(summary.min <= summary.mean && summary.mean <= summary.max);
        prop_assert!(summary.min <= summary.median && summary.median <= summary.max);
        prop_assert!(summary.variance >= 0.0);
        prop_assert!((summary.std_dev * summary.std_dev - summary.variance).abs()
            <= 1e-6 * summary.variance.max(1.0));
        prop_assert_eq!(summary.range, summary.max - summary.min);
    }

    #[test]
    fn statistics_order_independence_property(
        values in prop::collection::vec(-1_000.0f64..1_000.0, 1..32)
    ) {
        let mut reversed = values.clone();
        reversed.reverse();

        let forward = compute_statistics(&values).expect("forward");
        let backward = compute_statistics(&reversed).expect("backward");

        prop_assert_eq!(forward.median, backward.median);
        prop_assert_eq!(forward.min, backward.min);
        prop_assert_eq!(forward.max, backward.max);
        prop_assert!((forward.mean - backward.mean).abs() <= 1e-9);
    }

    #[test]
    fn statistics_constant_series_property(
        value in -1_000.0f64..1_000.0,
        len in 1usize..32
    ) {
        let summary = compute_statistics(&vec![value; len]).expect("constant");

        prop_assert_eq!(summary.mean, value);
        prop_assert_eq!(summary.median, value);
        prop_assert_eq!(summary.std_dev, 0.0);
    }
}
