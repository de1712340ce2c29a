use chart_composer::core::{Comparator, FilterSpec, Series, Transform};
use proptest::prelude::*;

proptest! {
    #[test]
    fn cumulative_running_total_property(
        values in prop::collection::vec(-10_000.0f64..10_000.0, 1..48)
    ) {
        let series = Series::from_values(&values).expect("series");
        let totals = Transform::Cumulative.apply(&series).expect("cumulative").scalars();

        prop_assert_eq!(totals.len(), values.len());
        let mut expected = 0.0;
        for (total, value) in totals.iter().zip(&values) {
            expected += value;
            prop_assert_eq!(*total, Some(expected));
        }
        prop_assert_eq!(series.scalars(), values.iter().copied().map(Some).collect::<Vec<_>>());
    }

    #[test]
    fn unit_window_moving_average_is_identity_property(
        values in prop::collection::vec(-10_000.0f64..10_000.0, 1..48)
    ) {
        let series = Series::from_values(&values).expect("series");
        let smoothed = Transform::moving_average(1).apply(&series).expect("window 1");

        prop_assert_eq!(smoothed, series);
    }

    #[test]
    fn trimmed_moving_average_length_property(
        values in prop::collection::vec(-100.0f64..100.0, 1..48),
        window_factor in 0.0f64..1.0
    ) {
        let window = 1 + (window_factor * (values.len() - 1) as f64) as usize;
        let series = Series::from_values(&values).expect("series");
        let smoothed = Transform::moving_average(window).apply(&series).expect("valid window");

        prop_assert_eq!(smoothed.len(), values.len() - window + 1);
        prop_assert!(smoothed.scalars().iter().all(Option::is_some));
    }

    #[test]
    fn greater_than_filter_keeps_order_property(
        values in prop::collection::vec(-100.0f64..100.0, 1..48),
        threshold in -100.0f64..100.0
    ) {
        let series = Series::from_values(&values).expect("series");
        let filter = Transform::Filter(FilterSpec::new(Comparator::GreaterThan, threshold));
        let kept = filter.apply(&series).expect("filter").scalars();

        let expected: Vec<Option<f64>> = values
            .iter()
            .copied()
            .filter(|v| *v > threshold)
            .map(Some)
            .collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn percentage_change_after_zero_is_undefined_property(
        before in prop::collection::vec(1.0f64..100.0, 0..8),
        after in prop::collection::vec(1.0f64..100.0, 1..8)
    ) {
        let zero_at = before.len();
        let values: Vec<f64> = before.into_iter().chain([0.0]).chain(after).collect();
        let series = Series::from_values(&values).expect("series");
        let changes = Transform::PercentageChange.apply(&series).expect("pct").scalars();

        prop_assert_eq!(changes.len(), values.len());
        prop_assert_eq!(changes[0], None);
        prop_assert_eq!(changes[zero_at + 1], None);
        if zero_at + 2 < values.len() {
            prop_assert!(changes[zero_at + 2].is_some());
        }
    }
}
