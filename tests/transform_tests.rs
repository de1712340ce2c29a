use approx::assert_relative_eq;
use chart_composer::core::{
    AxisKind, Comparator, DataPoint, Dataset, FilterSpec, Series, Transform, TransformPipeline,
    WindowEdge, filter_aligned,
};
use chart_composer::error::{ChartError, ErrorCategory};

fn series(values: &[f64]) -> Series {
    Series::from_values(values).expect("valid series")
}

#[test]
fn cumulative_keeps_length_and_ends_at_total() {
    let input = series(&[3.0, -1.0, 4.0, 1.5]);
    let output = Transform::Cumulative.apply(&input).expect("cumulative");

    assert_eq!(output.len(), input.len());
    assert_eq!(
        output.scalars(),
        vec![Some(3.0), Some(2.0), Some(6.0), Some(7.5)]
    );
    assert_eq!(output.labels().collect::<Vec<_>>(), vec!["1", "2", "3", "4"]);
}

#[test]
fn cumulative_does_not_mutate_input() {
    let input = series(&[1.0, 2.0]);
    let before = input.clone();
    let _ = Transform::Cumulative.apply(&input).expect("cumulative");
    assert_eq!(input, before);
}

#[test]
fn moving_average_trims_leading_points_by_default() {
    let output = Transform::moving_average(3)
        .apply(&series(&[1.0, 2.0, 3.0, 4.0, 5.0]))
        .expect("moving average");

    assert_eq!(output.scalars(), vec![Some(2.0), Some(3.0), Some(4.0)]);
    assert_eq!(output.labels().collect::<Vec<_>>(), vec!["3", "4", "5"]);
}

#[test]
fn moving_average_edge_policies_keep_length() {
    let input = series(&[2.0, 4.0, 6.0]);

    let padded = Transform::MovingAverage {
        window: 2,
        edge: WindowEdge::PadUndefined,
    }
    .apply(&input)
    .expect("padded");
    assert_eq!(padded.scalars(), vec![None, Some(3.0), Some(5.0)]);

    let partial = Transform::MovingAverage {
        window: 2,
        edge: WindowEdge::Partial,
    }
    .apply(&input)
    .expect("partial");
    assert_eq!(partial.scalars(), vec![Some(2.0), Some(3.0), Some(5.0)]);
}

#[test]
fn moving_average_window_one_is_identity() {
    let input = series(&[5.0, 1.0, 9.0]);
    let output = Transform::moving_average(1).apply(&input).expect("w=1");
    assert_eq!(output, input);
}

#[test]
fn moving_average_rejects_out_of_range_windows() {
    let input = series(&[1.0, 2.0]);

    let err = Transform::moving_average(3).apply(&input).expect_err("w > len");
    assert_eq!(err, ChartError::InvalidWindow { window: 3, len: 2 });
    assert_eq!(err.category(), ErrorCategory::ParameterValidation);

    let err = Transform::moving_average(0).apply(&input).expect_err("w = 0");
    assert_eq!(err, ChartError::InvalidWindow { window: 0, len: 2 });
}

#[test]
fn percentage_change_marks_zero_predecessor_as_undefined_and_continues() {
    let output = Transform::PercentageChange
        .apply(&series(&[100.0, 0.0, 50.0, 75.0]))
        .expect("percentage change");
    let values = output.scalars();

    assert_eq!(values[0], None);
    assert_relative_eq!(values[1].expect("defined"), -100.0);
    assert_eq!(values[2], None);
    assert_relative_eq!(values[3].expect("defined"), 50.0);
}

#[test]
fn percentage_change_serializes_undefined_as_null() {
    let output = Transform::PercentageChange
        .apply(&series(&[1.0, 2.0]))
        .expect("percentage change");
    let json = serde_json::to_value(&output).expect("json");

    assert_eq!(json["points"][0]["value"], serde_json::Value::Null);
    assert_eq!(json["points"][1]["value"], serde_json::json!(100.0));
}

#[test]
fn filter_keeps_matching_points_in_order() {
    let input = series(&[5.0, 12.0, 3.0, 20.0, 12.0]);
    let spec = FilterSpec::new(Comparator::GreaterThan, 10.0);
    let output = Transform::Filter(spec).apply(&input).expect("filter");

    assert_eq!(output.scalars(), vec![Some(12.0), Some(20.0), Some(12.0)]);
    assert_eq!(output.labels().collect::<Vec<_>>(), vec!["2", "4", "5"]);
}

#[test]
fn filter_comparators_parse_only_known_spellings() {
    for comparator in Comparator::ALL {
        assert_eq!(comparator.as_str().parse::<Comparator>(), Ok(comparator));
    }
    let err = FilterSpec::parse("equals", 1.0).expect_err("unknown spelling");
    assert_eq!(err, ChartError::UnknownComparator("equals".to_owned()));
}

#[test]
fn transforms_reject_candlestick_points() {
    let input = Series::new(
        AxisKind::Category,
        vec![DataPoint::Ohlc {
            label: "d1".to_owned(),
            open: 1.0,
            high: 2.0,
            low: 0.5,
            close: 1.5,
        }],
    )
    .expect("ohlc series");

    let err = Transform::Cumulative.apply(&input).expect_err("ohlc");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn transforms_preserve_x_on_linear_series() {
    let input = Series::linear(vec![DataPoint::xy(0.5, 1.0), DataPoint::xy(1.5, 3.0)])
        .expect("linear");
    let output = Transform::Cumulative.apply(&input).expect("cumulative");

    assert_eq!(
        output.points(),
        &[DataPoint::xy(0.5, 1.0), DataPoint::xy(1.5, 4.0)]
    );
}

#[test]
fn pipeline_applies_steps_left_to_right() {
    let pipeline = TransformPipeline::new()
        .then(Transform::Cumulative)
        .then(Transform::moving_average(2));
    let output = pipeline.apply(&series(&[1.0, 1.0, 1.0])).expect("pipeline");

    assert_eq!(pipeline.steps().len(), 2);
    assert_eq!(output.scalars(), vec![Some(1.5), Some(2.5)]);
}

#[test]
fn aligned_filter_uses_first_dataset_labels() {
    let revenue = Dataset::new(
        "revenue",
        Series::categorical([("q1", 100.0), ("q2", 50.0), ("q3", 150.0)]).expect("revenue"),
    );
    let cost = Dataset::new(
        "cost",
        Series::categorical([("q1", 70.0), ("q2", 60.0), ("q3", 90.0)]).expect("cost"),
    );

    let report = filter_aligned(
        &[revenue, cost],
        FilterSpec::new(Comparator::GreaterOrEqual, 100.0),
    )
    .expect("aligned filter");

    assert_eq!(report.original_count, 3);
    assert_eq!(report.filtered_count, 2);
    assert_eq!(
        report.datasets[1].series.labels().collect::<Vec<_>>(),
        vec!["q1", "q3"]
    );
    assert_eq!(report.datasets[1].series.scalars(), vec![Some(70.0), Some(90.0)]);
}

#[test]
fn transform_specs_deserialize_from_tagged_json() {
    let transform: Transform =
        serde_json::from_str(r#"{"kind":"moving_average","window":3}"#).expect("json");
    assert_eq!(transform, Transform::moving_average(3));

    let transform: Transform = serde_json::from_str(
        r#"{"kind":"filter","comparator":"less_or_equal","threshold":2.0}"#,
    )
    .expect("json");
    assert_eq!(
        transform,
        Transform::Filter(FilterSpec::new(Comparator::LessOrEqual, 2.0))
    );
}

#[test]
fn pipelines_deserialize_from_step_lists() {
    let pipeline: TransformPipeline = serde_json::from_str(
        r#"{"steps":[{"kind":"cumulative"},{"kind":"moving_average","window":2}]}"#,
    )
    .expect("json");
    assert_eq!(
        pipeline,
        TransformPipeline::new()
            .then(Transform::Cumulative)
            .then(Transform::moving_average(2))
    );

    let output = pipeline.apply(&series(&[1.0, 3.0, 5.0])).expect("pipeline");
    assert_eq!(output.scalars(), vec![Some(2.5), Some(6.5)]);

    let json = serde_json::to_string(&pipeline).expect("serialize");
    let parsed: TransformPipeline = serde_json::from_str(&json).expect("parse");
    assert_eq!(parsed, pipeline);
}
