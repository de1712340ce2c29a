use chart_composer::analysis::{
    AnalysisReport, ChartTypeSuggestion, Dimensionality, Intent, StructuralMetadata, recommend,
    suggest_chart_type,
};
use chart_composer::core::{ChartType, DataPoint, Series, compute_statistics};

fn market_share() -> Series {
    Series::categorical([
        ("north", 30.0),
        ("south", 25.0),
        ("east", 20.0),
        ("west", 15.0),
        ("online", 10.0),
    ])
    .expect("market share series")
}

#[test]
fn parts_of_whole_rank_pie_above_bar() {
    let series = market_share();
    let metadata = StructuralMetadata::from_series(std::slice::from_ref(&series));
    let suggestions = suggest_chart_type(&series, &metadata);

    let confidence_of = |chart_type| {
        suggestions
            .iter()
            .find(|s| s.chart_type == chart_type)
            .map_or(0.0, |s| s.confidence)
    };

    assert!(matches!(
        suggestions[0].chart_type,
        ChartType::Pie | ChartType::Doughnut
    ));
    assert!(confidence_of(ChartType::Pie) > confidence_of(ChartType::Bar));
}

#[test]
fn single_time_series_suggests_line() {
    let series = Series::temporal([
        ("2024-01-01", 10.0),
        ("2024-02-01", 12.0),
        ("2024-03-01", 9.0),
    ])
    .expect("time series");
    let metadata = StructuralMetadata::from_series(std::slice::from_ref(&series));

    let suggestions = suggest_chart_type(&series, &metadata);
    assert_eq!(suggestions[0].chart_type, ChartType::Line);
}

#[test]
fn bubble_points_suggest_bubble() {
    let series = Series::linear(vec![
        DataPoint::bubble(1.0, 2.0, 3.0),
        DataPoint::bubble(2.0, 1.0, 5.0),
    ])
    .expect("bubble series");
    let metadata = StructuralMetadata::from_series(std::slice::from_ref(&series));

    assert_eq!(metadata.dimensions, Dimensionality::Three);
    assert_eq!(
        suggest_chart_type(&series, &metadata)[0].chart_type,
        ChartType::Bubble
    );
}

#[test]
fn confidences_are_sorted_and_bounded() {
    let summary = compute_statistics(&[1.0, 2.0, 3.0]).expect("stats");
    let metadata = StructuralMetadata {
        categorical_labels: true,
        category_count: 12,
        value_count: 12,
        cyclical: true,
        intent: Intent::Comparison,
        ..StructuralMetadata::default()
    };

    let suggestions = recommend(Some(&summary), &metadata);
    let total: f64 = suggestions.iter().map(|s| s.confidence).sum();

    assert!(total <= 1.0 + 1e-9);
    assert!(
        suggestions
            .windows(2)
            .all(|pair| pair[0].confidence >= pair[1].confidence)
    );
    assert!(suggestions.iter().all(|s| !s.rationale.is_empty()));
}

#[test]
fn no_signal_falls_back_to_bar() {
    let metadata = StructuralMetadata::default();
    let suggestions = recommend(None, &metadata);

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].chart_type, ChartType::Bar);
    assert!(suggestions[0].confidence > 0.0);
}

#[test]
fn undefined_values_degrade_to_shape_only_rules() {
    let series = Series::new(
        chart_composer::core::AxisKind::Category,
        vec![DataPoint::value("a", 1.0), DataPoint::undefined("b")],
    )
    .expect("series");
    let metadata = StructuralMetadata::from_series(std::slice::from_ref(&series));

    let suggestions = suggest_chart_type(&series, &metadata);
    assert!(!suggestions.is_empty());
    assert!(
        suggestions
            .iter()
            .all(|s| !matches!(s.chart_type, ChartType::Pie | ChartType::Doughnut))
    );
}

#[test]
fn analysis_report_bundles_statistics_and_labels() {
    let series = market_share();
    let metadata = StructuralMetadata::from_series(std::slice::from_ref(&series));
    let report = AnalysisReport::build(&series, &metadata).expect("report");

    assert_eq!(report.statistics.count, 5);
    assert!(report.data_summary.has_labels);
    assert_eq!(report.data_summary.label_count, 5);
    assert_eq!(report.suggestions, suggest_chart_type(&series, &metadata));
}

#[test]
fn composition_intent_brings_pie_into_long_category_lists() {
    let series = Series::categorical((1..=12).map(|month| (format!("m{month}"), f64::from(month))))
        .expect("monthly totals");
    let metadata = StructuralMetadata::from_series(std::slice::from_ref(&series));
    let rank = |suggestions: &[ChartTypeSuggestion], wanted: ChartType| {
        suggestions.iter().position(|s| s.chart_type == wanted)
    };

    let plain = suggest_chart_type(&series, &metadata);
    assert_eq!(rank(&plain, ChartType::Pie), None);

    let composed = suggest_chart_type(&series, &metadata.with_intent(Intent::Composition));
    let pie = rank(&composed, ChartType::Pie).expect("pie is suggested");
    let line = rank(&composed, ChartType::Line).expect("line is suggested");
    assert!(pie < line);
    assert!(rank(&composed, ChartType::Doughnut).is_some());
    assert!(composed[pie].rationale.contains("composition"));
}
