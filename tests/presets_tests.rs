use chart_composer::api::document::{IndexAxis, PointValue, ScaleType};
use chart_composer::api::{
    ColorValue, ComposeOptions, DataValues, HeatmapGrid, funnel, heatmap, templates, waterfall,
};
use chart_composer::core::{AxisKind, DataPoint, Series, WireType};
use chart_composer::error::ChartError;
use chart_composer::style::StyleSelection;

fn light() -> StyleSelection {
    StyleSelection::for_theme("light").expect("style")
}

#[test]
fn waterfall_bars_float_between_running_totals() {
    let steps = Series::categorical([("Start", 100.0), ("Costs", -30.0), ("Upsell", 50.0)])
        .expect("steps");
    let style = light();
    let config = waterfall("cash", &steps, &style, &ComposeOptions::default()).expect("waterfall");

    assert_eq!(config.kind, WireType::Bar);
    let dataset = &config.data.datasets[0];
    assert_eq!(
        dataset.data,
        DataValues::Ranges(vec![
            Some([0.0, 100.0]),
            Some([70.0, 100.0]),
            Some([70.0, 120.0]),
        ])
    );
    let palette = style.palette();
    assert_eq!(
        dataset.background_color,
        Some(ColorValue::PerPoint(vec![
            palette.cyclic(0).to_owned(),
            palette.cyclic(1).to_owned(),
            palette.cyclic(0).to_owned(),
        ]))
    );
}

#[test]
fn waterfall_rejects_undefined_steps() {
    let steps = Series::new(
        AxisKind::Category,
        vec![DataPoint::value("a", 1.0), DataPoint::undefined("b")],
    )
    .expect("steps");
    let err = waterfall("cash", &steps, &light(), &ComposeOptions::default())
        .expect_err("undefined step");
    assert!(matches!(err, ChartError::NonNumericInput { index: 1, .. }));
}

#[test]
fn funnel_is_horizontal_with_one_color_per_stage() {
    let stages = Series::categorical([
        ("Visits", 1000.0),
        ("Signups", 400.0),
        ("Trials", 120.0),
        ("Paid", 30.0),
    ])
    .expect("stages");
    let style = light();
    let options = ComposeOptions::new().with_title("Funnel");
    let config = funnel("conversion", &stages, &style, &options).expect("funnel");

    assert_eq!(config.options.index_axis, Some(IndexAxis::Y));
    assert_eq!(
        config
            .options
            .plugins
            .legend
            .as_ref()
            .and_then(|legend| legend.display),
        Some(false)
    );
    let Some(ColorValue::PerPoint(colors)) = &config.data.datasets[0].background_color else {
        panic!("funnel stages carry one color each");
    };
    assert_eq!(colors.len(), 4);
    assert_eq!(colors[3], style.palette().cyclic(3));
    assert_eq!(
        config.data.datasets[0].border_color,
        Some(ColorValue::Single(style.theme().background_color.to_owned()))
    );
}

#[test]
fn heatmap_scales_radius_by_cell_value() {
    let grid = HeatmapGrid {
        x_labels: vec!["Mon".into(), "Tue".into()],
        y_labels: vec!["AM".into(), "PM".into()],
        values: vec![vec![0.0, 10.0], vec![5.0, 10.0]],
    };
    let config = heatmap("load", &grid, &light(), &ComposeOptions::default()).expect("heatmap");

    assert_eq!(config.kind, WireType::Bubble);
    let DataValues::Points(points) = &config.data.datasets[0].data else {
        panic!("heatmap cells are bubble points");
    };
    let radii: Vec<Option<f64>> = points.iter().map(|p: &PointValue| p.r).collect();
    assert_eq!(radii, vec![Some(5.0), Some(25.0), Some(15.0), Some(25.0)]);
    assert_eq!((points[2].x, points[2].y), (0.0, Some(1.0)));

    let x = &config.options.scales["x"];
    assert_eq!(x.kind, Some(ScaleType::Category));
    assert_eq!(x.labels.as_deref(), Some(grid.x_labels.as_slice()));
    assert_eq!(config.options.scales["y"].offset, Some(true));
}

#[test]
fn heatmap_rejects_negative_and_all_zero_grids() {
    let style = light();
    let negative = HeatmapGrid {
        x_labels: vec!["a".into()],
        y_labels: vec!["r".into()],
        values: vec![vec![-1.0]],
    };
    assert!(matches!(
        heatmap("h", &negative, &style, &ComposeOptions::default()),
        Err(ChartError::InvalidData(_))
    ));

    let zeros = HeatmapGrid {
        values: vec![vec![0.0]],
        ..negative
    };
    assert!(matches!(
        heatmap("h", &zeros, &style, &ComposeOptions::default()),
        Err(ChartError::InvalidData(_))
    ));
}

#[test]
fn heatmap_grid_rejects_unknown_fields() {
    let parsed = serde_json::from_str::<HeatmapGrid>(
        r#"{"x_labels":["a"],"y_labels":["b"],"values":[[1.0]],"colour":"red"}"#,
    );
    assert!(parsed.is_err());
}

#[test]
fn templates_cover_common_chart_types_in_the_callers_style() {
    let style = StyleSelection::for_theme("sunset").expect("style");
    let samples = templates(&style).expect("templates");

    assert_eq!(
        samples.keys().copied().collect::<Vec<_>>(),
        vec!["bar", "line", "pie", "radar"]
    );
    assert_eq!(samples["bar"].kind, WireType::Bar);
    assert_eq!(samples["pie"].kind, WireType::Pie);
    assert_eq!(samples["radar"].kind, WireType::Radar);
    assert_eq!(samples["line"].data.datasets[0].tension, Some(0.4));
    assert_eq!(
        samples["pie"].data.labels,
        vec!["Chrome", "Firefox", "Safari", "Edge", "Other"]
    );
    for config in samples.values() {
        let binding = config.style.as_ref().expect("style binding");
        assert_eq!(binding.theme, "sunset");
        assert_eq!(binding.palette, "pastel");
    }
}
