use chart_composer::api::{
    CHART_CONFIGURATION_JSON_SCHEMA_V1, ChartConfiguration, ComposeOptions, Overlay,
    compose_configuration,
};
use chart_composer::core::{ChartType, Dataset, Series};
use chart_composer::error::{ChartError, ErrorCategory};
use chart_composer::style::StyleSelection;

fn sample() -> ChartConfiguration {
    let style = StyleSelection::for_theme("ocean")
        .expect("style")
        .with_accessibility("keyboard_only")
        .expect("a11y")
        .with_breakpoints(&["mobile"])
        .expect("breakpoints");
    let series = Series::temporal([
        ("2024-01-01T00:00:00Z", 3.0),
        ("2024-01-02T00:00:00Z", 5.0),
        ("2024-01-03T00:00:00Z", 4.0),
    ])
    .expect("series");
    compose_configuration(
        ChartType::Line,
        &[Dataset::new("visits", series)],
        &style,
        &ComposeOptions::new()
            .with_title("Visits")
            .with_overlay(Overlay::Median)
            .with_max_data_points(500),
    )
    .expect("compose")
}

#[test]
fn pretty_json_parses_back_to_the_same_document() {
    let config = sample();
    let json = config.to_json_pretty().expect("serialize");
    let parsed = ChartConfiguration::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn contract_envelope_carries_schema_version() {
    let config = sample();
    let json = config.to_json_contract_v1_pretty().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("json");

    assert_eq!(value["schema_version"], CHART_CONFIGURATION_JSON_SCHEMA_V1);
    assert_eq!(value["configuration"]["type"], "line");
    assert_eq!(value["configuration"]["maxDataPoints"], 500);

    let parsed = ChartConfiguration::from_json_compat_str(&json).expect("compat");
    assert_eq!(parsed, config);
}

#[test]
fn compat_reader_accepts_bare_documents() {
    let config = sample();
    let bare = config.to_json_pretty().expect("serialize");
    assert_eq!(
        ChartConfiguration::from_json_compat_str(&bare).expect("compat"),
        config
    );
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let config = sample();
    let mut value: serde_json::Value =
        serde_json::from_str(&config.to_json_contract_v1_pretty().expect("serialize"))
            .expect("json");
    value["schema_version"] = serde_json::json!(2);

    let err = ChartConfiguration::from_json_compat_str(&value.to_string()).expect_err("v2");
    assert!(matches!(err, ChartError::Serialization(ref msg) if msg.contains("version: 2")));
    assert_eq!(err.category(), ErrorCategory::Serialization);
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = ChartConfiguration::from_json_str("{\"type\":\"bar\"").expect_err("truncated");
    assert_eq!(err.category(), ErrorCategory::Serialization);
}

#[test]
fn unknown_scale_types_are_rejected() {
    let document = |kind: &str| {
        format!(
            r#"{{"type":"line","data":{{"labels":["a"],"datasets":[{{"label":"s","data":[1.0]}}]}},"options":{{"scales":{{"y":{{"type":"{kind}"}}}}}}}}"#
        )
    };

    for kind in ["linear", "category", "time"] {
        assert!(ChartConfiguration::from_json_str(&document(kind)).is_ok(), "{kind}");
    }
    let err = ChartConfiguration::from_json_str(&document("logarithmic"))
        .expect_err("logarithmic scales are never composed");
    assert_eq!(err.category(), ErrorCategory::Serialization);
}
