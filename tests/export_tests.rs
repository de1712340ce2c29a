use chart_composer::api::{ChartConfiguration, ComposeOptions, compose_configuration};
use chart_composer::core::{ChartType, Dataset, Series};
use chart_composer::export::{HtmlPage, chart_html, configuration_csv, image_html};
use chart_composer::style::StyleSelection;

fn sales(theme: &str) -> ChartConfiguration {
    let style = StyleSelection::for_theme(theme).expect("style");
    let a = Dataset::new(
        "North",
        Series::categorical([("Q1", 1200.0), ("Q2", 1900.5)]).expect("north"),
    );
    let b = Dataset::new(
        "South, East",
        Series::categorical([("Q2", 800.0), ("Q3", 1500.0)]).expect("south"),
    );
    compose_configuration(
        ChartType::Bar,
        &[a, b],
        &style,
        &ComposeOptions::new().with_title("Sales </script>"),
    )
    .expect("compose")
}

#[test]
fn csv_has_label_column_and_empty_gaps() {
    let csv = configuration_csv(&sales("light")).expect("csv");
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(
        lines,
        vec![
            "Label,North,\"South, East\"",
            "Q1,1200,",
            "Q2,1900.5,800",
            "Q3,,1500",
        ]
    );
}

#[test]
fn html_page_embeds_document_on_theme_background() {
    let config = sales("dark");
    let html = chart_html(&config, &HtmlPage::new("Q<1> & Q2").with_size("100%", "600px"))
        .expect("html");

    assert!(html.contains("https://cdn.jsdelivr.net/npm/chart.js"));
    assert!(html.contains("<title>Q&lt;1&gt; &amp; Q2</title>"));
    assert!(html.contains("background-color: #1a1a1a;"));
    assert!(html.contains("width: 100%;"));
    assert!(html.contains("new Chart(ctx,"));
    assert!(html.contains("Sales <\\/script>"));
    assert!(!html.contains("Sales </script>"));
}

#[test]
fn html_page_without_style_falls_back_to_light_colors() {
    let mut config = sales("dark");
    config.style = None;
    let html = chart_html(&config, &HtmlPage::default()).expect("html");

    assert!(html.contains("background-color: #ffffff;"));
    assert!(html.contains("color: #333333;"));
    assert!(html.contains("<title>Chart</title>"));
}

#[test]
fn image_page_downloads_through_base64() {
    let html = image_html(&sales("light"), "it's.png", 1024, 512).expect("html");

    assert!(html.contains(r#"<canvas id="chart" width="1024" height="512"></canvas>"#));
    assert!(html.contains("chart.toBase64Image()"));
    assert!(html.contains("link.download = 'it\\'s.png';"));
}
