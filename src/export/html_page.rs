use crate::api::ChartConfiguration;
use crate::error::ChartResult;

const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js";
const FALLBACK_BACKGROUND: &str = "#ffffff";
const FALLBACK_TEXT: &str = "#333333";

/// Page chrome around a live chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlPage {
    pub title: String,
    /// CSS length, e.g. `800px` or `100%`.
    pub width: String,
    pub height: String,
}

impl Default for HtmlPage {
    fn default() -> Self {
        Self {
            title: "Chart".to_owned(),
            width: "800px".to_owned(),
            height: "400px".to_owned(),
        }
    }
}

impl HtmlPage {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_size(mut self, width: impl Into<String>, height: impl Into<String>) -> Self {
        self.width = width.into();
        self.height = height.into();
        self
    }
}

/// Standalone page that loads Chart.js from the CDN and renders `config`
/// on the bound theme background.
pub fn chart_html(config: &ChartConfiguration, page: &HtmlPage) -> ChartResult<String> {
    let (background, text) = config
        .style
        .as_ref()
        .map_or((FALLBACK_BACKGROUND, FALLBACK_TEXT), |style| {
            (style.background_color.as_str(), style.text_color.as_str())
        });
    let json = script_safe(&config.to_json_pretty()?);
    let title = escape_html(&page.title);
    let width = escape_html(&page.width);
    let height = escape_html(&page.height);
    let background = escape_html(background);
    let text = escape_html(text);

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <script src="{CHART_JS_CDN}"></script>
    <style>
        body {{
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: {background};
            color: {text};
            padding: 20px;
            margin: 0;
        }}
        .chart-container {{
            position: relative;
            margin: auto;
            width: {width};
            height: {height};
            background: {background};
            padding: 20px;
            border-radius: 8px;
        }}
    </style>
</head>
<body>
    <div class="chart-container">
        <canvas id="chart"></canvas>
    </div>
    <script>
        const ctx = document.getElementById('chart').getContext('2d');
        const chart = new Chart(ctx, {json});
    </script>
</body>
</html>
"#
    ))
}

/// Page with a fixed-size canvas and a button that downloads the chart as
/// a PNG through `toBase64Image`.
pub fn image_html(
    config: &ChartConfiguration,
    filename: &str,
    width: u32,
    height: u32,
) -> ChartResult<String> {
    let json = script_safe(&config.to_json_pretty()?);
    let filename = escape_js_string(filename);

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Chart Export</title>
    <script src="{CHART_JS_CDN}"></script>
</head>
<body>
    <canvas id="chart" width="{width}" height="{height}"></canvas>
    <button onclick="downloadChart()">Download Chart</button>
    <script>
        const ctx = document.getElementById('chart').getContext('2d');
        const chart = new Chart(ctx, {json});

        function downloadChart() {{
            const link = document.createElement('a');
            link.download = '{filename}';
            link.href = chart.toBase64Image();
            link.click();
        }}
    </script>
</body>
</html>
"#
    ))
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Keeps embedded JSON from closing the surrounding `<script>` element.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn escape_js_string(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\x3c"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"Q&A"</b>"#),
            "&lt;b&gt;&quot;Q&amp;A&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn js_strings_cannot_break_out() {
        assert_eq!(escape_js_string("a'b</script>"), "a\\'b\\x3c/script>");
        assert_eq!(script_safe(r#"{"t":"</script>"}"#), r#"{"t":"<\/script>"}"#);
    }
}
