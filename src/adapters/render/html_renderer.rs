//! HTML report renderer.
//!
//! Converts the Markdown layout to HTML with pulldown-cmark and wraps it in
//! a styled page. The summary chart is embedded as inline SVG.

use async_trait::async_trait;
use pulldown_cmark::{html, Event, Options, Parser};

use crate::domain::report::{Block, LayoutOptions, ReportDocument};
use crate::ports::{ChartRenderer, ExportFormat, RenderError, ReportRenderer};

use super::markdown_renderer::escape_markdown;
use super::{html_escape, MarkdownReportRenderer, SvgBarChartRenderer};

#[derive(Debug, Clone, Default)]
pub struct HtmlReportRenderer {
    markdown: MarkdownReportRenderer,
    chart: SvgBarChartRenderer,
}

impl HtmlReportRenderer {
    pub fn new(layout: LayoutOptions) -> Self {
        Self {
            markdown: MarkdownReportRenderer::new(layout),
            chart: SvgBarChartRenderer::default(),
        }
    }

    pub fn to_html(&self, document: &ReportDocument) -> Result<String, RenderError> {
        let mut body = String::new();
        let mut pending = format!("# {}\n\n", escape_markdown(&document.title));

        for block in &document.blocks {
            match block {
                Block::Chart(chart) => {
                    push_markdown(&mut body, &pending);
                    pending.clear();
                    let svg = self.chart.render_svg(chart)?;
                    body.push_str(&format!("<figure class=\"chart\">\n{}</figure>\n", svg));
                }
                other => self.markdown.push_block(&mut pending, other),
            }
        }
        push_markdown(&mut body, &pending);

        Ok(wrap_html(body, &document.title))
    }
}

/// Converts Markdown to HTML, treating any raw HTML in it as text.
fn push_markdown(out: &mut String, markdown: &str) {
    if markdown.is_empty() {
        return;
    }
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        other => other,
    });
    html::push_html(out, parser);
}

fn wrap_html(body: String, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <article class="assessment-report">
{body}
    </article>
</body>
</html>"#,
        title = html_escape(title),
        css = REPORT_CSS,
        body = body
    )
}

#[async_trait]
impl ReportRenderer for HtmlReportRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Html
    }

    async fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, RenderError> {
        self.to_html(document).map(String::into_bytes)
    }
}

const REPORT_CSS: &str = r#"
:root {
    --primary-color: #2563eb;
    --text-color: #1f2937;
    --muted-color: #6b7280;
    --border-color: #e5e7eb;
    --stripe-color: #f9fafb;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Arial, sans-serif;
    line-height: 1.6;
    color: var(--text-color);
    max-width: 900px;
    margin: 0 auto;
    padding: 2rem;
}

h1 {
    border-bottom: 2px solid var(--primary-color);
    padding-bottom: 0.5rem;
}

h2 {
    border-bottom: 1px solid var(--border-color);
    padding-bottom: 0.25rem;
    margin-top: 2em;
}

table {
    width: 100%;
    border-collapse: collapse;
    margin: 1em 0;
}

th, td {
    padding: 0.5rem;
    border: 1px solid var(--border-color);
}

td:first-child {
    width: 75%;
}

tr:nth-child(even) {
    background-color: var(--stripe-color);
}

blockquote {
    margin: 0.5em 0 1.5em;
    padding: 0.5em 1em;
    border-left: 4px solid var(--primary-color);
    background-color: var(--stripe-color);
}

em {
    color: var(--muted-color);
}

figure.chart {
    margin: 1.5em 0;
    text-align: center;
}

@media print {
    body {
        padding: 0;
        font-size: 11pt;
    }

    h1, h2, h3 {
        page-break-after: avoid;
    }

    table, figure {
        page-break-inside: avoid;
    }
}
"#;
