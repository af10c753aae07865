//! SVG bar chart renderer.

use std::fmt::Write;

use crate::domain::report::BarChart;
use crate::ports::{ChartRenderer, RenderError};

use super::html_escape;

const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 48.0;
const MARGIN_BOTTOM: f64 = 64.0;

const BAR_COLORS: [&str; 4] = ["#2563eb", "#059669", "#d97706", "#7c3aed"];

/// Draws a categorical bar chart with a labelled value axis.
#[derive(Debug, Clone)]
pub struct SvgBarChartRenderer {
    width: u32,
    height: u32,
}

impl Default for SvgBarChartRenderer {
    fn default() -> Self {
        Self {
            width: 720,
            height: 400,
        }
    }
}

impl SvgBarChartRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    fn draw(&self, chart: &BarChart) -> Result<String, std::fmt::Error> {
        let width = f64::from(self.width);
        let height = f64::from(self.height);
        let plot_width = width - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;
        let baseline = MARGIN_TOP + plot_height;
        let span = chart.axis_max - chart.axis_min;
        let scale = |value: f64| {
            if span > 0.0 {
                (value - chart.axis_min) / span * plot_height
            } else {
                0.0
            }
        };

        let mut svg = String::new();
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img" font-family="sans-serif">"#,
            w = self.width,
            h = self.height
        )?;
        writeln!(svg, "<title>{}</title>", html_escape(&chart.title))?;
        writeln!(
            svg,
            r#"<text x="{:.1}" y="28" text-anchor="middle" font-size="18" font-weight="bold">{}</text>"#,
            width / 2.0,
            html_escape(&chart.title)
        )?;

        // Gridlines at every whole value on the axis.
        let mut tick = chart.axis_min.ceil();
        while tick <= chart.axis_max {
            let y = baseline - scale(tick);
            writeln!(
                svg,
                r##"<line x1="{x1:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}" stroke="#e5e7eb"/>"##,
                x1 = MARGIN_LEFT,
                x2 = MARGIN_LEFT + plot_width,
                y = y
            )?;
            writeln!(
                svg,
                r#"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="12">{}</text>"#,
                MARGIN_LEFT - 8.0,
                y + 4.0,
                tick
            )?;
            tick += 1.0;
        }
        writeln!(
            svg,
            r##"<line x1="{x:.1}" y1="{top:.1}" x2="{x:.1}" y2="{bottom:.1}" stroke="#6b7280"/>"##,
            x = MARGIN_LEFT,
            top = MARGIN_TOP,
            bottom = baseline
        )?;

        if !chart.bars.is_empty() {
            let slot = plot_width / chart.bars.len() as f64;
            let bar_width = slot * 0.6;
            for (i, bar) in chart.bars.iter().enumerate() {
                let bar_height = scale(bar.value);
                let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_width) / 2.0;
                let center = x + bar_width / 2.0;
                writeln!(
                    svg,
                    r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
                    x,
                    baseline - bar_height,
                    bar_width,
                    bar_height,
                    BAR_COLORS[i % BAR_COLORS.len()]
                )?;
                writeln!(
                    svg,
                    r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="13">{}</text>"#,
                    center,
                    baseline - bar_height - 6.0,
                    bar.value_label()
                )?;
                writeln!(
                    svg,
                    r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="12">{}</text>"#,
                    center,
                    baseline + 20.0,
                    html_escape(&bar.label)
                )?;
            }
        }

        svg.push_str("</svg>\n");
        Ok(svg)
    }
}

impl ChartRenderer for SvgBarChartRenderer {
    fn render_svg(&self, chart: &BarChart) -> Result<String, RenderError> {
        if self.width as f64 <= MARGIN_LEFT + MARGIN_RIGHT
            || self.height as f64 <= MARGIN_TOP + MARGIN_BOTTOM
        {
            return Err(RenderError::failed(format!(
                "chart area {}x{} is too small",
                self.width, self.height
            )));
        }
        self.draw(chart)
            .map_err(|e| RenderError::failed(format!("chart drawing failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> BarChart {
        let mut chart = BarChart::rating_scale("Average Score by Domain");
        chart.push_bar("Emotional Intelligence", 4.0);
        chart.push_bar("Communication Excellence", 0.0);
        chart.push_bar("Patient-Centered Leadership", 3.5);
        chart.push_bar("Strategic Decision-Making", 5.0);
        chart
    }

    #[test]
    fn draws_one_rect_per_bar() {
        let svg = SvgBarChartRenderer::default().render_svg(&chart()).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<rect").count(), 4);
    }

    #[test]
    fn bars_carry_one_decimal_value_labels() {
        let svg = SvgBarChartRenderer::default().render_svg(&chart()).unwrap();
        for label in [">4.0<", ">0.0<", ">3.5<", ">5.0<"] {
            assert!(svg.contains(label), "missing {label}");
        }
    }

    #[test]
    fn axis_has_gridline_for_each_whole_value() {
        let svg = SvgBarChartRenderer::default().render_svg(&chart()).unwrap();
        assert_eq!(svg.matches(r##"stroke="#e5e7eb""##).count(), 6);
    }

    #[test]
    fn full_scale_bar_spans_plot_height() {
        let renderer = SvgBarChartRenderer::new(400, 312);
        let mut chart = BarChart::rating_scale("Scale");
        chart.push_bar("Top", 5.0);
        let svg = renderer.render_svg(&chart).unwrap();
        assert!(svg.contains(r#"height="200.0""#));
    }

    #[test]
    fn labels_are_escaped() {
        let mut chart = BarChart::rating_scale("Q&A <1>");
        chart.push_bar("R&D", 2.0);
        let svg = SvgBarChartRenderer::default().render_svg(&chart).unwrap();
        assert!(svg.contains("Q&amp;A &lt;1&gt;"));
        assert!(svg.contains(">R&amp;D<"));
    }

    #[test]
    fn empty_chart_still_renders_axes() {
        let svg = SvgBarChartRenderer::default()
            .render_svg(&BarChart::rating_scale("Empty"))
            .unwrap();
        assert_eq!(svg.matches("<rect").count(), 0);
        assert!(svg.contains("<line"));
    }

    #[test]
    fn tiny_canvas_is_rejected() {
        let err = SvgBarChartRenderer::new(10, 10).render_svg(&chart()).unwrap_err();
        assert!(matches!(err, RenderError::Failed(_)));
    }
}
