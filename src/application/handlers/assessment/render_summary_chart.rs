//! RenderSummaryChartHandler - Query handler for the standalone SVG chart.

use std::sync::Arc;

use tracing::warn;

use crate::domain::assessment::AssessmentError;
use crate::domain::catalog::ContentCatalog;
use crate::domain::foundation::SessionId;
use crate::domain::report::summary_chart;
use crate::ports::{AssessmentSessionRepository, ChartRenderer};

use super::load_session;

#[derive(Debug, Clone)]
pub struct RenderSummaryChartQuery {
    pub session_id: SessionId,
}

pub struct RenderSummaryChartHandler {
    repository: Arc<dyn AssessmentSessionRepository>,
    catalog: Arc<ContentCatalog>,
    chart_renderer: Arc<dyn ChartRenderer>,
}

impl RenderSummaryChartHandler {
    pub fn new(
        repository: Arc<dyn AssessmentSessionRepository>,
        catalog: Arc<ContentCatalog>,
        chart_renderer: Arc<dyn ChartRenderer>,
    ) -> Self {
        Self {
            repository,
            catalog,
            chart_renderer,
        }
    }

    /// Returns the chart as an SVG document.
    pub async fn handle(&self, query: RenderSummaryChartQuery) -> Result<String, AssessmentError> {
        let session = load_session(self.repository.as_ref(), &query.session_id).await?;

        let chart = summary_chart(&self.catalog, session.responses());
        self.chart_renderer.render_svg(&chart).map_err(|e| {
            warn!(session_id = %query.session_id, error = %e, "Chart rendering failed");
            AssessmentError::render_failed(e.to_string())
        })
    }
}
