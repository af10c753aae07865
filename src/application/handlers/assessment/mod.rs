//! Assessment command and query handlers.
//!
//! One handler per user action. Every handler loads the session by id and
//! reports a missing session as `AssessmentError::NotFound`.

// Command handlers
mod end_assessment;
mod generate_report;
mod navigate;
mod record_rating;
mod record_text_response;
mod start_assessment;

// Query handlers
mod get_assessment;
mod get_summary;
mod render_summary_chart;

pub use end_assessment::{EndAssessmentCommand, EndAssessmentHandler};
pub use generate_report::{GenerateReportCommand, GenerateReportHandler};
pub use get_assessment::{GetAssessmentHandler, GetAssessmentQuery};
pub use get_summary::{GetSummaryHandler, GetSummaryQuery};
pub use navigate::{NavigateAssessmentCommand, NavigateAssessmentHandler, Navigation};
pub use record_rating::{RecordRatingCommand, RecordRatingHandler};
pub use record_text_response::{RecordTextResponseCommand, RecordTextResponseHandler};
pub use render_summary_chart::{RenderSummaryChartHandler, RenderSummaryChartQuery};
pub use start_assessment::{StartAssessmentCommand, StartAssessmentHandler};

use crate::domain::assessment::{AssessmentError, AssessmentSession};
use crate::domain::foundation::SessionId;
use crate::ports::AssessmentSessionRepository;

async fn load_session(
    repository: &dyn AssessmentSessionRepository,
    id: &SessionId,
) -> Result<AssessmentSession, AssessmentError> {
    repository
        .find_by_id(id)
        .await?
        .ok_or(AssessmentError::NotFound(*id))
}
