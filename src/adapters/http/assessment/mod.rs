//! HTTP adapter for assessment endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AssessmentResponse, CatalogResponse, DomainAverageResponse, ErrorResponse, PageInfo,
    RecordRatingRequest, RecordTextRequest, ReportQuery, SummaryResponse,
};
pub use handlers::{AssessmentApiError, AssessmentAppState};
pub use routes::assessment_router;
