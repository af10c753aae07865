//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers load, change and save a session; query handlers only read.

pub mod handlers;

pub use handlers::assessment::{
    EndAssessmentCommand, EndAssessmentHandler, GenerateReportCommand, GenerateReportHandler,
    GetAssessmentHandler, GetAssessmentQuery, GetSummaryHandler, GetSummaryQuery,
    NavigateAssessmentCommand, NavigateAssessmentHandler, Navigation, RecordRatingCommand,
    RecordRatingHandler, RecordTextResponseCommand, RecordTextResponseHandler,
    RenderSummaryChartHandler, RenderSummaryChartQuery, StartAssessmentCommand,
    StartAssessmentHandler,
};
