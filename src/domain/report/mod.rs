//! Report domain module.
//!
//! Turns a response snapshot into a renderer-neutral `ReportDocument`:
//! rating tables per domain, question/answer pairs, reflections, and the
//! per-domain average chart. Output formats live in the render adapters.

mod assembler;
mod document;
mod layout;
mod summary;

pub use assembler::{
    ReportAssembler, ReportError, ReportSettings, DEFAULT_MAX_ANSWER_LENGTH, DEFAULT_REPORT_TITLE,
};
pub use document::{
    Bar, BarChart, Block, Column, ColumnKind, HeadingLevel, QuestionAnswer, ReportDocument, Table,
    NOT_RATED, NO_RESPONSE,
};
pub use layout::{truncate_label, LayoutOptions};
pub use summary::{
    domain_averages, round_one_decimal, summary_chart, DomainAverage, SUMMARY_CHART_TITLE,
};
