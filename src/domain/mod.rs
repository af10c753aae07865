//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `catalog` - Static questionnaire content
//! - `assessment` - Session aggregate, wizard steps and response store
//! - `report` - Report assembly and per-domain summaries

pub mod assessment;
pub mod catalog;
pub mod foundation;
pub mod report;
