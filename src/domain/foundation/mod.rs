//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the assessment domain.

mod errors;
mod ids;
mod rating;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SessionId;
pub use rating::Rating;
pub use timestamp::Timestamp;
