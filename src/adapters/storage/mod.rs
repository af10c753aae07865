//! Storage adapters.

mod in_memory_assessment_repository;

pub use in_memory_assessment_repository::InMemoryAssessmentRepository;
