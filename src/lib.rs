//! Leadership Assessment - Guided healthcare leadership self-assessment
//!
//! Walks a leader through self-ratings across four competency domains,
//! qualitative questions and reflections, then renders a downloadable
//! report.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
