//! Content catalog module.
//!
//! Static questionnaire content: the four competency domains, their ratable
//! items and open questions, and the domain-independent reflection prompts.
//! Pure data; nothing here changes after startup.

mod competency_domain;
mod content;
mod keys;
mod standard;

pub use competency_domain::CompetencyDomain;
pub use content::{CatalogBuilder, CompetencyItem, ContentCatalog, OpenQuestion, ReflectionQuestion};
pub use keys::{CompetencyKey, ResponseKey};
