//! Assessment domain module.
//!
//! The wizard controller and the per-session response store. A session moves
//! linearly through Quantitative → Qualitative → Strengths → Report and can be
//! reset to start over.

mod errors;
mod responses;
mod session;
mod step;

pub use errors::AssessmentError;
pub use responses::ResponseStore;
pub use session::AssessmentSession;
pub use step::WizardStep;
