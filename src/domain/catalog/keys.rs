//! Identity of catalog entries that can carry a response.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::CompetencyDomain;

/// Identifies one competency item: its domain and position within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CompetencyKey {
    pub domain: CompetencyDomain,
    pub index: usize,
}

impl CompetencyKey {
    pub fn new(domain: CompetencyDomain, index: usize) -> Self {
        Self { domain, index }
    }
}

impl fmt::Display for CompetencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/competency/{}", self.domain.slug(), self.index)
    }
}

/// Identifies a free-text answer slot.
///
/// Qualitative questions belong to a domain; reflection questions are
/// domain-independent and only carry their ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResponseKey {
    Qualitative {
        domain: CompetencyDomain,
        index: usize,
    },
    Reflection {
        index: usize,
    },
}

impl ResponseKey {
    pub fn qualitative(domain: CompetencyDomain, index: usize) -> Self {
        ResponseKey::Qualitative { domain, index }
    }

    pub fn reflection(index: usize) -> Self {
        ResponseKey::Reflection { index }
    }

    /// Returns true for keys of the strengths and development step.
    pub fn is_reflection(&self) -> bool {
        matches!(self, ResponseKey::Reflection { .. })
    }
}

impl fmt::Display for ResponseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseKey::Qualitative { domain, index } => {
                write!(f, "{}/qualitative/{}", domain.slug(), index)
            }
            ResponseKey::Reflection { index } => write!(f, "reflection/{}", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn competency_key_displays_path() {
        let key = CompetencyKey::new(CompetencyDomain::EmotionalIntelligence, 2);
        assert_eq!(key.to_string(), "emotional_intelligence/competency/2");
    }

    #[test]
    fn response_key_deserializes_tagged() {
        let key: ResponseKey = serde_json::from_str(
            r#"{"kind": "qualitative", "domain": "communication_excellence", "index": 1}"#,
        )
        .unwrap();
        assert_eq!(
            key,
            ResponseKey::qualitative(CompetencyDomain::CommunicationExcellence, 1)
        );

        let key: ResponseKey = serde_json::from_str(r#"{"kind": "reflection", "index": 4}"#).unwrap();
        assert_eq!(key, ResponseKey::reflection(4));
        assert!(key.is_reflection());
    }

    #[test]
    fn qualitative_keys_differ_by_domain() {
        let a = ResponseKey::qualitative(CompetencyDomain::EmotionalIntelligence, 0);
        let b = ResponseKey::qualitative(CompetencyDomain::StrategicDecisionMaking, 0);
        assert_ne!(a, b);
    }
}
