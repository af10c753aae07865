//! The four fixed competency domains.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Competency domain covered by the assessment.
///
/// Declaration order is display order everywhere (wizard, report, chart).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetencyDomain {
    EmotionalIntelligence,
    CommunicationExcellence,
    PatientCenteredLeadership,
    StrategicDecisionMaking,
}

impl CompetencyDomain {
    /// All domains in display order.
    pub const ALL: [CompetencyDomain; 4] = [
        CompetencyDomain::EmotionalIntelligence,
        CompetencyDomain::CommunicationExcellence,
        CompetencyDomain::PatientCenteredLeadership,
        CompetencyDomain::StrategicDecisionMaking,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            CompetencyDomain::EmotionalIntelligence => "Emotional Intelligence",
            CompetencyDomain::CommunicationExcellence => "Communication Excellence",
            CompetencyDomain::PatientCenteredLeadership => "Patient-Centered Leadership",
            CompetencyDomain::StrategicDecisionMaking => "Strategic Decision-Making",
        }
    }

    /// Wire identifier, identical to the serde representation.
    pub fn slug(&self) -> &'static str {
        match self {
            CompetencyDomain::EmotionalIntelligence => "emotional_intelligence",
            CompetencyDomain::CommunicationExcellence => "communication_excellence",
            CompetencyDomain::PatientCenteredLeadership => "patient_centered_leadership",
            CompetencyDomain::StrategicDecisionMaking => "strategic_decision_making",
        }
    }
}

impl fmt::Display for CompetencyDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CompetencyDomain {
    type Err = ValidationError;

    /// Accepts either the slug or the display name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        CompetencyDomain::ALL
            .into_iter()
            .find(|d| d.slug() == needle || d.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                ValidationError::invalid_format("domain", format!("unknown domain '{}'", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_domains_in_display_order() {
        let names: Vec<_> = CompetencyDomain::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(
            names,
            vec![
                "Emotional Intelligence",
                "Communication Excellence",
                "Patient-Centered Leadership",
                "Strategic Decision-Making",
            ]
        );
    }

    #[test]
    fn slug_matches_serde_representation() {
        for domain in CompetencyDomain::ALL {
            let json = serde_json::to_string(&domain).unwrap();
            assert_eq!(json, format!("\"{}\"", domain.slug()));
        }
    }

    #[test]
    fn parses_from_slug_and_name() {
        assert_eq!(
            "patient_centered_leadership".parse::<CompetencyDomain>().unwrap(),
            CompetencyDomain::PatientCenteredLeadership
        );
        assert_eq!(
            "strategic decision-making".parse::<CompetencyDomain>().unwrap(),
            CompetencyDomain::StrategicDecisionMaking
        );
        assert!("finance".parse::<CompetencyDomain>().is_err());
    }
}
