//! Wizard step: the linear four-state controller.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Current page of the assessment wizard.
///
/// Moves strictly forward or backward one step at a time. Moving past either
/// end is clamped silently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum WizardStep {
    #[default]
    Quantitative = 1,
    Qualitative = 2,
    Strengths = 3,
    Report = 4,
}

impl WizardStep {
    pub const FIRST: WizardStep = WizardStep::Quantitative;
    pub const LAST: WizardStep = WizardStep::Report;

    /// All steps in order.
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Quantitative,
        WizardStep::Qualitative,
        WizardStep::Strengths,
        WizardStep::Report,
    ];

    /// Step number, 1-based.
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    pub fn from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(WizardStep::Quantitative),
            2 => Ok(WizardStep::Qualitative),
            3 => Ok(WizardStep::Strengths),
            4 => Ok(WizardStep::Report),
            _ => Err(ValidationError::out_of_range("step", 1, 4, value as i32)),
        }
    }

    /// Page heading for the step.
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Quantitative => "Part 1: Quantitative Assessment",
            WizardStep::Qualitative => "Part 2: Qualitative Assessment",
            WizardStep::Strengths => "Part 3: Strengths & Development",
            WizardStep::Report => "Generate Report",
        }
    }

    /// The following step, staying on `Report`.
    pub fn advance(self) -> Self {
        Self::from_u8(self.as_u8() + 1).unwrap_or(Self::LAST)
    }

    /// The preceding step, staying on `Quantitative`.
    pub fn retreat(self) -> Self {
        Self::from_u8(self.as_u8().saturating_sub(1)).unwrap_or(Self::FIRST)
    }

    pub fn is_report(&self) -> bool {
        *self == WizardStep::Report
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_step_is_quantitative() {
        assert_eq!(WizardStep::default(), WizardStep::Quantitative);
        assert_eq!(WizardStep::default().as_u8(), 1);
    }

    #[test]
    fn advance_five_times_stops_at_report() {
        let mut step = WizardStep::Quantitative;
        for _ in 0..5 {
            step = step.advance();
        }
        assert_eq!(step, WizardStep::Report);
        assert_eq!(step.as_u8(), 4);
    }

    #[test]
    fn retreat_from_first_step_stays() {
        assert_eq!(WizardStep::Quantitative.retreat(), WizardStep::Quantitative);
    }

    #[test]
    fn advance_and_retreat_move_one_step() {
        assert_eq!(WizardStep::Qualitative.advance(), WizardStep::Strengths);
        assert_eq!(WizardStep::Report.retreat(), WizardStep::Strengths);
    }

    #[test]
    fn every_move_changes_step_number_by_at_most_one() {
        for step in WizardStep::ALL {
            let forward = step.advance().as_u8() - step.as_u8();
            let backward = step.as_u8() - step.retreat().as_u8();
            assert_eq!(forward, u8::from(step != WizardStep::LAST));
            assert_eq!(backward, u8::from(step != WizardStep::FIRST));
        }
    }

    #[test]
    fn from_u8_rejects_out_of_range() {
        assert!(WizardStep::from_u8(0).is_err());
        assert!(WizardStep::from_u8(5).is_err());
        assert_eq!(WizardStep::from_u8(3).unwrap(), WizardStep::Strengths);
    }
}
