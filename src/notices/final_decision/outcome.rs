//! Award comparator: relates the tribunal's award to the DWP's prior
//! decision and computes the allowed and set-aside flags.

use serde::{Deserialize, Serialize};

use super::domain::CaseSnapshot;

use super::activities::ActivityType;

/// Recorded relationship between the tribunal's award and the DWP decision.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ComparedToDwp {
    Lower,
    Same,
    Higher,
}

impl ComparedToDwp {
    pub fn key(&self) -> &'static str {
        match self {
            ComparedToDwp::Lower => "lower",
            ComparedToDwp::Same => "same",
            ComparedToDwp::Higher => "higher",
        }
    }

    /// Strict token parse; anything outside the three recognised tokens is
    /// rejected.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "lower" => Some(ComparedToDwp::Lower),
            "same" => Some(ComparedToDwp::Same),
            "higher" => Some(ComparedToDwp::Higher),
            _ => None,
        }
    }
}

/// Raised when a considered activity carries a missing or malformed
/// comparison token. The one message deliberately covers both cases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Outcome cannot be empty. Please check case data. If problem continues please contact support")]
pub struct OutcomeUnresolved;

/// The downstream flags stamped onto the notice body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionFlags {
    pub appeal_allowed: bool,
    pub set_aside: bool,
}

/// Parse the comparison recorded for a considered activity type.
pub fn comparison_for(
    case: &CaseSnapshot,
    activity: ActivityType,
) -> Result<ComparedToDwp, OutcomeUnresolved> {
    activity
        .compared_to_dwp(case)
        .and_then(ComparedToDwp::from_token)
        .ok_or(OutcomeUnresolved)
}

/// Flags over the considered activity types, assuming the comparator inputs
/// have already passed cross-field validation: the appeal is allowed when any
/// considered comparison strictly improves on the DWP decision, and the
/// prior decision is set aside whenever any considered comparison changed it.
pub fn decision_flags(comparisons: &[ComparedToDwp]) -> DecisionFlags {
    DecisionFlags {
        appeal_allowed: comparisons
            .iter()
            .any(|comparison| *comparison == ComparedToDwp::Higher),
        set_aside: comparisons
            .iter()
            .any(|comparison| *comparison != ComparedToDwp::Same),
    }
}
