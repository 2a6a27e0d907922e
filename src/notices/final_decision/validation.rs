//! Cross-field consistency validation over the full case snapshot.
//!
//! One validator implementation serves every benefit variant; the pieces
//! that differ (the activity-selection message and whether the end-date-type
//! companion field is enforced) are carried by a small policy object. Rules
//! are independent and all applicable errors accumulate in one pass, except
//! that a blank decision date suppresses both date checks outright.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::activities::ActivityType;
use super::domain::{AwardType, BenefitVariant, CaseSnapshot};
use super::outcome::ComparedToDwp;

/// Variant-specific parameters injected into the shared validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub benefit: BenefitVariant,
    pub activity_selection_message: &'static str,
    pub enforce_end_date_type: bool,
}

impl ValidationPolicy {
    pub fn for_variant(benefit: BenefitVariant) -> Self {
        match benefit {
            BenefitVariant::Pip => Self {
                benefit,
                activity_selection_message:
                    "At least one activity must be selected unless there is no award",
                enforce_end_date_type: true,
            },
            BenefitVariant::Esa => Self {
                benefit,
                activity_selection_message: "At least one activity must be selected.",
                enforce_end_date_type: false,
            },
        }
    }
}

/// Accumulated rule results. The warnings channel is deliberately kept even
/// though no current rule emits one; variants are not uniform on the
/// error/warning boundary and collapsing the channel would lose that seam.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Run every applicable rule against the snapshot.
pub fn validate(
    case: &CaseSnapshot,
    policy: &ValidationPolicy,
    today: NaiveDate,
) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::default();

    check_dates(case, today, &mut outcome.errors);
    check_decision_document(case, &mut outcome.errors);
    check_award_comparisons(case, &mut outcome.errors);
    check_considered(case, &mut outcome.errors);
    check_activity_selection(case, policy, &mut outcome.errors);
    if policy.enforce_end_date_type {
        check_end_date_type(case, &mut outcome.errors);
    }

    if !outcome.is_valid() {
        debug!(
            errors = outcome.errors.len(),
            "case failed cross-field validation"
        );
    }

    outcome
}

/// Both date rules apply only once a decision date has been recorded; a
/// blank decision date skips them entirely rather than defaulting.
fn check_dates(case: &CaseSnapshot, today: NaiveDate, errors: &mut Vec<String>) {
    let Some(date_of_decision) = case.date_of_decision else {
        return;
    };

    if let (Some(start), Some(end)) = (case.start_date, case.end_date) {
        if start >= end {
            errors.push(
                "Decision notice end date must be after decision notice start date".to_string(),
            );
        }
    }

    if date_of_decision > today {
        errors.push("Decision notice date of decision must not be in the future".to_string());
    }
}

fn check_decision_document(case: &CaseSnapshot, errors: &mut Vec<String>) {
    if let Some(link) = &case.decision_document {
        if !link.filename.to_lowercase().ends_with(".pdf") {
            errors.push("You need to upload PDF documents only".to_string());
        }
    }
}

/// Tier and comparison legality per activity type: a no-award outcome cannot
/// improve on the DWP decision, and an enhanced-rate outcome cannot worsen it.
fn check_award_comparisons(case: &CaseSnapshot, errors: &mut Vec<String>) {
    for activity in ActivityType::ALL {
        let award = activity.award_answer(case);
        let compared = activity.compared_to_dwp(case);

        if award == Some(AwardType::NoAward.key())
            && compared == Some(ComparedToDwp::Higher.key())
        {
            errors.push(format!(
                "{} decision of No Award cannot be higher than DWP decision",
                activity.label()
            ));
        }
        if award == Some(AwardType::EnhancedRate.key())
            && compared == Some(ComparedToDwp::Lower.key())
        {
            errors.push(format!(
                "{} award at Enhanced Rate cannot be lower than DWP decision",
                activity.label()
            ));
        }
    }
}

fn check_considered(case: &CaseSnapshot, errors: &mut Vec<String>) {
    let not_considered = |award: Option<&str>| award == Some(AwardType::NotConsidered.key());
    if not_considered(case.daily_living_award.as_deref())
        && not_considered(case.mobility_award.as_deref())
    {
        errors.push("At least one of Mobility or Daily Living must be considered".to_string());
    }
}

/// An explicitly empty selection with an award on the table is inconsistent.
/// A `None` list means the question set has not been answered yet and never
/// triggers this rule.
fn check_activity_selection(
    case: &CaseSnapshot,
    policy: &ValidationPolicy,
    errors: &mut Vec<String>,
) {
    let no_award = |award: Option<&str>| award == Some(AwardType::NoAward.key());
    let any_award_on_table = !no_award(case.daily_living_award.as_deref())
        || !no_award(case.mobility_award.as_deref());

    let both_lists_empty = matches!(&case.daily_living_activities, Some(list) if list.is_empty())
        && matches!(&case.mobility_activities, Some(list) if list.is_empty());

    if any_award_on_table && both_lists_empty {
        errors.push(policy.activity_selection_message.to_string());
    }
}

fn is_no_award_or_not_considered(award: &str) -> bool {
    award == AwardType::NoAward.key() || award == AwardType::NotConsidered.key()
}

/// End-date-type companion rule: once both award answers are in on the
/// descriptor flow, a decision with no award anywhere must carry the `na`
/// end-date-type, and any other decision must not.
fn check_end_date_type(case: &CaseSnapshot, errors: &mut Vec<String>) {
    if !case.descriptor_flow {
        return;
    }
    let (Some(daily_living), Some(mobility)) = (
        case.daily_living_award.as_deref(),
        case.mobility_award.as_deref(),
    ) else {
        return;
    };

    let nothing_awarded =
        is_no_award_or_not_considered(daily_living) && is_no_award_or_not_considered(mobility);

    if nothing_awarded {
        if case
            .end_date_type
            .as_deref()
            .is_some_and(|end_date_type| end_date_type != "na")
        {
            errors.push(
                "End date is not applicable for this decision - please specify 'N/A - No Award'."
                    .to_string(),
            );
        }
    } else if case.end_date_type.as_deref() == Some("na") {
        errors.push(
            "An end date must be provided or set to Indefinite for this decision.".to_string(),
        );
    }
}
