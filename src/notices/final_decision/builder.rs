//! Top-level assembly of the final decision notice body.
//!
//! The builder fails fast on data problems (cross-field validation, hearing
//! resolution, identity), then works through each activity type (descriptor
//! aggregation, points classification, award comparison) and finally resolves
//! the document template and name strings. Any failure suppresses the notice
//! entirely; a partially-resolved notice is never produced.

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

use crate::config::{letterhead_image, DocumentConfiguration, NoticeEvent};

use super::activities::ActivityType;
use super::descriptors::collect_descriptors;
use super::domain::{
    ActivityOutcome, AwardType, CaseSnapshot, FinalDecisionNotice, PanelComposition, RuleDefect,
};
use super::hearing::resolve_hearing;
use super::outcome::{comparison_for, decision_flags, ComparedToDwp};
use super::points::{classify, standard_error_message};
use super::validation::{validate, ValidationPolicy};

/// Why no notice body was produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NoticeError {
    /// Business-rule violations to surface to the caseworker; generation is
    /// suppressed whenever this list is non-empty.
    #[error("decision notice rejected: {}", .errors.join("; "))]
    Rejected {
        errors: Vec<String>,
        warnings: Vec<String>,
    },
    /// The rule tables themselves are broken; not a caseworker problem.
    #[error(transparent)]
    Defect(#[from] RuleDefect),
}

impl NoticeError {
    fn terminal(message: impl Into<String>) -> Self {
        NoticeError::Rejected {
            errors: vec![message.into()],
            warnings: Vec::new(),
        }
    }

    /// The user-facing error strings, empty for defects.
    pub fn errors(&self) -> &[String] {
        match self {
            NoticeError::Rejected { errors, .. } => errors,
            NoticeError::Defect(_) => &[],
        }
    }
}

/// Assembles notice bodies against an externally supplied template table.
pub struct NoticeBuilder {
    documents: DocumentConfiguration,
}

impl NoticeBuilder {
    pub fn new(documents: DocumentConfiguration) -> Self {
        Self { documents }
    }

    /// Build the complete notice body for a case, or the reasons it cannot
    /// be issued. `signed_in_user` is the judge's display name as resolved
    /// by the identity collaborator.
    pub fn build(
        &self,
        case: &CaseSnapshot,
        signed_in_user: Option<&str>,
    ) -> Result<FinalDecisionNotice, NoticeError> {
        let today = today();

        let policy = ValidationPolicy::for_variant(case.benefit);
        let validation = validate(case, &policy, today);
        if !validation.is_valid() {
            return Err(NoticeError::Rejected {
                errors: validation.errors,
                warnings: validation.warnings,
            });
        }

        let hearing = resolve_hearing(case.hearings.as_deref(), today)
            .map_err(|err| NoticeError::terminal(err.to_string()))?;

        let judge = signed_in_user
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| NoticeError::terminal("Unable to obtain signed in user name"))?;

        let date_of_decision = case
            .date_of_decision
            .ok_or_else(|| NoticeError::terminal("Unable to determine date of decision"))?;

        let mut comparisons: Vec<ComparedToDwp> = Vec::new();
        let mut daily_living = None;
        let mut mobility = None;
        for activity in ActivityType::ALL {
            let outcome = activity_outcome(case, activity, &mut comparisons)?;
            match activity {
                ActivityType::DailyLiving => daily_living = outcome,
                ActivityType::Mobility => mobility = outcome,
            }
        }
        let flags = decision_flags(&comparisons);

        let template_id = self
            .documents
            .template_for(case.language_preference, NoticeEvent::IssueFinalDecision)
            .map_err(|err| NoticeError::terminal(err.to_string()))?
            .to_string();

        let notice = FinalDecisionNotice {
            template_id,
            letterhead_image: letterhead_image(case.regional_processing_centre.as_deref())
                .to_string(),
            generated_date: stamp_generated_date(case, today),
            issued_date: today,
            appellant_name: appellant_display_name(case),
            held_before: held_before(judge, &case.panel),
            held_on: hearing.held_on,
            held_at: hearing.held_at,
            date_of_decision,
            start_date: case.start_date,
            end_date: case.end_date,
            indefinite: case.end_date.is_none(),
            appeal_allowed: flags.appeal_allowed,
            set_aside: flags.set_aside,
            daily_living,
            mobility,
            reasons_for_decision: case.reasons_for_decision.clone().unwrap_or_default(),
            details_of_decision: case.details_of_decision.clone(),
            anything_else: case.anything_else.clone(),
            hearing_type: case.hearing_type.clone(),
            attended_hearing: is_yes(case.appellant_attended.as_deref()),
            presenting_officer_attended: is_yes(case.presenting_officer_attended.as_deref()),
        };

        info!(
            template = %notice.template_id,
            allowed = notice.appeal_allowed,
            set_aside = notice.set_aside,
            "assembled final decision notice body"
        );

        Ok(notice)
    }
}

/// Resolve one activity type: award tier, comparison, descriptors, points.
///
/// Returns `None` when the activity's award answer has not been recorded at
/// all. A recorded tier whose descriptor points classify to a different tier
/// is rejected with that tier's canned mismatch message.
fn activity_outcome(
    case: &CaseSnapshot,
    activity: ActivityType,
    comparisons: &mut Vec<ComparedToDwp>,
) -> Result<Option<ActivityOutcome>, NoticeError> {
    let Some(answer) = activity.award_answer(case) else {
        return Ok(None);
    };

    let award = AwardType::from_key(answer).ok_or_else(|| {
        debug!(activity = %activity, answer, "unrecognised award answer");
        NoticeError::terminal(
            "Outcome cannot be empty. Please check case data. If problem continues please contact support",
        )
    })?;

    if award == AwardType::NotConsidered {
        return Ok(Some(ActivityOutcome {
            award,
            severity: award.severity(),
            descriptors: None,
            total_points: 0,
        }));
    }

    let comparison =
        comparison_for(case, activity).map_err(|err| NoticeError::terminal(err.to_string()))?;
    comparisons.push(comparison);

    let (descriptors, total_points) = match collect_descriptors(case, activity)? {
        Some(set) => {
            if classify(activity, set.total_points)? != award {
                return Err(NoticeError::terminal(standard_error_message(
                    award, activity,
                )?));
            }
            (Some(set.descriptors), set.total_points)
        }
        None => (None, 0),
    };

    Ok(Some(ActivityOutcome {
        award,
        severity: award.severity(),
        descriptors,
        total_points,
    }))
}

/// Appellant display name, routed through the appointee when one exists.
fn appellant_display_name(case: &CaseSnapshot) -> String {
    match case
        .appointee_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
    {
        Some(appointee) => format!("{appointee}, appointee for {}", case.appellant_name),
        None => case.appellant_name.clone(),
    }
}

/// Panel phrasing for the "held before" line: the judge plus any named panel
/// members. Blank member names are absent, not empty strings to join.
fn held_before(judge: &str, panel: &PanelComposition) -> String {
    let mut names = vec![judge.to_string()];
    for member in [
        panel.disability_qualified_member.as_deref(),
        panel.medically_qualified_member.as_deref(),
        panel.other_member.as_deref(),
    ]
    .into_iter()
    .flatten()
    {
        let member = member.trim();
        if !member.is_empty() {
            names.push(member.to_string());
        }
    }
    grammatically_joined(&names)
}

/// Natural-language list join: comma-separated, final two joined by "and".
fn grammatically_joined(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} and {}", head.join(", "), last),
    }
}

/// The stored generated date is ignored and re-stamped to today on every
/// build: the upstream case platform nulls the field on resubmission, and
/// this single function is the whole workaround. Delete it (and read the
/// stored value) once that platform defect is fixed.
fn stamp_generated_date(_case: &CaseSnapshot, today: NaiveDate) -> NaiveDate {
    today
}

fn is_yes(token: Option<&str>) -> bool {
    token.is_some_and(|value| value.eq_ignore_ascii_case("yes"))
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
