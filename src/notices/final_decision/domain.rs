use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::LanguagePreference;

use super::activities::ActivityType;

/// Benefit variants sharing the validator shape but diverging in policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BenefitVariant {
    Pip,
    Esa,
}

/// Award tier for a single activity type, ordered by severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AwardType {
    NotConsidered = 0,
    NoAward = 1,
    StandardRate = 2,
    EnhancedRate = 3,
}

impl AwardType {
    /// Stable token recorded against the case for this tier.
    pub fn key(&self) -> &'static str {
        match self {
            AwardType::NotConsidered => "notConsidered",
            AwardType::NoAward => "noAward",
            AwardType::StandardRate => "standardRate",
            AwardType::EnhancedRate => "enhancedRate",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "notConsidered" => Some(AwardType::NotConsidered),
            "noAward" => Some(AwardType::NoAward),
            "standardRate" => Some(AwardType::StandardRate),
            "enhancedRate" => Some(AwardType::EnhancedRate),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AwardType::NotConsidered => "Not Considered",
            AwardType::NoAward => "No Award",
            AwardType::StandardRate => "Standard Rate",
            AwardType::EnhancedRate => "Enhanced Rate",
        }
    }

    pub fn severity(&self) -> u8 {
        *self as u8
    }
}

/// Failures indicating a broken rule catalogue rather than bad case data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleDefect {
    #[error("unknown activity question key: {0}")]
    UnknownQuestionKey(String),
    #[error("no points condition matched {points} points for {activity}")]
    NoMatchingPointsCondition { activity: ActivityType, points: u32 },
    #[error("no standard error message exists for an activity that was not considered")]
    NotConsideredHasNoMessage,
}

/// A decoded answer to an activity question. Equality covers all four fields.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ActivityAnswer {
    pub number: String,
    pub letter: String,
    pub value: String,
    pub points: u32,
}

/// A selected answer carrying its display text for the decision document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    pub question_number: String,
    pub answer_letter: String,
    pub answer_value: String,
    pub question_value: String,
    pub answer_points: u32,
}

/// Venue details as recorded against a listed hearing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueRecord {
    pub name: Option<String>,
    pub address: Option<String>,
}

/// One entry in the case's hearing history; index 0 is authoritative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HearingRecord {
    pub hearing_date: Option<NaiveDate>,
    pub venue: Option<VenueRecord>,
}

/// Link to a document uploaded against the case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentLink {
    pub url: String,
    pub filename: String,
}

/// Panel members sitting alongside the judge; blank names are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelComposition {
    pub disability_qualified_member: Option<String>,
    pub medically_qualified_member: Option<String>,
    pub other_member: Option<String>,
}

/// Read-only projection of the case data consumed by one evaluation.
///
/// Selected-activity lists distinguish `None` (the question set has not been
/// answered yet) from `Some(vec![])` (a completed zero-selected state).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseSnapshot {
    pub benefit: BenefitVariant,
    pub appellant_name: String,
    pub appointee_name: Option<String>,
    pub panel: PanelComposition,
    pub daily_living_award: Option<String>,
    pub mobility_award: Option<String>,
    pub daily_living_activities: Option<Vec<String>>,
    pub mobility_activities: Option<Vec<String>>,
    pub activity_answers: BTreeMap<String, String>,
    pub daily_living_compared_to_dwp: Option<String>,
    pub mobility_compared_to_dwp: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub end_date_type: Option<String>,
    pub date_of_decision: Option<NaiveDate>,
    pub generated_date: Option<NaiveDate>,
    pub descriptor_flow: bool,
    pub decision_document: Option<DocumentLink>,
    pub hearings: Option<Vec<HearingRecord>>,
    pub regional_processing_centre: Option<String>,
    pub language_preference: LanguagePreference,
    pub reasons_for_decision: Option<Vec<String>>,
    pub details_of_decision: Option<String>,
    pub anything_else: Option<String>,
    pub hearing_type: Option<String>,
    pub appellant_attended: Option<String>,
    pub presenting_officer_attended: Option<String>,
}

impl CaseSnapshot {
    /// Raw answer recorded against an activity question key, if any.
    pub fn recorded_answer(&self, key: &str) -> Option<&str> {
        self.activity_answers.get(key).map(String::as_str)
    }
}

impl Default for CaseSnapshot {
    fn default() -> Self {
        Self {
            benefit: BenefitVariant::Pip,
            appellant_name: String::new(),
            appointee_name: None,
            panel: PanelComposition::default(),
            daily_living_award: None,
            mobility_award: None,
            daily_living_activities: None,
            mobility_activities: None,
            activity_answers: BTreeMap::new(),
            daily_living_compared_to_dwp: None,
            mobility_compared_to_dwp: None,
            start_date: None,
            end_date: None,
            end_date_type: None,
            date_of_decision: None,
            generated_date: None,
            descriptor_flow: false,
            decision_document: None,
            hearings: None,
            regional_processing_centre: None,
            language_preference: LanguagePreference::English,
            reasons_for_decision: None,
            details_of_decision: None,
            anything_else: None,
            hearing_type: None,
            appellant_attended: None,
            presenting_officer_attended: None,
        }
    }
}

/// Outcome of one activity type as it appears in the notice body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityOutcome {
    pub award: AwardType,
    pub severity: u8,
    pub descriptors: Option<Vec<Descriptor>>,
    pub total_points: u32,
}

/// The fully-resolved notice body handed to the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalDecisionNotice {
    pub template_id: String,
    pub letterhead_image: String,
    pub generated_date: NaiveDate,
    pub issued_date: NaiveDate,
    pub appellant_name: String,
    pub held_before: String,
    pub held_on: NaiveDate,
    pub held_at: String,
    pub date_of_decision: NaiveDate,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub indefinite: bool,
    pub appeal_allowed: bool,
    pub set_aside: bool,
    pub daily_living: Option<ActivityOutcome>,
    pub mobility: Option<ActivityOutcome>,
    pub reasons_for_decision: Vec<String>,
    pub details_of_decision: Option<String>,
    pub anything_else: Option<String>,
    pub hearing_type: Option<String>,
    pub attended_hearing: bool,
    pub presenting_officer_attended: bool,
}
