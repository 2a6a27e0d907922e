use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};

use crate::config::{DocumentConfiguration, LanguagePreference, NoticeEvent};
use crate::notices::final_decision::builder::NoticeBuilder;
use crate::notices::final_decision::domain::{
    BenefitVariant, CaseSnapshot, HearingRecord, PanelComposition, VenueRecord,
};

pub(super) const JUDGE: &str = "Judge Full Name";

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub(super) fn hearing(hearing_date: NaiveDate, venue_name: &str) -> HearingRecord {
    HearingRecord {
        hearing_date: Some(hearing_date),
        venue: Some(VenueRecord {
            name: Some(venue_name.to_string()),
            address: Some("1 Court Street".to_string()),
        }),
    }
}

pub(super) fn documents() -> DocumentConfiguration {
    let mut english = BTreeMap::new();
    english.insert(
        NoticeEvent::IssueFinalDecision,
        "pip-final-decision-en".to_string(),
    );
    english.insert(NoticeEvent::DecisionIssued, "pip-decision-issued-en".to_string());

    let mut documents = BTreeMap::new();
    documents.insert(LanguagePreference::English, english);
    DocumentConfiguration::new(documents)
}

pub(super) fn builder() -> NoticeBuilder {
    NoticeBuilder::new(documents())
}

/// Daily living at the standard rate, higher than the DWP decision, with
/// mobility not considered. Valid end to end.
pub(super) fn standard_rate_case() -> CaseSnapshot {
    let mut activity_answers = BTreeMap::new();
    activity_answers.insert(
        "preparingFood".to_string(),
        "preparingFood1f".to_string(),
    );

    CaseSnapshot {
        benefit: BenefitVariant::Pip,
        appellant_name: "Joe Bloggs".to_string(),
        panel: PanelComposition::default(),
        daily_living_award: Some("standardRate".to_string()),
        mobility_award: Some("notConsidered".to_string()),
        daily_living_activities: Some(vec!["preparingFood".to_string()]),
        mobility_activities: None,
        activity_answers,
        daily_living_compared_to_dwp: Some("higher".to_string()),
        date_of_decision: Some(date(2019, 10, 10)),
        hearings: Some(vec![hearing(date(2019, 1, 2), "Liverpool Civil Court")]),
        ..CaseSnapshot::default()
    }
}
