//! Externally supplied document configuration: the two-level template-id
//! lookup and the regional letterhead selection. Absence at either lookup
//! level is a runtime error, never a silent default.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Language the notice is issued in; first key of the template lookup.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum LanguagePreference {
    English,
    Welsh,
}

impl fmt::Display for LanguagePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguagePreference::English => f.write_str("ENGLISH"),
            LanguagePreference::Welsh => f.write_str("WELSH"),
        }
    }
}

/// Notice event the template is issued for; second key of the lookup.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum NoticeEvent {
    IssueFinalDecision,
    DecisionIssued,
}

impl fmt::Display for NoticeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeEvent::IssueFinalDecision => f.write_str("ISSUE_FINAL_DECISION"),
            NoticeEvent::DecisionIssued => f.write_str("DECISION_ISSUED"),
        }
    }
}

/// Failures resolving a template identity from the configuration table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("Unable to obtain benefit specific documents for language:{0}")]
    MissingLanguage(LanguagePreference),
    #[error("Unable to obtain template id for {event} and language:{language}")]
    MissingTemplate {
        event: NoticeEvent,
        language: LanguagePreference,
    },
}

/// Two-level `language -> event -> template id` lookup supplied by the host
/// configuration collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentConfiguration {
    pub documents: BTreeMap<LanguagePreference, BTreeMap<NoticeEvent, String>>,
}

impl DocumentConfiguration {
    pub fn new(documents: BTreeMap<LanguagePreference, BTreeMap<NoticeEvent, String>>) -> Self {
        Self { documents }
    }

    /// Resolve the template id for a language and event, failing precisely
    /// at the level that is missing.
    pub fn template_for(
        &self,
        language: LanguagePreference,
        event: NoticeEvent,
    ) -> Result<&str, TemplateError> {
        let by_event = self
            .documents
            .get(&language)
            .ok_or(TemplateError::MissingLanguage(language))?;
        by_event
            .get(&event)
            .map(String::as_str)
            .ok_or(TemplateError::MissingTemplate { event, language })
    }
}

/// Regional processing centres whose notices carry the Scottish letterhead.
pub const SCOTTISH_PROCESSING_CENTRES: &[&str] = &["Glasgow"];

pub const SCOTTISH_LETTERHEAD_IMAGE: &str = "schmcts.png";
pub const DEFAULT_LETTERHEAD_IMAGE: &str = "enhmcts.png";

/// Letterhead image for a case's regional processing centre.
pub fn letterhead_image(regional_centre: Option<&str>) -> &'static str {
    match regional_centre {
        Some(name) if SCOTTISH_PROCESSING_CENTRES.contains(&name) => SCOTTISH_LETTERHEAD_IMAGE,
        _ => DEFAULT_LETTERHEAD_IMAGE,
    }
}
