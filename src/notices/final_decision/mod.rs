//! Award determination and decision-notice assembly for a benefit appeal.
//!
//! A pure, synchronous computation over an in-memory case snapshot: the
//! validator and rule tables classify the case and the builder assembles the
//! fully-resolved notice body consumed by the external rendering
//! collaborator. Nothing here persists state or performs I/O.

pub mod activities;
pub mod builder;
pub mod descriptors;
pub mod domain;
pub mod hearing;
pub mod outcome;
pub mod points;
pub mod validation;

#[cfg(test)]
mod tests;

pub use activities::{question_by_key, questions_for, ActivityQuestion, ActivityType};
pub use builder::{NoticeBuilder, NoticeError};
pub use descriptors::{collect_descriptors, sort_descriptors, DescriptorSet};
pub use domain::{
    ActivityAnswer, ActivityOutcome, AwardType, BenefitVariant, CaseSnapshot, Descriptor,
    DocumentLink, FinalDecisionNotice, HearingRecord, PanelComposition, RuleDefect, VenueRecord,
};
pub use hearing::{resolve_hearing, HearingError, HearingVenue, IN_CHAMBERS};
pub use outcome::{decision_flags, ComparedToDwp, DecisionFlags, OutcomeUnresolved};
pub use points::{classify, standard_error_message, PointsCondition, POINTS_CONDITIONS};
pub use validation::{validate, ValidationOutcome, ValidationPolicy};
