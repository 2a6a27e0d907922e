//! Points-range classifier mapping descriptor point totals to award tiers.
//!
//! The conditions are a static rule table. For each activity type the three
//! predicates partition the whole points domain: below 8 is no award, 8 to 11
//! is the standard rate, 12 and above the enhanced rate. A not-considered
//! tier is selected by the recorded award flag, never by points, so it has no
//! row here. Gap-freeness and exclusivity are data-shape properties enforced
//! by exhaustive tests rather than runtime guards.

use super::activities::ActivityType;
use super::domain::{AwardType, RuleDefect};

/// One row of the classifier table.
pub struct PointsCondition {
    pub activity_type: ActivityType,
    pub award_type: AwardType,
    pub error_message: &'static str,
    pub predicate: fn(u32) -> bool,
}

pub const POINTS_CONDITIONS: &[PointsCondition] = &[
    PointsCondition {
        activity_type: ActivityType::DailyLiving,
        award_type: AwardType::NoAward,
        error_message: "You have previously selected No Award for Daily living. The points awarded don't match. Please review your previous selection.",
        predicate: |points| points < 8,
    },
    PointsCondition {
        activity_type: ActivityType::DailyLiving,
        award_type: AwardType::StandardRate,
        error_message: "You have previously selected a standard rate award for Daily living. The points awarded don't match. Please review your previous selection.",
        predicate: |points| (8..=11).contains(&points),
    },
    PointsCondition {
        activity_type: ActivityType::DailyLiving,
        award_type: AwardType::EnhancedRate,
        error_message: "You have previously selected an enhanced rate award for Daily living. The points awarded don't match. Please review your previous selection.",
        predicate: |points| points >= 12,
    },
    PointsCondition {
        activity_type: ActivityType::Mobility,
        award_type: AwardType::NoAward,
        error_message: "You have previously selected No Award for Mobility. The points awarded don't match. Please review your previous selection.",
        predicate: |points| points < 8,
    },
    PointsCondition {
        activity_type: ActivityType::Mobility,
        award_type: AwardType::StandardRate,
        error_message: "You have previously selected a standard rate award for Mobility. The points awarded don't match. Please review your previous selection.",
        predicate: |points| (8..=11).contains(&points),
    },
    PointsCondition {
        activity_type: ActivityType::Mobility,
        award_type: AwardType::EnhancedRate,
        error_message: "You have previously selected an enhanced rate award for Mobility. The points awarded don't match. Please review your previous selection.",
        predicate: |points| points >= 12,
    },
];

/// Map a point total to the single matching award tier for an activity type.
///
/// A miss here means the rule table itself is broken; it surfaces as an
/// illegal-state defect rather than a user-facing validation error.
pub fn classify(activity: ActivityType, points: u32) -> Result<AwardType, RuleDefect> {
    POINTS_CONDITIONS
        .iter()
        .find(|condition| condition.activity_type == activity && (condition.predicate)(points))
        .map(|condition| condition.award_type)
        .ok_or(RuleDefect::NoMatchingPointsCondition { activity, points })
}

/// Canned message used when a recorded award tier disagrees with the points
/// the selected descriptors add up to. Not-considered has no such message.
pub fn standard_error_message(
    award: AwardType,
    activity: ActivityType,
) -> Result<&'static str, RuleDefect> {
    POINTS_CONDITIONS
        .iter()
        .find(|condition| condition.activity_type == activity && condition.award_type == award)
        .map(|condition| condition.error_message)
        .ok_or(RuleDefect::NotConsideredHasNoMessage)
}
