use crate::notices::final_decision::activities::ActivityType;
use crate::notices::final_decision::domain::{AwardType, RuleDefect};
use crate::notices::final_decision::points::{
    classify, standard_error_message, POINTS_CONDITIONS,
};

#[test]
fn points_conditions_partition_the_domain_exhaustively() {
    for activity in ActivityType::ALL {
        for points in 0..=99u32 {
            let matching = POINTS_CONDITIONS
                .iter()
                .filter(|condition| {
                    condition.activity_type == activity && (condition.predicate)(points)
                })
                .count();
            assert_eq!(
                matching, 1,
                "{activity} at {points} points matched {matching} conditions"
            );
        }
    }
}

#[test]
fn classifier_boundaries_are_exact() {
    for activity in ActivityType::ALL {
        assert_eq!(classify(activity, 7), Ok(AwardType::NoAward));
        assert_eq!(classify(activity, 8), Ok(AwardType::StandardRate));
        assert_eq!(classify(activity, 11), Ok(AwardType::StandardRate));
        assert_eq!(classify(activity, 12), Ok(AwardType::EnhancedRate));
    }
}

#[test]
fn zero_points_is_no_award() {
    assert_eq!(classify(ActivityType::DailyLiving, 0), Ok(AwardType::NoAward));
    assert_eq!(classify(ActivityType::Mobility, 0), Ok(AwardType::NoAward));
}

#[test]
fn every_points_tier_has_a_mismatch_message() {
    for activity in ActivityType::ALL {
        for award in [
            AwardType::NoAward,
            AwardType::StandardRate,
            AwardType::EnhancedRate,
        ] {
            let message =
                standard_error_message(award, activity).expect("tier should carry a message");
            assert!(message.contains(activity.label()));
            assert!(message.contains("The points awarded don't match"));
        }
    }
}

#[test]
fn mismatch_messages_use_the_activity_label_casing() {
    assert_eq!(
        standard_error_message(AwardType::NoAward, ActivityType::DailyLiving),
        Ok("You have previously selected No Award for Daily living. The points awarded don't match. Please review your previous selection.")
    );
    assert_eq!(
        standard_error_message(AwardType::EnhancedRate, ActivityType::Mobility),
        Ok("You have previously selected an enhanced rate award for Mobility. The points awarded don't match. Please review your previous selection.")
    );
}

#[test]
fn not_considered_has_no_mismatch_message() {
    assert_eq!(
        standard_error_message(AwardType::NotConsidered, ActivityType::DailyLiving),
        Err(RuleDefect::NotConsideredHasNoMessage)
    );
}

#[test]
fn award_types_order_by_severity() {
    assert!(AwardType::NotConsidered < AwardType::NoAward);
    assert!(AwardType::NoAward < AwardType::StandardRate);
    assert!(AwardType::StandardRate < AwardType::EnhancedRate);
    assert_eq!(AwardType::EnhancedRate.severity(), 3);
}
