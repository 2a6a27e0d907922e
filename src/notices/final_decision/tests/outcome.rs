use super::common::*;
use crate::notices::final_decision::outcome::{
    comparison_for, decision_flags, ComparedToDwp, OutcomeUnresolved,
};

#[test]
fn only_the_three_recognised_tokens_parse() {
    assert_eq!(ComparedToDwp::from_token("lower"), Some(ComparedToDwp::Lower));
    assert_eq!(ComparedToDwp::from_token("same"), Some(ComparedToDwp::Same));
    assert_eq!(ComparedToDwp::from_token("higher"), Some(ComparedToDwp::Higher));

    assert_eq!(ComparedToDwp::from_token("Higher"), None);
    assert_eq!(ComparedToDwp::from_token(""), None);
    assert_eq!(ComparedToDwp::from_token("sideways"), None);
}

#[test]
fn unresolved_outcome_uses_the_single_canned_message() {
    assert_eq!(
        OutcomeUnresolved.to_string(),
        "Outcome cannot be empty. Please check case data. If problem continues please contact support"
    );
}

#[test]
fn missing_and_malformed_comparisons_fail_identically() {
    use crate::notices::final_decision::activities::ActivityType;

    let mut case = standard_rate_case();
    case.daily_living_compared_to_dwp = None;
    let missing = comparison_for(&case, ActivityType::DailyLiving);

    case.daily_living_compared_to_dwp = Some("sideways".to_string());
    let malformed = comparison_for(&case, ActivityType::DailyLiving);

    assert_eq!(missing, Err(OutcomeUnresolved));
    assert_eq!(malformed, Err(OutcomeUnresolved));
}

#[test]
fn appeal_is_allowed_only_on_a_strict_improvement() {
    assert!(decision_flags(&[ComparedToDwp::Higher]).appeal_allowed);
    assert!(decision_flags(&[ComparedToDwp::Lower, ComparedToDwp::Higher]).appeal_allowed);
    assert!(!decision_flags(&[ComparedToDwp::Same]).appeal_allowed);
    assert!(!decision_flags(&[ComparedToDwp::Lower]).appeal_allowed);
    assert!(!decision_flags(&[]).appeal_allowed);
}

#[test]
fn set_aside_whenever_any_considered_comparison_changed() {
    assert!(decision_flags(&[ComparedToDwp::Higher]).set_aside);
    assert!(decision_flags(&[ComparedToDwp::Lower]).set_aside);
    assert!(decision_flags(&[ComparedToDwp::Same, ComparedToDwp::Lower]).set_aside);
    assert!(!decision_flags(&[ComparedToDwp::Same, ComparedToDwp::Same]).set_aside);
    assert!(!decision_flags(&[]).set_aside);
}
