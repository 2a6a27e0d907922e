use super::common::*;
use crate::notices::final_decision::activities::{question_by_key, ActivityType};
use crate::notices::final_decision::descriptors::{
    collect_descriptors, decode_answer, sort_descriptors,
};
use crate::notices::final_decision::domain::{CaseSnapshot, Descriptor, RuleDefect};

fn descriptor(question_number: &str, answer_letter: &str) -> Descriptor {
    Descriptor {
        question_number: question_number.to_string(),
        answer_letter: answer_letter.to_string(),
        answer_value: String::new(),
        question_value: String::new(),
        answer_points: 0,
    }
}

#[test]
fn decode_resolves_answer_letter_against_the_catalogue() {
    let question = question_by_key("preparingFood").expect("catalogue entry");
    let answer = decode_answer(question, "preparingFood1f").expect("decodable answer");

    assert_eq!(answer.number, "1");
    assert_eq!(answer.letter, "f");
    assert_eq!(answer.points, 8);
    assert_eq!(answer.value, "Cannot prepare and cook food.");
}

#[test]
fn decode_rejects_malformed_and_unknown_answers() {
    let question = question_by_key("preparingFood").expect("catalogue entry");

    assert!(decode_answer(question, "preparingFood").is_none());
    assert!(decode_answer(question, "preparingFood1").is_none());
    assert!(decode_answer(question, "preparingFood1z").is_none());
    assert!(decode_answer(question, "movingAround12d").is_none());
}

#[test]
fn null_selected_list_means_not_yet_answered() {
    let case = CaseSnapshot::default();
    let set = collect_descriptors(&case, ActivityType::Mobility).expect("no defect");
    assert!(set.is_none());
}

#[test]
fn empty_selected_list_is_a_completed_zero_state() {
    let case = CaseSnapshot {
        daily_living_activities: Some(Vec::new()),
        ..CaseSnapshot::default()
    };

    let set = collect_descriptors(&case, ActivityType::DailyLiving)
        .expect("no defect")
        .expect("completed state");
    assert!(set.descriptors.is_empty());
    assert_eq!(set.total_points, 0);
}

#[test]
fn selected_questions_without_recorded_answers_are_skipped() {
    let mut case = standard_rate_case();
    case.daily_living_activities = Some(vec![
        "preparingFood".to_string(),
        "takingNutrition".to_string(),
    ]);

    let set = collect_descriptors(&case, ActivityType::DailyLiving)
        .expect("no defect")
        .expect("completed state");
    assert_eq!(set.descriptors.len(), 1);
    assert_eq!(set.total_points, 8);
}

#[test]
fn unknown_selected_key_is_a_defect_not_a_validation_error() {
    let mut case = standard_rate_case();
    case.daily_living_activities = Some(vec!["jugglingChainsaws".to_string()]);

    let result = collect_descriptors(&case, ActivityType::DailyLiving);
    assert_eq!(
        result,
        Err(RuleDefect::UnknownQuestionKey("jugglingChainsaws".to_string()))
    );
}

#[test]
fn descriptors_sum_points_across_questions() {
    let mut case = standard_rate_case();
    case.mobility_activities = Some(vec![
        "movingAround".to_string(),
        "planningAndFollowing".to_string(),
    ]);
    case.activity_answers.insert(
        "movingAround".to_string(),
        "movingAround12c".to_string(),
    );
    case.activity_answers.insert(
        "planningAndFollowing".to_string(),
        "planningAndFollowing11b".to_string(),
    );

    let set = collect_descriptors(&case, ActivityType::Mobility)
        .expect("no defect")
        .expect("completed state");
    assert_eq!(set.total_points, 12);
    assert_eq!(set.descriptors.len(), 2);
}

#[test]
fn sort_orders_numerically_then_by_letter() {
    let mut descriptors = vec![
        descriptor("12", "d"),
        descriptor("2", "b"),
        descriptor("11", "f"),
        descriptor("2", "a"),
    ];
    sort_descriptors(&mut descriptors);

    let order: Vec<(String, String)> = descriptors
        .iter()
        .map(|d| (d.question_number.clone(), d.answer_letter.clone()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("2".to_string(), "a".to_string()),
            ("2".to_string(), "b".to_string()),
            ("11".to_string(), "f".to_string()),
            ("12".to_string(), "d".to_string()),
        ]
    );
}

#[test]
fn sorting_is_idempotent() {
    let mut descriptors = vec![
        descriptor("12", "d"),
        descriptor("1", "f"),
        descriptor("5", "c"),
    ];
    sort_descriptors(&mut descriptors);
    let sorted_once = descriptors.clone();
    sort_descriptors(&mut descriptors);
    assert_eq!(descriptors, sorted_once);
}

#[test]
fn collected_descriptors_come_back_in_presentation_order() {
    let mut case = standard_rate_case();
    case.mobility_activities = Some(vec![
        "movingAround".to_string(),
        "planningAndFollowing".to_string(),
    ]);
    case.activity_answers.insert(
        "movingAround".to_string(),
        "movingAround12c".to_string(),
    );
    case.activity_answers.insert(
        "planningAndFollowing".to_string(),
        "planningAndFollowing11b".to_string(),
    );

    let set = collect_descriptors(&case, ActivityType::Mobility)
        .expect("no defect")
        .expect("completed state");
    assert_eq!(set.descriptors[0].question_number, "11");
    assert_eq!(set.descriptors[1].question_number, "12");
}
