//! Fixed catalogue of scored activity questions and their lettered answers.
//!
//! The catalogue is static data: each question carries its stable key, the
//! statutory question number, display text, and the points attached to each
//! answer letter. Lookup failures are programmer defects, not case errors.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::{CaseSnapshot, RuleDefect};

/// A scored dimension of the claim; each carries its own award answer and
/// selected-question list on the case.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ActivityType {
    DailyLiving,
    Mobility,
}

impl ActivityType {
    pub const ALL: [ActivityType; 2] = [ActivityType::DailyLiving, ActivityType::Mobility];

    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::DailyLiving => "Daily living",
            ActivityType::Mobility => "Mobility",
        }
    }

    /// The award-tier token recorded against the case for this activity type.
    pub fn award_answer<'a>(&self, case: &'a CaseSnapshot) -> Option<&'a str> {
        match self {
            ActivityType::DailyLiving => case.daily_living_award.as_deref(),
            ActivityType::Mobility => case.mobility_award.as_deref(),
        }
    }

    /// The selected question keys, `None` while the question set is unanswered.
    pub fn selected_questions<'a>(&self, case: &'a CaseSnapshot) -> Option<&'a [String]> {
        match self {
            ActivityType::DailyLiving => case.daily_living_activities.as_deref(),
            ActivityType::Mobility => case.mobility_activities.as_deref(),
        }
    }

    /// The recorded comparison of the tribunal's award against the DWP decision.
    pub fn compared_to_dwp<'a>(&self, case: &'a CaseSnapshot) -> Option<&'a str> {
        match self {
            ActivityType::DailyLiving => case.daily_living_compared_to_dwp.as_deref(),
            ActivityType::Mobility => case.mobility_compared_to_dwp.as_deref(),
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One lettered answer to an activity question with its point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerDefinition {
    pub letter: &'static str,
    pub points: u32,
    pub value: &'static str,
}

/// A catalogue entry for a named activity question.
#[derive(Debug, Clone, Copy)]
pub struct ActivityQuestion {
    pub key: &'static str,
    pub number: &'static str,
    pub value: &'static str,
    pub activity_type: ActivityType,
    pub answers: &'static [AnswerDefinition],
}

impl ActivityQuestion {
    /// The free-text answer recorded for this question on the given case.
    pub fn recorded_answer<'a>(&self, case: &'a CaseSnapshot) -> Option<&'a str> {
        case.recorded_answer(self.key)
    }

    pub fn answer_for_letter(&self, letter: &str) -> Option<&'static AnswerDefinition> {
        self.answers.iter().find(|answer| answer.letter == letter)
    }
}

const fn answer(letter: &'static str, points: u32, value: &'static str) -> AnswerDefinition {
    AnswerDefinition {
        letter,
        points,
        value,
    }
}

pub const ACTIVITY_QUESTIONS: &[ActivityQuestion] = &[
    ActivityQuestion {
        key: "preparingFood",
        number: "1",
        value: "Preparing food",
        activity_type: ActivityType::DailyLiving,
        answers: &[
            answer("a", 0, "Can prepare and cook a simple meal unaided."),
            answer(
                "b",
                2,
                "Needs to use an aid or appliance to be able to either prepare or cook a simple meal.",
            ),
            answer(
                "c",
                2,
                "Cannot cook a simple meal using a conventional cooker but is able to do so using a microwave.",
            ),
            answer("d", 2, "Needs prompting to be able to either prepare or cook a simple meal."),
            answer(
                "e",
                4,
                "Needs supervision or assistance to either prepare or cook a simple meal.",
            ),
            answer("f", 8, "Cannot prepare and cook food."),
        ],
    },
    ActivityQuestion {
        key: "takingNutrition",
        number: "2",
        value: "Taking nutrition",
        activity_type: ActivityType::DailyLiving,
        answers: &[
            answer("a", 0, "Can take nutrition unaided."),
            answer(
                "b",
                2,
                "Needs to use an aid or appliance to be able to take nutrition, or needs supervision to be able to take nutrition, or assistance to be able to cut up food.",
            ),
            answer("c", 2, "Needs a therapeutic source to be able to take nutrition."),
            answer("d", 4, "Needs prompting to be able to take nutrition."),
            answer(
                "e",
                6,
                "Needs assistance to be able to manage a therapeutic source to take nutrition.",
            ),
            answer(
                "f",
                10,
                "Cannot convey food and drink to their mouth and needs another person to do so.",
            ),
        ],
    },
    ActivityQuestion {
        key: "managingTherapy",
        number: "3",
        value: "Managing therapy or monitoring a health condition",
        activity_type: ActivityType::DailyLiving,
        answers: &[
            answer(
                "a",
                0,
                "Either does not receive medication or therapy or does not need to monitor a health condition, or can manage medication or therapy or monitor a health condition unaided.",
            ),
            answer(
                "b",
                1,
                "Needs either to use an aid or appliance to be able to manage medication, or supervision, prompting or assistance to be able to manage medication or monitor a health condition.",
            ),
            answer(
                "c",
                2,
                "Needs supervision, prompting or assistance to be able to manage therapy that takes no more than 3.5 hours a week.",
            ),
            answer(
                "d",
                4,
                "Needs supervision, prompting or assistance to be able to manage therapy that takes more than 3.5 but no more than 7 hours a week.",
            ),
            answer(
                "e",
                6,
                "Needs supervision, prompting or assistance to be able to manage therapy that takes more than 7 but no more than 14 hours a week.",
            ),
            answer(
                "f",
                8,
                "Needs supervision, prompting or assistance to be able to manage therapy that takes more than 14 hours a week.",
            ),
        ],
    },
    ActivityQuestion {
        key: "washingAndBathing",
        number: "4",
        value: "Washing and bathing",
        activity_type: ActivityType::DailyLiving,
        answers: &[
            answer("a", 0, "Can wash and bathe unaided."),
            answer("b", 2, "Needs to use an aid or appliance to be able to wash or bathe."),
            answer("c", 2, "Needs supervision or prompting to be able to wash or bathe."),
            answer(
                "d",
                2,
                "Needs assistance to be able to wash either their hair or body below the waist.",
            ),
            answer("e", 3, "Needs assistance to be able to get in or out of a bath or shower."),
            answer(
                "f",
                4,
                "Needs assistance to be able to wash their body between the shoulders and waist.",
            ),
            answer(
                "g",
                8,
                "Cannot wash and bathe at all and needs another person to wash their entire body.",
            ),
        ],
    },
    ActivityQuestion {
        key: "managingToiletNeeds",
        number: "5",
        value: "Managing toilet needs or incontinence",
        activity_type: ActivityType::DailyLiving,
        answers: &[
            answer("a", 0, "Can manage toilet needs or incontinence unaided."),
            answer(
                "b",
                2,
                "Needs to use an aid or appliance to be able to manage toilet needs or incontinence.",
            ),
            answer(
                "c",
                2,
                "Needs supervision or prompting to be able to manage toilet needs.",
            ),
            answer("d", 4, "Needs assistance to be able to manage toilet needs."),
            answer(
                "e",
                6,
                "Needs assistance to be able to manage incontinence of either bladder or bowel.",
            ),
            answer(
                "f",
                8,
                "Needs assistance to be able to manage incontinence of both bladder and bowel.",
            ),
        ],
    },
    ActivityQuestion {
        key: "dressingAndUndressing",
        number: "6",
        value: "Dressing and undressing",
        activity_type: ActivityType::DailyLiving,
        answers: &[
            answer("a", 0, "Can dress and undress unaided."),
            answer("b", 2, "Needs to use an aid or appliance to be able to dress or undress."),
            answer(
                "c",
                2,
                "Needs either prompting to be able to dress, undress or determine appropriate circumstances for remaining clothed, or prompting or assistance to be able to select appropriate clothing.",
            ),
            answer(
                "d",
                2,
                "Needs assistance to be able to dress or undress their lower body.",
            ),
            answer(
                "e",
                4,
                "Needs assistance to be able to dress or undress their upper body.",
            ),
            answer("f", 8, "Cannot dress or undress at all."),
        ],
    },
    ActivityQuestion {
        key: "communicating",
        number: "7",
        value: "Communicating verbally",
        activity_type: ActivityType::DailyLiving,
        answers: &[
            answer("a", 0, "Can express and understand verbal information unaided."),
            answer("b", 2, "Needs to use an aid or appliance to be able to speak or hear."),
            answer(
                "c",
                4,
                "Needs communication support to be able to express or understand complex verbal information.",
            ),
            answer(
                "d",
                8,
                "Needs communication support to be able to express or understand basic verbal information.",
            ),
            answer(
                "e",
                12,
                "Cannot express or understand verbal information at all even with communication support.",
            ),
        ],
    },
    ActivityQuestion {
        key: "readingUnderstanding",
        number: "8",
        value: "Reading and understanding signs, symbols and words",
        activity_type: ActivityType::DailyLiving,
        answers: &[
            answer(
                "a",
                0,
                "Can read and understand basic and complex written information either unaided or using spectacles or contact lenses.",
            ),
            answer(
                "b",
                2,
                "Needs to use an aid or appliance, other than spectacles or contact lenses, to be able to read or understand either basic or complex written information.",
            ),
            answer(
                "c",
                2,
                "Needs prompting to be able to read or understand complex written information.",
            ),
            answer(
                "d",
                4,
                "Needs prompting to be able to read or understand basic written information.",
            ),
            answer("e", 8, "Cannot read or understand signs, symbols or words at all."),
        ],
    },
    ActivityQuestion {
        key: "engagingWithOthers",
        number: "9",
        value: "Engaging with other people face to face",
        activity_type: ActivityType::DailyLiving,
        answers: &[
            answer("a", 0, "Can engage with other people unaided."),
            answer("b", 2, "Needs prompting to be able to engage with other people."),
            answer("c", 4, "Needs social support to be able to engage with other people."),
            answer(
                "d",
                8,
                "Cannot engage with other people due to such engagement causing either overwhelming psychological distress to the claimant, or the claimant to exhibit behaviour which would result in a substantial risk of harm to the claimant or another person.",
            ),
        ],
    },
    ActivityQuestion {
        key: "budgetingDecisions",
        number: "10",
        value: "Making budgeting decisions",
        activity_type: ActivityType::DailyLiving,
        answers: &[
            answer("a", 0, "Can manage complex budgeting decisions unaided."),
            answer(
                "b",
                2,
                "Needs prompting or assistance to be able to make complex budgeting decisions.",
            ),
            answer(
                "c",
                4,
                "Needs prompting or assistance to be able to make simple budgeting decisions.",
            ),
            answer("d", 6, "Cannot make any budgeting decisions at all."),
        ],
    },
    ActivityQuestion {
        key: "planningAndFollowing",
        number: "11",
        value: "Planning and following journeys",
        activity_type: ActivityType::Mobility,
        answers: &[
            answer("a", 0, "Can plan and follow the route of a journey unaided."),
            answer(
                "b",
                4,
                "Needs prompting to be able to undertake any journey to avoid overwhelming psychological distress to the claimant.",
            ),
            answer("c", 8, "Cannot plan the route of a journey."),
            answer(
                "d",
                10,
                "Cannot follow the route of an unfamiliar journey without another person, assistance dog or orientation aid.",
            ),
            answer(
                "e",
                10,
                "Cannot undertake any journey because it would cause overwhelming psychological distress to the claimant.",
            ),
            answer(
                "f",
                12,
                "Cannot follow the route of a familiar journey without another person, an assistance dog or an orientation aid.",
            ),
        ],
    },
    ActivityQuestion {
        key: "movingAround",
        number: "12",
        value: "Moving around",
        activity_type: ActivityType::Mobility,
        answers: &[
            answer("a", 0, "Can stand and then move more than 200 metres, either aided or unaided."),
            answer(
                "b",
                4,
                "Can stand and then move more than 50 metres but no more than 200 metres, either aided or unaided.",
            ),
            answer(
                "c",
                8,
                "Can stand and then move unaided more than 20 metres but no more than 50 metres.",
            ),
            answer(
                "d",
                10,
                "Can stand and then move using an aid or appliance more than 20 metres but no more than 50 metres.",
            ),
            answer(
                "e",
                12,
                "Can stand and then move more than 1 metre but no more than 20 metres, either aided or unaided.",
            ),
            answer("f", 12, "Cannot, either aided or unaided, stand or move more than 1 metre."),
        ],
    },
];

/// Catalogue lookup; an unknown or empty key means the rule tables and the
/// case data have diverged, which is a defect rather than a validation error.
pub fn question_by_key(key: &str) -> Result<&'static ActivityQuestion, RuleDefect> {
    if key.trim().is_empty() {
        return Err(RuleDefect::UnknownQuestionKey(key.to_string()));
    }
    ACTIVITY_QUESTIONS
        .iter()
        .find(|question| question.key == key)
        .ok_or_else(|| RuleDefect::UnknownQuestionKey(key.to_string()))
}

/// All catalogue entries scored under the given activity type.
pub fn questions_for(activity: ActivityType) -> impl Iterator<Item = &'static ActivityQuestion> {
    ACTIVITY_QUESTIONS
        .iter()
        .filter(move |question| question.activity_type == activity)
}
