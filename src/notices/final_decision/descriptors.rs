//! Descriptor aggregation: resolve selected question keys, decode the
//! recorded answers, sum points, and order descriptors for the document.

use std::cmp::Ordering;

use super::activities::{question_by_key, ActivityQuestion, ActivityType};
use super::domain::{ActivityAnswer, CaseSnapshot, Descriptor, RuleDefect};

/// Sorted descriptors for one activity type together with their point total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorSet {
    pub descriptors: Vec<Descriptor>,
    pub total_points: u32,
}

/// Collect the descriptors selected for an activity type.
///
/// A `None` selected list means the question set has not been answered yet
/// and yields `Ok(None)` with no error; an empty list is a completed state
/// and yields an empty set. Selected questions without a decodable recorded
/// answer are skipped.
pub fn collect_descriptors(
    case: &CaseSnapshot,
    activity: ActivityType,
) -> Result<Option<DescriptorSet>, RuleDefect> {
    let Some(keys) = activity.selected_questions(case) else {
        return Ok(None);
    };

    let mut descriptors = Vec::with_capacity(keys.len());
    for key in keys {
        let question = question_by_key(key)?;
        let Some(raw) = question.recorded_answer(case) else {
            continue;
        };
        if let Some(answer) = decode_answer(question, raw) {
            descriptors.push(build_descriptor(question, &answer));
        }
    }

    sort_descriptors(&mut descriptors);
    let total_points = descriptors.iter().map(|d| d.answer_points).sum();

    Ok(Some(DescriptorSet {
        descriptors,
        total_points,
    }))
}

/// Decode a recorded answer of the form `<questionKey><number><letter>` into
/// the catalogue-backed answer value and points. Malformed or unrecognised
/// answers decode to `None` and are treated as unanswered.
pub fn decode_answer(question: &ActivityQuestion, raw: &str) -> Option<ActivityAnswer> {
    let digits_start = raw.find(|c: char| c.is_ascii_digit())?;
    let (prefix, rest) = raw.split_at(digits_start);
    if prefix != question.key {
        return None;
    }

    let letter_start = rest.find(|c: char| c.is_ascii_alphabetic())?;
    let (number, letter) = rest.split_at(letter_start);
    if number.is_empty() || letter.chars().count() != 1 {
        return None;
    }

    let definition = question.answer_for_letter(letter)?;
    Some(ActivityAnswer {
        number: number.to_string(),
        letter: letter.to_string(),
        value: definition.value.to_string(),
        points: definition.points,
    })
}

fn build_descriptor(question: &ActivityQuestion, answer: &ActivityAnswer) -> Descriptor {
    Descriptor {
        question_number: answer.number.clone(),
        answer_letter: answer.letter.clone(),
        answer_value: answer.value.clone(),
        question_value: question.value.to_string(),
        answer_points: answer.points,
    }
}

/// Presentation order for the legal document: ascending numeric question
/// number, ties broken by answer letter. Stable and idempotent.
pub fn sort_descriptors(descriptors: &mut [Descriptor]) {
    descriptors.sort_by(descriptor_order);
}

pub fn descriptor_order(a: &Descriptor, b: &Descriptor) -> Ordering {
    numeric(&a.question_number)
        .cmp(&numeric(&b.question_number))
        .then_with(|| a.answer_letter.cmp(&b.answer_letter))
}

fn numeric(number: &str) -> u32 {
    number.parse().unwrap_or(u32::MAX)
}
