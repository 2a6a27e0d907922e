//! Hearing and venue resolution from the case's hearing history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::HearingRecord;

/// Venue name used when no hearing took place.
pub const IN_CHAMBERS: &str = "In chambers";

/// The authoritative hearing details for the notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HearingVenue {
    pub held_on: NaiveDate,
    pub held_at: String,
}

/// Mutually exclusive failures when the listed hearing is unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HearingError {
    #[error("Unable to determine hearing date or venue")]
    MissingDateAndVenue,
    #[error("Unable to determine hearing date")]
    MissingDate,
    #[error("Unable to determine hearing venue")]
    MissingVenue,
}

/// Resolve the authoritative hearing: element 0 of the history, taken
/// verbatim. Callers own the list order; the history is never re-sorted
/// here. A missing or empty history means the decision was made in chambers
/// today, with no error.
pub fn resolve_hearing(
    hearings: Option<&[HearingRecord]>,
    today: NaiveDate,
) -> Result<HearingVenue, HearingError> {
    let Some(first) = hearings.and_then(|history| history.first()) else {
        return Ok(HearingVenue {
            held_on: today,
            held_at: IN_CHAMBERS.to_string(),
        });
    };

    let venue_name = first
        .venue
        .as_ref()
        .and_then(|venue| venue.name.as_deref())
        .filter(|name| !name.trim().is_empty());

    match (first.hearing_date, venue_name) {
        (Some(held_on), Some(name)) => Ok(HearingVenue {
            held_on,
            held_at: name.to_string(),
        }),
        (None, None) => Err(HearingError::MissingDateAndVenue),
        (None, Some(_)) => Err(HearingError::MissingDate),
        (Some(_), None) => Err(HearingError::MissingVenue),
    }
}
