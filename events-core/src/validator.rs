use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use tracing::debug;

use crate::{EventDraft, Field, FieldErrors};

pub const TITLE_MIN_CHARS: usize = 5;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Checks a draft against every field rule.
///
/// All rules run. When two rules fail for the same field, the one checked
/// later wins: the title length message replaces "required", the description
/// length message replaces "required", and the future-date message is checked
/// last of all.
pub fn validate(draft: &EventDraft, now: DateTime<Utc>) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if is_blank(&draft.title) {
        errors.set(Field::Title, "Title is required");
    }

    if draft.title.chars().count() < TITLE_MIN_CHARS {
        errors.set(
            Field::Title,
            format!("Title must have at least {TITLE_MIN_CHARS} characters"),
        );
    }

    if draft.date.is_none() {
        errors.set(Field::Date, "Date is required");
    }

    if is_blank(&draft.location) {
        errors.set(Field::Location, "Location is required");
    }

    if is_blank(&draft.description) {
        errors.set(Field::Description, "Description is required");
    }

    if draft.description.chars().count() > DESCRIPTION_MAX_CHARS {
        errors.set(
            Field::Description,
            format!("Description must be at most {DESCRIPTION_MAX_CHARS} characters"),
        );
    }

    if draft.date.is_some_and(|date| !starts_after(date, now)) {
        errors.set(Field::Date, "Date must be in the future");
    }

    if !errors.is_empty() {
        debug!(%errors, title = %draft.title, "draft failed validation");
    }

    errors
}

pub fn validate_now(draft: &EventDraft) -> FieldErrors {
    validate(draft, Utc::now())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

// A bare date stands for its first instant in UTC.
fn starts_after(date: NaiveDate, now: DateTime<Utc>) -> bool {
    date.and_time(NaiveTime::MIN).and_utc() > now
}
