use std::borrow::Cow;

use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{Category, Event, EventId};

pub const SUMMARY_MAX_CHARS: usize = 100;

/// What a list card shows for one event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EventCard<'a> {
    pub id: EventId,
    pub title: &'a str,
    pub date: String,
    pub location: &'a str,
    pub category: Category,
    pub summary: Cow<'a, str>,
}

impl Event {
    #[must_use]
    pub fn card(&self) -> EventCard<'_> {
        EventCard {
            id: self.id,
            title: &self.title,
            date: format_date(self.date),
            location: &self.location,
            category: self.category,
            summary: truncate(&self.description, SUMMARY_MAX_CHARS),
        }
    }
}

/// Long-form date, e.g. "April 15, 2024".
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn truncate(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        None => Cow::Borrowed(text),
        Some((end, _)) => Cow::Owned(format!("{}…", text[..end].trim_end())),
    }
}
