use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::validator::validate;
use crate::{CategoryFilter, Event, EventDraft, EventId, StoreError};

/// The board's events in submission order, plus the filter the list is viewed through.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
    filter: CategoryFilter,
}

impl EventStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, draft: EventDraft) -> Result<EventId, StoreError> {
        self.add_at(draft, Utc::now())
    }

    /// Validates `draft` against `now` and appends it. On failure the board is untouched.
    pub fn add_at(&mut self, draft: EventDraft, now: DateTime<Utc>) -> Result<EventId, StoreError> {
        let errors = validate(&draft, now);

        let date = match draft.date {
            Some(date) if errors.is_empty() => date,
            _ => return Err(StoreError::ValidationFailed(errors)),
        };

        let id = match draft.id {
            Some(id) if self.get(id).is_none() => id,
            Some(id) => {
                warn!(%id, "draft id already taken, assigning a fresh one");
                EventId::new()
            }
            None => EventId::new(),
        };

        let event = Event {
            id,
            title: draft.title,
            date,
            location: draft.location,
            description: draft.description,
            category: draft.category,
        };

        debug!(%id, category = %event.category, %date, "event added");
        self.events.push(event);

        Ok(id)
    }

    /// Accepts `"all"` or a category name.
    pub fn set_filter(&mut self, value: &str) -> Result<(), StoreError> {
        let filter = value.parse()?;
        self.select(filter);
        Ok(())
    }

    pub fn select(&mut self, filter: CategoryFilter) {
        debug!(%filter, "filter selected");
        self.filter = filter;
    }

    #[must_use]
    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// Events visible under the current filter, in insertion order.
    pub fn list(&self) -> impl Iterator<Item = &Event> + '_ {
        self.list_by(self.filter)
    }

    pub fn list_by(&self, filter: CategoryFilter) -> impl Iterator<Item = &Event> + '_ {
        self.events
            .iter()
            .filter(move |event| filter.matches(event.category))
    }

    #[must_use]
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
