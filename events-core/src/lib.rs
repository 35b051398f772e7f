mod card;
mod error;
mod sample;
mod store;
mod structs;
mod validator;

#[cfg(feature = "ics")]
mod ical;

pub use card::{format_date, EventCard, SUMMARY_MAX_CHARS};
pub use error::StoreError;
pub use sample::sample_drafts;
pub use store::EventStore;
pub use structs::{Category, CategoryFilter, Event, EventDraft, EventId, Field, FieldErrors};
pub use validator::{validate, validate_now, DESCRIPTION_MAX_CHARS, TITLE_MIN_CHARS};

#[cfg(feature = "ics")]
pub use ical::to_ics;
