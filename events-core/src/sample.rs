use chrono::{Days, NaiveDate};

use crate::{Category, EventDraft};

/// The board's starter events, spread over the weeks after `today`.
#[must_use]
pub fn sample_drafts(today: NaiveDate) -> Vec<EventDraft> {
    let on = |days| today.checked_add_days(Days::new(days));

    vec![
        EventDraft::new(
            "Interfaith Dialog Session",
            on(7),
            "Community Center",
            "Join us for an evening of meaningful dialogue between different faith communities.",
            Category::Religious,
        ),
        EventDraft::new(
            "Community Picnic",
            on(12),
            "Central Park",
            "A social gathering to strengthen community bonds.",
            Category::Social,
        ),
        EventDraft::new(
            "Food Drive",
            on(17),
            "Local Food Bank",
            "Help us collect food for families in need.",
            Category::Charity,
        ),
    ]
}
