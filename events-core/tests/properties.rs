use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use events_core::{
    validate, Category, CategoryFilter, EventDraft, EventStore, Field, DESCRIPTION_MAX_CHARS,
    TITLE_MIN_CHARS,
};
use proptest::prelude::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 1, 1, 8, 0, 0).unwrap()
}

fn today() -> NaiveDate {
    now().date_naive()
}

fn category_strategy() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Religious),
        Just(Category::Social),
        Just(Category::Charity),
    ]
}

fn valid_draft_strategy() -> impl Strategy<Value = EventDraft> {
    (
        "[A-Za-z][A-Za-z ]{4,40}",
        1i64..3650,
        "[A-Za-z][A-Za-z ]{0,30}",
        "[A-Za-z][A-Za-z .]{0,200}",
        category_strategy(),
    )
        .prop_map(|(title, days_ahead, location, description, category)| {
            EventDraft::new(
                title,
                Some(today() + Duration::days(days_ahead)),
                location,
                description,
                category,
            )
        })
}

/// Drafts that may or may not pass validation.
fn any_draft_strategy() -> impl Strategy<Value = EventDraft> {
    prop_oneof![
        3 => valid_draft_strategy(),
        1 => valid_draft_strategy().prop_map(|draft| EventDraft {
            title: "Hi".to_string(),
            ..draft
        }),
        1 => valid_draft_strategy().prop_map(|draft| EventDraft {
            date: None,
            ..draft
        }),
    ]
}

proptest! {
    #[test]
    fn prop_short_titles_are_reported(
        chars in prop::collection::vec(any::<char>(), 0..TITLE_MIN_CHARS),
        draft in valid_draft_strategy()
    ) {
        let title = chars.into_iter().collect::<String>();
        let draft = EventDraft { title, ..draft };

        prop_assert!(validate(&draft, now()).contains(Field::Title));
    }

    #[test]
    fn prop_non_future_dates_are_reported(days_back in 0i64..3650, draft in valid_draft_strategy()) {
        let draft = EventDraft {
            date: Some(today() - Duration::days(days_back)),
            ..draft
        };

        let errors = validate(&draft, now());
        prop_assert_eq!(errors.get(Field::Date), Some("Date must be in the future"));
    }

    #[test]
    fn prop_future_dates_are_accepted(draft in valid_draft_strategy()) {
        prop_assert!(validate(&draft, now()).is_empty());
    }

    #[test]
    fn prop_description_limit(extra in 0usize..50, draft in valid_draft_strategy()) {
        let at_limit = EventDraft {
            description: "d".repeat(DESCRIPTION_MAX_CHARS),
            ..draft.clone()
        };
        prop_assert!(!validate(&at_limit, now()).contains(Field::Description));

        let over_limit = EventDraft {
            description: "d".repeat(DESCRIPTION_MAX_CHARS + 1 + extra),
            ..draft
        };
        prop_assert!(validate(&over_limit, now()).contains(Field::Description));
    }

    #[test]
    fn prop_add_is_all_or_nothing(drafts in prop::collection::vec(any_draft_strategy(), 0..30)) {
        let mut store = EventStore::new();

        for draft in drafts {
            let before = store.list().cloned().collect::<Vec<_>>();
            let valid = validate(&draft, now()).is_empty();

            match store.add_at(draft, now()) {
                Ok(id) => {
                    prop_assert!(valid);
                    prop_assert_eq!(store.len(), before.len() + 1);
                    prop_assert_eq!(store.list().last().map(|event| event.id), Some(id));
                }
                Err(_) => {
                    prop_assert!(!valid);
                    prop_assert_eq!(store.list().cloned().collect::<Vec<_>>(), before);
                }
            }
        }
    }

    #[test]
    fn prop_filtered_list_is_ordered_subsequence(
        drafts in prop::collection::vec(valid_draft_strategy(), 0..30),
        selected in category_strategy()
    ) {
        let mut store = EventStore::new();
        let mut ids = Vec::new();
        for draft in drafts {
            ids.push(store.add_at(draft, now()).unwrap());
        }

        let all = store.list_by(CategoryFilter::All).map(|event| event.id).collect::<Vec<_>>();
        prop_assert_eq!(&all, &ids);

        store.select(selected.into());
        let filtered = store.list().map(|event| event.id).collect::<Vec<_>>();
        let expected = store
            .list_by(CategoryFilter::All)
            .filter(|event| event.category == selected)
            .map(|event| event.id)
            .collect::<Vec<_>>();
        prop_assert_eq!(&filtered, &expected);
        prop_assert_eq!(filtered, store.list().map(|event| event.id).collect::<Vec<_>>());
    }
}
