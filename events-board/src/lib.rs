use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::{info, warn};

use events_core::{to_ics, CategoryFilter, Event, EventDraft, EventId, EventStore, StoreError};

pub mod cli;

/// The one session's board, shared by the request handlers.
pub struct Board {
    name: String,
    store: RwLock<EventStore>,
}

impl Board {
    pub fn new<S: Into<String>>(name: S, store: EventStore) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            store: RwLock::new(store),
        })
    }
}

pub fn router(board: Arc<Board>) -> Router {
    Router::new()
        .route("/events", get(list_events).post(add_event))
        .route("/events.ics", get(export_calendar))
        .route("/events/:id", get(show_event))
        .route("/categories", get(list_categories))
        .fallback(|| async { (StatusCode::NOT_FOUND, "Not found") })
        .with_state(board)
}

pub struct ApiError(StoreError);

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            StoreError::ValidationFailed(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "errors": errors })),
            )
                .into_response(),
            err @ StoreError::InvalidCategory(_) => {
                warn!(%err, "unexpected filter value");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": err.to_string() })),
                )
                    .into_response()
            }
        }
    }
}

#[derive(Deserialize)]
struct ListQuery {
    category: Option<String>,
}

async fn list_events(
    State(board): State<Arc<Board>>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ApiError> {
    // Only a filter change needs exclusive access.
    match query.category {
        Some(category) => {
            let mut store = board.store.write().await;
            store.set_filter(&category)?;
            Ok(listing(&store))
        }
        None => {
            let store = board.store.read().await;
            Ok(listing(&store))
        }
    }
}

fn listing(store: &EventStore) -> Response {
    let cards = store.list().map(Event::card).collect::<Vec<_>>();

    Json(json!({ "filter": store.filter(), "events": cards })).into_response()
}

async fn add_event(
    State(board): State<Arc<Board>>,
    Json(draft): Json<EventDraft>,
) -> Result<Response, ApiError> {
    let id = board.store.write().await.add(draft)?;
    info!(%id, "event submitted");

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))).into_response())
}

async fn show_event(State(board): State<Arc<Board>>, Path(id): Path<String>) -> Response {
    let store = board.store.read().await;

    match id.parse::<EventId>().ok().and_then(|id| store.get(id)) {
        Some(event) => Json(event.card()).into_response(),
        None => (StatusCode::NOT_FOUND, "Unknown event").into_response(),
    }
}

async fn export_calendar(State(board): State<Arc<Board>>) -> Response {
    let store = board.store.read().await;

    (
        [(header::CONTENT_TYPE, "text/calendar")],
        to_ics(&board.name, store.list()).to_string(),
    )
        .into_response()
}

async fn list_categories() -> Json<Vec<CategoryFilter>> {
    Json(CategoryFilter::values().collect())
}
