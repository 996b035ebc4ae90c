//! Handlers for adding and searching directory entries.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mobdir_core::entry::NewEntry;
use mobdir_core::error::CoreError;
use mobdir_core::filter::EntryFilter;
use mobdir_core::normalize::normalize_entry;
use mobdir_core::validation::validate_entry;
use mobdir_db::repositories::{CreateOutcome, EntryRepo};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::response::{EntryCreatedResponse, ENTRY_ADDED_MSG};
use crate::state::AppState;

pub const INVALID_JSON_MSG: &str = "Invalid JSON body";
pub const DUPLICATE_NUMBER_MSG: &str = "Number already exists";

/// POST /add
///
/// Validate, normalize and store a new entry. The body is read as JSON
/// whatever the `Content-Type` says.
pub async fn add_entry(State(state): State<AppState>, body: Bytes) -> AppResult<impl IntoResponse> {
    let candidate = match serde_json::from_slice::<Value>(&body) {
        Ok(Value::Object(object)) => NewEntry::from_object(&object),
        _ => return Err(AppError::BadRequest(INVALID_JSON_MSG.into())),
    };

    let errors = validate_entry(&candidate);
    if !errors.is_empty() {
        tracing::info!(error_count = errors.len(), "Entry rejected by validation");
        return Err(CoreError::Validation(errors).into());
    }

    let entry = normalize_entry(&candidate);

    match EntryRepo::create(&state.store, entry).await? {
        CreateOutcome::Created(entry) => {
            tracing::info!(number = %entry.number, state = %entry.state, "Entry added");
            Ok((
                StatusCode::CREATED,
                Json(EntryCreatedResponse {
                    message: ENTRY_ADDED_MSG,
                    entry,
                }),
            ))
        }
        CreateOutcome::Duplicate => {
            tracing::info!(number = %candidate.number.trim(), "Duplicate number rejected");
            Err(CoreError::Conflict(DUPLICATE_NUMBER_MSG.into()).into())
        }
    }
}

/// GET /search?district=&place=&state=
///
/// Exact, case-insensitive match on each supplied field. No parameters
/// lists every entry in insertion order. A repeated parameter uses its
/// first value.
pub async fn search_entries(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    let filter = EntryFilter::from_pairs(params);
    let entries = EntryRepo::list(&state.store, &filter).await?;

    tracing::debug!(results = entries.len(), "Search completed");

    Ok(Json(entries))
}
