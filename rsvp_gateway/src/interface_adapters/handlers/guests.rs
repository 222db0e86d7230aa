use crate::interface_adapters::http::status_for;
use crate::interface_adapters::protocol::{
    CheckConfirmationQuery, ConfirmationCheckError, SearchError, SearchQuery,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::relay;
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use serde_json::Value;
use std::sync::Arc;

#[tracing::instrument(name = "search_guests", skip_all)]
pub async fn search(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Value>, (StatusCode, Json<SearchError>)> {
    let query = query.map(|Query(query)| query).unwrap_or_else(|rejection| {
        tracing::warn!(error = %rejection, "unreadable search query.");
        SearchQuery::default()
    });

    let result = relay::search_guests(state.directory.as_ref(), query.name.as_deref())
        .await
        .map_err(|err| {
            (
                status_for(err.kind),
                Json(SearchError {
                    found: false,
                    error: err.message.to_string(),
                }),
            )
        })?;

    Ok(Json(result))
}

#[tracing::instrument(name = "check_confirmation", skip_all)]
pub async fn check_confirmation(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CheckConfirmationQuery>, QueryRejection>,
) -> Result<Json<Value>, (StatusCode, Json<ConfirmationCheckError>)> {
    let query = query.map(|Query(query)| query).unwrap_or_else(|rejection| {
        tracing::warn!(error = %rejection, "unreadable check-confirmation query.");
        CheckConfirmationQuery::default()
    });

    let result = relay::check_confirmation(state.directory.as_ref(), query.guest_id.as_deref())
        .await
        .map_err(|err| {
            (
                status_for(err.kind),
                Json(ConfirmationCheckError {
                    has_confirmed: false,
                    error: err.message.to_string(),
                }),
            )
        })?;

    Ok(Json(result))
}
