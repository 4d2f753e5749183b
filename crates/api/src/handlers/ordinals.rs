//! Handlers for the JSON API: fetching ordinals for an address, saving the
//! slideshow selection, and dumping the persisted documents.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;

use ordinal_frame_core::address::{validate_address, ADDRESS_REQUIRED};
use ordinal_frame_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::response::{MessageResponse, OrdinalsResponse};
use crate::state::AppState;

/// Accepted range for `slideshow_interval`, in seconds.
const SLIDESHOW_INTERVAL_RANGE: std::ops::RangeInclusive<u64> = 1..=86_400;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Unwrap a JSON body, reporting any parse/content-type failure as `message`.
fn json_body(payload: Result<Json<Value>, JsonRejection>, message: &str) -> AppResult<Value> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected request body");
            Err(AppError::BadRequest(message.to_string()))
        }
    }
}

/// Parsed body of `POST /api/update-selection`.
#[derive(Debug, PartialEq)]
struct SelectionUpdate {
    selected_ids: Vec<String>,
    slideshow_interval: Option<u64>,
}

fn parse_selection_update(body: &Value) -> AppResult<SelectionUpdate> {
    let ids = body
        .get("selected_ids")
        .ok_or_else(|| AppError::BadRequest("selected_ids is required".into()))?;

    let ids = ids
        .as_array()
        .ok_or_else(|| AppError::BadRequest("selected_ids must be a list".into()))?;

    let selected_ids = ids
        .iter()
        .map(|id| id.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| AppError::BadRequest("selected_ids must contain only strings".into()))?;

    let slideshow_interval = match body.get("slideshow_interval") {
        None | Some(Value::Null) => None,
        Some(value) => Some(
            value
                .as_u64()
                .filter(|secs| SLIDESHOW_INTERVAL_RANGE.contains(secs))
                .ok_or_else(|| {
                    AppError::BadRequest(format!(
                        "slideshow_interval must be an integer between {} and {}",
                        SLIDESHOW_INTERVAL_RANGE.start(),
                        SLIDESHOW_INTERVAL_RANGE.end()
                    ))
                })?,
        ),
    };

    Ok(SelectionUpdate {
        selected_ids,
        slideshow_interval,
    })
}

// ---------------------------------------------------------------------------
// POST /api/fetch-ordinals
// ---------------------------------------------------------------------------

/// Validate the address, fetch its inscriptions, and replace the metadata
/// document. Responds 500 with the same body shape when the fetch fails.
///
/// The fetch runs on its own task so a dropped connection does not cancel it
/// part way through its retries.
pub async fn fetch_ordinals(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let body = json_body(payload, ADDRESS_REQUIRED)?;

    let address = body
        .get("address")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim()
        .to_string();

    let validation = validate_address(&address);
    if !validation.valid {
        let message = validation
            .error
            .unwrap_or_else(|| "Invalid Bitcoin address".into());
        return Err(CoreError::Validation(message).into());
    }

    tracing::info!(
        address = %address,
        address_type = ?validation.address_type,
        "Fetch requested",
    );

    let store = Arc::clone(&state.store);
    let outcome = tokio::spawn(async move { store.fetch_address_ordinals(&address).await })
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Fetch task failed");
            AppError::InternalError("Error fetching Ordinals".into())
        })?;

    let status = if outcome.success {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    Ok((status, Json(outcome)))
}

// ---------------------------------------------------------------------------
// POST /api/update-selection
// ---------------------------------------------------------------------------

/// Replace the slideshow selection (and optionally its interval).
pub async fn update_selection(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let body = json_body(payload, "selected_ids is required")?;
    let update = parse_selection_update(&body)?;
    let count = update.selected_ids.len();

    let saved = state
        .store
        .update_selection_with_interval(update.selected_ids, update.slideshow_interval)
        .await;

    if !saved {
        return Err(AppError::InternalError("Failed to update selection".into()));
    }

    Ok(Json(MessageResponse::ok(format!(
        "Selection updated: {count} Ordinals selected"
    ))))
}

// ---------------------------------------------------------------------------
// GET /api/ordinals
// ---------------------------------------------------------------------------

/// Return both persisted documents.
pub async fn get_ordinals(State(state): State<AppState>) -> Json<OrdinalsResponse> {
    Json(OrdinalsResponse {
        success: true,
        metadata: state.store.metadata().await,
        selection: state.store.selection().await,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_ids_in_order() {
        let update = parse_selection_update(&json!({"selected_ids": ["b", "a"]})).unwrap();
        assert_eq!(
            update,
            SelectionUpdate {
                selected_ids: vec!["b".into(), "a".into()],
                slideshow_interval: None,
            }
        );
    }

    #[test]
    fn empty_list_is_allowed() {
        let update = parse_selection_update(&json!({"selected_ids": []})).unwrap();
        assert!(update.selected_ids.is_empty());
    }

    #[test]
    fn missing_ids_is_rejected() {
        let err = parse_selection_update(&json!({})).unwrap_err();
        assert_matches!(err, AppError::BadRequest(msg) if msg == "selected_ids is required");
    }

    #[test]
    fn non_list_ids_is_rejected() {
        let err = parse_selection_update(&json!({"selected_ids": "insc1"})).unwrap_err();
        assert_matches!(err, AppError::BadRequest(msg) if msg == "selected_ids must be a list");
    }

    #[test]
    fn non_string_ids_are_rejected() {
        let err = parse_selection_update(&json!({"selected_ids": ["a", 2]})).unwrap_err();
        assert_matches!(err, AppError::BadRequest(_));
    }

    #[test]
    fn interval_is_parsed_when_present() {
        let update =
            parse_selection_update(&json!({"selected_ids": [], "slideshow_interval": 15})).unwrap();
        assert_eq!(update.slideshow_interval, Some(15));

        let update =
            parse_selection_update(&json!({"selected_ids": [], "slideshow_interval": null}))
                .unwrap();
        assert_eq!(update.slideshow_interval, None);
    }

    #[test]
    fn out_of_range_interval_is_rejected() {
        for bad in [json!(0), json!(86_401), json!(-5), json!(2.5), json!("10")] {
            let body = json!({"selected_ids": [], "slideshow_interval": bad});
            assert_matches!(
                parse_selection_update(&body),
                Err(AppError::BadRequest(_)),
                "{body} should be rejected"
            );
        }
    }
}
