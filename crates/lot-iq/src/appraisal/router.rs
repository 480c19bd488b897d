use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::domain::{AppraisalSubmission, ComparableQuery};
use super::repository::InventoryStore;
use super::service::{AppraisalService, AppraisalServiceError};

/// Router builder exposing HTTP endpoints for appraisal and comparables.
pub fn appraisal_router<S>(service: Arc<AppraisalService<S>>) -> Router
where
    S: InventoryStore + 'static,
{
    Router::new()
        .route("/api/v1/appraisals", post(appraise_handler::<S>))
        .route(
            "/api/v1/appraisals/comparables",
            get(comparables_handler::<S>),
        )
        .with_state(service)
}

/// Request envelope: the submission itself plus an optional valuation date.
#[derive(Debug, Deserialize)]
pub(crate) struct AppraisalRequest {
    #[serde(flatten)]
    submission: AppraisalSubmission,
    #[serde(default)]
    as_of: Option<NaiveDate>,
}

pub(crate) async fn appraise_handler<S>(
    State(service): State<Arc<AppraisalService<S>>>,
    axum::Json(request): axum::Json<AppraisalRequest>,
) -> Response
where
    S: InventoryStore + 'static,
{
    let as_of = request.as_of.unwrap_or_else(|| Local::now().date_naive());
    match service.appraise(request.submission, as_of) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(AppraisalServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ComparableParams {
    #[serde(default)]
    make: Option<String>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    year: Option<String>,
    #[serde(default)]
    trim: Option<String>,
}

pub(crate) async fn comparables_handler<S>(
    State(service): State<Arc<AppraisalService<S>>>,
    Query(params): Query<ComparableParams>,
) -> Response
where
    S: InventoryStore + 'static,
{
    let year = match params.year.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match raw.parse::<i32>() {
            Ok(year) => Some(year),
            Err(_) => {
                let payload = json!({
                    "error": format!("year '{raw}' must be numeric"),
                });
                return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
            }
        },
    };

    let query = ComparableQuery {
        make: params.make.unwrap_or_default(),
        model: params.model.unwrap_or_default(),
        year,
        trim: params.trim.filter(|trim| !trim.trim().is_empty()),
    };

    match service.comparables(&query) {
        Ok(preview) => (StatusCode::OK, axum::Json(preview)).into_response(),
        Err(AppraisalServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
