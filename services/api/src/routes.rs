use crate::infra::AppState;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use lot_iq::appraisal::repository::InventoryStore;
use lot_iq::appraisal::vin::{VinDecodeError, VinDecoder};
use lot_iq::appraisal::{appraisal_router, AppraisalService};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_appraisal_routes<S>(
    service: Arc<AppraisalService<S>>,
    decoder: Arc<dyn VinDecoder>,
) -> axum::Router
where
    S: InventoryStore + 'static,
{
    appraisal_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/vin/:vin", axum::routing::get(vin_endpoint))
        .layer(Extension(decoder))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn vin_endpoint(
    Path(vin): Path<String>,
    Extension(decoder): Extension<Arc<dyn VinDecoder>>,
) -> Response {
    match decoder.decode(&vin) {
        Ok(decoded) => (StatusCode::OK, Json(decoded)).into_response(),
        Err(error) => {
            let status = match &error {
                VinDecodeError::InvalidLength(_) | VinDecodeError::InvalidCharacter(_) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                VinDecodeError::NotFound(_) => StatusCode::NOT_FOUND,
                VinDecodeError::Unavailable(_) => StatusCode::BAD_GATEWAY,
            };
            let payload = json!({
                "error": error.to_string(),
            });
            (status, Json(payload)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::FixtureVinDecoder;

    fn decoder() -> Extension<Arc<dyn VinDecoder>> {
        Extension(Arc::new(FixtureVinDecoder::default()) as Arc<dyn VinDecoder>)
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn vin_endpoint_decodes_known_vins() {
        let response = vin_endpoint(Path("4t1g11ak5lu912345".to_string()), decoder()).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn vin_endpoint_rejects_malformed_vins() {
        let response = vin_endpoint(Path("TOOSHORT".to_string()), decoder()).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn vin_endpoint_misses_unknown_vins() {
        let response = vin_endpoint(Path("4T1G11AK5LU999999".to_string()), decoder()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
