use crate::infra::{AppState, AuditResponse, ResolvedParameters};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Local;
use leak_audit::error::AppError;
use leak_audit::workflows::leakage::LeakageAuditor;
use leak_audit::workflows::listings::{ListingQuery, RawListing};
use serde::Deserialize;
use serde_json::json;

/// Listings may be posted directly, or looked up through the configured
/// listing source when only a query is given.
#[derive(Debug, Deserialize)]
pub(crate) struct AuditRequest {
    #[serde(default)]
    pub(crate) listings: Vec<RawListing>,
    #[serde(default)]
    pub(crate) query: Option<ListingQuery>,
    #[serde(default)]
    pub(crate) currency: Option<String>,
    #[serde(default)]
    pub(crate) average_transaction_value: Option<f64>,
    #[serde(default)]
    pub(crate) estimated_monthly_contacts: Option<u32>,
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/audit", post(audit_endpoint))
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

pub(crate) async fn audit_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<AuditRequest>,
) -> Result<Json<AuditResponse>, AppError> {
    let AuditRequest {
        listings,
        query,
        currency,
        average_transaction_value,
        estimated_monthly_contacts,
    } = payload;

    let parameters = ResolvedParameters::resolve(
        &state.defaults,
        currency,
        average_transaction_value,
        estimated_monthly_contacts,
    )
    .map_err(AppError::InvalidRequest)?;

    let listings = match (listings.is_empty(), query) {
        (false, _) => listings,
        (true, Some(query)) => state.source.fetch(&query)?,
        (true, None) => {
            return Err(AppError::InvalidRequest(
                "provide `listings` or a `query` to look them up".to_string(),
            ))
        }
    };

    let batch = LeakageAuditor::new(parameters.impact()).audit_batch(&listings);
    Ok(Json(AuditResponse::new(&batch, parameters, Local::now())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use leak_audit::config::AuditDefaults;
    use leak_audit::workflows::listings::SampleListingSource;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state(ready: bool) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            defaults: Arc::new(AuditDefaults::default()),
            source: Arc::new(SampleListingSource),
        }
    }

    fn app(ready: bool) -> Router {
        router().layer(Extension(test_state(ready)))
    }

    async fn post_audit(body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/audit")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds");

        let response = app(true).oneshot(request).await.expect("router responds");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let json = serde_json::from_slice(&bytes).expect("json body");
        (status, json)
    }

    #[tokio::test]
    async fn audit_endpoint_scores_posted_listings() {
        let (status, body) = post_audit(json!({
            "average_transaction_value": 500,
            "currency": "GBP",
            "listings": [{
                "place_id": "p-2",
                "business_name": "Center Dental",
                "rating": "3.8",
                "reviews": 12,
                "photos_count": 4,
                "posts_active": false
            }]
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["parameters"]["currency"], "GBP");
        assert_eq!(body["parameters"]["estimated_monthly_contacts"], 50);
        let report = &body["reports"][0];
        assert_eq!(report["score"], 65);
        assert_eq!(report["tier"], "critical");
        assert_eq!(report["issues"].as_array().map(Vec::len), Some(5));
        assert_eq!(report["impact"]["lost_contacts_per_month"], 19);
        assert_eq!(report["impact"]["annual_loss"], 114000.0);
        assert_eq!(body["summary"]["audited"], 1);
    }

    #[tokio::test]
    async fn audit_endpoint_uses_listing_source_for_queries() {
        let (status, body) = post_audit(json!({
            "query": { "keyword": "Plumber", "location": "Denver" }
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reports"].as_array().map(Vec::len), Some(3));
        assert_eq!(body["parameters"]["currency"], "USD");
        assert_eq!(body["summary"]["most_exposed"]["name"], "Denver Plumber Center");
    }

    #[tokio::test]
    async fn audit_endpoint_rejects_empty_requests() {
        let (status, body) = post_audit(json!({})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .is_some_and(|message| message.contains("listings")));
    }

    #[tokio::test]
    async fn audit_endpoint_rejects_negative_transaction_values() {
        let (status, _) = post_audit(json!({
            "average_transaction_value": -10,
            "listings": [{ "business_name": "A" }]
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let request = Request::builder()
            .uri("/ready")
            .body(Body::empty())
            .expect("request builds");
        let response = app(false).oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
