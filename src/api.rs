// Wedding Budget Planner - REST API with Axum

use axum::{
    extract::{FromRequest, Path, State},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use rusqlite::Connection;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::budget::{calculate, BudgetRequest, BudgetResult};
use crate::catalog::{Catalog, CuisineOption, ServiceItem, VenueOption};
use crate::db::{load_plan, save_plan, WeddingPlan};
use crate::error::ApiError;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub db: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(catalog: Catalog, conn: Connection) -> Self {
        Self {
            catalog: Arc::new(catalog),
            db: Arc::new(Mutex::new(conn)),
        }
    }

    fn db(&self) -> Result<MutexGuard<'_, Connection>, ApiError> {
        self.db.lock().map_err(|_| ApiError::StoreUnavailable)
    }
}

/// JSON body extractor whose rejections use the `{detail}` error shape
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

// ============================================================================
// Response bodies
// ============================================================================

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

#[derive(Serialize)]
struct VenuesResponse<'a> {
    venues: &'a [VenueOption],
}

#[derive(Serialize)]
struct CuisinesResponse<'a> {
    cuisines: &'a [CuisineOption],
}

#[derive(Serialize)]
struct ServicesResponse<'a> {
    services: BTreeMap<String, Vec<ServiceItem>>,
    all_services: &'a [ServiceItem],
}

#[derive(Serialize)]
struct SavePlanResponse {
    message: &'static str,
    plan_id: String,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        message: "Wedding Planner API is running",
    })
}

/// GET /api/venues - All venue options
async fn get_venues(State(state): State<AppState>) -> impl IntoResponse {
    Json(VenuesResponse {
        venues: state.catalog.venues(),
    })
    .into_response()
}

/// GET /api/cuisine-options - All cuisine options
async fn get_cuisine_options(State(state): State<AppState>) -> impl IntoResponse {
    Json(CuisinesResponse {
        cuisines: state.catalog.cuisines(),
    })
    .into_response()
}

/// GET /api/services - Services grouped by category plus the flat list
async fn get_services(State(state): State<AppState>) -> impl IntoResponse {
    Json(ServicesResponse {
        services: state.catalog.services_by_category(),
        all_services: state.catalog.services(),
    })
    .into_response()
}

/// POST /api/calculate-budget - Total and itemized breakdown
async fn calculate_budget(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<BudgetRequest>,
) -> Json<BudgetResult> {
    Json(calculate(state.catalog.as_ref(), &request))
}

/// POST /api/wedding-plan - Create or update a plan
async fn save_wedding_plan(
    State(state): State<AppState>,
    ApiJson(plan): ApiJson<WeddingPlan>,
) -> Result<Json<SavePlanResponse>, ApiError> {
    let conn = state.db()?;
    let saved = save_plan(&conn, &plan)?;

    Ok(Json(SavePlanResponse {
        message: "Wedding plan saved successfully",
        plan_id: saved.plan_id,
    }))
}

/// GET /api/wedding-plan/:plan_id - Load a saved plan
async fn get_wedding_plan(
    State(state): State<AppState>,
    Path(plan_id): Path<String>,
) -> Result<Json<WeddingPlan>, ApiError> {
    let conn = state.db()?;

    match load_plan(&conn, &plan_id)? {
        Some(plan) => Ok(Json(plan)),
        None => Err(ApiError::PlanNotFound(plan_id)),
    }
}

// ============================================================================
// Router
// ============================================================================

/// Build the full application router (API nested under /api)
pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/venues", get(get_venues))
        .route("/cuisine-options", get(get_cuisine_options))
        .route("/services", get(get_services))
        .route("/calculate-budget", post(calculate_budget))
        .route("/wedding-plan", post(save_wedding_plan))
        .route("/wedding-plan/:plan_id", get(get_wedding_plan))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::setup_database;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let conn = Connection::open_in_memory().unwrap();
        setup_database(&conn).unwrap();
        router(AppState::new(Catalog::with_defaults(), conn))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app();
        let (status, body) = send(&app, get_req("/api/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_catalog_endpoints() {
        let app = test_app();

        let (status, body) = send(&app, get_req("/api/venues")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["venues"].as_array().unwrap().len(), 4);
        assert_eq!(body["venues"][0]["amenities"][0], "Open Garden");

        let (_, body) = send(&app, get_req("/api/cuisine-options")).await;
        assert_eq!(body["cuisines"].as_array().unwrap().len(), 5);
        assert_eq!(body["cuisines"][4]["price_per_plate"], 250);

        let (_, body) = send(&app, get_req("/api/services")).await;
        assert_eq!(body["all_services"].as_array().unwrap().len(), 12);
        assert_eq!(body["services"]["Photography"].as_array().unwrap().len(), 2);
        assert_eq!(body["services"]["Transportation"][0]["id"], "s11");
    }

    #[tokio::test]
    async fn test_calculate_budget() {
        let app = test_app();
        let request = json!({
            "guest_count": 200,
            "venue_id": "v1",
            "cuisine_ids": ["c5"],
            "service_ids": []
        });

        let (status, body) = send(&app, post_json("/api/calculate-budget", request)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_cost"], 200000);
        assert_eq!(body["guest_count"], 200);
        assert_eq!(body["breakdown"][0]["category"], "Venue");
        assert_eq!(body["breakdown"][1]["cost"], 50000);
        assert_eq!(body["breakdown"][1]["details"], "200 guests × 250");
    }

    #[tokio::test]
    async fn test_calculate_budget_services_only() {
        let app = test_app();
        let request = json!({
            "guest_count": 100,
            "venue_id": null,
            "cuisine_ids": null,
            "service_ids": ["s1", "s3", "unknown"]
        });

        let (status, body) = send(&app, post_json("/api/calculate-budget", request)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_cost"], 70000);
        assert_eq!(body["breakdown"].as_array().unwrap().len(), 2);
        assert_eq!(body["breakdown"][0]["category"], "Photography");
        assert_eq!(body["breakdown"][1]["category"], "Decorations");
    }

    #[tokio::test]
    async fn test_calculate_budget_rejects_malformed_body() {
        let app = test_app();
        let request = post_json("/api/calculate-budget", json!({ "venue_id": "v1" }));

        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(
            body["detail"].as_str().unwrap().contains("guest_count"),
            "Shape errors use the detail body: {}",
            body
        );
    }

    #[tokio::test]
    async fn test_missing_content_type_uses_detail_body() {
        let app = test_app();
        let request = Request::builder()
            .method("POST")
            .uri("/api/wedding-plan")
            .body(Body::from(r#"{"guest_count": 10}"#))
            .unwrap();

        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn test_plan_save_and_load() {
        let app = test_app();
        let plan = json!({
            "guest_count": 250,
            "total_budget": 480000,
            "venue": {"id": "v2", "name": "Royal Banquet Hall"},
            "cuisine": [{"id": "c1"}],
            "services": [{"id": "s5"}]
        });

        let (status, body) = send(&app, post_json("/api/wedding-plan", plan)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Wedding plan saved successfully");
        let plan_id = body["plan_id"].as_str().unwrap().to_string();

        let (status, body) = send(&app, get_req(&format!("/api/wedding-plan/{}", plan_id))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["plan_id"], plan_id.as_str());
        assert_eq!(body["guest_count"], 250);
        assert_eq!(body["venue"]["name"], "Royal Banquet Hall");
        assert!(body["created_at"].is_string());
        assert!(body["updated_at"].is_string());
    }

    #[tokio::test]
    async fn test_plan_upsert_keeps_id() {
        let app = test_app();

        let create = json!({"guest_count": 100});
        let (_, body) = send(&app, post_json("/api/wedding-plan", create)).await;
        let plan_id = body["plan_id"].as_str().unwrap().to_string();

        let update = json!({"plan_id": plan_id, "guest_count": 180});
        let (_, body) = send(&app, post_json("/api/wedding-plan", update)).await;
        assert_eq!(body["plan_id"], plan_id.as_str());

        let (_, body) = send(&app, get_req(&format!("/api/wedding-plan/{}", plan_id))).await;
        assert_eq!(body["guest_count"], 180);
    }

    #[tokio::test]
    async fn test_plan_accepts_naive_timestamps_and_any_budget() {
        let app = test_app();
        let plan = json!({
            "guest_count": 100,
            "total_budget": -5,
            "created_at": "2024-01-01T10:00:00.123456"
        });

        let (status, body) = send(&app, post_json("/api/wedding-plan", plan)).await;
        assert_eq!(status, StatusCode::OK);
        let plan_id = body["plan_id"].as_str().unwrap().to_string();

        let (_, body) = send(&app, get_req(&format!("/api/wedding-plan/{}", plan_id))).await;
        assert_eq!(body["created_at"], "2024-01-01T10:00:00.123456");
        assert_eq!(body["total_budget"], -5);
    }

    #[tokio::test]
    async fn test_plan_not_found() {
        let app = test_app();
        let (status, body) = send(&app, get_req("/api/wedding-plan/missing")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Wedding plan not found");
    }
}
