/*!
 * Read-only HTTP API over the problem catalogue.
 *
 * Serves the same data the bot answers with, as JSON. Every response is
 * wrapped in a `{success, data, error}` envelope; lookups that find nothing
 * return `success: false` with HTTP 200 so clients only branch on the
 * envelope.
 */

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use log::info;
use serde::Serialize;
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::catalog::{ProblemStore, Timeframe};

#[derive(Serialize)]
struct ApiResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ApiResponse {
    fn ok(data: serde_json::Value) -> Json<ApiResponse> {
        Json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }

    fn err(message: impl Into<String>) -> Json<ApiResponse> {
        Json(ApiResponse {
            success: false,
            data: None,
            error: Some(message.into()),
        })
    }
}

/// Build the API router over a shared catalogue
pub fn router(store: Arc<ProblemStore>) -> Router {
    info!("API serving {} companies", store.company_count());
    Router::new()
        .route("/api/companies", get(list_companies))
        .route("/api/companies/:company/timeframes", get(list_timeframes))
        .route("/api/companies/:company/problems", get(company_problems))
        .route(
            "/api/companies/:company/timeframes/:timeframe/problems",
            get(company_timeframe_problems),
        )
        .route("/api/all-problems", get(all_problems))
        .layer(CorsLayer::permissive())
        .with_state(store)
}

async fn list_companies(State(store): State<Arc<ProblemStore>>) -> Json<ApiResponse> {
    ApiResponse::ok(json!(store.companies()))
}

async fn list_timeframes(
    State(store): State<Arc<ProblemStore>>,
    Path(company): Path<String>,
) -> Json<ApiResponse> {
    if !store.company_exists(&company) {
        return ApiResponse::err(format!("company '{company}' not found"));
    }
    let timeframes: Vec<&str> = store
        .available_timeframes(&company)
        .into_iter()
        .map(|tf| tf.as_key())
        .collect();
    ApiResponse::ok(json!(timeframes))
}

async fn company_problems(
    State(store): State<Arc<ProblemStore>>,
    Path(company): Path<String>,
) -> Json<ApiResponse> {
    match store.problems_with_priority(&company) {
        Some((problems, timeframe)) => ApiResponse::ok(json!({
            "company": company,
            "timeframe": timeframe.as_key(),
            "problems": problems,
        })),
        None => ApiResponse::err(format!("no problems found for company '{company}'")),
    }
}

async fn company_timeframe_problems(
    State(store): State<Arc<ProblemStore>>,
    Path((company, timeframe)): Path<(String, String)>,
) -> Json<ApiResponse> {
    let Some(tf) = Timeframe::from_key(&timeframe) else {
        return ApiResponse::err(format!("unknown timeframe '{timeframe}'"));
    };
    match store.problems(&company, tf) {
        Some(problems) if !problems.is_empty() => ApiResponse::ok(json!({
            "company": company,
            "timeframe": tf.as_key(),
            "problems": problems,
        })),
        _ => ApiResponse::err(format!(
            "no problems found for company '{company}' in timeframe '{timeframe}'"
        )),
    }
}

async fn all_problems(State(store): State<Arc<ProblemStore>>) -> Json<ApiResponse> {
    ApiResponse::ok(json!(store.all()))
}
