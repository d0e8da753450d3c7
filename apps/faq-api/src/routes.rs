use axum::{
	Json, Router,
	extract::{State, rejection::JsonRejection},
	http::{HeaderValue, Method, StatusCode, header::CONTENT_TYPE},
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use faq_service::{AskRequest, AskResponse};

use crate::state::AppState;

const DEFAULT_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Serialize)]
pub struct RootResponse {
	pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
	pub status: &'static str,
	pub entries: usize,
}

pub fn router(state: AppState) -> Router {
	let cors = build_cors_layer(&state.service.cfg.service.cors_allowed_origins);

	Router::new()
		.route("/", get(root))
		.route("/health", get(health))
		.route("/ask", post(ask))
		.layer(cors)
		.with_state(state)
}

/// Credentialed CORS with explicit origins and headers. Unparseable origins are skipped.
pub fn build_cors_layer(origins: &[String]) -> CorsLayer {
	let mut parsed: Vec<HeaderValue> = origins
		.iter()
		.filter_map(|origin| {
			origin.parse::<HeaderValue>().ok().or_else(|| {
				tracing::warn!(%origin, "Ignoring invalid CORS origin.");

				None
			})
		})
		.collect();

	if parsed.is_empty() {
		tracing::warn!(origin = DEFAULT_ORIGIN, "No valid CORS origins configured; using default.");

		parsed.push(HeaderValue::from_static(DEFAULT_ORIGIN));
	}

	CorsLayer::new()
		.allow_origin(parsed)
		.allow_methods([Method::GET, Method::POST, Method::OPTIONS])
		.allow_headers([CONTENT_TYPE])
		.allow_credentials(true)
}

async fn root() -> Json<RootResponse> {
	Json(RootResponse { message: "API is running" })
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
	Json(HealthResponse { status: "ok", entries: state.service.corpus().len() })
}

async fn ask(
	State(state): State<AppState>,
	payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, ApiError> {
	let Json(payload) = payload?;
	let response = state.service.answer(&payload.question).await;

	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}
impl From<JsonRejection> for ApiError {
	fn from(rejection: JsonRejection) -> Self {
		Self::new(rejection.status(), "INVALID_REQUEST", rejection.body_text())
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
