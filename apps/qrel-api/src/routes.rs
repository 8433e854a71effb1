use axum::{
	Json, Router,
	extract::{
		Path, Query, State,
		rejection::{PathRejection, QueryRejection},
	},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::get,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::AppState;
use qrel_service::{Error as ServiceError, RelatedRequest, RelatedResponse};

const INTERNAL_ERROR_MESSAGE: &str = "Internal error.";

#[derive(Debug, Default, Deserialize)]
pub struct RelatedQuery {
	pub limit: Option<u32>,
	#[serde(default)]
	pub exclude_current: bool,
	#[serde(default)]
	pub explain: bool,
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

	fn invalid_request(message: impl Into<String>) -> Self {
		Self::new(StatusCode::BAD_REQUEST, "invalid_request", message)
	}

	/// Maps a service error, hiding internal details unless `diagnostics` is on.
	pub fn from_service(err: ServiceError, diagnostics: bool) -> Self {
		match err {
			ServiceError::InvalidRequest { message } => Self::invalid_request(message),
			ServiceError::NotFound { message } => {
				Self::new(StatusCode::NOT_FOUND, "not_found", message)
			},
			ServiceError::Repository { message } => {
				tracing::error!(error = %message, "Related request failed.");

				let message =
					if diagnostics { message } else { INTERNAL_ERROR_MESSAGE.to_string() };

				Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
			},
		}
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/questions/{item_id}/related", get(related))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn related(
	State(state): State<AppState>,
	path: Result<Path<Uuid>, PathRejection>,
	query: Result<Query<RelatedQuery>, QueryRejection>,
) -> Result<Json<RelatedResponse>, ApiError> {
	let Path(item_id) = path.map_err(|err| ApiError::invalid_request(err.body_text()))?;
	let Query(query) = query.map_err(|err| ApiError::invalid_request(err.body_text()))?;
	let req = RelatedRequest {
		item_id,
		limit: query.limit,
		exclude_current: query.exclude_current,
		explain: query.explain,
	};
	let response = state
		.service
		.related(req)
		.await
		.map_err(|err| ApiError::from_service(err, state.diagnostics))?;

	Ok(Json(response))
}
