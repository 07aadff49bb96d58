//! HTTP routes for the relationship graph backend.
//!
//! The API mirrors what the editing UI expects: fetch the full people
//! document, replace it whole, upload an image, and serve the stored data
//! and images as static files. Permissive CORS because the viewer SPA is
//! served from a different origin during development.

use axum::{
    Json, Router,
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{error, info};

use kith_core::model::Person;

use crate::AppState;

/// Status envelope for mutating endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiStatus {
    pub success: bool,
    pub message: String,
}

impl ApiStatus {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Response for a successful image upload.
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub filename: String,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health))
        .route(
            "/api/relationships",
            get(get_relationships).post(replace_relationships),
        )
        .route("/api/upload-image", post(upload_image))
        .nest_service("/images", ServeDir::new(state.images.dir()))
        .nest_service(
            "/data",
            ServeDir::new(
                state
                    .document
                    .path()
                    .parent()
                    .unwrap_or_else(|| std::path::Path::new(".")),
            ),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Liveness probe.
async fn health() -> Json<ApiStatus> {
    Json(ApiStatus::ok("ok"))
}

/// Returns the current full people document, read fresh from disk.
async fn get_relationships(State(state): State<AppState>) -> Response {
    match state.document.load() {
        Ok(people) => Json(people).into_response(),
        Err(err) => {
            error!("Failed to load people document: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiStatus::failure(err.to_string())),
            )
                .into_response()
        }
    }
}

/// Replaces the whole people document with the request body.
async fn replace_relationships(
    State(state): State<AppState>,
    Json(people): Json<Vec<Person>>,
) -> Response {
    match state.document.replace(&people) {
        Ok(()) => {
            info!(people = people.len(), "Relationships updated");
            Json(ApiStatus::ok("Relationships updated successfully")).into_response()
        }
        Err(err) => {
            error!("Failed to replace people document: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiStatus::failure(err.to_string())),
            )
                .into_response()
        }
    }
}

/// Accepts a multipart upload with an `image` field and stores it.
async fn upload_image(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiStatus::failure(err.to_string())),
                )
                    .into_response();
            }
        };

        if field.name() != Some("image") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiStatus::failure(err.to_string())),
                )
                    .into_response();
            }
        };

        return match state.images.save(&filename, &bytes) {
            Ok(stored) => {
                info!(filename = %stored, "Image uploaded");
                Json(UploadResponse {
                    success: true,
                    filename: stored,
                })
                .into_response()
            }
            Err(err) => (
                StatusCode::BAD_REQUEST,
                Json(ApiStatus::failure(err.to_string())),
            )
                .into_response(),
        };
    }

    (
        StatusCode::BAD_REQUEST,
        Json(ApiStatus::failure("No file uploaded")),
    )
        .into_response()
}
