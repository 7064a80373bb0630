use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gametracker_core::error::CoreError;
use gametracker_db::store::StoreError;
use gametracker_rawg::CatalogError;
use serde_json::json;

use crate::engine::EnrichError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors, [`StoreError`] for persistence
/// failures and [`CatalogError`] for upstream failures. Implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `gametracker_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The favorites/votes store failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The upstream catalog failed.
    #[error("Upstream error: {0}")]
    Upstream(#[from] CatalogError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::from(errors))
    }
}

impl From<EnrichError> for AppError {
    fn from(err: EnrichError) -> Self {
        match err {
            EnrichError::Catalog(e) => AppError::Upstream(e),
            EnrichError::Store(e) => AppError::Store(e),
            EnrichError::GameNotFound(id) => AppError::Core(CoreError::NotFound {
                entity: "Game",
                id,
            }),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Store errors ---
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                internal()
            }

            // --- Upstream errors ---
            AppError::Upstream(err) => {
                tracing::error!(error = %err, "Catalog request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "Failed to fetch games from the catalog".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
