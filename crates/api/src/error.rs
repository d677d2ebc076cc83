use axum::extract::rejection::{BytesRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use stackboard_core::error::{CoreError, ErrorKind};
use stackboard_db::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for storage
/// faults, and carries axum extractor rejections. Implements [`IntoResponse`] so
/// every failure path produces the same JSON shape.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `stackboard_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure reported by the storage layer.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An extractor rejected the request before the handler ran.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Convenience type alias for handler and manager return values.
pub type AppResult<T> = Result<T, AppError>;

/// Client-facing error body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub message: String,
    pub error_code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// The redacted 500 response. Internal error text is never sent to clients.
pub fn internal_error_response() -> Response {
    let body = json!({
        "status": "error",
        "message": "Internal Server Error",
        "errorCode": "INTERNAL_ERROR",
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, message, details) = match self {
            AppError::Core(core) => {
                let status = match core.kind() {
                    ErrorKind::Validation | ErrorKind::Conflict => StatusCode::BAD_REQUEST,
                    ErrorKind::NotFound => StatusCode::NOT_FOUND,
                    ErrorKind::Internal => {
                        tracing::error!(error = %core, "Internal core error");
                        return internal_error_response();
                    }
                };
                (status, core.code(), core.to_string(), None)
            }

            AppError::Store(err) => match classify_store_error(err) {
                Some(classified) => classified,
                None => return internal_error_response(),
            },

            AppError::Rejected { status, message } => {
                if status.is_server_error() {
                    tracing::error!(error = %message, "Extractor rejected request");
                    return internal_error_response();
                }
                let code = match status {
                    StatusCode::PAYLOAD_TOO_LARGE => "PAYLOAD_TOO_LARGE",
                    _ => "BAD_REQUEST",
                };
                (status, code, message, None)
            }
        };

        let body = ErrorBody {
            message,
            error_code,
            details,
        };
        (status, Json(body)).into_response()
    }
}

type Classified = (StatusCode, &'static str, String, Option<String>);

/// Classify a storage error into an HTTP status, error code, message and
/// details. Returns `None` for faults that must surface as a redacted 500.
///
/// - Unique violations map to 409. They only fire when two writes race past
///   the manager's existence check.
/// - Foreign key violations map to 400 `INVALID_REFERENCE`.
fn classify_store_error(err: StoreError) -> Option<Classified> {
    match err {
        StoreError::UniqueViolation { constraint } => {
            let message = match constraint.as_str() {
                "uq_projects_name" => "Project name must be unique".to_string(),
                "uq_architectures_of_project" => {
                    "Architecture already exists for this project".to_string()
                }
                _ => "Duplicate value violates unique constraint".to_string(),
            };
            Some((StatusCode::CONFLICT, "CONFLICT", message, Some(constraint)))
        }
        StoreError::ForeignKeyViolation { constraint } => Some((
            StatusCode::BAD_REQUEST,
            "INVALID_REFERENCE",
            "Referenced project does not exist".to_string(),
            Some(constraint),
        )),
        other => {
            tracing::error!(error = %other, "Storage error");
            None
        }
    }
}
