use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use validation::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    /// The request body could not be decoded into a comment.
    #[error("Bind: {0}")]
    Decode(String),
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    #[error("SelectOne: invalid comment id '{0}'")]
    InvalidId(String),
    #[error("Not Found")]
    NotFound,
    /// A storage failure, tagged with the operation that hit it.
    #[error("{operation}: {source}")]
    Database {
        operation: &'static str,
        #[source]
        source: database::DbError,
    },
}

impl AppError {
    pub fn database(operation: &'static str) -> impl FnOnce(database::DbError) -> Self {
        move |source| AppError::Database { operation, source }
    }
}

/// Converts our custom `AppError` into an HTTP response.
///
/// Validation failures get a JSON body with the combined message and the
/// per-field violations; everything else is plain text.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                tracing::error!(error = %errors, "Validate failed.");
                let body = Json(json!({
                    "error": errors.to_string(),
                    "fields": errors.violations(),
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, self.to_string()).into_response(),
            AppError::Decode(_) | AppError::InvalidId(_) | AppError::Database { .. } => {
                tracing::error!(error = %self, "Request failed.");
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
        }
    }
}
