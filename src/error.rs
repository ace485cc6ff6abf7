use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::warn;

/// Rejections at the HTTP edge. The catalog and query layer itself never fails.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },
}

impl AppError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        AppError::NotFound {
            kind,
            id: id.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        };
        warn!(%status, error = %self, "request rejected");
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_kind_and_id() {
        let err = AppError::not_found("recipe", "pho");
        assert_eq!(err.to_string(), "recipe 'pho' not found");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
