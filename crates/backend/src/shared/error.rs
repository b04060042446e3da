use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::mutation::ApiErrorBody;
use contracts::shared::validation::FieldErrors;

/// Ошибки REST слоя, каждая отображается в свой HTTP статус
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// Для этой записи уже выполняется изменение
    #[error("a change to {0} is already in progress")]
    Busy(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Busy(_) => StatusCode::CONFLICT,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{:#}", self);
        }

        let body = match self {
            ApiError::Validation(errors) => ApiErrorBody {
                error: "validation failed".to_string(),
                fields: errors.0,
            },
            // детали внутренних ошибок остаются в логе
            ApiError::Internal(_) => ApiErrorBody {
                error: "internal error".to_string(),
                fields: Default::default(),
            },
            other => ApiErrorBody {
                error: other.to_string(),
                fields: Default::default(),
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::NotFound("Order ORD-1".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Validation(FieldErrors::new()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::Busy("ORD-1".into()).status(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::from(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::NotFound("Order ORD-1".into()).to_string(), "Order ORD-1 not found");
        let mut errors = FieldErrors::new();
        errors.add("slug", "Slug must be kebab-case");
        assert_eq!(
            ApiError::from(errors).to_string(),
            "validation failed: slug: Slug must be kebab-case"
        );
    }
}
