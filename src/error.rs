use thiserror::Error;

/// Errors surfaced by the HTTP API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Wedding plan not found")]
    PlanNotFound(String),

    /// Request body missing, not JSON, or the wrong shape
    #[error("{message}")]
    InvalidBody { status: u16, message: String },

    #[error("Plan store unavailable")]
    StoreUnavailable,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::PlanNotFound(_) => 404,
            ApiError::InvalidBody { status, .. } => *status,
            ApiError::StoreUnavailable | ApiError::Internal(_) => 500,
        }
    }

    /// Body shape: `{"detail": "..."}`
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({ "detail": self.to_string() })
    }
}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        match &self {
            ApiError::PlanNotFound(plan_id) => {
                tracing::debug!(plan_id = %plan_id, "Wedding plan not found");
            }
            ApiError::InvalidBody { message, .. } => {
                tracing::debug!(error = %message, "Rejected request body");
            }
            other => tracing::error!(error = %other, "Request failed"),
        }

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, axum::Json(self.to_error_payload())).into_response()
    }
}

#[cfg(feature = "server")]
impl From<axum::extract::rejection::JsonRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        ApiError::InvalidBody {
            status: rejection.status().as_u16(),
            message: rejection.body_text(),
        }
    }
}
