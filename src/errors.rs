use crate::controller::SubmitError;
use axum::http::StatusCode;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<SubmitError> for AppError {
    fn from(err: SubmitError) -> Self {
        let status = match &err {
            SubmitError::Validation => StatusCode::BAD_REQUEST,
            SubmitError::Busy => StatusCode::CONFLICT,
            SubmitError::Service(_) => StatusCode::UNPROCESSABLE_ENTITY,
            SubmitError::Transport(_) => StatusCode::BAD_GATEWAY,
        };
        // Display of Transport is the generic message; the cause stays in the logs.
        Self::new(status, err.to_string())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (
            self.status,
            axum::Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predict::TransportError;

    #[test]
    fn transport_errors_hide_their_cause() {
        let err = AppError::from(SubmitError::Transport(TransportError::Aborted));
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
        assert_eq!(err.message, "An error occurred while analyzing the review.");
    }

    #[test]
    fn service_errors_are_verbatim() {
        let err = AppError::from(SubmitError::Service("text too short".into()));
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.message, "text too short");
    }
}
