use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ladder_core::error::LadderError;

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if let Some(e) = self.0.downcast_ref::<LadderError>() {
            match e {
                LadderError::AuthFailed => StatusCode::UNAUTHORIZED,
                LadderError::InvalidLevel(_) | LadderError::MissingUser => StatusCode::BAD_REQUEST,
                LadderError::UnknownItem(_) => StatusCode::NOT_FOUND,
                LadderError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                LadderError::Io(_) | LadderError::Yaml(_) | LadderError::Json(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status.is_server_error() {
            tracing::warn!(error = %self.0, "request failed");
        }

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_failed_maps_to_401() {
        let response = AppError(LadderError::AuthFailed.into()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn invalid_level_maps_to_400() {
        let response = AppError(LadderError::InvalidLevel(7).into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_user_maps_to_400() {
        let response = AppError(LadderError::MissingUser.into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unknown_item_maps_to_404() {
        let response = AppError(LadderError::UnknownItem("tech_99".into()).into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_unavailable_maps_to_503() {
        let response =
            AppError(LadderError::StoreUnavailable("connect refused".into()).into()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn io_error_maps_to_500() {
        let io_err = std::io::Error::other("disk full");
        let response = AppError(LadderError::Io(io_err).into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn other_errors_map_to_500() {
        let response = AppError(anyhow::anyhow!("something unexpected")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn response_body_is_json_error_object() {
        let response = AppError(LadderError::AuthFailed.into()).into_response();
        let ct = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .expect("should have content-type");
        assert!(ct.to_str().unwrap().contains("application/json"));
    }
}
