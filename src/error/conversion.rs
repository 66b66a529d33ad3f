/**
 * Error Response Conversion
 *
 * Implements axum's `IntoResponse` for `ApiError` so handlers can return
 * `Result<_, ApiError>` directly. The response is the variant's status code
 * with its plain-text body. Internal faults are logged here with their full
 * detail before the generic body goes out.
 */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {}", self);
        }

        (status, self.message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("response body");
        String::from_utf8(bytes.to_vec()).expect("utf-8 body")
    }

    #[tokio::test]
    async fn test_validation_error_response() {
        let response = ApiError::validation("User already exists").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "User already exists");
    }

    #[tokio::test]
    async fn test_token_error_response() {
        let response = ApiError::TokenError.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_text(response).await, "Invalid JWT Token");
    }

    #[tokio::test]
    async fn test_store_error_response_is_generic() {
        let response = ApiError::StoreError(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "Internal Server Error");
    }
}
