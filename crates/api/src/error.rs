//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog::CatalogError;
use thiserror::Error;

/// API-level error type that maps to HTTP responses.
///
/// Every variant renders as a JSON object with a single `error` field.
#[derive(Debug)]
pub enum ApiError {
    /// No route matches the request path.
    NotFound,
    /// The path exists but does not accept the request method.
    MethodNotAllowed,
    /// The satellite catalog could not be rendered.
    Catalog(CatalogError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
            ),
            ApiError::Catalog(err) => {
                tracing::error!(error = %err, "failed to render satellite catalog");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to retrieve satellite data: {err}"),
                )
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::Catalog(err)
    }
}

/// Fatal errors raised while starting or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not be bound (port in use, missing privilege).
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn method_not_allowed_maps_to_405() {
        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Method not allowed" })
        );
    }

    #[tokio::test]
    async fn catalog_error_maps_to_500_with_prefix() {
        let err = CatalogError::Serialization(serde_json::Error::io(std::io::Error::other(
            "boom",
        )));
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(
            json["error"],
            "Failed to retrieve satellite data: Serialization error: boom"
        );
    }

    #[test]
    fn bind_error_names_the_address() {
        let err = ServerError::Bind {
            addr: "0.0.0.0:8080".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
        };
        assert_eq!(err.to_string(), "Failed to bind 0.0.0.0:8080: address in use");
    }
}
