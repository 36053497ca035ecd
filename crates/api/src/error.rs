use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Path not recognized")]
    PathNotRecognized { url: String },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// JSON error envelope.
///
/// The `error: true` flag is part of the wire contract; `message` carries
/// the underlying failure's text.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, url) = match self {
            ApiError::PathNotRecognized { url } => (
                StatusCode::NOT_FOUND,
                "Path not recognized".to_string(),
                Some(url),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string(), None)
            }
        };

        let body = ErrorBody {
            error: true,
            message,
            url,
        };

        (status, Json(body)).into_response()
    }
}

impl From<shared::pagination::PageParamsError> for ApiError {
    fn from(err: shared::pagination::PageParamsError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_path_not_recognized_is_valid_json_404() {
        let error = ApiError::PathNotRecognized {
            url: "/unknown/path?x=1".to_string(),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["error"], true);
        assert_eq!(json["message"], "Path not recognized");
        assert_eq!(json["url"], "/unknown/path?x=1");
    }

    #[tokio::test]
    async fn test_bad_request_envelope() {
        let error = ApiError::BadRequest("Invalid value for num_items: \"ten\"".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], true);
        assert!(json["message"].as_str().unwrap().contains("num_items"));
        assert!(json.get("url").is_none());
    }

    #[tokio::test]
    async fn test_database_error_envelope() {
        let error: ApiError = sqlx::Error::PoolTimedOut.into();
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"], true);
        assert!(!json["message"].as_str().unwrap().is_empty());
    }

    #[test]
    fn test_page_params_error_maps_to_bad_request() {
        let err = shared::pagination::resolve(Some("ten"), Some("0")).unwrap_err();
        let api_err: ApiError = err.into();
        assert!(matches!(api_err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::BadRequest("nope".to_string());
        assert_eq!(format!("{}", err), "Bad request: nope");
    }
}
