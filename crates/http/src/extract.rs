//! Extractors that report malformed input through [`AppError`].

use axum::{
    extract::{FromRequest, FromRequestParts},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppError;

/// JSON body extractor whose rejection is a 400 in the standard error format.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl<T: Serialize> IntoResponse for AppJson<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Path parameter extractor whose rejection is a 400 in the standard error format.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        routing::{get, post},
        Router,
    };
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize, Serialize)]
    struct Payload {
        title: String,
        year: i32,
    }

    fn app() -> Router {
        Router::new()
            .route("/echo", post(|AppJson(p): AppJson<Payload>| async move { AppJson(p) }))
            .route(
                "/items/{id}",
                get(|AppPath(id): AppPath<i64>| async move { id.to_string() }),
            )
    }

    async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null))
    }

    fn json_post(body: &str) -> Request<Body> {
        Request::post("/echo")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn accepts_well_typed_body() {
        let (status, body) = send(json_post(r#"{"title":"Dune","year":1965}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Dune");
    }

    #[tokio::test]
    async fn wrong_field_type_is_bad_request() {
        let (status, body) = send(json_post(r#"{"title":"Dune","year":"soon"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "malformed_body");
    }

    #[tokio::test]
    async fn missing_field_is_bad_request() {
        let (status, _) = send(json_post(r#"{"title":"Dune"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn invalid_json_is_bad_request() {
        let (status, _) = send(json_post("{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn non_numeric_path_is_bad_request() {
        let request = Request::get("/items/abc").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "malformed_path");
    }
}
