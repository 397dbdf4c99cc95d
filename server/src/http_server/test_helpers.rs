use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, Response},
    Router,
};

use crate::{contact::EmailProvider, state::VersionInfo, AppState};

pub fn create_test_app(email_provider: Arc<dyn EmailProvider>) -> Router {
    let state = AppState {
        email_provider,
        versions: VersionInfo::from_env(),
    };

    super::routes::make_router().with_state(state)
}

pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn response_body_text(response: Response<Body>) -> String {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body_bytes.to_vec()).unwrap()
}
