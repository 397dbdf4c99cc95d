use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use color_eyre::eyre::eyre;
use serde_json::json;

use super::{pages, ResponseResult, ServerError, CONTACT_STYLES, STATIC_ASSETS};
use crate::{state::VersionInfo, AppState};

pub(crate) fn make_router() -> Router<AppState> {
    Router::new()
        .route("/_", get(versions))
        .route("/static/{*path}", get(static_assets))
        .route("/styles/contact.css", get(contact_styles))
        .route("/", get(pages::contact::contact_get))
        .route(
            "/contact",
            get(pages::contact::contact_get).post(pages::contact::contact_post),
        )
        .fallback(fallback)
}

async fn versions(State(versions): State<VersionInfo>) -> impl IntoResponse {
    Json(json!({
        "name": versions.name,
        "version": versions.version,
    }))
}

async fn contact_styles() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], CONTACT_STYLES)
}

async fn fallback() -> impl IntoResponse {
    StatusCode::NOT_FOUND
}

async fn static_assets(Path(p): Path<String>) -> ResponseResult {
    let path = p.strip_prefix('/').unwrap_or(&p);
    let path = path.strip_suffix('/').unwrap_or(path);

    let Some(entry) = STATIC_ASSETS.get_file(path) else {
        return Err(ServerError(
            eyre!("Static asset {path} not found"),
            StatusCode::NOT_FOUND,
        ));
    };

    let mime = mime_guess::from_path(path).first_or_octet_stream();

    let mut headers = axum::http::HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, mime.to_string().parse()?);

    Ok((headers, entry.contents()).into_response())
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    use super::*;
    use crate::{
        contact::{provider::testing::ScriptedProvider, QUICK_LINKS},
        http_server::test_helpers::{create_test_app, response_body_text},
    };

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[test]
    fn test_every_quick_link_icon_is_bundled() {
        for link in &QUICK_LINKS {
            assert!(
                STATIC_ASSETS.get_file(link.icon).is_some(),
                "missing icon {}",
                link.icon
            );
        }
    }

    #[tokio::test]
    async fn test_static_icon_has_svg_content_type() {
        let app = create_test_app(ScriptedProvider::accepting());

        let response = app
            .oneshot(get_request("/static/icons/github.svg"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/svg+xml"
        );
    }

    #[tokio::test]
    async fn test_unknown_static_asset_is_not_found() {
        let app = create_test_app(ScriptedProvider::accepting());

        let response = app
            .oneshot(get_request("/static/icons/myspace.svg"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response_body_text(response).await,
            "Static asset icons/myspace.svg not found"
        );
    }

    #[tokio::test]
    async fn test_styles_are_served_as_css() {
        let app = create_test_app(ScriptedProvider::accepting());

        let response = app
            .oneshot(get_request("/styles/contact.css"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/css; charset=utf-8"
        );
        assert!(response_body_text(response).await.contains("@keyframes"));
    }

    #[tokio::test]
    async fn test_versions_reports_package() {
        let app = create_test_app(ScriptedProvider::accepting());

        let response = app.oneshot(get_request("/_")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value =
            serde_json::from_str(&response_body_text(response).await).unwrap();
        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let app = create_test_app(ScriptedProvider::accepting());

        let response = app.oneshot(get_request("/blog")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
