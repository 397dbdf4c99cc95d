use std::time::Duration;

use axum::{
    extract::MatchedPath,
    http::{header, Request, Response, StatusCode},
};
use tower_http::trace::{MakeSpan, OnResponse};
use tracing::Level;

/// One span per request, named after the matched route so the contact POSTs
/// group together regardless of what was submitted.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestTracer;

impl<Body> MakeSpan<Body> for RequestTracer {
    fn make_span(&mut self, request: &Request<Body>) -> tracing::Span {
        let route = matched_route(request);

        tracing::info_span!(
            "server.request",
            otel.name = format!("{} {route}", request.method()),
            http.route = route,
            http.request.method = %request.method(),
            url.path = %request.uri().path(),
            user_agent.original = header_str(request, header::USER_AGENT),
            http.response.status_code = tracing::field::Empty,
            http.response.header.content_type = tracing::field::Empty,
        )
    }
}

impl<Body> OnResponse<Body> for RequestTracer {
    fn on_response(self, response: &Response<Body>, latency: Duration, span: &tracing::Span) {
        let status = response.status();
        let level = level_for_status(status);

        // Validation and delivery failures come back as 422 and 502
        if level == Level::ERROR {
            tracing::error!(status = status.as_u16(), ?latency, "request failed");
        } else if level == Level::WARN {
            tracing::warn!(status = status.as_u16(), ?latency, "request rejected");
        } else {
            tracing::info!(status = status.as_u16(), ?latency, "request finished");
        }

        span.record("http.response.status_code", status.as_u16());
        span.record(
            "http.response.header.content_type",
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|h| h.to_str().ok()),
        );
    }
}

fn level_for_status(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}

fn header_str<B>(request: &Request<B>, name: header::HeaderName) -> Option<&str> {
    request.headers().get(name).and_then(|h| h.to_str().ok())
}

/// Requests that hit the fallback have no matched route
fn matched_route<B>(request: &Request<B>) -> &str {
    request
        .extensions()
        .get::<MatchedPath>()
        .map_or("", MatchedPath::as_str)
}
