use std::fmt::{self, Debug, Display};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Error returned from handlers. Rendered as the status code with the error
/// text, and reported to Sentry on the way out.
pub struct ServerError(pub(crate) color_eyre::Report, pub(crate) StatusCode);

impl Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Debug for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("Status Code: {}\n", self.1))?;
        f.write_str("ServerError: \n")?;

        Debug::fmt(&self.0, f)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let ServerError(report, status) = self;

        let error: &(dyn std::error::Error + Send + Sync + 'static) = report.as_ref();
        sentry::capture_error(error);

        tracing::error!(error = ?report, %status, "ServerError");

        (status, report.to_string()).into_response()
    }
}

impl<E> From<E> for ServerError
where
    E: Into<color_eyre::Report>,
{
    fn from(err: E) -> Self {
        ServerError(err.into(), StatusCode::INTERNAL_SERVER_ERROR)
    }
}
