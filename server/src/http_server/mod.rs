use axum::response::Response;
use include_dir::{include_dir, Dir};

pub(crate) mod cmd;
mod config;
pub(crate) mod errors;
pub(crate) mod routes;
mod server;
mod templates;
mod trace;

pub(crate) mod pages {
    pub mod contact;
}

#[cfg(test)]
pub(crate) mod test_helpers;

pub(crate) use errors::ServerError;

const CONTACT_STYLES: &str = include_str!("../../styles/contact.css");

const STATIC_ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

type ResponseResult<T = Response> = Result<T, ServerError>;
