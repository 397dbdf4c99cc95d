use color_eyre::Result;
use tracing::info;

use super::{routes, server::run_server};
use crate::AppState;

pub(crate) async fn serve() -> Result<()> {
    let app_state = AppState::from_env()?;

    info!(version = app_state.versions.version, "Serving contact page");

    run_server(routes::make_router().with_state(app_state)).await
}
