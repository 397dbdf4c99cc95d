use std::sync::Arc;

use axum::extract::FromRef;

use crate::{contact::EmailProvider, state::VersionInfo, AppState};

impl FromRef<AppState> for Arc<dyn EmailProvider> {
    fn from_ref(state: &AppState) -> Self {
        state.email_provider.clone()
    }
}

impl FromRef<AppState> for VersionInfo {
    fn from_ref(state: &AppState) -> Self {
        state.versions.clone()
    }
}
