use std::sync::Arc;

use tracing::instrument;

use crate::{
    contact::EmailProvider,
    emailjs::{EmailJsClient, EmailJsConfig},
};

#[derive(Debug, Clone)]
pub struct VersionInfo {
    pub name: &'static str,
    pub version: &'static str,
}

impl VersionInfo {
    pub fn from_env() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub email_provider: Arc<dyn EmailProvider>,
    pub versions: VersionInfo,
}

impl AppState {
    #[instrument(name = "AppState::from_env", err)]
    pub fn from_env() -> color_eyre::Result<Self> {
        let emailjs = EmailJsConfig::from_env()?;

        Ok(AppState {
            email_provider: Arc::new(EmailJsClient::new(emailjs)),
            versions: VersionInfo::from_env(),
        })
    }
}
