use std::fmt;

use async_trait::async_trait;
use color_eyre::eyre::{eyre, Context};
use serde::Serialize;
use tracing::instrument;
use url::Url;

use crate::contact::{ContactMessage, DeliveryError, EmailProvider};

const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Clone)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Private key, only needed when the account has strict mode turned on
    pub access_token: Option<String>,
    pub api_url: Url,
}

impl fmt::Debug for EmailJsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailJsConfig")
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .field("public_key", &self.public_key)
            .field("api_url", &self.api_url.as_str())
            .finish_non_exhaustive()
    }
}

impl EmailJsConfig {
    #[instrument(name = "EmailJsConfig::from_env")]
    pub fn from_env() -> color_eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> color_eyre::Result<Self> {
        let required = |key: &str| -> color_eyre::Result<String> {
            match lookup(key) {
                Some(value) if !value.is_empty() => Ok(value),
                Some(_) => Err(eyre!("{key} env var is set but empty")),
                None => Err(eyre!("{key} env var missing")),
            }
        };

        let api_url = lookup("EMAILJS_API_URL").unwrap_or_else(|| EMAILJS_SEND_URL.to_string());
        let api_url = Url::parse(&api_url).wrap_err("Invalid EMAILJS_API_URL not parsable")?;

        Ok(Self {
            service_id: required("EMAILJS_SERVICE_ID")?,
            template_id: required("EMAILJS_TEMPLATE_ID")?,
            public_key: required("EMAILJS_PUBLIC_KEY")?,
            access_token: lookup("EMAILJS_PRIVATE_KEY").filter(|key| !key.is_empty()),
            api_url,
        })
    }
}

/// Request body for the EmailJS send endpoint
#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a ContactMessage,
}

/// Client for the EmailJS REST API
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    client: reqwest::Client,
    config: EmailJsConfig,
}

impl EmailJsClient {
    pub fn new(config: EmailJsConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl EmailProvider for EmailJsClient {
    #[instrument(
        name = "EmailJsClient::send",
        skip_all,
        fields(service_id = %self.config.service_id, template_id = %self.config.template_id)
    )]
    async fn send(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        let request = SendEmailRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            access_token: self.config.access_token.as_deref(),
            template_params: message,
        };

        let response = self
            .client
            .post(self.config.api_url.clone())
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".to_string());

            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!("EmailJS accepted the message");

        Ok(())
    }
}
