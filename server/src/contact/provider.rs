use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// The snapshot of the form that gets delivered. Field names match the
/// template parameters the email template expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub from_name: String,
    pub contact_info: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Failed to send request to the email provider")]
    Request(#[from] reqwest::Error),
    #[error("Email provider returned error {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Something that can deliver a [`ContactMessage`] to the site owner.
#[async_trait]
pub trait EmailProvider: Send + Sync + std::fmt::Debug {
    async fn send(&self, message: &ContactMessage) -> Result<(), DeliveryError>;
}
