use std::sync::Arc;

use tokio::sync::watch;
use tracing::instrument;

use super::{
    form::{FormField, FormState},
    provider::{ContactMessage, DeliveryError, EmailProvider},
    status::SubmissionStatus,
    validation::{self, ValidationError},
};

/// Owns one visitor's form and its status, and drives a submission through
/// validation and delivery.
///
/// Every status change is published on a [`watch`] channel so a caller can
/// see `Sending` while the provider call is still in flight.
#[derive(Debug)]
pub struct ContactController {
    form: FormState,
    status: watch::Sender<SubmissionStatus>,
    provider: Arc<dyn EmailProvider>,
}

impl ContactController {
    pub fn new(provider: Arc<dyn EmailProvider>) -> Self {
        let (status, _) = watch::channel(SubmissionStatus::Idle);

        Self {
            form: FormState::default(),
            status,
            provider,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        *self.status.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmissionStatus> {
        self.status.subscribe()
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.update_field(field, value);
    }

    fn set_status(&self, status: SubmissionStatus) {
        self.status.send_replace(status);
    }

    /// Validates the form and, if it passes, moves to `Sending` and returns the
    /// snapshot to deliver. Later edits do not change the returned message.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, ValidationError> {
        if let Err(err) = validation::validate(&self.form) {
            tracing::debug!(?err, "Contact form failed validation");
            self.set_status(SubmissionStatus::Invalid(err));

            return Err(err);
        }

        self.set_status(SubmissionStatus::Sending);

        Ok(self.form.to_message())
    }

    pub fn complete_submit(&mut self, outcome: Result<(), DeliveryError>) {
        match outcome {
            Ok(()) => {
                tracing::info!("Contact message delivered");
                self.set_status(SubmissionStatus::Sent);
                self.form.clear();
            }
            Err(error) => {
                tracing::error!(?error, "Failed to deliver contact message");
                self.set_status(SubmissionStatus::Failed);
            }
        }
    }

    /// Validates, sends, and records the outcome. Returns the final status.
    #[instrument(name = "ContactController::submit", skip_all)]
    pub async fn submit(&mut self) -> SubmissionStatus {
        let Ok(message) = self.begin_submit() else {
            return self.status();
        };

        let outcome = self.provider.send(&message).await;
        self.complete_submit(outcome);

        self.status()
    }
}
