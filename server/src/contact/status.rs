use std::fmt::{self, Display};

use super::validation::ValidationError;

/// The last known outcome of the form, shown to the visitor under the submit
/// button. `Idle` renders as nothing at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
    Invalid(ValidationError),
}

impl SubmissionStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, SubmissionStatus::Idle)
    }
}

impl Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionStatus::Idle => Ok(()),
            SubmissionStatus::Sending => f.write_str("Sending..."),
            SubmissionStatus::Sent => f.write_str("✅ Message sent successfully!"),
            SubmissionStatus::Failed => f.write_str("❌ Failed to send. Try again later."),
            SubmissionStatus::Invalid(err) => Display::fmt(err, f),
        }
    }
}
