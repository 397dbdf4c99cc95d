//! The contact form: its field state, the checks run before sending, and the
//! controller that hands a message to an [`EmailProvider`].

pub mod controller;
pub mod form;
pub mod links;
pub mod provider;
pub mod status;
pub mod validation;

pub use controller::ContactController;
pub use form::{FormField, FormState};
pub use links::{QuickLink, QUICK_LINKS};
pub use provider::{ContactMessage, DeliveryError, EmailProvider};
pub use status::SubmissionStatus;
pub use validation::ValidationError;
