use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};
use maud::{html, Markup, PreEscaped};
use tracing::instrument;

use crate::{
    contact::{ContactController, EmailProvider, FormState, SubmissionStatus, QUICK_LINKS},
    http_server::templates::{base, quick_links::QuickLinkRow},
};

const SHOW_SENDING_SCRIPT: &str = r"
  document.getElementById('contact-form').addEventListener('submit', function (event) {
    var status = document.getElementById('status');
    status.textContent = event.target.dataset.sendingText;
    status.hidden = false;
  });
";

pub(crate) async fn contact_get() -> Markup {
    contact_page(&FormState::default(), SubmissionStatus::Idle)
}

/// Each POST gets its own controller, fed the submitted fields as edits.
#[instrument(name = "contact_post", skip_all)]
pub(crate) async fn contact_post(
    State(email_provider): State<Arc<dyn EmailProvider>>,
    Form(submitted): Form<FormState>,
) -> Response {
    let mut controller = ContactController::new(email_provider);
    for (field, value) in submitted.into_fields() {
        controller.update_field(field, value);
    }

    let status = controller.submit().await;

    let status_code = match status {
        SubmissionStatus::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SubmissionStatus::Failed => StatusCode::BAD_GATEWAY,
        SubmissionStatus::Idle | SubmissionStatus::Sending | SubmissionStatus::Sent => {
            StatusCode::OK
        }
    };

    (status_code, contact_page(controller.form(), status)).into_response()
}

pub(crate) fn contact_page(form: &FormState, status: SubmissionStatus) -> Markup {
    base(html! {
      section class="contact" {
        h1 class="contact-title fade-down" {
          "Let’s Connect & Collaborate 🤝"
        }

        p class="contact-tagline fade-in" {
          "Whether it’s a new project, a collaboration, or just to say hi — I’d love to hear from you!"
        }

        (QuickLinkRow(&QUICK_LINKS))

        form
          id="contact-form"
          class="contact-form fade-up"
          method="post"
          action="/contact"
          data-sending-text=(SubmissionStatus::Sending.to_string())
        {
          input
            type="text"
            name="name"
            placeholder="Your Name"
            value=(form.name)
            required
            aria-label="Your name";

          input
            type="text"
            name="contact"
            placeholder="Your Email or Phone"
            value=(form.contact)
            required
            aria-label="Your contact info";

          input
            type="text"
            name="subject"
            placeholder="Subject"
            value=(form.subject)
            required
            aria-label="Subject";

          textarea
            name="message"
            placeholder="Your Message..."
            rows="5"
            required
            aria-label="Your message"
          {
            (form.message)
          }

          button type="submit" class="contact-submit" {
            "🚀 Send Message"
          }

          p id="status" class="contact-status" role="status" hidden[status.is_idle()] {
            (status.to_string())
          }
        }

        script type="text/javascript" {
          (PreEscaped(SHOW_SENDING_SCRIPT))
        }
      }
    })
}
