use maud::{html, Markup, Render};

use crate::contact::QuickLink;

/// The row of floating social icons. Each icon bobs on its own period so the
/// row never moves in lockstep.
pub struct QuickLinkRow<'a>(pub &'a [QuickLink]);

impl Render for QuickLinkRow<'_> {
    fn render(&self) -> Markup {
        html! {
          nav class="quick-links" aria-label="Social links" {
            @for (i, link) in self.0.iter().enumerate() {
              a class="quick-link" href=(link.url) target="_blank" rel="noopener noreferrer" title=(link.title) {
                img
                  class="quick-link-icon"
                  src=(link.icon_src())
                  alt=(link.title)
                  style=(float_duration(i));
              }
            }
          }
        }
    }
}

fn float_duration(index: usize) -> String {
    // 3s for the first icon, 0.3s slower for each one after
    let tenths = 30 + index * 3;

    format!("animation-duration: {}.{}s", tenths / 10, tenths % 10)
}
