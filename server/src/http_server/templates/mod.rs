use maud::{html, Markup, DOCTYPE};

pub(crate) mod quick_links;

pub fn head() -> Markup {
    html! {
      head {
        meta charset="utf-8";
        meta name="viewport" content="width=device-width, initial-scale=1";
        title { "Contact | Kunj Desai" }

        link rel="preconnect" href="https://fonts.googleapis.com" {}
        link rel="preconnect" href="https://fonts.gstatic.com" crossorigin {}
        link href="https://fonts.googleapis.com/css2?family=Quicksand:wght@300;400;500;600;700&display=swap" rel="stylesheet" {}

        link rel="stylesheet" href="/styles/contact.css" {}
      }
    }
}

pub fn base(inner: Markup) -> Markup {
    html! {
      (DOCTYPE)
      html lang="en" {
        (head())

        body {
          (inner)
        }
      }
    }
}
