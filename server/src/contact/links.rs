/// An outbound link shown as an icon above the form.
///
/// `icon` is a path under `/static`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickLink {
    pub icon: &'static str,
    pub title: &'static str,
    pub url: &'static str,
}

impl QuickLink {
    pub fn icon_src(&self) -> String {
        format!("/static/{}", self.icon)
    }
}

pub const QUICK_LINKS: [QuickLink; 6] = [
    QuickLink {
        icon: "icons/github.svg",
        title: "GitHub",
        url: "https://github.com/kunj2803",
    },
    QuickLink {
        icon: "icons/linkedin.svg",
        title: "LinkedIn",
        url: "https://www.linkedin.com/in/kunj-desai-07717b293/",
    },
    QuickLink {
        icon: "icons/gmail.svg",
        title: "Email",
        url: "mailto:kunjd2803@gmail.com",
    },
    QuickLink {
        icon: "icons/whatsapp.svg",
        title: "WhatsApp",
        url: "https://wa.me/+918758209508",
    },
    QuickLink {
        icon: "icons/insta.svg",
        title: "Instagram",
        url: "https://www.instagram.com/kunj_2834/",
    },
    QuickLink {
        icon: "icons/facebook.svg",
        title: "Facebook",
        url: "https://www.facebook.com/kunj.desai.222608",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_are_in_display_order() {
        let titles: Vec<_> = QUICK_LINKS.iter().map(|l| l.title).collect();

        assert_eq!(
            titles,
            ["GitHub", "LinkedIn", "Email", "WhatsApp", "Instagram", "Facebook"]
        );
    }

    #[test]
    fn test_icon_src_points_at_static_assets() {
        assert_eq!(QUICK_LINKS[0].icon_src(), "/static/icons/github.svg");
    }
}
