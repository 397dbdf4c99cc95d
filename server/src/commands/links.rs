use crate::contact::QUICK_LINKS;

pub(crate) fn print_links() {
    println!("Quick Links:");
    for link in &QUICK_LINKS {
        println!("{}: {} ({})", link.title, link.url, link.icon_src());
    }
}
