use clap::Subcommand;
use color_eyre::Result;

pub(crate) mod links;
pub(crate) mod validate;

#[derive(Subcommand, Default)]
pub(crate) enum Command {
    /// Run the web server (the default)
    #[default]
    Serve,
    /// Check that the email provider configuration is present
    Validate,
    /// Print the outbound links shown on the page
    Links,
}

impl Command {
    pub(crate) async fn run(&self) -> Result<()> {
        match &self {
            Command::Serve => crate::http_server::cmd::serve().await,
            Command::Validate => validate::validate(),
            Command::Links => {
                links::print_links();
                Ok(())
            }
        }
    }
}
