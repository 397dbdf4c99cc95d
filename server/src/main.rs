use clap::Parser;
use color_eyre::Result;
use commands::Command;

mod commands;
mod contact;
mod emailjs;
mod http_server;
pub mod state;

pub(crate) use state::AppState;

#[derive(Parser)]
#[command(author, version, about)]
struct CliArgs {
    #[clap(subcommand)]
    command: Option<Command>,
}

fn main() -> Result<()> {
    let _sentry_guard = tracing_common::setup_sentry(concat!(
        env!("CARGO_PKG_NAME"),
        "@",
        env!("CARGO_PKG_VERSION")
    ));

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async { run().await })
}

async fn run() -> Result<()> {
    tracing_common::setup_tracing("contact_site")?;

    let cli = CliArgs::parse();
    let command = cli.command.unwrap_or_default();

    command.run().await
}
