//! `customer-console` - terminal front end for the customer API.

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use tracing::info;

use customer_console::cli::{Cli, Command};
use customer_console::config::Overrides;
use customer_console::session::write_footer;
use customer_console::{init_logging, views, ApiClient, ConsoleConfig, Session, UreqTransport};
use customer_core::CustomerForm;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let overrides = Overrides {
        api_url: cli.api_url.clone(),
        timeout_secs: cli.timeout,
    };
    let config = ConsoleConfig::load_from(cli.config.clone(), &overrides)
        .context("could not resolve configuration")?;
    info!(api_url = %config.api_url, timeout_secs = config.timeout_secs, "configuration resolved");

    let api = ApiClient::new(&config.api_url, UreqTransport::new(config.timeout()));

    let page = match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let stdin = io::stdin();
            Session::new(&api, stdin.lock(), io::stdout()).run()?;
            return Ok(());
        }
        Command::Home => views::home(&api),
        Command::List => views::list(&api),
        Command::Create {
            first_name,
            last_name,
            email,
        } => views::create(&api, &CustomerForm::new(first_name, last_name, email)),
        Command::Find { id } => views::find(&api, id),
        Command::Delete { id } => views::delete(&api, id),
    };

    let mut stdout = io::stdout().lock();
    write!(stdout, "{page}")?;
    write_footer(&mut stdout, api.base_url())?;
    Ok(())
}
