use std::io;
use anyhow::Result;
use clap::Parser;

use config::{Cli, Command};

mod catalog;
mod commands;
mod config;
mod logging;
mod sandwich;
mod ui;

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  logging::init(&cli)?;

  let catalog = cli.catalog()?;
  let policy = cli.policy();

  match cli.command {
    Some(Command::List) => commands::list(&catalog, &mut io::stdout().lock()),
    Some(Command::Show { index }) => commands::show(&catalog, index, policy, &mut io::stdout().lock()),
    None => ui::run(catalog, policy).await
  }
}
